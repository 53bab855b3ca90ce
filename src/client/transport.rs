use reqwest::Client as HttpClient;

use crate::{
    error::ClientResult,
    models::{RecommendationRequest, RecommendationResponse},
};

/// Path of the recommendation endpoint, relative to the server base URL
pub const RECOMMENDATION_PATH: &str = "/investment_recommendation";

/// Sends a recommendation request and decodes whatever JSON body comes back
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationTransport: Send + Sync {
    async fn request_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> ClientResult<RecommendationResponse>;
}

/// JSON-over-HTTP transport
///
/// The HTTP status is not checked: a 400 carrying `{"error": ...}` decodes
/// like any other body. No timeout or retry is configured.
#[derive(Clone)]
pub struct HttpTransport {
    http_client: HttpClient,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(HttpClient::new(), base_url)
    }

    pub fn with_client(http_client: HttpClient, base_url: &str) -> Self {
        Self {
            http_client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), RECOMMENDATION_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl RecommendationTransport for HttpTransport {
    async fn request_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> ClientResult<RecommendationResponse> {
        // `.json()` sets `Content-Type: application/json`
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let decoded: RecommendationResponse = serde_json::from_slice(&body)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            status = %status,
            recommendations = decoded.recommendations.as_ref().map(Vec::len),
            "Recommendation response received"
        );

        Ok(decoded)
    }
}

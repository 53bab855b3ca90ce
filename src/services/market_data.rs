use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Assets priced by `GET /market_data`
pub const TRACKED_ASSETS: &str = "bitcoin,ethereum";
pub const VS_CURRENCY: &str = "usd";

/// Message returned to callers when the upstream price lookup fails
pub const MARKET_DATA_UNAVAILABLE: &str = "Failed to fetch market data. Please try again later.";

/// Source of spot prices
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Prices for `ids` (comma separated) in `vs_currency`, as returned upstream
    async fn simple_price(&self, ids: &str, vs_currency: &str) -> AppResult<Value>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// CoinGecko `/simple/price` client
#[derive(Clone)]
pub struct CoinGeckoProvider {
    http_client: HttpClient,
    api_url: String,
}

impl CoinGeckoProvider {
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    async fn simple_price(&self, ids: &str, vs_currency: &str) -> AppResult<Value> {
        let url = format!("{}/simple/price", self.api_url.trim_end_matches('/'));
        let response = self
            .http_client
            .get(&url)
            .query(&[("ids", ids), ("vs_currencies", vs_currency)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "CoinGecko returned status {}: {}",
                status, body
            )));
        }

        let prices: Value = response.json().await?;
        tracing::debug!(ids = %ids, prices = %prices, "Market data retrieved");

        Ok(prices)
    }

    fn name(&self) -> &'static str {
        "coingecko"
    }
}

/// Fetches prices for [`TRACKED_ASSETS`]
///
/// Any upstream failure is logged with its detail and collapsed into
/// [`MARKET_DATA_UNAVAILABLE`].
pub async fn fetch_market_data(provider: &dyn MarketDataProvider) -> AppResult<Value> {
    tracing::info!(provider = provider.name(), "Fetching market data");

    provider
        .simple_price(TRACKED_ASSETS, VS_CURRENCY)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, provider = provider.name(), "Error fetching market data");
            AppError::ExternalApi(MARKET_DATA_UNAVAILABLE.to_string())
        })
}

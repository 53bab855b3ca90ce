use axum::{body::Bytes, extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{RecommendationResponse, SentimentResponse},
    services::{fetch_market_data, recommendations, sentiment},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Spot prices for the tracked assets
pub async fn market_data(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Value>> {
    tracing::info!(request_id = %request_id, "Processing market data request");
    let prices = fetch_market_data(state.market_data.as_ref()).await?;
    Ok(Json(prices))
}

/// Investment recommendations for a risk level and budget
///
/// The body is read raw so an absent or non-JSON body gets the same
/// `{"error": ...}` reply as an empty object.
pub async fn investment_recommendation(
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> AppResult<Json<RecommendationResponse>> {
    let payload: Option<Value> = serde_json::from_slice(&body).ok();

    tracing::info!(
        request_id = %request_id,
        body_bytes = body.len(),
        "Processing recommendation request"
    );

    let recommendations = recommendations::recommend(payload.as_ref()).map_err(|e| {
        tracing::info!(request_id = %request_id, error = %e, "Recommendation request rejected");
        e
    })?;

    Ok(Json(RecommendationResponse::recommendations(recommendations)))
}

/// Polarity score for free-form `content`
pub async fn analyze_sentiment(
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> AppResult<Json<SentimentResponse>> {
    let payload: Option<Value> = serde_json::from_slice(&body).ok();

    tracing::info!(
        request_id = %request_id,
        body_bytes = body.len(),
        "Processing sentiment request"
    );

    let sentiment_score = sentiment::analyze(payload.as_ref()).map_err(|e| {
        tracing::info!(request_id = %request_id, error = %e, "Sentiment request rejected");
        e
    })?;

    Ok(Json(SentimentResponse { sentiment_score }))
}

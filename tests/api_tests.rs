use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use invest_advisor::{
    api::{create_router, AppState},
    error::{AppError, AppResult},
    middleware::REQUEST_ID_HEADER,
    services::MarketDataProvider,
};

struct StaticPrices;

#[async_trait::async_trait]
impl MarketDataProvider for StaticPrices {
    async fn simple_price(&self, ids: &str, vs_currency: &str) -> AppResult<Value> {
        Ok(json!({ "ids": ids, "vs_currencies": vs_currency }))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

struct UnreachablePrices;

#[async_trait::async_trait]
impl MarketDataProvider for UnreachablePrices {
    async fn simple_price(&self, _ids: &str, _vs_currency: &str) -> AppResult<Value> {
        Err(AppError::ExternalApi("connection refused".to_string()))
    }

    fn name(&self) -> &'static str {
        "unreachable"
    }
}

fn create_test_server() -> TestServer {
    create_server_with(Arc::new(StaticPrices))
}

fn create_server_with(provider: Arc<dyn MarketDataProvider>) -> TestServer {
    let app = create_router(AppState::new(provider));
    TestServer::new(app).unwrap()
}

async fn post_recommendation(server: &TestServer, body: Value) -> (StatusCode, Value) {
    let response = server.post("/investment_recommendation").json(&body).await;
    (response.status_code(), response.json())
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_low_risk_recommendations() {
    let server = create_test_server();
    let (status, body) = post_recommendation(&server, json!({ "risk_level": "low", "budget": 1000 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "recommendations": [
                { "crypto": "bitcoin", "allocation": 800.0 },
                { "crypto": "ethereum", "allocation": 200.0 }
            ]
        })
    );
}

#[tokio::test]
async fn test_medium_and_high_risk_assets() {
    let server = create_test_server();

    let (_, medium) = post_recommendation(&server, json!({ "risk_level": "Medium", "budget": 100 })).await;
    let medium: Vec<&str> = medium["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["crypto"].as_str().unwrap())
        .collect();
    assert_eq!(medium, vec!["bitcoin", "ethereum", "solana"]);

    let (_, high) = post_recommendation(&server, json!({ "risk_level": " high ", "budget": 100 })).await;
    let high: Vec<&str> = high["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["crypto"].as_str().unwrap())
        .collect();
    assert_eq!(high, vec!["bitcoin", "solana", "dogecoin"]);
}

#[tokio::test]
async fn test_validation_errors() {
    let server = create_test_server();

    let cases = [
        (json!({}), "Request body is required."),
        (json!({ "budget": 100 }), "Risk level is required."),
        (json!({ "risk_level": "low", "budget": 0 }), "Budget must be greater than zero."),
        (
            json!({ "risk_level": "extreme", "budget": 100 }),
            "Invalid risk level. Choose from 'low', 'medium', or 'high'.",
        ),
    ];

    for (body, message) in cases {
        let (status, response) = post_recommendation(&server, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({ "error": message }));
    }
}

#[tokio::test]
async fn test_missing_or_malformed_body() {
    let server = create_test_server();

    let response = server.post("/investment_recommendation").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Request body is required.");

    let response = server
        .post("/investment_recommendation")
        .text("risk_level=low&budget=100")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Request body is required.");
}

#[tokio::test]
async fn test_market_data() {
    let server = create_test_server();
    let response = server.get("/market_data").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "ids": "bitcoin,ethereum", "vs_currencies": "usd" }));
}

#[tokio::test]
async fn test_market_data_upstream_failure() {
    let server = create_server_with(Arc::new(UnreachablePrices));
    let response = server.get("/market_data").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "error": "Failed to fetch market data. Please try again later." })
    );
}

#[tokio::test]
async fn test_request_id_generated_and_echoed() {
    let server = create_test_server();

    let response = server.get("/health").await;
    let generated = response.header(REQUEST_ID_HEADER);
    assert!(uuid::Uuid::parse_str(generated.to_str().unwrap()).is_ok());

    let supplied = uuid::Uuid::new_v4().to_string();
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderValue::from_str(&supplied).unwrap(),
        )
        .await;
    assert_eq!(response.header(REQUEST_ID_HEADER), supplied.as_str());
}

#[tokio::test]
async fn test_analyze_sentiment_scores_content() {
    let server = create_test_server();

    let response = server
        .post("/analyze_sentiment")
        .json(&json!({ "content": "  Ethereum had a great, wonderful week!  " }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    let score = body["sentiment_score"].as_f64().unwrap();
    assert!(score > 0.0 && score <= 1.0, "got {score}");

    let response = server
        .post("/analyze_sentiment")
        .json(&json!({ "content": "The market is a horrible disaster." }))
        .await;
    let body: Value = response.json();
    let score = body["sentiment_score"].as_f64().unwrap();
    assert!((-1.0..0.0).contains(&score), "got {score}");
}

#[tokio::test]
async fn test_analyze_sentiment_requires_content() {
    let server = create_test_server();

    for body in [json!({}), json!({ "content": "   " })] {
        let response = server.post("/analyze_sentiment").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(
            body,
            json!({ "error": "Content is required for sentiment analysis." })
        );
    }
}

#[tokio::test]
async fn test_analyze_sentiment_malformed_body() {
    let server = create_test_server();

    let response = server.post("/analyze_sentiment").text("hello").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Internal server error: Request body must be a JSON object."
    );

    let response = server
        .post("/analyze_sentiment")
        .json(&json!({ "content": 42 }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

use serde::{Deserialize, Serialize};

/// Response body for `POST /analyze_sentiment`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentResponse {
    /// Polarity in `[-1.0, 1.0]`, negative to positive
    pub sentiment_score: f64,
}

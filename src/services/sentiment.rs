use serde_json::Value;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::error::{AppError, AppResult};

/// Polarity of `text` in `[-1.0, 1.0]` (VADER compound score)
pub fn polarity(text: &str) -> f64 {
    SentimentIntensityAnalyzer::new()
        .polarity_scores(text)
        .get("compound")
        .copied()
        .unwrap_or(0.0)
        .clamp(-1.0, 1.0)
}

/// Validates a raw request body and scores its `content`
///
/// A body that is not a JSON object, or a non-string `content`, is a server
/// error. Missing or blank `content` is a client error.
pub fn analyze(body: Option<&Value>) -> AppResult<f64> {
    let fields = match body {
        Some(Value::Object(fields)) => fields,
        _ => {
            return Err(AppError::Internal(
                "Request body must be a JSON object.".to_string(),
            ))
        }
    };

    let content = match fields.get("content") {
        None | Some(Value::Null) => "",
        Some(Value::String(content)) => content.trim(),
        Some(other) => {
            tracing::warn!(content = %other, "Content is not a string");
            return Err(AppError::Internal("Content must be a string.".to_string()));
        }
    };

    if content.is_empty() {
        tracing::warn!("No content provided for sentiment analysis");
        return Err(AppError::InvalidInput(
            "Content is required for sentiment analysis.".to_string(),
        ));
    }

    tracing::info!(chars = content.chars().count(), "Performing sentiment analysis");
    let score = polarity(content);
    tracing::debug!(score, "Sentiment score calculated");

    Ok(score)
}

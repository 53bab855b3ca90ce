use serde_json::Value;

use crate::models::RecommendationResponse;

/// Shown when the server sends neither recommendations nor an error
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommendations available.";

/// Content of the display container
///
/// Every successful submission replaces the container wholesale with one of
/// these; nothing from a previous render is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayContent {
    /// Ordered list, one line per recommendation. May be empty.
    List(Vec<String>),
    /// Plain text (server error or fallback message)
    Text(String),
}

impl DisplayContent {
    /// List items, or an empty slice for text content
    pub fn items(&self) -> &[String] {
        match self {
            DisplayContent::List(items) => items,
            DisplayContent::Text(_) => &[],
        }
    }

    /// Text of the container, list items joined by newlines
    pub fn text(&self) -> String {
        match self {
            DisplayContent::List(items) => items.join("\n"),
            DisplayContent::Text(text) => text.clone(),
        }
    }
}

/// Maps a decoded response body to what the container should show
///
/// A present `recommendations` field always wins, even when empty. Otherwise
/// a non-empty `error` is shown, falling back to [`NO_RECOMMENDATIONS_MESSAGE`].
pub fn render_response(response: RecommendationResponse) -> DisplayContent {
    match response.recommendations {
        Some(recommendations) => DisplayContent::List(
            recommendations
                .iter()
                .map(|recommendation| recommendation.display_line())
                .collect(),
        ),
        None => DisplayContent::Text(
            response
                .error
                .and_then(error_text)
                .unwrap_or_else(|| NO_RECOMMENDATIONS_MESSAGE.to_string()),
        ),
    }
}

/// Text for an `error` value; `None` for empty, zero, false or null
fn error_text(error: Value) -> Option<String> {
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(message) => Some(message).filter(|m| !m.is_empty()),
        Value::Number(number) => number
            .as_f64()
            .filter(|n| *n != 0.0)
            .map(|n| n.to_string()),
        other => Some(other.to_string()),
    }
}

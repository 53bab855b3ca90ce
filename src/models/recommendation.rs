use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /investment_recommendation`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub risk_level: String,
    pub budget: f64,
}

/// A single asset in a recommendation, with the amount of budget assigned to it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub crypto: String,
    pub allocation: f64,
}

impl Recommendation {
    pub fn new(crypto: impl Into<String>, allocation: f64) -> Self {
        Self {
            crypto: crypto.into(),
            allocation,
        }
    }

    /// Display line for this recommendation, e.g. `bitcoin: $800.00`
    pub fn display_line(&self) -> String {
        format!("{}: ${}", self.crypto, format_amount(self.allocation))
    }
}

/// Formats an amount with exactly two decimals
///
/// Exact half-cent ties round away from zero and negative zero prints as
/// `0.00`. Every other value keeps the nearest two-decimal rendering of its
/// exact binary value, so `1.005` (really 1.00499...) stays `1.00`.
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();

    // A double sits exactly on a half cent only at odd multiples of 1/8
    let eighths = magnitude * 8.0;
    let digits = if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        format!("{:.2}", (magnitude * 100.0).ceil() / 100.0)
    } else {
        format!("{:.2}", magnitude)
    };

    format!("{}{}", sign, digits)
}

/// Response body for `POST /investment_recommendation`
///
/// The server sends one of the two fields. Both are optional here so a body
/// carrying neither (or a null) still decodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
    /// Usually a string; other JSON values are kept and shown as text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl RecommendationResponse {
    pub fn recommendations(recommendations: Vec<Recommendation>) -> Self {
        Self {
            recommendations: Some(recommendations),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            recommendations: None,
            error: Some(Value::String(message.into())),
        }
    }
}

pub mod recommendation;
pub mod risk_level;
pub mod sentiment;

pub use recommendation::{format_amount, Recommendation, RecommendationRequest, RecommendationResponse};
pub use risk_level::{RiskLevel, UnknownRiskLevel};
pub use sentiment::SentimentResponse;

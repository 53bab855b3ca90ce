use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{Recommendation, RiskLevel},
};

/// Share of the budget assigned to each asset, per risk level
pub fn allocation_table(risk_level: RiskLevel) -> &'static [(&'static str, f64)] {
    match risk_level {
        RiskLevel::Low => &[("bitcoin", 0.8), ("ethereum", 0.2)],
        RiskLevel::Medium => &[("bitcoin", 0.5), ("ethereum", 0.3), ("solana", 0.2)],
        RiskLevel::High => &[("bitcoin", 0.4), ("solana", 0.4), ("dogecoin", 0.2)],
    }
}

/// Splits a budget across the assets for the given risk level
pub fn allocate(risk_level: RiskLevel, budget: f64) -> Vec<Recommendation> {
    allocation_table(risk_level)
        .iter()
        .map(|(crypto, share)| Recommendation::new(*crypto, budget * share))
        .collect()
}

/// Validates a raw request body and produces the recommendations for it
///
/// Checks run in a fixed order: body present, risk level present, budget
/// positive, risk level known. The first failure wins.
pub fn recommend(body: Option<&Value>) -> AppResult<Vec<Recommendation>> {
    let fields = match body {
        Some(Value::Object(fields)) if !fields.is_empty() => fields,
        _ => {
            tracing::warn!("No data provided in the request");
            return Err(AppError::InvalidInput("Request body is required.".to_string()));
        }
    };

    let risk_level = fields
        .get("risk_level")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    if risk_level.is_empty() {
        tracing::warn!("Risk level not provided");
        return Err(AppError::InvalidInput("Risk level is required.".to_string()));
    }

    let budget = match fields.get("budget") {
        None | Some(Value::Null) => 0.0,
        Some(value) => value.as_f64().ok_or_else(|| {
            tracing::warn!(budget = %value, "Budget is not a number");
            AppError::InvalidInput("Budget must be a number.".to_string())
        })?,
    };

    if budget <= 0.0 {
        tracing::warn!(budget, "Invalid budget value");
        return Err(AppError::InvalidInput(
            "Budget must be greater than zero.".to_string(),
        ));
    }

    let risk_level: RiskLevel = risk_level.parse().map_err(|e| {
        tracing::warn!(error = %e, "Invalid risk level");
        AppError::InvalidInput(
            "Invalid risk level. Choose from 'low', 'medium', or 'high'.".to_string(),
        )
    })?;

    tracing::info!(risk_level = %risk_level, "Generating recommendations");
    let recommendations = allocate(risk_level, budget);
    tracing::debug!(?recommendations, "Recommendations generated");

    Ok(recommendations)
}

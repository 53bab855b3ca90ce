use std::sync::Arc;

use crate::models::RecommendationRequest;

use super::{
    render::render_response,
    transport::RecommendationTransport,
    view::RecommendationView,
};

/// Alert raised when the budget input is not a positive number
pub const INVALID_BUDGET_MESSAGE: &str = "Please enter a valid budget.";

/// Alert raised when the request fails or the response cannot be decoded
pub const REQUEST_FAILED_MESSAGE: &str = "Something went wrong. Please try again later.";

/// A form submission
///
/// Hosts that have a native submission behavior (navigating, reloading) check
/// [`SubmitEvent::default_prevented`] after the handler returns.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What a single submission ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Budget rejected locally; no request was sent
    InvalidBudget,
    /// Response decoded and rendered into the display container
    Rendered,
    /// Transport or decode failure; display container untouched
    Failed,
}

/// Parses the raw budget input. Only finite values above zero are accepted.
pub fn parse_budget(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|budget| budget.is_finite() && *budget > 0.0)
}

/// Handles submissions of the recommendation form
///
/// Cloning shares the same view and transport. Submissions are not guarded
/// against each other: when two overlap, whichever response resolves last
/// is what the container ends up showing.
#[derive(Clone)]
pub struct RecommendationRequestHandler {
    view: Arc<dyn RecommendationView>,
    transport: Arc<dyn RecommendationTransport>,
}

impl RecommendationRequestHandler {
    pub fn new(
        view: Arc<dyn RecommendationView>,
        transport: Arc<dyn RecommendationTransport>,
    ) -> Self {
        Self { view, transport }
    }

    pub async fn on_submit(&self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        let risk_level = self.view.risk_level();
        let raw_budget = self.view.budget();

        let Some(budget) = parse_budget(&raw_budget) else {
            tracing::warn!(budget = %raw_budget, "Rejected submission with invalid budget");
            self.view.alert(INVALID_BUDGET_MESSAGE);
            return SubmitOutcome::InvalidBudget;
        };

        let request = RecommendationRequest { risk_level, budget };

        tracing::info!(
            risk_level = %request.risk_level,
            budget = request.budget,
            "Requesting investment recommendations"
        );

        match self.transport.request_recommendations(&request).await {
            Ok(response) => {
                self.view.render(render_response(response));
                SubmitOutcome::Rendered
            }
            Err(e) => {
                tracing::error!(error = %e, "Recommendation request failed");
                self.view.alert(REQUEST_FAILED_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }
}

/// Recommendation form client
///
/// The page is reached only through [`RecommendationView`] and the server only
/// through [`RecommendationTransport`], so the handler runs the same against a
/// terminal, an in-memory page or a test double.
pub mod handler;
pub mod render;
pub mod transport;
pub mod view;

pub use handler::{
    parse_budget, RecommendationRequestHandler, SubmitEvent, SubmitOutcome,
    INVALID_BUDGET_MESSAGE, REQUEST_FAILED_MESSAGE,
};
pub use render::{render_response, DisplayContent, NO_RECOMMENDATIONS_MESSAGE};
pub use transport::{HttpTransport, RecommendationTransport, RECOMMENDATION_PATH};
pub use view::{MemoryView, RecommendationView};

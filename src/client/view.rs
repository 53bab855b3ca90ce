use std::sync::{Mutex, MutexGuard};

use super::render::DisplayContent;

/// Handle to the page the recommendation form lives on
///
/// Implementations own the two form inputs, the blocking alert and the
/// display container. `render` replaces the container's whole content.
pub trait RecommendationView: Send + Sync {
    /// Current value of the risk level input
    fn risk_level(&self) -> String;

    /// Current raw value of the budget input
    fn budget(&self) -> String;

    /// Blocking user notification
    fn alert(&self, message: &str);

    /// Replace the display container's content
    fn render(&self, content: DisplayContent);
}

#[derive(Debug, Default)]
struct PageState {
    risk_level: String,
    budget: String,
    alerts: Vec<String>,
    display: Option<DisplayContent>,
    renders: usize,
}

/// In-memory page, for headless use and tests
#[derive(Debug, Default)]
pub struct MemoryView {
    state: Mutex<PageState>,
}

impl MemoryView {
    pub fn new(risk_level: impl Into<String>, budget: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(PageState {
                risk_level: risk_level.into(),
                budget: budget.into(),
                ..PageState::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Simulates the user editing both inputs
    pub fn fill(&self, risk_level: impl Into<String>, budget: impl Into<String>) {
        let mut state = self.lock();
        state.risk_level = risk_level.into();
        state.budget = budget.into();
    }

    /// Pre-populates the display container without counting as a render
    pub fn with_display(self, content: DisplayContent) -> Self {
        self.lock().display = Some(content);
        self
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    /// Current display content; `None` if nothing was ever shown
    pub fn display(&self) -> Option<DisplayContent> {
        self.lock().display.clone()
    }

    /// Number of times `render` was called
    pub fn render_count(&self) -> usize {
        self.lock().renders
    }
}

impl RecommendationView for MemoryView {
    fn risk_level(&self) -> String {
        self.lock().risk_level.clone()
    }

    fn budget(&self) -> String {
        self.lock().budget.clone()
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }

    fn render(&self, content: DisplayContent) {
        let mut state = self.lock();
        state.display = Some(content);
        state.renders += 1;
    }
}

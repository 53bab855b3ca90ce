use std::{
    io::{self, Stderr, Stdout, Write},
    sync::{Mutex, MutexGuard},
};

use crate::client::{DisplayContent, RecommendationView};

/// Command-line page: inputs come from arguments, alerts go to one writer
/// and the display container to another
pub struct TerminalView<O, E> {
    risk_level: String,
    budget: String,
    out: Mutex<O>,
    err: Mutex<E>,
}

impl TerminalView<Stdout, Stderr> {
    /// Container on stdout, alerts on stderr
    pub fn stdio(risk_level: String, budget: String) -> Self {
        Self::new(risk_level, budget, io::stdout(), io::stderr())
    }
}

impl<O: Write + Send, E: Write + Send> TerminalView<O, E> {
    pub fn new(risk_level: String, budget: String, out: O, err: E) -> Self {
        Self {
            risk_level,
            budget,
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    pub fn into_writers(self) -> (O, E) {
        (
            self.out.into_inner().unwrap_or_else(|p| p.into_inner()),
            self.err.into_inner().unwrap_or_else(|p| p.into_inner()),
        )
    }
}

fn lock<W>(writer: &Mutex<W>) -> MutexGuard<'_, W> {
    writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_content(out: &mut impl Write, content: &DisplayContent) -> io::Result<()> {
    match content {
        DisplayContent::List(items) => {
            for (index, item) in items.iter().enumerate() {
                writeln!(out, "{}. {}", index + 1, item)?;
            }
        }
        DisplayContent::Text(text) => writeln!(out, "{}", text)?,
    }
    out.flush()
}

impl<O: Write + Send, E: Write + Send> RecommendationView for TerminalView<O, E> {
    fn risk_level(&self) -> String {
        self.risk_level.clone()
    }

    fn budget(&self) -> String {
        self.budget.clone()
    }

    fn alert(&self, message: &str) {
        let mut err = lock(&self.err);
        if let Err(e) = writeln!(err, "{}", message).and_then(|_| err.flush()) {
            tracing::warn!(error = %e, "Failed to write alert");
        }
    }

    fn render(&self, content: DisplayContent) {
        if let Err(e) = write_content(&mut *lock(&self.out), &content) {
            tracing::warn!(error = %e, "Failed to write recommendations");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> TerminalView<Vec<u8>, Vec<u8>> {
        TerminalView::new("low".to_string(), "100".to_string(), Vec::new(), Vec::new())
    }

    #[test]
    fn test_list_rendered_as_numbered_lines() {
        let view = view();
        view.render(DisplayContent::List(vec![
            "bitcoin: $80.00".to_string(),
            "ethereum: $20.00".to_string(),
        ]));
        let (out, err) = view.into_writers();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1. bitcoin: $80.00\n2. ethereum: $20.00\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_empty_list_prints_nothing() {
        let view = view();
        view.render(DisplayContent::List(vec![]));
        let (out, _) = view.into_writers();
        assert!(out.is_empty());
    }

    #[test]
    fn test_text_and_alert_use_separate_writers() {
        let view = view();
        view.render(DisplayContent::Text("invalid risk level".to_string()));
        view.alert("Please enter a valid budget.");
        let (out, err) = view.into_writers();
        assert_eq!(String::from_utf8(out).unwrap(), "invalid risk level\n");
        assert_eq!(String::from_utf8(err).unwrap(), "Please enter a valid budget.\n");
    }

    #[test]
    fn test_inputs_passed_through() {
        let view = TerminalView::new(" High ".to_string(), "abc".to_string(), Vec::new(), Vec::new());
        assert_eq!(view.risk_level(), " High ");
        assert_eq!(view.budget(), "abc");
    }
}

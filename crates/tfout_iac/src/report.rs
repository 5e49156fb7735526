//! Per-invocation reporter for non-fatal conditions.

use tracing::warn;

/// Collects warnings raised while retrieving outputs.
///
/// One reporter is created per invocation and handed down explicitly; the
/// caller decides how the collected warnings are surfaced.
#[derive(Debug, Default, Clone)]
pub struct Reporter {
    warnings: Vec<String>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and emit it to the log.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.warnings.push(message);
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_collects_in_order() {
        let mut reporter = Reporter::new();
        assert!(!reporter.has_warnings());

        reporter.warn("first");
        reporter.warn(String::from("second"));

        assert!(reporter.has_warnings());
        assert_eq!(reporter.warnings(), ["first", "second"]);
        assert_eq!(reporter.into_warnings(), vec!["first", "second"]);
    }
}

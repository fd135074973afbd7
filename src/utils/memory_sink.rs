//! In-memory diagnostic sink for testing

use std::sync::{Arc, RwLock};

use crate::diagnostics::{DiagnosticMessage, DiagnosticSink, RunSummary, Severity};

/// Sink that keeps every delivered message in memory for later inspection.
///
/// Clones share the same storage, so a clone can be boxed into a
/// [`Diagnostics`](crate::diagnostics::Diagnostics) context while the
/// original stays available for assertions.
#[derive(Debug, Clone)]
pub struct MemorySink {
    messages: Arc<RwLock<Vec<DiagnosticMessage>>>,
    summary: Arc<RwLock<Option<RunSummary>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            summary: Arc::new(RwLock::new(None)),
        }
    }

    /// All delivered messages, in emission order.
    pub fn messages(&self) -> Vec<DiagnosticMessage> {
        self.messages.read().unwrap().clone()
    }

    /// Texts of the delivered messages at one severity, in emission order.
    pub fn texts(&self, severity: Severity) -> Vec<String> {
        self.messages
            .read()
            .unwrap()
            .iter()
            .filter(|message| message.severity == severity)
            .map(|message| message.text.clone())
            .collect()
    }

    /// The delivered end-of-run tally, if the run got that far.
    pub fn summary(&self) -> Option<RunSummary> {
        *self.summary.read().unwrap()
    }

    /// Clear all recorded data (useful for testing).
    pub fn clear(&self) {
        self.messages.write().unwrap().clear();
        *self.summary.write().unwrap() = None;
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&mut self, message: &DiagnosticMessage) {
        self.messages.write().unwrap().push(message.clone());
    }

    fn summarize(&mut self, summary: &RunSummary) {
        *self.summary.write().unwrap() = Some(*summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let sink = MemorySink::new();
        let mut clone = sink.clone();
        clone.record(&DiagnosticMessage {
            severity: Severity::Warn,
            text: "shared".to_string(),
        });

        assert_eq!(sink.messages().len(), 1);
        assert_eq!(sink.texts(Severity::Warn), vec!["shared".to_string()]);
        assert!(sink.texts(Severity::Error).is_empty());
    }

    #[test]
    fn clear_resets_messages_and_summary() {
        let mut sink = MemorySink::new();
        sink.record(&DiagnosticMessage {
            severity: Severity::Error,
            text: "bad".to_string(),
        });
        sink.summarize(&RunSummary {
            errors: 1,
            warnings: 0,
        });

        sink.clear();
        assert!(sink.messages().is_empty());
        assert_eq!(sink.summary(), None);
    }
}

//! Classified diagnostics for an audit run
//!
//! Every message emitted while auditing a statement carries a severity and is
//! routed through a [`DiagnosticSink`]. The [`Diagnostics`] context counts
//! messages per severity so the run can close with an error/warning tally.
//! Create one context per run; sharing one across runs mixes their counts.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Progress notes, such as the computed net delta.
    Info,
    /// Recoverable oddities: skipped pending rows, unreconcilable endpoints.
    Warn,
    /// Inconsistencies and rejected input.
    Error,
    /// Positive confirmation that the statement checks out.
    Good,
}

impl Severity {
    /// Upper-case label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Good => "GOOD",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classified message emitted during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    pub severity: Severity,
    pub text: String,
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:<5}] {}", self.severity.label(), self.text)
    }
}

/// End-of-run tally of errors and warnings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub errors: u64,
    pub warnings: u64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors, {} warnings.", self.errors, self.warnings)
    }
}

/// Destination for diagnostics.
///
/// Messages and the end-of-run tally arrive on separate methods so a sink can
/// render them differently; the tally is not itself a counted message.
pub trait DiagnosticSink: Send {
    /// Deliver one classified message.
    fn record(&mut self, message: &DiagnosticMessage);

    /// Deliver the end-of-run tally.
    fn summarize(&mut self, summary: &RunSummary);
}

/// Sink that prints to standard output.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a new console sink.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for ConsoleSink {
    fn record(&mut self, message: &DiagnosticMessage) {
        println!("{message}");
    }

    fn summarize(&mut self, summary: &RunSummary) {
        println!("{summary}");
    }
}

/// Diagnostic context for one audit run.
///
/// Counts every emitted message by severity and forwards it to the sink. The
/// counts feed the run's final [`RunSummary`].
pub struct Diagnostics {
    counts: HashMap<Severity, u64>,
    sink: Box<dyn DiagnosticSink>,
}

impl Diagnostics {
    /// Create a context that prints through [`ConsoleSink`].
    pub fn new() -> Self {
        Self::with_sink(Box::new(ConsoleSink::new()))
    }

    /// Create a context that delivers to a custom sink.
    pub fn with_sink(sink: Box<dyn DiagnosticSink>) -> Self {
        Self {
            counts: HashMap::new(),
            sink,
        }
    }

    /// Emit one message: count it, then hand it to the sink.
    pub fn emit(&mut self, severity: Severity, text: impl Into<String>) {
        let message = DiagnosticMessage {
            severity,
            text: text.into(),
        };
        *self.counts.entry(severity).or_insert(0) += 1;
        self.sink.record(&message);
    }

    /// Emit an [`Severity::Info`] message.
    pub fn info(&mut self, text: impl Into<String>) {
        self.emit(Severity::Info, text);
    }

    /// Emit a [`Severity::Warn`] message.
    pub fn warn(&mut self, text: impl Into<String>) {
        self.emit(Severity::Warn, text);
    }

    /// Emit a [`Severity::Error`] message.
    pub fn error(&mut self, text: impl Into<String>) {
        self.emit(Severity::Error, text);
    }

    /// Emit a [`Severity::Good`] message.
    pub fn good(&mut self, text: impl Into<String>) {
        self.emit(Severity::Good, text);
    }

    /// Number of messages emitted at `severity` so far.
    pub fn count(&self, severity: Severity) -> u64 {
        self.counts.get(&severity).copied().unwrap_or(0)
    }

    /// Number of errors emitted so far.
    pub fn errors(&self) -> u64 {
        self.count(Severity::Error)
    }

    /// Number of warnings emitted so far.
    pub fn warnings(&self) -> u64 {
        self.count(Severity::Warn)
    }

    /// Current tally, without delivering anything to the sink.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            errors: self.errors(),
            warnings: self.warnings(),
        }
    }

    /// Compute the tally and deliver it through the sink.
    ///
    /// The tally line is not a counted diagnostic message.
    pub fn summarize(&mut self) -> RunSummary {
        let summary = self.summary();
        self.sink.summarize(&summary);
        summary
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("counts", &self.counts)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemorySink;

    fn context() -> (Diagnostics, MemorySink) {
        let sink = MemorySink::new();
        let diagnostics = Diagnostics::with_sink(Box::new(sink.clone()));
        (diagnostics, sink)
    }

    #[test]
    fn counts_messages_by_severity() {
        let (mut diagnostics, _sink) = context();
        diagnostics.error("one");
        diagnostics.error("two");
        diagnostics.warn("three");
        diagnostics.good("four");

        assert_eq!(diagnostics.count(Severity::Error), 2);
        assert_eq!(diagnostics.count(Severity::Warn), 1);
        assert_eq!(diagnostics.count(Severity::Good), 1);
        assert_eq!(diagnostics.count(Severity::Info), 0);
    }

    #[test]
    fn summary_tallies_errors_and_warnings() {
        let (mut diagnostics, _sink) = context();
        diagnostics.error("bad");
        diagnostics.warn("odd");
        diagnostics.warn("odder");

        let summary = diagnostics.summary();
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.warnings, 2);
        assert_eq!(summary.to_string(), "1 errors, 2 warnings.");
    }

    #[test]
    fn summarize_delivers_the_tally_without_counting_it() {
        let (mut diagnostics, sink) = context();
        diagnostics.error("bad");
        let summary = diagnostics.summarize();

        assert_eq!(sink.summary(), Some(summary));
        assert_eq!(diagnostics.errors(), 1);
        assert_eq!(sink.messages().len(), 1);
    }

    #[test]
    fn messages_reach_the_sink_in_emission_order() {
        let (mut diagnostics, sink) = context();
        diagnostics.info("first");
        diagnostics.warn("second");

        let messages = sink.messages();
        assert_eq!(messages[0].text, "first");
        assert_eq!(messages[0].severity, Severity::Info);
        assert_eq!(messages[1].text, "second");
        assert_eq!(messages[1].severity, Severity::Warn);
    }

    #[test]
    fn messages_render_with_padded_level() {
        let message = DiagnosticMessage {
            severity: Severity::Info,
            text: "hello".to_string(),
        };
        assert_eq!(message.to_string(), "[INFO ] hello");

        let message = DiagnosticMessage {
            severity: Severity::Error,
            text: "hello".to_string(),
        };
        assert_eq!(message.to_string(), "[ERROR] hello");
    }
}

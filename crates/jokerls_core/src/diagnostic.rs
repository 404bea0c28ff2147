//! Diagnostic types and the message → diagnostic builder.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::parser::LintMessage;

/// Width of the highlighted span, in characters.
///
/// Joker reports a point, not a token range; a fixed-width span approximates
/// "highlight the offending token".
pub const SPAN_WIDTH: u32 = 4;

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
}

impl Severity {
    /// Classifies message text: [`Severity::Error`] iff it contains the
    /// case-sensitive substring `"error"`.
    pub fn classify(text: &str) -> Self {
        if text.contains("error") {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}

/// A half-open character range `[start, end)` on a zero-based line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Span {
    /// 0-based line.
    pub line: u32,
    /// 0-based start column (inclusive).
    pub start: u32,
    /// 0-based end column (exclusive).
    pub end: u32,
}

impl Span {
    /// Creates a new span.
    pub fn new(line: u32, start: u32, end: u32) -> Self {
        Self { line, start, end }
    }
}

/// A positioned, severity-tagged diagnostic for one linter finding.
///
/// Transient: lives for one lint run, then either replaces the document's
/// stored set or is dropped with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Highlighted range in the document.
    pub span: Span,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,

    /// The diagnostic message.
    pub message: String,
}

impl Diagnostic {
    /// Builds a diagnostic from a parsed linter message against the
    /// document's current text.
    ///
    /// The span starts at the reported position and extends [`SPAN_WIDTH`]
    /// characters. Returns `None` when the reported line does not exist in
    /// the document; such messages are logged and dropped like unparseable
    /// output lines.
    pub fn from_message(message: &LintMessage, text: &str) -> Option<Self> {
        // The parser never emits line 0, but the field is public.
        let line_index = message.line.checked_sub(1)?;

        let Some(_line_text) = text.lines().nth(line_index as usize) else {
            warn!(
                "line {} past end of document, dropping: {}",
                message.line, message.text
            );
            return None;
        };

        Some(Self {
            span: Span::new(
                line_index,
                message.at,
                message.at.saturating_add(SPAN_WIDTH),
            ),
            severity: Severity::classify(&message.text),
            message: message.text.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::parser::parse_output_line;

    fn make_message(line: u32, at: u32, text: &str) -> LintMessage {
        LintMessage {
            line,
            at,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_build_error_diagnostic() {
        let text = "(ns foo)\n(defn bar [x\n  x)\n";
        let message = make_message(2, 4, "error: unexpected EOF");

        let diag = Diagnostic::from_message(&message, text).unwrap();

        assert_eq!(diag.span, Span::new(1, 4, 8));
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "error: unexpected EOF");
    }

    #[test]
    fn test_build_warning_diagnostic() {
        let text = "(def unused 1)\n";
        let message = make_message(1, 0, "warning: unused var");

        let diag = Diagnostic::from_message(&message, text).unwrap();

        assert_eq!(diag.span, Span::new(0, 0, 4));
        assert_eq!(diag.severity, Severity::Warning);
    }

    #[test]
    fn test_span_is_fixed_width() {
        let text = "line one\nline two\nline three\n";
        let message = make_message(3, 7, "warning: trailing garbage");

        let diag = Diagnostic::from_message(&message, text).unwrap();

        assert_eq!(diag.span.end - diag.span.start, SPAN_WIDTH);
    }

    #[test]
    fn test_span_end_saturates_at_column_limit() {
        let message = make_message(1, u32::MAX - 1, "error: absurd column");

        let diag = Diagnostic::from_message(&message, "(ns foo)\n").unwrap();

        assert_eq!(diag.span.start, u32::MAX - 1);
        assert_eq!(diag.span.end, u32::MAX);
    }

    #[test]
    fn test_max_column_from_parser_builds_without_panic() {
        let message = parse_output_line("foo.clj:1:4294967295: error: x").unwrap();

        let diag = Diagnostic::from_message(&message, "(ns foo)\n").unwrap();

        assert!(diag.span.start <= diag.span.end);
        assert_eq!(diag.span.end, u32::MAX);
    }

    #[test]
    fn test_line_past_end_of_document_is_dropped() {
        let text = "only one line\n";
        let message = make_message(5, 0, "error: phantom");

        assert_eq!(Diagnostic::from_message(&message, text), None);
    }

    #[test]
    fn test_last_line_without_trailing_newline() {
        let text = "first\nsecond";
        let message = make_message(2, 1, "warning: on last line");

        assert!(Diagnostic::from_message(&message, text).is_some());
    }

    #[rstest]
    #[case("error: unexpected EOF", Severity::Error)]
    #[case("warning: unused var", Severity::Warning)]
    #[case("Read error: bad token", Severity::Error)]
    #[case("Error: capitalized does not count", Severity::Warning)]
    #[case("something else entirely", Severity::Warning)]
    fn test_severity_classification(#[case] text: &str, #[case] expected: Severity) {
        assert_eq!(Severity::classify(text), expected);
    }

    #[test]
    fn test_diagnostic_serialization() {
        let diag = Diagnostic {
            span: Span::new(11, 4, 8),
            severity: Severity::Error,
            message: "error: unexpected EOF".to_string(),
        };

        let json = serde_json::to_string(&diag).unwrap();

        assert!(json.contains("\"severity\":\"error\""));
        assert!(json.contains("unexpected EOF"));
    }
}

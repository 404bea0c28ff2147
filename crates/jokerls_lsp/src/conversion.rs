//! LSP type conversion utilities.

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, Position, Range};

use jokerls_core::{Diagnostic as JokerDiagnostic, Severity as JokerSeverity};

/// Converts a core diagnostic to an LSP diagnostic.
///
/// Core spans are already zero-based line/column pairs, so this is a direct
/// mapping.
pub fn to_lsp_diagnostic(diag: &JokerDiagnostic) -> Diagnostic {
    let range = Range::new(
        Position::new(diag.span.line, diag.span.start),
        Position::new(diag.span.line, diag.span.end),
    );

    let severity = match diag.severity {
        JokerSeverity::Error => DiagnosticSeverity::ERROR,
        JokerSeverity::Warning => DiagnosticSeverity::WARNING,
    };

    Diagnostic {
        range,
        severity: Some(severity),
        source: Some("joker".to_string()),
        message: diag.message.clone(),
        ..Default::default()
    }
}

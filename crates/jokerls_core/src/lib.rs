//! # jokerls_core
//!
//! Core lint pipeline for jokerls.
//!
//! Runs the external `joker` linter over a document and turns its plain-text
//! output into positioned diagnostics.
//!
//! This crate provides:
//! - The output line parser (`file:line:col: message`)
//! - The message → diagnostic builder
//! - The `Linter` orchestrator and its per-document `DiagnosticStore`
//!
//! ## Example
//!
//! ```rust,ignore
//! use jokerls_core::{Linter, LinterConfig};
//!
//! let linter = Linter::new(LinterConfig::new());
//! let diagnostics = linter.lint_document(&path, &text).await?;
//! for diag in &diagnostics {
//!     println!("{}:{}: {}", diag.span.line + 1, diag.span.start, diag.message);
//! }
//! ```

mod config;
mod diagnostic;
mod error;
mod linter;
pub mod parser;
mod runner;
mod store;

#[cfg(test)]
pub mod test_utils;

pub use config::{CLOJURE_EXTENSIONS, DEFAULT_PROGRAM, LinterConfig};
pub use diagnostic::{Diagnostic, SPAN_WIDTH, Severity, Span};
pub use error::LinterError;
pub use linter::Linter;
pub use parser::{LintMessage, parse_output_line};
pub use runner::run_linter;
pub use store::DiagnosticStore;

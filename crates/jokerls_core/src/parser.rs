//! Parsing of joker's plain-text lint output.
//!
//! Joker writes one diagnostic per line on stderr, in the shape
//! `<file>:<line>:<column>: <message>`. Lines that do not match are logged
//! and dropped; nothing here is fatal.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Shape of a joker diagnostic line: `<file>:<line>:<column>: <message>`.
static OUTPUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+:([0-9]+):([0-9]+): (.+)").expect("valid output pattern"));

/// A structured message parsed from one line of linter output.
///
/// Transient: created per output line and consumed by the diagnostic builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintMessage {
    /// 1-based source line number. Never zero.
    pub line: u32,
    /// 0-based character offset within the line.
    pub at: u32,
    /// Free-form message text, starting after the second `: `.
    pub text: String,
}

/// Parses one line of joker output into a [`LintMessage`].
///
/// Joker reports 1-based columns; `at` is decremented to the 0-based
/// representation used everywhere else. Returns `None` when the line does
/// not match the output shape, or when either position field is zero or
/// does not fit; the line is logged at warn level and dropped.
pub fn parse_output_line(output: &str) -> Option<LintMessage> {
    let Some(captures) = OUTPUT_PATTERN.captures(output) else {
        warn!("could not parse linter output: {output}");
        return None;
    };

    let line = captures[1].parse::<u32>().ok().filter(|&line| line > 0);
    let Some(line) = line else {
        warn!("could not find line number: {output}");
        return None;
    };

    let column = captures[2].parse::<u32>().ok().filter(|&column| column > 0);
    let Some(column) = column else {
        warn!("could not find column number: {output}");
        return None;
    };

    Some(LintMessage {
        line,
        at: column - 1,
        text: captures[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_parse_error_line() {
        let message = parse_output_line("foo.clj:12:5: error: unexpected EOF").unwrap();

        assert_eq!(
            message,
            LintMessage {
                line: 12,
                at: 4,
                text: "error: unexpected EOF".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_warning_line() {
        let message = parse_output_line("foo.clj:3:1: warning: unused var").unwrap();

        assert_eq!(message.line, 3);
        assert_eq!(message.at, 0);
        assert_eq!(message.text, "warning: unused var");
    }

    #[test]
    fn test_path_with_colons_and_spaces() {
        // Absolute paths and Windows drive letters put extra colons before
        // the line number; the greedy prefix must swallow them.
        let message =
            parse_output_line("C:\\src\\my project\\foo.clj:7:2: warning: redundant do").unwrap();

        assert_eq!(message.line, 7);
        assert_eq!(message.at, 1);
        assert_eq!(message.text, "warning: redundant do");
    }

    #[rstest]
    #[case("not a valid output line")]
    #[case("")]
    #[case("foo.clj: something went wrong")]
    #[case("foo.clj:12: error: missing column")]
    #[case("foo.clj:abc:5: error: non-numeric line")]
    #[case("foo.clj:5:0: error: zero column")]
    #[case("foo.clj:1:99999999999: error: column overflow")]
    fn test_unparseable_lines(#[case] output: &str) {
        assert_eq!(parse_output_line(output), None);
    }

    #[test]
    fn test_zero_line_number_rejected() {
        assert_eq!(parse_output_line("foo.clj:0:5: error: bogus"), None);
    }

    #[test]
    fn test_line_number_overflow_rejected() {
        assert_eq!(parse_output_line("foo.clj:99999999999:5: error: huge"), None);
    }

    #[test]
    fn test_column_one_maps_to_offset_zero() {
        let message = parse_output_line("a.clj:1:1: warning: x").unwrap();
        assert_eq!(message.at, 0);
    }

    #[test]
    fn test_message_text_keeps_inner_colons() {
        let message = parse_output_line("a.clj:2:3: error: expected ')': got EOF").unwrap();
        assert_eq!(message.text, "error: expected ')': got EOF");
    }
}

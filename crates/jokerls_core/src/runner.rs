//! External linter process execution.

use std::path::Path;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::debug;

use crate::config::LINT_FLAG;
use crate::parser::parse_output_line;
use crate::{LintMessage, LinterConfig, LinterError};

/// Runs the external linter once over `path` and collects its parsed
/// messages.
///
/// Spawns `<program> --lint <path>` and reads stderr line by line until the
/// stream closes, then waits for the process to exit. Lines are processed in
/// arrival order; empty lines are skipped and unparseable lines are dropped
/// by the parser. The exit status does not matter: joker signals findings
/// through its output, and a finding-free run simply produces no lines.
pub async fn run_linter(
    config: &LinterConfig,
    path: &Path,
) -> Result<Vec<LintMessage>, LinterError> {
    debug!("spawning {} {} {}", config.program.display(), LINT_FLAG, path.display());

    let mut child = Command::new(&config.program)
        .arg(LINT_FLAG)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| LinterError::Launch {
            program: config.program.display().to_string(),
            source,
        })?;

    let Some(stderr) = child.stderr.take() else {
        return Err(LinterError::Io(std::io::Error::other(
            "linter stderr was not captured",
        )));
    };

    let mut lines = BufReader::new(stderr).lines();
    let mut messages = Vec::new();

    while let Some(line) = lines.next_line().await? {
        if line.is_empty() {
            continue;
        }
        if let Some(message) = parse_output_line(&line) {
            messages.push(message);
        }
    }

    let status = child.wait().await?;
    debug!(
        "linter exited with {status}, {} message(s) collected",
        messages.len()
    );

    Ok(messages)
}

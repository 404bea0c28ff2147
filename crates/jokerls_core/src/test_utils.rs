//! Test helpers for exercising the process runner.

use std::fs;

use tempfile::TempDir;

use crate::LinterConfig;

/// Writes a fake linter script that prints `stderr_payload` on stderr and
/// exits 0.
///
/// Returns the tempdir (which keeps the script alive) and a config pointing
/// at it. The payload goes through a data file so CRLF bytes survive shell
/// quoting.
#[cfg(unix)]
pub fn fake_linter(stderr_payload: &str) -> (TempDir, LinterConfig) {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("create tempdir");
    fs::write(dir.path().join("payload"), stderr_payload).expect("write payload");

    let script_path = dir.path().join("joker");
    fs::write(&script_path, "#!/bin/sh\ncat \"$(dirname \"$0\")/payload\" >&2\n")
        .expect("write script");
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).expect("chmod script");

    (dir, LinterConfig::with_program(script_path))
}

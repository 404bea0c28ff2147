//! jokerls CLI
//!
//! Bridge between the external `joker` Clojure linter and editors: one-shot
//! linting on the command line, or an LSP server speaking diagnostics.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use jokerls_core::{Diagnostic, Linter, LinterConfig, Severity};

/// jokerls - joker lint diagnostics for the command line and editors
#[derive(Parser)]
#[command(name = "jokerls")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint Clojure files with joker
    Lint {
        /// Files to lint
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Start the LSP server
    Lsp,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_findings) => {
            if has_findings {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Lint { files, format } => run_lint(&files, &format),
        Commands::Lsp => run_lsp().map(|_| false),
    }
}

fn run_lsp() -> Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .into_diagnostic()?
        .block_on(async {
            jokerls_lsp::run().await;
        });
    Ok(())
}

fn run_lint(files: &[PathBuf], format: &str) -> Result<bool> {
    let linter = Linter::new(LinterConfig::new());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .into_diagnostic()?;

    let mut results: Vec<(PathBuf, Vec<Diagnostic>)> = Vec::new();

    for file in files {
        if !linter.config().is_lintable(file) {
            warn!("{}: not a Clojure source file, skipping", file.display());
            continue;
        }

        let text = std::fs::read_to_string(file).into_diagnostic()?;
        // joker is invoked with the absolute path, like an editor would.
        let absolute = std::path::absolute(file).into_diagnostic()?;

        let diagnostics = runtime
            .block_on(linter.lint_document(&absolute, &text))
            .into_diagnostic()?;

        results.push((file.clone(), diagnostics));
    }

    output_results(&results, format)
}

fn output_results(results: &[(PathBuf, Vec<Diagnostic>)], format: &str) -> Result<bool> {
    let total: usize = results.iter().map(|(_, diagnostics)| diagnostics.len()).sum();

    match format {
        "json" => {
            let output: Vec<_> = results
                .iter()
                .map(|(path, diagnostics)| {
                    serde_json::json!({
                        "path": path.display().to_string(),
                        "diagnostics": diagnostics,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&output).into_diagnostic()?
            );
        }
        _ => {
            // Text format
            for (path, diagnostics) in results {
                if diagnostics.is_empty() {
                    continue;
                }

                println!("\n{}:", path.display());
                for diag in diagnostics {
                    let severity = match diag.severity {
                        Severity::Error => "error",
                        Severity::Warning => "warning",
                    };
                    println!(
                        "  {}:{} {}: {}",
                        diag.span.line + 1,
                        diag.span.start,
                        severity,
                        diag.message
                    );
                }
            }

            println!();
            println!("Checked {} files, found {} issues", results.len(), total);
        }
    }

    Ok(total > 0)
}

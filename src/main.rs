//! Command-line entry point for corpus-splitter

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use corpus_splitter::SplitJob;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Split a text file into character-balanced parts along line boundaries
#[derive(Parser, Debug)]
#[command(name = "corpus-splitter")]
#[command(about = "Splits a text file into N parts balanced by character count, never breaking a line")]
#[command(version)]
struct Cli {
    /// Path to the input text file
    input_file: PathBuf,

    /// Number of parts to split the file into
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    parts: u64,
}

fn main() -> Result<()> {
    // Usage errors must exit with code 1; --help and --version keep clap's
    // normal exit behavior
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    // Initialize tracing, RUST_LOG overrides the default level
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let report = SplitJob::new(&cli.input_file, cli.parts as usize)
        .run()
        .with_context(|| format!("failed to split '{}'", cli.input_file.display()))?;

    info!(
        "Done: {} part files from {} lines ({} chars) in {} ms",
        report.parts.len(),
        report.total_lines,
        report.total_chars,
        report.processing_time_ms
    );

    Ok(())
}

//! CLI binary for md2bbcode.
//!
//! A thin shim over the library crate: parse three positional arguments, run
//! the file conversion, and map the outcome onto the stdout contract. Usage
//! errors and runtime failures both print to standard output and exit 1;
//! diagnostics go to standard error via `RUST_LOG` so they never mix with
//! the contractual messages.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use md2bbcode::{convert_to_file, ConversionConfig};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert a README for a BBCode forum, resolving relative images
  # against the repository's raw-content URL
  md2bbcode README.md post.bbcode https://raw.githubusercontent.com/user/repo/main

  # Absolute http(s) image URLs are kept as-is; the base URL only
  # fills in relative paths
  md2bbcode notes.md notes.bbcode https://example.com/assets

ENVIRONMENT VARIABLES:
  RUST_LOG    Diagnostic log filter, written to stderr (e.g. RUST_LOG=debug).
              Defaults to 'warn'. Never affects the converted output.
"#;

#[derive(Parser, Debug)]
#[command(
    name = "md2bbcode",
    version,
    about = "Convert a Markdown document to BBCode markup",
    long_about = "Convert a Markdown document to BBCode forum markup. Headers, emphasis, \
lists, links, images, and code spans/blocks are rewritten; relative image paths are \
resolved against BASE_URL.",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path of the Markdown file to convert.
    input: PathBuf,

    /// Path the BBCode output is written to.
    output: PathBuf,

    /// Base URL joined onto relative image paths.
    base_url: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print().ok();
            return;
        }
        Err(err) => {
            // Argument errors print the usage text to stdout and exit 1,
            // before any file is touched. clap's default would be stderr
            // and exit 2.
            print!("{}", err.render());
            process::exit(1);
        }
    };

    // ── Logging setup ────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(cli) {
        println!("Error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ConversionConfig::new(cli.base_url);
    let stats = convert_to_file(&cli.input, &cli.output, &config)?;
    debug!("Conversion stats: {:?}", stats);

    println!(
        "Successfully converted {} to BBCode format at {}",
        cli.input.display(),
        cli.output.display()
    );
    Ok(())
}

//! Conversion entry points.
//!
//! [`convert`] is the string-to-string core; [`convert_to_file`] wraps it in
//! whole-file I/O: read the entire input into one buffer, rewrite, write the
//! entire result with a single write call. There is no temp-file-and-rename
//! step and no partial-output guarantee; an interrupted write leaves whatever
//! the filesystem left.

use crate::config::ConversionConfig;
use crate::error::Md2BbCodeError;
use crate::rules;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Statistics for a completed file conversion.
///
/// Returned by [`convert_to_file`] so callers can log or display throughput
/// without re-reading either file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    /// Bytes of Markdown read from the input file.
    pub bytes_read: usize,
    /// Bytes of BBCode written to the output file.
    pub bytes_written: usize,
    /// Wall-clock time for the whole read-rewrite-write cycle.
    pub duration_ms: u64,
}

/// Convert a Markdown string to BBCode.
///
/// This is the string-to-string core of the library: no I/O, infallible for
/// any input text. The text is transformed as given; line-ending
/// normalisation is applied only by [`convert_to_file`].
///
/// # Example
/// ```rust
/// use md2bbcode::{convert, ConversionConfig};
///
/// let config = ConversionConfig::new("https://raw.example.com/repo");
/// assert_eq!(convert("# Hello", &config), "[size=6][b]Hello[/b][/size]");
/// ```
pub fn convert(markdown: &str, config: &ConversionConfig) -> String {
    rules::markdown_to_bbcode(markdown, &config.base_url)
}

/// Convert a Markdown file to a BBCode file.
///
/// Reads the whole input file as UTF-8, rewrites it, and writes the whole
/// result with a single write call, overwriting any existing output file.
/// Line endings are normalised after reading (`\r\n` and lone `\r` become
/// `\n`), so Windows-style input converts the same as Unix-style input.
///
/// # Arguments
/// * `input` — Path of the Markdown file to read
/// * `output` — Path the BBCode result is written to
/// * `config` — Conversion configuration
///
/// # Errors
/// [`Md2BbCodeError::InputReadFailed`] when the input cannot be read
/// (missing, unreadable, or not valid UTF-8);
/// [`Md2BbCodeError::OutputWriteFailed`] when the output cannot be written.
/// The rewrite itself never fails.
pub fn convert_to_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Md2BbCodeError> {
    let start = Instant::now();
    let input = input.as_ref();
    let output = output.as_ref();
    info!("Starting conversion: {}", input.display());

    // ── Step 1: Read input ───────────────────────────────────────────────
    let raw = fs::read_to_string(input).map_err(|e| Md2BbCodeError::InputReadFailed {
        path: input.to_path_buf(),
        source: e,
    })?;
    debug!("Read {} bytes from {}", raw.len(), input.display());
    let markdown = normalise_line_endings(&raw);

    // ── Step 2: Rewrite ──────────────────────────────────────────────────
    let bbcode = convert(&markdown, config);

    // ── Step 3: Write output ─────────────────────────────────────────────
    fs::write(output, &bbcode).map_err(|e| Md2BbCodeError::OutputWriteFailed {
        path: output.to_path_buf(),
        source: e,
    })?;

    let stats = ConversionStats {
        bytes_read: raw.len(),
        bytes_written: bbcode.len(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        "Conversion complete: {} bytes in, {} bytes out, {}ms",
        stats.bytes_read, stats.bytes_written, stats.duration_ms
    );

    Ok(stats)
}

// ── Line-ending normalisation ────────────────────────────────────────────────
//
// File input is translated as a text-mode read would: `\r\n` first, then any
// remaining lone `\r`, so the line-anchored rules never capture a stray `\r`.

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

//! Error types for the md2bbcode library.
//!
//! The rewrite itself is infallible (any text is acceptable input), so every
//! error here is an I/O error wearing the path it failed on. Messages embed
//! both the path and the underlying io error, so a single [`Display`] line is
//! a complete report and callers never need to walk the source chain to
//! produce something readable.
//!
//! [`Display`]: std::fmt::Display

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the md2bbcode library.
#[derive(Debug, Error)]
pub enum Md2BbCodeError {
    /// Input file missing, unreadable, or not valid UTF-8.
    #[error("Failed to read input file '{path}': {source}")]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create or write the output BBCode file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn input_read_display() {
        let e = Md2BbCodeError::InputReadFailed {
            path: PathBuf::from("notes.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = e.to_string();
        assert!(msg.contains("notes.md"), "got: {msg}");
        assert!(msg.contains("No such file or directory"), "got: {msg}");
    }

    #[test]
    fn output_write_display() {
        let e = Md2BbCodeError::OutputWriteFailed {
            path: PathBuf::from("out/post.bbcode"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        let msg = e.to_string();
        assert!(msg.contains("out/post.bbcode"), "got: {msg}");
        assert!(msg.contains("Permission denied"), "got: {msg}");
    }
}

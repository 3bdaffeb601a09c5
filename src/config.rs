//! Configuration types for Markdown-to-BBCode conversion.
//!
//! The pipeline has exactly one knob, the base URL for relative image paths,
//! so [`ConversionConfig`] is a plain struct with a constructor rather than a
//! builder. Keeping it a named type (instead of a loose `&str` parameter)
//! gives the conversion entry points room to grow without breaking callers.

/// Configuration for a Markdown-to-BBCode conversion.
///
/// # Example
/// ```rust
/// use md2bbcode::ConversionConfig;
///
/// let config = ConversionConfig::new("https://raw.example.com/repo");
/// assert_eq!(config.base_url, "https://raw.example.com/repo");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Base URL joined onto relative image paths. Default: empty.
    ///
    /// A path that does not start with `http://` or `https://` is emitted as
    /// `[img]{base_url}/{path}[/img]`. The joiner is always a single `/`, so
    /// a base URL with a trailing slash produces a double slash in the output
    /// and an empty base URL produces a root-relative `[img]/path[/img]`.
    /// Absolute `http(s)://` paths ignore this field entirely.
    pub base_url: String,
}

impl ConversionConfig {
    /// Create a configuration with the given image base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

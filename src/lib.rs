//! # md2bbcode
//!
//! Convert Markdown documents to BBCode forum markup.
//!
//! ## Why this crate?
//!
//! Forum software built on BBCode (phpBB, XenForo, vBulletin and friends)
//! cannot render Markdown, so posting a project README means rewriting its
//! markup by hand. This crate mechanically rewrites the common Markdown
//! constructs into their BBCode equivalents: headers, emphasis, lists, links,
//! images, and code. It is a deterministic text filter, not a CommonMark
//! parser; see [`rules`] for exactly what is matched and in what order.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Images    ![alt](path)      →  [img]...[/img]  (base URL applied)
//!  ├─ 2. Headers   # / ## / ###      →  [size=6|5|4][b]...[/b][/size]
//!  ├─ 3. Bold      **text**          →  [b]text[/b]
//!  ├─ 4. Italic    *text*            →  [i]text[/i]
//!  ├─ 5. Bullets   - item            →  [*] item
//!  ├─ 6. Numbered  1. item           →  [*] item
//!  ├─ 7. Links     [text](url)       →  [url=url]text[/url]
//!  └─ 8. Code      fences, then `x`  →  [code]...[/code], [font=Courier New]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use md2bbcode::{convert, ConversionConfig};
//!
//! let config = ConversionConfig::new("https://raw.example.com/repo");
//! let bbcode = convert("## Usage\n\nRun `md2bbcode` on your *README*.", &config);
//! assert_eq!(
//!     bbcode,
//!     "[size=5][b]Usage[/b][/size]\n\nRun [font=Courier New]md2bbcode[/font] on your [i]README[/i]."
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2bbcode` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! md2bbcode = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod rules;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::ConversionConfig;
pub use convert::{convert, convert_to_file, ConversionStats};
pub use error::Md2BbCodeError;
pub use rules::markdown_to_bbcode;

//! Markdown to BBCode rewriting: the eight ordered substitution passes.
//!
//! ## Why ordered passes?
//!
//! Markdown and BBCode overlap syntactically, so the substitution order
//! carries the semantics:
//!
//! - Images (`![alt](path)`) share the bracket-paren shape with plain links
//!   and must be consumed first, or the link pass would wrap them in
//!   `[url=...]`
//! - Bold (`**`) must be consumed before italic (`*`), or every bold marker
//!   would be read as two adjacent italic delimiters
//! - Fenced code blocks must be converted before inline code, or the inline
//!   pass would pair up a fence's backticks and fragment the block
//!
//! Each pass is a pure `&str → String` rewrite over the whole current buffer;
//! matches are replaced independently, never nested or recursively. The
//! patterns are deliberately small: this is a text filter for well-formed
//! documents, not a CommonMark parser.

use once_cell::sync::Lazy;
use regex::Regex;

/// Rewrite a Markdown document into BBCode markup.
///
/// Applies eight substitution passes in a fixed order, each scanning the
/// entire output of the previous pass. `base_url` qualifies relative image
/// paths and is used by nothing else. Infallible for any input text.
///
/// Passes (applied in order):
/// 1. Images: `![alt](path)` → `[img]path[/img]`, with `base_url` prefixed
///    onto paths that are not `http(s)://` absolute (alt text is dropped)
/// 2. Headers: `#` / `##` / `###` lines → `[size=6|5|4][b]...[/b][/size]`
/// 3. Bold: `**text**` → `[b]text[/b]`
/// 4. Italic: `*text*` → `[i]text[/i]`
/// 5. Unordered list items: `- item` → `[*] item`
/// 6. Ordered list items: `1. item` → `[*] item` (the ordinal is dropped)
/// 7. Links: `[text](url)` → `[url=url]text[/url]`
/// 8. Code: triple-backtick fenced blocks → `[code]...[/code]`, then
///    single-backtick inline spans → `[font=Courier New]...[/font]`
pub fn markdown_to_bbcode(input: &str, base_url: &str) -> String {
    let s = rewrite_images(input, base_url);
    let s = rewrite_headings(&s);
    let s = rewrite_bold(&s);
    let s = rewrite_italic(&s);
    let s = rewrite_unordered_items(&s);
    let s = rewrite_ordered_items(&s);
    let s = rewrite_links(&s);
    let s = rewrite_fenced_blocks(&s);
    rewrite_inline_code(&s)
}

// ── Pass 1: Image links ──────────────────────────────────────────────────────
//
// Runs before the link pass so image syntax is fully consumed by the time the
// bracket-paren shape is matched again. BBCode `[img]` has no alt-text slot;
// the alt text is dropped.

static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

fn rewrite_images(input: &str, base_url: &str) -> String {
    RE_IMAGE
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let path = &caps[2];
            if path.starts_with("http://") || path.starts_with("https://") {
                format!("[img]{}[/img]", path)
            } else {
                format!("[img]{}/{}[/img]", base_url, path)
            }
        })
        .to_string()
}

// ── Pass 2: Headers ──────────────────────────────────────────────────────────

static RE_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static RE_H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static RE_H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());

/// Header levels are mutually exclusive by hash count at line start (`# `
/// cannot match a `##` line), so the three substitutions never cascade.
/// Level 4+ headers and mid-line hashes pass through untouched.
fn rewrite_headings(input: &str) -> String {
    let s = RE_H1
        .replace_all(input, "[size=6][b]$1[/b][/size]")
        .to_string();
    let s = RE_H2
        .replace_all(&s, "[size=5][b]$1[/b][/size]")
        .to_string();
    RE_H3.replace_all(&s, "[size=4][b]$1[/b][/size]").to_string()
}

// ── Pass 3: Bold ─────────────────────────────────────────────────────────────
//
// Runs before italic so a `**` pair is never read as two adjacent single-star
// delimiters. Span content is confined to one line and may not contain a
// star; confining it keeps already-emitted `[*]` list markers from pairing
// with stars on later lines when converted output is fed back in.

static RE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").unwrap());

fn rewrite_bold(input: &str) -> String {
    RE_BOLD.replace_all(input, "[b]$1[/b]").to_string()
}

// ── Pass 4: Italic ───────────────────────────────────────────────────────────

static RE_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());

fn rewrite_italic(input: &str) -> String {
    RE_ITALIC.replace_all(input, "[i]$1[/i]").to_string()
}

// ── Pass 5: Unordered list items ─────────────────────────────────────────────
//
// BBCode list items are unterminated, so `- item` maps to a bare `[*]` marker
// with no closing tag. Indented items are left alone.

static RE_UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- (.*)$").unwrap());

fn rewrite_unordered_items(input: &str) -> String {
    RE_UNORDERED_ITEM.replace_all(input, "[*] $1").to_string()
}

// ── Pass 6: Ordered list items ───────────────────────────────────────────────

static RE_ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[0-9]+\. (.*)$").unwrap());

/// The ordinal is dropped: BBCode numbering, where present, comes from the
/// enclosing list tag, which this converter does not emit.
fn rewrite_ordered_items(input: &str) -> String {
    RE_ORDERED_ITEM.replace_all(input, "[*] $1").to_string()
}

// ── Pass 7: Links ────────────────────────────────────────────────────────────
//
// Image syntax was consumed in pass 1, so every bracket-paren shape left at
// this point is a plain link. Already-emitted `[img]...[/img]` output has no
// `](` adjacency and cannot re-match.

static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

fn rewrite_links(input: &str) -> String {
    RE_LINK.replace_all(input, "[url=$2]$1[/url]").to_string()
}

// ── Pass 8: Code blocks, then inline code ────────────────────────────────────
//
// Fenced blocks convert first; the inline pass would otherwise pair up a
// fence's own backticks and fragment the block. Fence content may span lines
// but may not itself contain a backtick.

static RE_FENCED_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```([^`]*)```").unwrap());
static RE_INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]*)`").unwrap());

fn rewrite_fenced_blocks(input: &str) -> String {
    RE_FENCED_CODE
        .replace_all(input, "[code]$1[/code]")
        .to_string()
}

fn rewrite_inline_code(input: &str) -> String {
    RE_INLINE_CODE
        .replace_all(input, "[font=Courier New]$1[/font]")
        .to_string()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://raw.example.com/repo";

    #[test]
    fn test_image_with_absolute_url() {
        let result = rewrite_images("![alt](http://x/y.png)", BASE);
        assert_eq!(result, "[img]http://x/y.png[/img]");
        let result = rewrite_images("![alt](https://x/y.png)", BASE);
        assert_eq!(result, "[img]https://x/y.png[/img]");
    }

    #[test]
    fn test_image_with_relative_path() {
        let result = rewrite_images("![alt](imgs/a.png)", BASE);
        assert_eq!(result, "[img]https://raw.example.com/repo/imgs/a.png[/img]");
    }

    #[test]
    fn test_image_alt_text_dropped() {
        let result = rewrite_images("![company logo](http://x/logo.png)", BASE);
        assert!(!result.contains("company logo"));
    }

    #[test]
    fn test_image_not_caught_by_link_pass() {
        // The full pipeline must not wrap converted images in [url=...].
        let result = markdown_to_bbcode("![alt](imgs/a.png)", BASE);
        assert_eq!(result, "[img]https://raw.example.com/repo/imgs/a.png[/img]");
        assert!(!result.contains("[url="));
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            rewrite_headings("# Title"),
            "[size=6][b]Title[/b][/size]"
        );
        assert_eq!(
            rewrite_headings("## Section"),
            "[size=5][b]Section[/b][/size]"
        );
        assert_eq!(
            rewrite_headings("### Title"),
            "[size=4][b]Title[/b][/size]"
        );
    }

    #[test]
    fn test_deep_heading_passes_through() {
        assert_eq!(rewrite_headings("#### deep"), "#### deep");
    }

    #[test]
    fn test_heading_only_at_line_start() {
        assert_eq!(rewrite_headings("see # note"), "see # note");
        assert_eq!(rewrite_headings("  # indented"), "  # indented");
    }

    #[test]
    fn test_bold() {
        assert_eq!(rewrite_bold("**bold**"), "[b]bold[/b]");
    }

    #[test]
    fn test_italic() {
        assert_eq!(rewrite_italic("*italic*"), "[i]italic[/i]");
    }

    #[test]
    fn test_bold_before_italic() {
        let result = markdown_to_bbcode("**bold** and *italic*", "");
        assert_eq!(result, "[b]bold[/b] and [i]italic[/i]");
    }

    #[test]
    fn test_adjacent_emphasis_markers() {
        // Marker runs are ambiguous in Markdown; this pins the behaviour: the
        // bold pass consumes the inner `**` pair, italic the outer stars.
        let result = markdown_to_bbcode("***x***", "");
        assert_eq!(result, "[i][b]x[/b][/i]");
    }

    #[test]
    fn test_emphasis_stays_on_one_line() {
        assert_eq!(rewrite_bold("**a\nb**"), "**a\nb**");
        assert_eq!(rewrite_italic("*a\nb*"), "*a\nb*");
    }

    #[test]
    fn test_unordered_items() {
        let result = rewrite_unordered_items("- one\n- two");
        assert_eq!(result, "[*] one\n[*] two");
        assert_eq!(rewrite_unordered_items("  - indented"), "  - indented");
    }

    #[test]
    fn test_ordered_items() {
        let result = rewrite_ordered_items("1. first\n2. second\n10. tenth");
        assert_eq!(result, "[*] first\n[*] second\n[*] tenth");
        // No space after the dot means no list item.
        assert_eq!(rewrite_ordered_items("3.14 is pi"), "3.14 is pi");
    }

    #[test]
    fn test_links() {
        let result = rewrite_links("[docs](https://example.com/docs)");
        assert_eq!(result, "[url=https://example.com/docs]docs[/url]");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(
            rewrite_inline_code("use `cargo` here"),
            "use [font=Courier New]cargo[/font] here"
        );
    }

    #[test]
    fn test_fenced_block_spans_lines() {
        let result = rewrite_fenced_blocks("```\nlet x = 1;\nlet y = 2;\n```");
        assert_eq!(result, "[code]\nlet x = 1;\nlet y = 2;\n[/code]");
    }

    #[test]
    fn test_fenced_before_inline() {
        let input = "run `ls` first\n```\nlet x = 1;\n```\nthen `pwd`";
        let result = markdown_to_bbcode(input, BASE);
        assert!(result.contains("[code]\nlet x = 1;\n[/code]"));
        assert!(result.contains("[font=Courier New]ls[/font]"));
        assert!(result.contains("[font=Courier New]pwd[/font]"));
        // The fence body itself is left alone by the inline pass.
        assert!(!result.contains("[code]\n[font=Courier New]"));
    }

    #[test]
    fn test_identity_on_plain_text() {
        let input = "Just a paragraph of ordinary prose.\nAnother line of it.";
        assert_eq!(markdown_to_bbcode(input, BASE), input);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(markdown_to_bbcode("", BASE), "");
    }

    #[test]
    fn test_full_document() {
        let input = "# Title\n\nIntro with **bold** and *italic* and `code`.\n\n## Features\n\n- first feature\n- second feature\n\n1. step one\n2. step two\n\nSee [docs](https://example.com/docs) and ![logo](imgs/logo.png).\n\n```\nlet x = 1;\nlet y = 2;\n```\n";
        let expected = "[size=6][b]Title[/b][/size]\n\nIntro with [b]bold[/b] and [i]italic[/i] and [font=Courier New]code[/font].\n\n[size=5][b]Features[/b][/size]\n\n[*] first feature\n[*] second feature\n\n[*] step one\n[*] step two\n\nSee [url=https://example.com/docs]docs[/url] and [img]https://raw.example.com/repo/imgs/logo.png[/img].\n\n[code]\nlet x = 1;\nlet y = 2;\n[/code]\n";
        assert_eq!(markdown_to_bbcode(input, BASE), expected);
    }

    #[test]
    fn test_pipeline_idempotent() {
        let input = "# Title\n\nIntro with **bold** and *italic* and `code`.\n\n- first feature\n- second feature\n\nSee [docs](https://example.com/docs) and ![logo](imgs/logo.png).\n";
        let once = markdown_to_bbcode(input, BASE);
        let twice = markdown_to_bbcode(&once, BASE);
        assert_eq!(twice, once, "converted output must not convert further");
    }

    #[test]
    fn test_stray_star_in_list_item_reconverts() {
        // Boundary of the fixed-point guarantee: a converted line holding
        // both a `[*]` marker and a literal star gives the italic pass a
        // star pair on the next run.
        let once = markdown_to_bbcode("- 3 * 4", BASE);
        assert_eq!(once, "[*] 3 * 4");
        let twice = markdown_to_bbcode(&once, BASE);
        assert_eq!(twice, "[[i]] 3 [/i] 4");
    }
}

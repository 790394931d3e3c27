//! Inline emphasis for bot replies.
//!
//! Replies support exactly two spans: `**bold**` and `*italic*`. Matching is
//! lazy and non-nesting: bold spans are substituted first across the whole
//! string, then italic spans over the result. Markup never crosses a line
//! terminator (`\n`, `\r`, U+2028, U+2029), matching how browsers treat
//! `.` in reply formatting.
//!
//! The reply is HTML-escaped before substitution so server text cannot inject
//! markup of its own. Callers format the original reply text exactly once;
//! feeding formatted output back in is not supported.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]*?)\*\*").expect("valid regex"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^\n\r\x{2028}\x{2029}]*?)\*").expect("valid regex"));

/// Render a reply as HTML with bold and italic spans applied.
#[must_use]
pub fn format_reply(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = BOLD.replace_all(&escaped, "<strong>${1}</strong>");
    ITALIC.replace_all(&bold, "<em>${1}</em>").into_owned()
}

/// Escape the characters that are significant in HTML text and attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

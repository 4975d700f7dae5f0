//! Escaping for user-supplied strings.
//!
//! Text is escaped by writing it as the text content of a scratch element
//! and reading the element's markup back, the same round trip a browser
//! performs with `textContent` / `innerHTML`.

use crate::view::Element;

/// Escape `text` for use between tags.
pub fn escape_html(text: &str) -> String {
    let mut scratch = Element::new();
    scratch.set_text_content(text);
    scratch.into_inner_html()
}

/// Escape `value` for use inside a double- or single-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    escape_html(value)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Whether `url` may be emitted as an `href`/`src`.
///
/// Only http(s) and site-relative paths pass, which keeps `javascript:`
/// and `data:` URLs supplied by the server out of the page. Browsers read
/// `/\` like `//` and drop embedded tabs and newlines, so both
/// protocol-relative forms and any control characters are rejected.
pub fn is_safe_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    if lower.chars().any(char::is_control) {
        return false;
    }
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || (lower.starts_with('/') && !lower.starts_with("//") && !lower.starts_with("/\\"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_tags_become_text() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn ampersands_escape_first() {
        assert_eq!(escape_html("a &lt; b"), "a &amp;lt; b");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape_html("主播 Alice"), "主播 Alice");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn attributes_escape_quotes() {
        assert_eq!(
            escape_attr(r#"" onmouseover="x"#),
            "&quot; onmouseover=&quot;x"
        );
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }

    #[test]
    fn url_filter() {
        assert!(is_safe_url("https://live.bilibili.com/1"));
        assert!(is_safe_url("/avatars/1.png"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("  JavaScript:alert(1)"));
        assert!(!is_safe_url("data:text/html,x"));
        assert!(!is_safe_url("//evil.example/x"));
    }

    #[test]
    fn backslash_and_control_chars_cannot_reach_another_host() {
        assert!(!is_safe_url("/\\evil.example/a.png"));
        assert!(!is_safe_url("/\t/evil.example/a.png"));
        assert!(!is_safe_url("/\n/evil.example/a.png"));
        assert!(is_safe_url("/avatars/a\\b.png"));
    }
}

//! Document Sanitization Module
//!
//! Extracts the usable fragment from an exported document's HTML and
//! strips platform cruft: the head/body wrapper, inline comment anchors
//! and script blocks. Cleanup is conservative; when the body boundary is
//! missing, the content passes through rather than being dropped.

use once_cell::sync::Lazy;
use regex::Regex;

static BODY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<body[^>]*>(.*?)</body>").expect("valid body regex"));

static COMMENT_ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<a[^>]*id="cmnt[^"]*"[^>]*>.*?</a>"#).expect("valid comment anchor regex")
});

static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid script regex"));

// == Clean Doc HTML ==
/// Sanitizes exported document HTML down to its visible body fragment.
///
/// Steps, in order:
/// 1. extract the inner `<body>` content, discarding the document/head
///    wrapper; when no body boundary is found the input passes through
///    intact, since partial cleanup is preferable to empty output;
/// 2. remove comment-anchor elements (`<a id="cmnt…">`);
/// 3. remove script blocks;
/// 4. trim surrounding whitespace.
pub fn clean_doc_html(html: &str) -> String {
    let body = match BODY_RE.captures(html) {
        Some(captures) => captures.get(1).map_or(html, |m| m.as_str()),
        None => html,
    };

    let without_anchors = COMMENT_ANCHOR_RE.replace_all(body, "");
    let without_scripts = SCRIPT_RE.replace_all(&without_anchors, "");

    without_scripts.trim().to_string()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_extracts_body_content() {
        let html = "<html><head><style>.c0{}</style></head><body><p>Hello</p></body></html>";

        assert_eq!(clean_doc_html(html), "<p>Hello</p>");
    }

    #[test]
    fn test_clean_body_with_attributes() {
        let html = r#"<html><body class="doc" style="margin:0"><p>Hi</p></body></html>"#;

        assert_eq!(clean_doc_html(html), "<p>Hi</p>");
    }

    #[test]
    fn test_clean_removes_comment_anchors() {
        let html = r##"<body><p>Text<a href="#cmnt1" id="cmnt_ref1">[a]</a></p></body>"##;

        assert_eq!(clean_doc_html(html), "<p>Text</p>");
    }

    #[test]
    fn test_clean_removes_scripts() {
        let html = "<body><p>Keep</p><script>alert('x')</script></body>";

        assert_eq!(clean_doc_html(html), "<p>Keep</p>");
    }

    #[test]
    fn test_clean_full_sanitization() {
        let html = concat!(
            "<html><head><title>t</title></head><body>",
            "<p>Visible</p>",
            r##"<a id="cmnt2" href="#cmnt_ref2">[b]</a>"##,
            "<script type=\"text/javascript\">var x = 1;</script>",
            "<p>Also visible</p>",
            "</body></html>",
        );

        assert_eq!(clean_doc_html(html), "<p>Visible</p><p>Also visible</p>");
    }

    #[test]
    fn test_clean_no_body_passes_through() {
        // No structural marker: pass the content through rather than
        // dropping it entirely
        let html = "<p>Fragment without wrapper</p>";

        assert_eq!(clean_doc_html(html), "<p>Fragment without wrapper</p>");
    }

    #[test]
    fn test_clean_no_body_still_strips_scripts() {
        let html = "<p>Text</p><script>var y;</script>";

        assert_eq!(clean_doc_html(html), "<p>Text</p>");
    }

    #[test]
    fn test_clean_trims_whitespace() {
        let html = "<body>\n\n  <p>Padded</p>  \n</body>";

        assert_eq!(clean_doc_html(html), "<p>Padded</p>");
    }

    #[test]
    fn test_clean_case_insensitive_tags() {
        let html = "<BODY><p>Upper</p><SCRIPT>x</SCRIPT></BODY>";

        assert_eq!(clean_doc_html(html), "<p>Upper</p>");
    }

    #[test]
    fn test_clean_empty_input() {
        assert_eq!(clean_doc_html(""), "");
    }
}

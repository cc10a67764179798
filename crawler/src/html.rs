//! Hyperlink and text extraction from raw page HTML.

use common::RawLink;
use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text never shows up on screen.
const NON_VISIBLE: &[&str] = &["script", "style", "template"];

/// Extracts hyperlinks and their text from page HTML.
///
/// Only anchors whose `href` starts with `http` or `/` are kept, which drops
/// `javascript:`, `mailto:`, fragment-only and document-relative links.
pub fn extract_hyperlinks(html: &str) -> Vec<RawLink> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a").expect("static selector");

    document
        .select(&anchor_selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            if !(href.starts_with("http") || href.starts_with('/')) {
                return None;
            }
            let pieces = text_pieces(anchor);
            Some(RawLink {
                text_full: pieces.join(" "),
                text_first: first_line(&pieces.join("\n")).to_string(),
                href: href.to_string(),
            })
        })
        .collect()
}

/// Trimmed, non-empty text nodes under `element`, in document order.
fn text_pieces(element: ElementRef<'_>) -> Vec<&str> {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

/// All text a reader could see on the page, one text node per line.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut lines: Vec<&str> = Vec::new();
    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(el) if NON_VISIBLE.contains(&el.name()))
        });
        if !hidden {
            lines.push(&**text);
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keeps_only_usable_targets() {
        let html = r#"
            <a href="/jobs/1">Engineer</a>
            <a href="javascript:void(0)">X</a>
            <a href="mailto:a@b.com">Y</a>
        "#;
        let links = extract_hyperlinks(html);
        assert_eq!(
            links,
            vec![RawLink {
                text_full: "Engineer".to_string(),
                text_first: "Engineer".to_string(),
                href: "/jobs/1".to_string(),
            }]
        );
    }

    #[test]
    fn test_extract_drops_missing_and_relative_hrefs() {
        let html = r##"
            <a name="top">Anchor</a>
            <a href="#section">Jump</a>
            <a href="jobs/2">Relative</a>
            <a href="https://other.com/x">Elsewhere</a>
        "##;
        let links = extract_hyperlinks(html);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "https://other.com/x");
    }

    #[test]
    fn test_extract_full_and_first_line_text() {
        let html = r#"
            <a href="/jobs/42">
                <h3>  Senior ML Engineer </h3>
                <span>San Francisco, CA</span>
                <span>   </span>
            </a>
        "#;
        let links = extract_hyperlinks(html);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text_full, "Senior ML Engineer San Francisco, CA");
        assert_eq!(links[0].text_first, "Senior ML Engineer");
    }

    #[test]
    fn test_extract_empty_anchor_text() {
        let links = extract_hyperlinks(r#"<a href="/logo"><img src="logo.png"></a>"#);
        assert_eq!(links[0].text_full, "");
        assert_eq!(links[0].text_first, "");
    }

    #[test]
    fn test_visible_text_skips_scripts_and_styles() {
        let html = r#"
            <html><head><title>Careers</title><style>h1 { color: red }</style></head>
            <body><h1>ML Engineer</h1><script>var x = 1;</script><p>Build models.</p></body></html>
        "#;
        let text = visible_text(html);
        assert!(text.contains("Careers"));
        assert!(text.contains("ML Engineer"));
        assert!(text.contains("Build models."));
        assert!(!text.contains("color"));
        assert!(!text.contains("var x"));

        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["Careers", "ML Engineer", "Build models."]);
    }
}

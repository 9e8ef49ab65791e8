//! Rich text: block trees and highlighted headlines.
//!
//! The hero carries two kinds of formatted text. Its body is a block tree in
//! the backend's JSON rich-text format (paragraphs, headings, lists, quotes,
//! code and images, each holding inline text nodes with formatting flags).
//! Its title and description are plain strings where words written as
//! `[word]` are highlighted.
//!
//! Unknown block and inline node types deserialize to an `Unknown` arm and
//! render nothing, so a newer backend schema never breaks a build.

use crate::media::absolute_url;
use crate::types::MediaAttributes;
use maud::{Markup, html};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Paragraph {
        #[serde(default)]
        children: Vec<Inline>,
    },
    Heading {
        #[serde(default = "default_heading_level")]
        level: u8,
        #[serde(default)]
        children: Vec<Inline>,
    },
    List {
        #[serde(default)]
        format: ListFormat,
        #[serde(default)]
        children: Vec<ListChild>,
    },
    Quote {
        #[serde(default)]
        children: Vec<Inline>,
    },
    Code {
        #[serde(default)]
        children: Vec<Inline>,
    },
    Image {
        image: MediaAttributes,
    },
    #[serde(other)]
    Unknown,
}

fn default_heading_level() -> u8 {
    2
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    Ordered,
    #[default]
    Unordered,
}

/// Child of a list: an item, or a nested list.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ListChild {
    ListItem {
        #[serde(default)]
        children: Vec<Inline>,
    },
    List {
        #[serde(default)]
        format: ListFormat,
        #[serde(default)]
        children: Vec<ListChild>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Inline {
    Text(TextNode),
    Link {
        url: String,
        #[serde(default)]
        children: Vec<Inline>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextNode {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub code: bool,
}

// ============================================================================
// Block rendering
// ============================================================================

/// Render a block tree. `base_url` resolves relative image paths.
pub fn render_blocks(blocks: &[Block], base_url: &str) -> Markup {
    html! {
        @for block in blocks {
            (render_block(block, base_url))
        }
    }
}

fn render_block(block: &Block, base_url: &str) -> Markup {
    match block {
        Block::Paragraph { children } => html! { p { (render_inlines(children)) } },
        Block::Heading { level, children } => {
            let inner = render_inlines(children);
            match (*level).clamp(1, 6) {
                1 => html! { h1 { (inner) } },
                2 => html! { h2 { (inner) } },
                3 => html! { h3 { (inner) } },
                4 => html! { h4 { (inner) } },
                5 => html! { h5 { (inner) } },
                _ => html! { h6 { (inner) } },
            }
        }
        Block::List { format, children } => render_list(*format, children),
        Block::Quote { children } => html! { blockquote { (render_inlines(children)) } },
        Block::Code { children } => html! { pre { code { (plain_text(children)) } } },
        Block::Image { image } => {
            if image.url.is_empty() {
                html! {}
            } else {
                html! {
                    img src=(absolute_url(base_url, &image.url))
                        alt=(image.alternative_text.as_deref().unwrap_or(""))
                        width=(image.width)
                        height=(image.height);
                }
            }
        }
        Block::Unknown => html! {},
    }
}

fn render_list(format: ListFormat, children: &[ListChild]) -> Markup {
    let items = html! {
        @for child in children {
            @match child {
                ListChild::ListItem { children } => { li { (render_inlines(children)) } },
                ListChild::List { format, children } => { li { (render_list(*format, children)) } },
                ListChild::Unknown => {},
            }
        }
    };
    match format {
        ListFormat::Ordered => html! { ol { (items) } },
        ListFormat::Unordered => html! { ul { (items) } },
    }
}

fn render_inlines(nodes: &[Inline]) -> Markup {
    html! {
        @for node in nodes {
            @match node {
                Inline::Text(text) => { (render_text(text)) },
                Inline::Link { url, children } => { a href=(url) { (render_inlines(children)) } },
                Inline::Unknown => {},
            }
        }
    }
}

/// Apply formatting flags innermost-first: code, then strike, underline,
/// italic, bold.
fn render_text(node: &TextNode) -> Markup {
    let mut out = html! { (node.text) };
    if node.code {
        out = html! { code { (out) } };
    }
    if node.strikethrough {
        out = html! { s { (out) } };
    }
    if node.underline {
        out = html! { u { (out) } };
    }
    if node.italic {
        out = html! { em { (out) } };
    }
    if node.bold {
        out = html! { strong { (out) } };
    }
    out
}

fn plain_text(nodes: &[Inline]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Inline::Text(text) => out.push_str(&text.text),
            Inline::Link { children, .. } => out.push_str(&plain_text(children)),
            Inline::Unknown => {}
        }
    }
    out
}

// ============================================================================
// Highlighted text
// ============================================================================

/// Element that wraps a highlighted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTag {
    H1,
    P,
}

/// Strip the brackets off a `[word]` token.
fn highlighted_word(word: &str) -> Option<&str> {
    word.strip_prefix('[')
        .and_then(|w| w.strip_suffix(']'))
        .filter(|w| !w.is_empty())
}

/// Render `text` inside `tag`, wrapping every `[word]` in a highlight span.
/// Whitespace runs collapse to single spaces.
pub fn render_highlighted(text: &str, tag: TextTag, class: &str) -> Markup {
    let inner = html! {
        @for (i, word) in text.split_whitespace().enumerate() {
            @if i > 0 { " " }
            @match highlighted_word(word) {
                Some(w) => { span.highlight { (w) } },
                None => { (word) },
            }
        }
    };
    match tag {
        TextTag::H1 => html! { h1 class=(class) { (inner) } },
        TextTag::P => html! { p class=(class) { (inner) } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(json: &str) -> Vec<Block> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn paragraph_with_formatting() {
        let b = blocks(
            r#"[{"type": "paragraph", "children": [
                {"type": "text", "text": "Plain "},
                {"type": "text", "text": "bold", "bold": true},
                {"type": "text", "text": " and "},
                {"type": "text", "text": "both", "bold": true, "italic": true}
            ]}]"#,
        );
        let html = render_blocks(&b, "").into_string();
        assert_eq!(
            html,
            "<p>Plain <strong>bold</strong> and <strong><em>both</em></strong></p>"
        );
    }

    #[test]
    fn heading_levels_clamp() {
        let b = blocks(
            r#"[
                {"type": "heading", "level": 3, "children": [{"type": "text", "text": "Three"}]},
                {"type": "heading", "level": 9, "children": [{"type": "text", "text": "Nine"}]},
                {"type": "heading", "level": 0, "children": [{"type": "text", "text": "Zero"}]}
            ]"#,
        );
        let html = render_blocks(&b, "").into_string();
        assert!(html.contains("<h3>Three</h3>"));
        assert!(html.contains("<h6>Nine</h6>"));
        assert!(html.contains("<h1>Zero</h1>"));
    }

    #[test]
    fn ordered_and_nested_lists() {
        let b = blocks(
            r#"[{"type": "list", "format": "ordered", "children": [
                {"type": "list-item", "children": [{"type": "text", "text": "one"}]},
                {"type": "list", "format": "unordered", "children": [
                    {"type": "list-item", "children": [{"type": "text", "text": "inner"}]}
                ]}
            ]}]"#,
        );
        let html = render_blocks(&b, "").into_string();
        assert!(!html.contains("<ol><ul>") && !html.contains("</li><ul>"));
        assert_eq!(html, "<ol><li>one</li><li><ul><li>inner</li></ul></li></ol>");
    }

    #[test]
    fn links_and_quotes() {
        let b = blocks(
            r#"[{"type": "quote", "children": [
                {"type": "link", "url": "/about", "children": [{"type": "text", "text": "About"}]}
            ]}]"#,
        );
        let html = render_blocks(&b, "").into_string();
        assert_eq!(html, r#"<blockquote><a href="/about">About</a></blockquote>"#);
    }

    #[test]
    fn code_block_is_plain_text() {
        let b = blocks(
            r#"[{"type": "code", "children": [{"type": "text", "text": "let x = 1 < 2;", "bold": true}]}]"#,
        );
        let html = render_blocks(&b, "").into_string();
        assert_eq!(html, "<pre><code>let x = 1 &lt; 2;</code></pre>");
    }

    #[test]
    fn image_block_resolves_url() {
        let b = blocks(
            r#"[{"type": "image", "image": {"url": "/uploads/i.png", "alternativeText": "I", "width": 10, "height": 20}}]"#,
        );
        let html = render_blocks(&b, "http://localhost:1337").into_string();
        assert!(html.contains(r#"src="http://localhost:1337/uploads/i.png""#));
        assert!(html.contains(r#"width="10""#));
        assert!(html.contains(r#"alt="I""#));
    }

    #[test]
    fn unknown_nodes_render_nothing() {
        let b = blocks(
            r#"[
                {"type": "table", "rows": []},
                {"type": "paragraph", "children": [{"type": "mention", "user": 1}, {"type": "text", "text": "ok"}]}
            ]"#,
        );
        let html = render_blocks(&b, "").into_string();
        assert_eq!(html, "<p>ok</p>");
    }

    #[test]
    fn empty_block_list() {
        assert_eq!(render_blocks(&[], "").into_string(), "");
    }

    #[test]
    fn text_is_escaped() {
        let b = blocks(r#"[{"type": "paragraph", "children": [{"type": "text", "text": "<b>x</b>"}]}]"#);
        let html = render_blocks(&b, "").into_string();
        assert_eq!(html, "<p>&lt;b&gt;x&lt;/b&gt;</p>");
    }

    #[test]
    fn highlighted_words() {
        let html = render_highlighted("Tell your [story] here", TextTag::H1, "hero-title").into_string();
        assert_eq!(
            html,
            r#"<h1 class="hero-title">Tell your <span class="highlight">story</span> here</h1>"#
        );
    }

    #[test]
    fn highlight_needs_both_brackets() {
        assert_eq!(highlighted_word("[word]"), Some("word"));
        assert_eq!(highlighted_word("[word"), None);
        assert_eq!(highlighted_word("word]"), None);
        assert_eq!(highlighted_word("[]"), None);
    }

    #[test]
    fn highlighted_collapses_whitespace() {
        let html = render_highlighted("  a   b ", TextTag::P, "c").into_string();
        assert_eq!(html, r#"<p class="c">a b</p>"#);
    }
}

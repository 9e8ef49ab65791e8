use crate::types::RichTextContent;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Markdown section. Content comes from the trusted backend, so raw HTML in
/// the markdown passes through.
pub fn render_rich_text(content: &RichTextContent) -> Markup {
    let parser = Parser::new(&content.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    html! {
        section.rich-text {
            article.rich-text-content {
                (PreEscaped(body_html))
            }
        }
    }
}

//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scanned [`Manifest`] and writes
//! one self-contained HTML document per page: navbar, the page's sections in
//! payload order, footer.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # home / index slug
//! ├── about/
//! │   └── index.html             # /about
//! └── screen-industry/
//!     └── index.html             # /screen-industry
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and inlined into every page:
//! - `static/style.css`: Base styles (palette and fonts injected from config)
//! - `static/menu.js`: Mobile menu transitions
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config;
use crate::menu::MenuState;
use crate::naming::{output_file, page_path};
use crate::render::{RenderContext, render_footer, render_navbar, render_section};
use crate::scan::{Manifest, ScannedPage};
use crate::types::{GlobalContent, PageContent, Section};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What was written, for CLI output.
#[derive(Debug)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
    pub output_dir: PathBuf,
    /// Media host relative media paths were resolved against.
    pub base_url: String,
}

#[derive(Debug)]
pub struct GeneratedPage {
    pub title: String,
    /// Navigation path (`/`, `/about`).
    pub path: String,
    /// Output file relative to the output directory.
    pub output: String,
    /// Section labels in render order, unsupported ones included.
    pub sections: Vec<&'static str>,
}

impl GeneratedPage {
    pub fn skipped_sections(&self) -> usize {
        self.sections
            .iter()
            .filter(|&&label| label == Section::Unsupported.label())
            .count()
    }
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/menu.js");

pub fn generate(
    manifest: &Manifest,
    output_dir: &Path,
    base_url: &str,
) -> Result<GenerateReport, GenerateError> {
    // Generate CSS with colors and fonts from config
    let theme_css = config::generate_theme_css(&manifest.config);
    let css = format!("{}\n\n{}", theme_css, CSS_STATIC);
    let card_back = manifest.config.cards.card_back();

    fs::create_dir_all(output_dir)?;

    let mut pages = Vec::new();
    for page in &manifest.pages {
        let path = page_path(page.slug());
        let output = output_file(page.slug());
        let ctx = RenderContext::new(base_url, path.as_str()).with_card_back(card_back.clone());

        let document = render_page(
            &page.content,
            &manifest.global,
            &ctx,
            &manifest.config.site.lang,
            &css,
        );

        let target = output_dir.join(&output);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, document.into_string())?;

        pages.push(generated_page(page, path, output));
    }

    Ok(GenerateReport {
        pages,
        output_dir: output_dir.to_path_buf(),
        base_url: base_url.to_string(),
    })
}

fn generated_page(page: &ScannedPage, path: String, output: String) -> GeneratedPage {
    GeneratedPage {
        title: page.content.title.clone(),
        path,
        output,
        sections: page.content.sections.iter().map(Section::label).collect(),
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// `<title>`: page title, then the site name when the payload has one.
pub fn document_title(page: &PageContent, global: &GlobalContent) -> String {
    match global.site_name.as_deref() {
        Some(site) if !site.is_empty() && site != page.title => {
            format!("{} | {}", page.title, site)
        }
        _ => page.title.clone(),
    }
}

/// Renders the base HTML document structure
fn base_document(
    title: &str,
    description: Option<&str>,
    lang: &str,
    css: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(description) = description {
                    meta name="description" content=(description);
                }
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// A complete page: chrome around the page's sections.
///
/// The mobile menu always starts closed.
pub fn render_page(
    page: &PageContent,
    global: &GlobalContent,
    ctx: &RenderContext,
    lang: &str,
    css: &str,
) -> Markup {
    let content = html! {
        (render_navbar(&global.navbar, ctx, MenuState::Closed))
        main.page-content {
            @for section in &page.sections {
                (render_section(section, ctx))
            }
        }
        (render_footer(&global.footer, ctx))
    };
    base_document(
        &document_title(page, global),
        page.description.as_deref(),
        lang,
        css,
        content,
    )
}

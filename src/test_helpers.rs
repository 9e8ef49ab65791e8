//! Shared test utilities.
//!
//! Payload builders for the common content shapes, a fixture loader that
//! copies `fixtures/content/` into a temp directory, and small extractors
//! for asserting on rendered HTML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut f = feature("Title", "Body");
//! f.media = Some(media_field("/uploads/a.png", None, 320, 200));
//! let html = flat_card(&f, &ctx).into_string();
//! assert_eq!(card_titles(&html), vec!["Title"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{
    ButtonItem, DropdownMenu, FeatureItem, FooterColumn, FooterContent, GlobalContent, ItemId,
    LinkItem, MediaAttributes, MediaData, MediaField, MenuEntry, NavbarContent,
};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a page payload into `<root>/pages/<stem>.json`.
pub fn write_page(root: &Path, stem: &str, json: &str) {
    let pages = root.join("pages");
    std::fs::create_dir_all(&pages).unwrap();
    std::fs::write(pages.join(format!("{stem}.json")), json).unwrap();
}

// =========================================================================
// Payload builders
// =========================================================================

pub fn media_field(url: &str, alt: Option<&str>, width: u32, height: u32) -> MediaField {
    MediaField {
        data: Some(MediaData {
            id: Some(ItemId::Number(1)),
            attributes: Some(MediaAttributes {
                url: url.to_string(),
                alternative_text: alt.map(str::to_string),
                width,
                height,
            }),
        }),
    }
}

pub fn link(id: u64, url: &str, text: &str) -> LinkItem {
    LinkItem {
        id: Some(ItemId::Number(id)),
        url: url.to_string(),
        text: text.to_string(),
        new_tab: false,
        social: None,
    }
}

pub fn social(id: u64, url: &str, text: &str, tag: &str) -> LinkItem {
    LinkItem {
        new_tab: true,
        social: Some(tag.to_string()),
        ..link(id, url, text)
    }
}

pub fn button(url: &str, text: &str, kind: &str) -> ButtonItem {
    ButtonItem {
        id: None,
        url: url.to_string(),
        text: text.to_string(),
        kind: kind.to_string(),
        new_tab: false,
    }
}

pub fn feature(title: &str, description: &str) -> FeatureItem {
    FeatureItem {
        title: title.to_string(),
        description: description.to_string(),
        ..Default::default()
    }
}

/// Navbar and footer shaped like a real site: dropdowns around a plain link,
/// four categorized footer columns.
pub fn sample_global() -> GlobalContent {
    let dropdown = |title: &str, links: Vec<LinkItem>| {
        MenuEntry::Dropdown(DropdownMenu {
            title: title.to_string(),
            links,
        })
    };
    let column = |title: &str, links: Vec<LinkItem>| FooterColumn {
        title: title.to_string(),
        links,
    };

    GlobalContent {
        site_name: Some("Screen Office".to_string()),
        navbar: NavbarContent {
            logo_url: Some("/uploads/logo.svg".to_string()),
            logo_text: None,
            links: vec![link(1, "/", "Home"), link(2, "/about", "About")],
            menu: vec![
                dropdown(
                    "SCREEN INDUSTRY SERVICES",
                    vec![link(10, "/funding", "Funding"), link(11, "/locations", "Locations")],
                ),
                MenuEntry::Link(link(0, "/news", "NEWS")),
                dropdown("ABOUT US", vec![link(20, "/about", "Our team")]),
            ],
        },
        footer: FooterContent {
            social_links: vec![
                social(1, "https://facebook.com/screen", "Facebook", "FACEBOOK"),
                social(2, "https://example.org", "Website", "WEBSITE"),
            ],
            legal_links: vec![link(1, "/privacy", "Privacy")],
            columns: vec![
                column("SCREEN INDUSTRY", vec![link(1, "/funding", "Funding")]),
                column("ACCESS CONTENT", vec![link(1, "/watch", "Watch")]),
                column("HELP CENTRE", vec![link(1, "/help", "Help")]),
                column("ABOUT US", vec![link(1, "/about", "About")]),
            ],
            ..Default::default()
        },
    }
}

// =========================================================================
// HTML extractors
// =========================================================================

/// Texts of every `<h3 class="card-title">` in document order.
pub fn card_titles(html: &str) -> Vec<String> {
    const OPEN: &str = r#"<h3 class="card-title">"#;
    let mut titles = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(OPEN) {
        let after = &rest[start + OPEN.len()..];
        let end = after.find("</h3>").expect("unterminated card title");
        titles.push(after[..end].to_string());
        rest = &after[end..];
    }
    titles
}

//! Content discovery and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads a content export (the JSON the CMS
//! returns for the site chrome and for each page) and produces a [`Manifest`]
//! the generate stage renders from.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── global.json                  # Navbar + footer payload (required)
//! └── pages/
//!     ├── 001-home.json            # Published at /
//!     ├── 010-about.json           # Published at /about
//!     └── 020-screen-industry.json # Published at /screen-industry
//! ```
//!
//! ## Validation
//!
//! The scanner enforces these rules:
//! - `global.json` must exist and deserialize
//! - Every page file must deserialize
//! - Every page stem must carry a publishable slug (`003.json` does not)
//! - No two pages may publish to the same output file (`home` and `index`
//!   both publish to `index.html`)
//! - Entry ids must be unique within each list (link lists, feature lists,
//!   button lists). Entries without an id are not checked.

use crate::config::{self, SiteConfig};
use crate::naming::{PageName, is_publishable_slug, output_file, parse_page_stem};
use crate::types::{
    ButtonItem, FeatureItem, GlobalContent, ItemId, LinkItem, MenuEntry, PageContent, Section,
};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Missing global.json in content root: {0}")]
    MissingGlobal(PathBuf),
    #[error("Page {path} has no publishable slug (got {slug:?})")]
    InvalidSlug { slug: String, path: PathBuf },
    #[error("Pages {first} and {second} both publish to {output}")]
    DuplicateOutput {
        output: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("Duplicate id {id} in {list}")]
    DuplicateId { list: String, id: String },
}

/// Manifest output from the scan stage.
#[derive(Debug)]
pub struct Manifest {
    pub config: SiteConfig,
    pub global: GlobalContent,
    /// Pages sorted by number prefix, then slug.
    pub pages: Vec<ScannedPage>,
}

/// A page payload and where it came from.
#[derive(Debug)]
pub struct ScannedPage {
    pub name: PageName,
    /// Path relative to the content root.
    pub source: PathBuf,
    pub content: PageContent,
}

impl ScannedPage {
    pub fn slug(&self) -> &str {
        &self.name.slug
    }
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;

    let global_path = root.join("global.json");
    if !global_path.is_file() {
        return Err(ScanError::MissingGlobal(root.to_path_buf()));
    }
    let global: GlobalContent = read_json(&global_path)?;
    check_global_ids(&global)?;

    let pages = scan_pages(root)?;

    Ok(Manifest {
        config,
        global,
        pages,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ScanError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| ScanError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read every `pages/*.json` file. A missing `pages/` directory means no pages.
fn scan_pages(root: &Path) -> Result<Vec<ScannedPage>, ScanError> {
    let pages_dir = root.join("pages");
    if !pages_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(&pages_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_json(path) || is_hidden(path) {
            continue;
        }
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let name = parse_page_stem(&stem);
        let source = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        if !is_publishable_slug(&name.slug) {
            return Err(ScanError::InvalidSlug {
                slug: name.slug,
                path: source,
            });
        }
        let content: PageContent = read_json(path)?;
        check_page_ids(&content, &source)?;
        pages.push(ScannedPage {
            name,
            source,
            content,
        });
    }

    pages.sort_by(|a, b| a.name.sort_key().cmp(&b.name.sort_key()));
    check_unique_outputs(&pages)?;
    Ok(pages)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Slugs are compared by where they publish, so `home` and `index` collide.
fn check_unique_outputs(pages: &[ScannedPage]) -> Result<(), ScanError> {
    let mut seen: HashMap<String, &Path> = HashMap::new();
    for page in pages {
        let output = output_file(page.slug());
        if let Some(first) = seen.get(&output) {
            return Err(ScanError::DuplicateOutput {
                output,
                first: first.to_path_buf(),
                second: page.source.clone(),
            });
        }
        seen.insert(output, &page.source);
    }
    Ok(())
}

/// Fail on the first id that appears twice in one list.
fn check_unique_ids<'a>(
    list: &str,
    ids: impl IntoIterator<Item = Option<&'a ItemId>>,
) -> Result<(), ScanError> {
    let mut seen = HashSet::new();
    for id in ids.into_iter().flatten() {
        if !seen.insert(id) {
            return Err(ScanError::DuplicateId {
                list: list.to_string(),
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn link_ids(links: &[LinkItem]) -> impl Iterator<Item = Option<&ItemId>> {
    links.iter().map(|l| l.id.as_ref())
}

fn button_ids(buttons: &[ButtonItem]) -> impl Iterator<Item = Option<&ItemId>> {
    buttons.iter().map(|b| b.id.as_ref())
}

fn feature_ids(features: &[FeatureItem]) -> impl Iterator<Item = Option<&ItemId>> {
    features.iter().map(|f| f.id.as_ref())
}

fn check_global_ids(global: &GlobalContent) -> Result<(), ScanError> {
    let navbar = &global.navbar;
    check_unique_ids("navbar links", link_ids(&navbar.links))?;
    check_unique_ids(
        "navbar menu",
        navbar.menu.iter().map(|entry| match entry {
            MenuEntry::Link(link) => link.id.as_ref(),
            MenuEntry::Dropdown(_) => None,
        }),
    )?;
    for entry in &navbar.menu {
        if let MenuEntry::Dropdown(menu) = entry {
            check_unique_ids(&format!("dropdown {:?}", menu.title), link_ids(&menu.links))?;
        }
    }

    let footer = &global.footer;
    check_unique_ids("footer social links", link_ids(&footer.social_links))?;
    check_unique_ids("footer legal links", link_ids(&footer.legal_links))?;
    for column in &footer.columns {
        check_unique_ids(
            &format!("footer column {:?}", column.title),
            link_ids(&column.links),
        )?;
    }
    Ok(())
}

fn check_page_ids(page: &PageContent, source: &Path) -> Result<(), ScanError> {
    let at = |what: &str, index: usize| format!("{} section {} {what}", source.display(), index + 1);
    for (index, section) in page.sections.iter().enumerate() {
        match section {
            Section::Hero(hero) => {
                check_unique_ids(&at("buttons", index), button_ids(&hero.buttons))?;
            }
            Section::Features(features) => {
                check_unique_ids(&at("features", index), feature_ids(&features.feature))?;
            }
            Section::FeaturesRow(row) => {
                check_unique_ids(&at("features", index), feature_ids(&row.feature))?;
                check_unique_ids(&at("buttons", index), button_ids(&row.buttons))?;
            }
            Section::RichText(_) | Section::Unsupported => {}
        }
    }
    Ok(())
}

//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every page is its positional index and title, with the path it is
//! published under. Filesystem paths are secondary context on indented
//! `Source:` lines, and each section of a page is listed beneath it.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Pages
//! 001 Home → /
//!     Source: pages/001-home.json
//!     001 hero
//!     002 features (3 cards)
//!     003 features-row (2 cards, 1 button)
//!     004 unsupported (skipped)
//!
//! Chrome
//!     Navbar: 3 menu entries, 2 mobile links
//!     Footer: 4 columns, 2 social links, 1 legal link
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Generate
//!
//! ```text
//! 001 Home → index.html
//!     4 sections (1 skipped)
//! 002 About → about/index.html
//!     1 section
//!
//! Media: http://localhost:1337
//! Generated 2 pages in dist
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O beyond checking whether `config.toml` exists.

use crate::generate::GenerateReport;
use crate::naming::page_path;
use crate::scan::Manifest;
use crate::types::Section;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 card`, `3 cards`.
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Page header: positional index, title, and where it ends up.
///
/// ```text
/// 001 Home → /
/// ```
fn page_header(index: usize, title: &str, target: &str) -> String {
    format!("{} {} → {}", format_index(index), title, target)
}

/// One section line, with card and button counts where the section has them.
fn section_line(index: usize, section: &Section) -> String {
    let details: Vec<String> = match section {
        Section::Hero(hero) if !hero.buttons.is_empty() => {
            vec![count(hero.buttons.len(), "button")]
        }
        Section::Features(features) => vec![count(features.feature.len(), "card")],
        Section::FeaturesRow(row) if row.buttons.is_empty() => {
            vec![count(row.feature.len(), "card")]
        }
        Section::FeaturesRow(row) => vec![
            count(row.feature.len(), "card"),
            count(row.buttons.len(), "button"),
        ],
        Section::Unsupported => vec!["skipped".to_string()],
        _ => Vec::new(),
    };
    if details.is_empty() {
        format!("{} {}", format_index(index), section.label())
    } else {
        format!(
            "{} {} ({})",
            format_index(index),
            section.label(),
            details.join(", ")
        )
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the discovered site structure.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Pages".to_string());
    if manifest.pages.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, page) in manifest.pages.iter().enumerate() {
        lines.push(page_header(
            i + 1,
            &page.content.title,
            &page_path(page.slug()),
        ));
        lines.push(format!("{}Source: {}", indent(1), page.source.display()));
        if let Some(desc) = page.content.description.as_deref() {
            let truncated = truncate_desc(desc.trim(), 60);
            if !truncated.is_empty() {
                lines.push(format!("{}{}", indent(1), truncated));
            }
        }
        for (j, section) in page.content.sections.iter().enumerate() {
            lines.push(format!("{}{}", indent(1), section_line(j + 1, section)));
        }
    }

    let navbar = &manifest.global.navbar;
    let footer = &manifest.global.footer;
    lines.push(String::new());
    lines.push("Chrome".to_string());
    let entries = if navbar.menu.len() == 1 { "entry" } else { "entries" };
    lines.push(format!(
        "{}Navbar: {} menu {}, {}",
        indent(1),
        navbar.menu.len(),
        entries,
        count(navbar.links.len(), "mobile link")
    ));
    lines.push(format!(
        "{}Footer: {}, {}, {}",
        indent(1),
        count(footer.columns.len(), "column"),
        count(footer.social_links.len(), "social link"),
        count(footer.legal_links.len(), "legal link")
    ));

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(defaults)", indent(1)));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output: one entry per written page.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, page) in report.pages.iter().enumerate() {
        lines.push(page_header(i + 1, &page.title, &page.output));
        let total = page.sections.len();
        let skipped = page.skipped_sections();
        if skipped > 0 {
            lines.push(format!(
                "{}{} ({} skipped)",
                indent(1),
                count(total, "section"),
                skipped
            ));
        } else {
            lines.push(format!("{}{}", indent(1), count(total, "section")));
        }
    }

    lines.push(String::new());
    lines.push(format!("Media: {}", report.base_url));
    lines.push(format!(
        "Generated {} in {}",
        count(report.pages.len(), "page"),
        report.output_dir.display()
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

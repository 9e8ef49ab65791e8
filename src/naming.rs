//! Page filename parsing for the `NNN-slug` convention.
//!
//! Page payloads live in `pages/` as `NNN-slug.json`. The numeric prefix only
//! orders pages; the rest of the stem is the slug the page is published under.
//!
//! - `001-home` → order 1, slug `home`, published at `/`
//! - `010-about` → order 10, slug `about`, published at `/about`
//! - `drafts` → no order, slug `drafts`, sorted after numbered pages

/// Slugs published at the site root.
pub const HOME_SLUGS: &[&str] = &["home", "index"];

/// Result of parsing a page file stem like `010-about`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageName {
    /// Number prefix if present (e.g., `10` from `010-about`)
    pub order: Option<u32>,
    /// Stem without the `NNN-` prefix. Empty if number-only.
    pub slug: String,
}

impl PageName {
    pub fn is_home(&self) -> bool {
        is_home_slug(&self.slug)
    }

    /// Sort key: numbered pages first by number, then unnumbered by slug.
    pub fn sort_key(&self) -> (u32, &str) {
        (self.order.unwrap_or(u32::MAX), &self.slug)
    }
}

/// Parse a page file stem following the `NNN-slug` convention.
///
/// - `"010-about"` → order=Some(10), slug="about"
/// - `"020-screen-industry"` → order=Some(20), slug="screen-industry"
/// - `"003"` → order=Some(3), slug=""
/// - `"news"` → order=None, slug="news"
pub fn parse_page_stem(stem: &str) -> PageName {
    if let Some((prefix, rest)) = stem.split_once('-')
        && let Ok(order) = prefix.parse::<u32>()
    {
        return PageName {
            order: Some(order),
            slug: rest.to_string(),
        };
    }
    if let Ok(order) = stem.parse::<u32>() {
        return PageName {
            order: Some(order),
            slug: String::new(),
        };
    }
    PageName {
        order: None,
        slug: stem.to_string(),
    }
}

pub fn is_home_slug(slug: &str) -> bool {
    HOME_SLUGS.contains(&slug)
}

/// A slug is publishable when it names a directory inside the output root.
///
/// Number-only stems (`003`) and dot stems (`010-..`) are not.
pub fn is_publishable_slug(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\'])
}

/// Navigation path a slug is published under. Used for active-link matching.
pub fn page_path(slug: &str) -> String {
    if is_home_slug(slug) {
        "/".to_string()
    } else {
        format!("/{slug}")
    }
}

/// Output file relative to the output directory.
pub fn output_file(slug: &str) -> String {
    if is_home_slug(slug) {
        "index.html".to_string()
    } else {
        format!("{slug}/index.html")
    }
}

//! Media reference resolution.
//!
//! Content payloads reference images by a path relative to the media host
//! (`/uploads/hero.png`). Rendering needs an absolute URL, alt text and the
//! intrinsic dimensions so the browser can reserve layout space.
//!
//! The media relation arrives nested (`media.data.attributes`) and any level
//! of that nesting may be missing or `null`. [`Media::lookup`] collapses all of
//! those cases into a single `Absent` arm; views render no image for it.

use crate::types::{MediaAttributes, MediaField};

/// Media host used when neither the environment nor the config names one.
pub const DEFAULT_API_URL: &str = "http://localhost:1337";

/// Alt text for feature card images without alternative text.
pub const FEATURE_IMAGE_ALT: &str = "Feature image";

/// Alt text for the hero picture without alternative text.
pub const HERO_IMAGE_ALT: &str = "none provided";

/// Environment variable naming the media host.
pub const API_URL_ENV: &str = "CMS_API_URL";

/// Pick the media host: environment first, then config, then the local default.
/// Empty strings count as unset. A trailing slash is dropped.
pub fn resolve_base_url(env: Option<&str>, configured: Option<&str>) -> String {
    env.filter(|v| !v.is_empty())
        .or(configured.filter(|v| !v.is_empty()))
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Join the media host and a relative path. Already-absolute URLs pass through.
pub fn absolute_url(base_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//") {
        url.to_string()
    } else {
        format!("{base_url}{url}")
    }
}

/// Result of looking up a possibly missing media relation.
#[derive(Debug, Clone, Copy)]
pub enum Media<'a> {
    Present(&'a MediaAttributes),
    Absent,
}

impl<'a> Media<'a> {
    pub fn lookup(field: Option<&'a MediaField>) -> Self {
        match field
            .and_then(|f| f.data.as_ref())
            .and_then(|d| d.attributes.as_ref())
        {
            Some(attrs) if !attrs.url.is_empty() => Media::Present(attrs),
            _ => Media::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Media::Present(_))
    }
}

/// An image ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// Resolve a media field into a renderable image, or `None` when absent.
pub fn resolve_image(
    field: Option<&MediaField>,
    base_url: &str,
    fallback_alt: &str,
) -> Option<ResolvedImage> {
    match Media::lookup(field) {
        Media::Present(attrs) => Some(ResolvedImage {
            src: absolute_url(base_url, &attrs.url),
            alt: attrs
                .alternative_text
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(fallback_alt)
                .to_string(),
            width: attrs.width,
            height: attrs.height,
        }),
        Media::Absent => None,
    }
}

/// Resolve a bare URL (logos) the same way media paths are resolved.
pub fn resolve_url(url: Option<&str>, base_url: &str) -> Option<String> {
    url.filter(|u| !u.is_empty())
        .map(|u| absolute_url(base_url, u))
}

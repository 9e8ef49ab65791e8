//! # Headless Pages
//!
//! A static renderer for headless CMS content. Page payloads and the site-wide
//! navbar/footer payload (already exported from the content backend as JSON)
//! go in; self-contained HTML pages come out.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  Manifest   (JSON payloads → validated, ordered data)
//! 2. Generate  Manifest  →  dist/      (final HTML site)
//! ```
//!
//! Rendering itself is a set of pure view functions. Data flows one way: a
//! section payload enters its view and is destructured into cards, links and
//! media items. The only interactive state is the mobile menu's open/closed
//! flag, modelled in [`menu`] and replayed in the browser by a few lines of
//! embedded JavaScript.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: reads `global.json` and `pages/*.json`, validates slugs and ids |
//! | [`generate`] | Stage 2: renders every page into the output directory using Maud |
//! | [`render`] | Section views (hero, features, features row, rich text) and site chrome |
//! | [`blocks`] | Structured rich-text blocks and the `[word]` highlight convention |
//! | [`media`] | Media host resolution and optional-media lookup |
//! | [`style`] | Button kind token → presentation class |
//! | [`menu`] | Mobile menu state machine |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Content payload types deserialized from the CMS export |
//! | [`naming`] | `NNN-slug` page filename convention and output paths |
//! | [`output`] | CLI output formatting for pipeline results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed markup is a build error and all interpolation is
//! auto-escaped, which matters here since every string comes from CMS editors.
//!
//! ## Unknown Content Degrades To Nothing
//!
//! Section components, rich-text block types and social tags the renderer does
//! not know deserialize into explicit fallback variants and render nothing.
//! A page with one unrecognized section still publishes the rest.
//!
//! ## Media Host From The Environment
//!
//! Relative media paths (`/uploads/...`) are resolved against `CMS_API_URL`,
//! then `[media] base_url` in `config.toml`, then `http://localhost:1337`.

pub mod blocks;
pub mod config;
pub mod generate;
pub mod media;
pub mod menu;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod style;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

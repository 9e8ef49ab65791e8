//! HTML views for page sections and site chrome.
//!
//! Every view is a pure function from a content payload plus a
//! [`RenderContext`] to [`maud::Markup`]. Data only flows downward: section
//! views destructure their payload into cards, links and media items. The
//! single piece of interactive state (the mobile menu) is passed into the
//! navbar explicitly as a [`crate::menu::MenuState`].
//!
//! | View | Payload | Cards |
//! |------|---------|-------|
//! | [`render_hero`] | `sections.hero` | — |
//! | [`render_features`] | `sections.features` | flip cards |
//! | [`render_features_row`] | `sections.features-row` | flat cards + buttons |
//! | [`render_rich_text`] | `sections.rich-text` | — |
//! | [`render_navbar`] | global navbar | — |
//! | [`render_footer`] | global footer | — |
//!
//! Which card variant a grid uses is fixed by the component the backend
//! chose; views never switch variants on their own.

pub mod components;
mod features;
mod footer;
mod hero;
pub mod icons;
mod navbar;
mod rich_text;

pub use features::{render_features, render_features_row};
pub use footer::render_footer;
pub use hero::render_hero;
pub use navbar::render_navbar;
pub use rich_text::render_rich_text;

use crate::types::Section;
use maud::{Markup, html};

/// Text on the back face of flip cards.
#[derive(Debug, Clone, PartialEq)]
pub struct CardBack {
    pub title: String,
    pub text: String,
}

impl Default for CardBack {
    fn default() -> Self {
        Self {
            title: "DEMO ONLY".to_string(),
            text: "CONTACT US".to_string(),
        }
    }
}

/// Everything a view needs besides its own payload.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Media host prefixed to relative media paths.
    pub base_url: String,
    /// Navigation path of the page being rendered, for active-link styling.
    pub current_path: String,
    pub card_back: CardBack,
}

impl RenderContext {
    pub fn new(base_url: impl Into<String>, current_path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            current_path: current_path.into(),
            card_back: CardBack::default(),
        }
    }

    pub fn with_card_back(mut self, card_back: CardBack) -> Self {
        self.card_back = card_back;
        self
    }
}

/// Render one page section. Unsupported components render nothing.
pub fn render_section(section: &Section, ctx: &RenderContext) -> Markup {
    match section {
        Section::Hero(hero) => render_hero(hero, ctx),
        Section::Features(features) => render_features(features, ctx),
        Section::FeaturesRow(row) => render_features_row(row, ctx),
        Section::RichText(rich) => render_rich_text(rich),
        Section::Unsupported => html! {},
    }
}

//! Content payload types.
//!
//! These mirror the JSON the content backend hands us for one page and for the
//! site-wide chrome (navbar + footer). Payloads are trusted to be well-formed:
//! a page that fails to deserialize is a scan error, but every field the views
//! can live without is defaulted so that partially filled entries still render.
//!
//! Media fields are the one place where absence is expected and common, so
//! they are `Option<MediaField>` all the way down. See [`crate::media::Media`]
//! for the lookup that turns them into something renderable.

use crate::blocks::Block;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entry id. The backend sends numbers for most components but strings for some.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// Media
// ============================================================================

/// Media relation wrapper: `{ "data": { "id": .., "attributes": { .. } } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaField {
    #[serde(default)]
    pub data: Option<MediaData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaData {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub attributes: Option<MediaAttributes>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttributes {
    /// Path relative to the media host (`/uploads/a.png`), or an absolute URL.
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    /// Intrinsic width in pixels, reserved in layout.
    pub width: u32,
    pub height: u32,
}

// ============================================================================
// Links and buttons
// ============================================================================

/// A navigation, footer or social link.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub url: String,
    pub text: String,
    #[serde(default)]
    pub new_tab: bool,
    /// Raw social tag (`FACEBOOK`, `YOUTUBE`, ...). Only meaningful in the
    /// footer's social row; unknown tags are kept and simply render no icon.
    #[serde(default)]
    pub social: Option<String>,
}

/// A call-to-action rendered as a styled button.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub url: String,
    pub text: String,
    /// Button kind token, resolved by [`crate::style::ButtonKind::from_token`].
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub new_tab: bool,
}

// ============================================================================
// Sections
// ============================================================================

/// One card in a features grid or row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureItem {
    pub id: Option<ItemId>,
    pub title: String,
    pub description: String,
    pub show_link: bool,
    pub new_tab: bool,
    pub url: String,
    pub text: String,
    pub media: Option<MediaField>,
}

impl FeatureItem {
    /// The call-to-action renders only when the flag, the URL and the label are
    /// all set. Any one missing suppresses it.
    pub fn shows_link(&self) -> bool {
        self.show_link && !self.url.is_empty() && !self.text.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub id: Option<ItemId>,
    pub title: String,
    pub description: Option<String>,
    pub hero_rich_text: Vec<Block>,
    pub picture: Option<MediaField>,
    pub buttons: Vec<ButtonItem>,
}

/// Flip-card grid section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeaturesContent {
    pub heading: String,
    pub description: String,
    pub feature: Vec<FeatureItem>,
}

/// Flat-card row section with trailing call-to-action buttons.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeaturesRowContent {
    pub title: String,
    pub description: String,
    pub feature: Vec<FeatureItem>,
    pub buttons: Vec<ButtonItem>,
}

/// Free-form markdown section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RichTextContent {
    pub body: String,
}

/// A page section, tagged by the backend's component name.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__component")]
pub enum Section {
    #[serde(rename = "sections.hero")]
    Hero(HeroContent),
    #[serde(rename = "sections.features")]
    Features(FeaturesContent),
    #[serde(rename = "sections.features-row")]
    FeaturesRow(FeaturesRowContent),
    #[serde(rename = "sections.rich-text")]
    RichText(RichTextContent),
    /// Any component this renderer has no view for.
    #[serde(other)]
    Unsupported,
}

impl Section {
    /// Short component label used in CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero(_) => "hero",
            Section::Features(_) => "features",
            Section::FeaturesRow(_) => "features-row",
            Section::RichText(_) => "rich-text",
            Section::Unsupported => "unsupported",
        }
    }
}

/// One page payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PageContent {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

// ============================================================================
// Site chrome
// ============================================================================

/// A titled dropdown in the desktop navbar.
#[derive(Debug, Clone, Deserialize)]
pub struct DropdownMenu {
    pub title: String,
    pub links: Vec<LinkItem>,
}

/// Desktop navbar entry: a dropdown or a plain link.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MenuEntry {
    Dropdown(DropdownMenu),
    Link(LinkItem),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavbarContent {
    pub logo_url: Option<String>,
    pub logo_text: Option<String>,
    /// Links listed in the mobile menu panel.
    pub links: Vec<LinkItem>,
    /// Desktop menu, left to right.
    pub menu: Vec<MenuEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<LinkItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterContent {
    pub logo_url: Option<String>,
    pub logo_text: Option<String>,
    /// Heading of the first footer column.
    pub acknowledgement: String,
    pub social_links: Vec<LinkItem>,
    pub legal_links: Vec<LinkItem>,
    pub columns: Vec<FooterColumn>,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            logo_url: None,
            logo_text: None,
            acknowledgement: "ACKNOWLEDGEMENT OF COUNTRY".to_string(),
            social_links: Vec::new(),
            legal_links: Vec::new(),
            columns: Vec::new(),
        }
    }
}

/// Site-wide payload shared by every page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalContent {
    pub site_name: Option<String>,
    pub navbar: NavbarContent,
    pub footer: FooterContent,
}

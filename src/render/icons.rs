//! Inline SVG icons.
//!
//! Icons are drawn inline rather than loaded from a sprite so a rendered page
//! stays a single self-contained file.

use maud::{Markup, PreEscaped, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Website,
    Twitter,
    Youtube,
    Linkedin,
    Facebook,
    Account,
    Phone,
    Search,
    Accessibility,
    Menu,
    Close,
    ChevronDown,
}

impl Icon {
    /// Stable name, rendered as `data-icon`.
    pub fn token(self) -> &'static str {
        match self {
            Icon::Website => "website",
            Icon::Twitter => "twitter",
            Icon::Youtube => "youtube",
            Icon::Linkedin => "linkedin",
            Icon::Facebook => "facebook",
            Icon::Account => "account",
            Icon::Phone => "phone",
            Icon::Search => "search",
            Icon::Accessibility => "accessibility",
            Icon::Menu => "menu",
            Icon::Close => "close",
            Icon::ChevronDown => "chevron-down",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Icon::Website => {
                r#"<circle cx="12" cy="12" r="10"/><line x1="2" y1="12" x2="22" y2="12"/><path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/>"#
            }
            Icon::Twitter => {
                r#"<path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"/>"#
            }
            Icon::Youtube => {
                r#"<path d="M22.54 6.42a2.78 2.78 0 0 0-1.94-2C18.88 4 12 4 12 4s-6.88 0-8.6.46a2.78 2.78 0 0 0-1.94 2A29 29 0 0 0 1 11.75a29 29 0 0 0 .46 5.33A2.78 2.78 0 0 0 3.4 19c1.72.46 8.6.46 8.6.46s6.88 0 8.6-.46a2.78 2.78 0 0 0 1.94-2 29 29 0 0 0 .46-5.25 29 29 0 0 0-.46-5.33z"/><polygon points="9.75 15.02 15.5 11.75 9.75 8.48 9.75 15.02"/>"#
            }
            Icon::Linkedin => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/>"#
            }
            Icon::Facebook => {
                r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#
            }
            Icon::Account => {
                r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
            }
            Icon::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            Icon::Search => {
                r#"<circle cx="11" cy="11" r="8"/><line x1="21" y1="21" x2="16.65" y2="16.65"/>"#
            }
            Icon::Accessibility => {
                r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="7" r="1"/><path d="M7 9.5l5 1 5-1M12 10.5V14l-2.5 4M12 14l2.5 4"/>"#
            }
            Icon::Menu => {
                r#"<line x1="3" y1="6" x2="21" y2="6"/><line x1="3" y1="12" x2="21" y2="12"/><line x1="3" y1="18" x2="21" y2="18"/>"#
            }
            Icon::Close => {
                r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#
            }
            Icon::ChevronDown => r#"<polyline points="6 9 12 15 18 9"/>"#,
        }
    }
}

pub fn render_icon(icon: Icon, class: &str) -> Markup {
    html! {
        svg class=(class) data-icon=(icon.token()) viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round"
            stroke-linejoin="round" aria-hidden="true" {
            (PreEscaped(icon.svg_body()))
        }
    }
}

/// Social network tag carried by footer links. Tags are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Website,
    Twitter,
    Youtube,
    Linkedin,
    Facebook,
}

impl SocialKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "WEBSITE" => Some(SocialKind::Website),
            "TWITTER" => Some(SocialKind::Twitter),
            "YOUTUBE" => Some(SocialKind::Youtube),
            "LINKEDIN" => Some(SocialKind::Linkedin),
            "FACEBOOK" => Some(SocialKind::Facebook),
            _ => None,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            SocialKind::Website => Icon::Website,
            SocialKind::Twitter => Icon::Twitter,
            SocialKind::Youtube => Icon::Youtube,
            SocialKind::Linkedin => Icon::Linkedin,
            SocialKind::Facebook => Icon::Facebook,
        }
    }
}

/// Icon for a social tag. Missing or unrecognized tags give `None`.
pub fn social_icon(tag: Option<&str>) -> Option<Markup> {
    tag.and_then(SocialKind::from_tag)
        .map(|kind| render_icon(kind.icon(), "icon social-icon"))
}

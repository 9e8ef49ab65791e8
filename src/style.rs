//! Button style resolution.
//!
//! The backend tags every call-to-action with a free-form `type` string. Only
//! `primary` and `secondary` carry meaning; everything else, including an empty
//! or missing token, gets the neutral default style.

/// Visual kind of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Solid fill, light text.
    Primary,
    /// Outline, colored text.
    Secondary,
    /// Neutral fallback for any other token.
    Other,
}

impl ButtonKind {
    /// Total over all strings. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Self {
        match token {
            "primary" => ButtonKind::Primary,
            "secondary" => ButtonKind::Secondary,
            _ => ButtonKind::Other,
        }
    }
}

/// Class list for a button of the given kind.
pub fn button_class(kind: ButtonKind) -> &'static str {
    match kind {
        ButtonKind::Primary => "btn btn-primary",
        ButtonKind::Secondary => "btn btn-secondary",
        ButtonKind::Other => "btn btn-default",
    }
}

/// Resolve a raw `type` token straight to its class list.
pub fn render_button_style(token: &str) -> &'static str {
    button_class(ButtonKind::from_token(token))
}

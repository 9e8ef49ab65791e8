//! Mobile menu state.
//!
//! The navbar owns the only interactive state on a page: whether the mobile
//! menu panel is open. It is a two-state machine driven by named intents.
//! The server renders the initial state into `data-menu-state`; the embedded
//! `static/menu.js` applies the same transitions in the browser.
//!
//! ```text
//!            Open
//!   Closed ────────▶ Open
//!     ▲               │
//!     └───────────────┘
//!      Close | FollowLink
//! ```
//!
//! Every other (state, intent) pair leaves the state unchanged.

/// Whether the mobile menu panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User actions that can move the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIntent {
    /// Menu icon activated.
    Open,
    /// Close icon activated.
    Close,
    /// A link inside the open panel was followed.
    FollowLink,
}

impl MenuState {
    pub fn apply(self, intent: MenuIntent) -> MenuState {
        match (self, intent) {
            (MenuState::Closed, MenuIntent::Open) => MenuState::Open,
            (MenuState::Open, MenuIntent::Close | MenuIntent::FollowLink) => MenuState::Closed,
            (state, _) => state,
        }
    }

    /// Fold a sequence of intents starting from the initial (closed) state.
    pub fn replay(intents: impl IntoIterator<Item = MenuIntent>) -> MenuState {
        intents
            .into_iter()
            .fold(MenuState::default(), MenuState::apply)
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Value of the `data-menu-state` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuState::Closed => "closed",
            MenuState::Open => "open",
        }
    }
}

impl MenuIntent {
    /// Value of the `data-menu-intent` attribute on the trigger element.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuIntent::Open => "open",
            MenuIntent::Close => "close",
            MenuIntent::FollowLink => "follow",
        }
    }
}

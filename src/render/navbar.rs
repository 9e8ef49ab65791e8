use super::RenderContext;
use super::components::{dropdown_menu, logo, mobile_nav_link, nav_link};
use super::icons::{Icon, render_icon};
use crate::media::resolve_url;
use crate::menu::{MenuIntent, MenuState};
use crate::types::{MenuEntry, NavbarContent};
use maud::{Markup, html};

/// Utility row on the left of the navbar: (icon, accessible label).
const UTILITY_LINKS: [(Icon, &str); 4] = [
    (Icon::Account, "Account"),
    (Icon::Phone, "Contact"),
    (Icon::Search, "Search"),
    (Icon::Accessibility, "Accessibility"),
];

/// Site navbar with desktop dropdowns and the mobile menu panel.
///
/// `menu` is the initial mobile menu state; pages are generated closed and
/// `static/menu.js` drives it from there via the `data-menu-intent` triggers.
pub fn render_navbar(nav: &NavbarContent, ctx: &RenderContext, menu: MenuState) -> Markup {
    let logo_src = resolve_url(nav.logo_url.as_deref(), &ctx.base_url);
    let expanded = if menu.is_open() { "true" } else { "false" };

    html! {
        header.navbar data-menu-state=(menu.as_str()) {
            div.navbar-inner {
                div.utility-links {
                    @for (icon, label) in UTILITY_LINKS {
                        a.utility-link href="#" aria-label=(label) {
                            (render_icon(icon, "icon"))
                        }
                    }
                }
                nav.desktop-menu aria-label="Main" {
                    ul.menu-list {
                        @for entry in &nav.menu {
                            @match entry {
                                MenuEntry::Dropdown(dropdown) => { (dropdown_menu(dropdown)) },
                                MenuEntry::Link(link) => { (nav_link(link, ctx)) },
                            }
                        }
                    }
                }
                div.logo-frame {
                    (logo(logo_src.as_deref(), nav.logo_text.as_deref()))
                }
                button.menu-open type="button" aria-controls="mobile-menu" aria-expanded=(expanded)
                    data-menu-intent=(MenuIntent::Open.as_str()) {
                    span.sr-only { "Open menu" }
                    (render_icon(Icon::Menu, "icon icon-lg"))
                }
            }
            div.mobile-menu id="mobile-menu" role="dialog" aria-modal="true" aria-label="Menu" {
                div.menu-overlay {}
                div.menu-panel {
                    div.menu-panel-header {
                        a.menu-logo href="/" aria-label="Home" {
                            @if let Some(src) = &logo_src {
                                img src=(src) alt="";
                            }
                        }
                        button.menu-close type="button" data-menu-intent=(MenuIntent::Close.as_str()) {
                            span.sr-only { "Close menu" }
                            (render_icon(Icon::Close, "icon"))
                        }
                    }
                    div.menu-links {
                        @for link in &nav.links {
                            (mobile_nav_link(link, ctx))
                        }
                    }
                }
            }
        }
    }
}

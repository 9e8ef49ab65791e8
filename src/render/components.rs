//! Leaf components: links, buttons, media and cards.

use super::RenderContext;
use super::icons::{Icon, render_icon};
use crate::media::{FEATURE_IMAGE_ALT, ResolvedImage, resolve_image};
use crate::menu::MenuIntent;
use crate::style::render_button_style;
use crate::types::{ButtonItem, DropdownMenu, FeatureItem, LinkItem};
use maud::{Markup, html};

/// Browsing context a link opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    NewContext,
    SameContext,
}

impl LinkTarget {
    pub fn from_new_tab(new_tab: bool) -> Self {
        if new_tab {
            LinkTarget::NewContext
        } else {
            LinkTarget::SameContext
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            LinkTarget::NewContext => "_blank",
            LinkTarget::SameContext => "_self",
        }
    }

    /// Links opening a new context must not hand it a window reference.
    pub fn rel(self) -> Option<&'static str> {
        match self {
            LinkTarget::NewContext => Some("noopener noreferrer"),
            LinkTarget::SameContext => None,
        }
    }
}

/// A link is active when its URL is exactly the current navigation path.
pub fn is_active(url: &str, current_path: &str) -> bool {
    url == current_path
}

/// Desktop navbar link.
pub fn nav_link(link: &LinkItem, ctx: &RenderContext) -> Markup {
    let target = LinkTarget::from_new_tab(link.new_tab);
    html! {
        li.nav-item {
            a.nav-link.active[is_active(&link.url, &ctx.current_path)]
                href=(link.url) target=(target.as_attr()) rel=[target.rel()] {
                (link.text)
            }
        }
    }
}

/// Desktop dropdown. Revealed on hover or keyboard focus by CSS alone.
pub fn dropdown_menu(menu: &DropdownMenu) -> Markup {
    html! {
        li.nav-item.dropdown {
            button.dropdown-toggle type="button" aria-haspopup="true" {
                (menu.title)
                span.dropdown-caret { (render_icon(Icon::ChevronDown, "icon icon-sm")) }
            }
            ul.dropdown-menu {
                @for link in &menu.links {
                    @let target = LinkTarget::from_new_tab(link.new_tab);
                    li {
                        a.dropdown-link href=(link.url) target=(target.as_attr()) rel=[target.rel()] {
                            (link.text)
                        }
                    }
                }
            }
        }
    }
}

/// Link inside the mobile menu panel. Following it dismisses the menu.
pub fn mobile_nav_link(link: &LinkItem, ctx: &RenderContext) -> Markup {
    let target = LinkTarget::from_new_tab(link.new_tab);
    html! {
        a.mobile-nav-link.active[is_active(&link.url, &ctx.current_path)]
            href=(link.url) target=(target.as_attr()) rel=[target.rel()]
            data-menu-intent=(MenuIntent::FollowLink.as_str()) {
            (link.text)
        }
    }
}

pub fn footer_link(link: &LinkItem, ctx: &RenderContext) -> Markup {
    let target = LinkTarget::from_new_tab(link.new_tab);
    html! {
        li.footer-item {
            a.footer-link.active[is_active(&link.url, &ctx.current_path)]
                href=(link.url) target=(target.as_attr()) rel=[target.rel()] {
                (link.text)
            }
        }
    }
}

/// Call-to-action styled by its kind token. `suffix` is appended to the label.
pub fn button_link(button: &ButtonItem, suffix: Option<&str>) -> Markup {
    let target = LinkTarget::from_new_tab(button.new_tab);
    html! {
        a class=(render_button_style(&button.kind)) href=(button.url)
            target=(target.as_attr()) rel=[target.rel()] {
            (button.text)
            @if let Some(suffix) = suffix {
                (suffix)
            }
        }
    }
}

pub fn logo(src: Option<&str>, text: Option<&str>) -> Markup {
    html! {
        a.logo href="/" aria-label="Back to homepage" {
            @if let Some(src) = src {
                img.logo-image src=(src) alt="logo" width="158" height="33";
            }
            div.logo-text {
                @if let Some(text) = text {
                    (text)
                }
            }
        }
    }
}

pub fn media_item(image: &ResolvedImage, class: &str) -> Markup {
    html! {
        img class=(class) src=(image.src) alt=(image.alt)
            width=(image.width) height=(image.height) loading="lazy";
    }
}

fn card_action(feature: &FeatureItem) -> Markup {
    let target = LinkTarget::from_new_tab(feature.new_tab);
    html! {
        a.card-link href=(feature.url) target=(target.as_attr()) rel=[target.rel()] {
            (feature.text)
        }
    }
}

/// Flat card: image, title, description, optional call-to-action.
pub fn flat_card(feature: &FeatureItem, ctx: &RenderContext) -> Markup {
    let image = resolve_image(feature.media.as_ref(), &ctx.base_url, FEATURE_IMAGE_ALT);
    html! {
        article.card.card-flat {
            @if let Some(image) = &image {
                div.card-media { (media_item(image, "card-image")) }
            }
            h3.card-title { (feature.title) }
            p.card-description { (feature.description) }
            @if feature.shows_link() {
                div.card-action { (card_action(feature)) }
            }
        }
    }
}

/// Flip card: content on the front, a fixed placeholder on the back.
/// Focusable so keyboard users can flip it too.
pub fn flip_card(feature: &FeatureItem, ctx: &RenderContext) -> Markup {
    let image = resolve_image(feature.media.as_ref(), &ctx.base_url, FEATURE_IMAGE_ALT);
    html! {
        article.card.flip-card tabindex="0" {
            div.flip-card-inner {
                div.flip-card-front {
                    h3.card-title { (feature.title) }
                    @if let Some(image) = &image {
                        div.card-media { (media_item(image, "card-image")) }
                    }
                    div.card-body {
                        p.card-description { (feature.description) }
                    }
                    @if feature.shows_link() {
                        div.card-action { (card_action(feature)) }
                    }
                }
                div.flip-card-back aria-hidden="true" {
                    h3.card-back-title { (ctx.card_back.title) }
                    p.card-back-text { (ctx.card_back.text) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{button, feature, link, media_field};

    fn ctx(path: &str) -> RenderContext {
        RenderContext::new("http://localhost:1337", path)
    }

    #[test]
    fn link_target_attributes() {
        assert_eq!(LinkTarget::from_new_tab(true).as_attr(), "_blank");
        assert_eq!(LinkTarget::from_new_tab(false).as_attr(), "_self");
        assert_eq!(LinkTarget::NewContext.rel(), Some("noopener noreferrer"));
        assert_eq!(LinkTarget::SameContext.rel(), None);
    }

    #[test]
    fn active_is_exact_equality() {
        assert!(is_active("/about", "/about"));
        assert!(!is_active("/about", "/about/"));
        assert!(!is_active("/about", "/about/team"));
        assert!(!is_active("/", "/about"));
    }

    #[test]
    fn nav_link_marks_current_page() {
        let html = nav_link(&link(1, "/news", "NEWS"), &ctx("/news")).into_string();
        assert!(html.contains(r#"class="nav-link active""#));
        let html = nav_link(&link(1, "/news", "NEWS"), &ctx("/")).into_string();
        assert!(html.contains(r#"class="nav-link""#));
        assert!(html.contains(r#"target="_self""#));
        assert!(!html.contains("rel="));
    }

    #[test]
    fn new_tab_link_opens_new_context() {
        let mut l = link(2, "https://example.com", "Out");
        l.new_tab = true;
        let html = footer_link(&l, &ctx("/")).into_string();
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn mobile_link_dismisses_menu() {
        let html = mobile_nav_link(&link(1, "/a", "A"), &ctx("/")).into_string();
        assert!(html.contains(r#"data-menu-intent="follow""#));
    }

    #[test]
    fn dropdown_lists_links_in_order() {
        let menu = DropdownMenu {
            title: "ABOUT US".to_string(),
            links: vec![link(1, "/team", "Team"), link(2, "/jobs", "Jobs")],
        };
        let html = dropdown_menu(&menu).into_string();
        assert!(html.contains("ABOUT US"));
        let team = html.find("Team").unwrap();
        let jobs = html.find("Jobs").unwrap();
        assert!(team < jobs);
    }

    #[test]
    fn button_uses_style_resolver() {
        let html = button_link(&button("/go", "Go", "secondary"), None).into_string();
        assert!(html.contains(r#"class="btn btn-secondary""#));
        let html = button_link(&button("/go", "Go", "ghost"), Some(" >")).into_string();
        assert!(html.contains(r#"class="btn btn-default""#));
        assert!(html.contains("Go &gt;"));
    }

    #[test]
    fn logo_without_image() {
        let html = logo(None, Some("Site")).into_string();
        assert!(!html.contains("<img"));
        assert!(html.contains("Site"));
        assert!(html.contains(r#"aria-label="Back to homepage""#));
    }

    #[test]
    fn flat_card_with_image_and_link() {
        let mut f = feature("Title", "Body");
        f.media = Some(media_field("/uploads/a.png", None, 320, 200));
        f.show_link = true;
        f.url = "/more".to_string();
        f.text = "More".to_string();
        let html = flat_card(&f, &ctx("/")).into_string();
        assert!(html.contains(r#"src="http://localhost:1337/uploads/a.png""#));
        assert!(html.contains(r#"alt="Feature image""#));
        assert!(html.contains(r#"width="320""#));
        assert!(html.contains(r#"height="200""#));
        assert!(html.contains(r#"href="/more""#));
        assert!(html.contains("Title"));
        assert!(html.contains("Body"));
    }

    #[test]
    fn card_without_media_has_no_image() {
        let f = feature("No image", "Still renders");
        for html in [
            flat_card(&f, &ctx("/")).into_string(),
            flip_card(&f, &ctx("/")).into_string(),
        ] {
            assert!(!html.contains("<img"));
            assert!(html.contains("No image"));
            assert!(html.contains("Still renders"));
        }
    }

    #[test]
    fn card_link_needs_flag_url_and_text() {
        let cases = [
            (false, "/x", "Go"),
            (true, "", "Go"),
            (true, "/x", ""),
            (false, "", ""),
        ];
        for (show, url, text) in cases {
            let mut f = feature("T", "D");
            f.show_link = show;
            f.url = url.to_string();
            f.text = text.to_string();
            for html in [
                flat_card(&f, &ctx("/")).into_string(),
                flip_card(&f, &ctx("/")).into_string(),
            ] {
                assert!(!html.contains("card-link"), "case {show} {url:?} {text:?}");
            }
        }
    }

    #[test]
    fn flip_card_back_shows_placeholder() {
        let html = flip_card(&feature("T", "D"), &ctx("/")).into_string();
        assert!(html.contains("flip-card-back"));
        assert!(html.contains("DEMO ONLY"));
        assert!(html.contains(r#"tabindex="0""#));
    }
}

use super::RenderContext;
use super::components::{button_link, media_item};
use crate::blocks::{TextTag, render_blocks, render_highlighted};
use crate::media::{HERO_IMAGE_ALT, ResolvedImage, resolve_image};
use crate::types::HeroContent;
use maud::{Markup, html};

/// The hero picture always renders as a 600×600 box, cropped by CSS.
const HERO_IMAGE_SIZE: u32 = 600;

/// Hero banner: highlighted title, rich-text body, optional description,
/// call-to-action buttons and the picture when one is attached.
pub fn render_hero(hero: &HeroContent, ctx: &RenderContext) -> Markup {
    let picture = resolve_image(hero.picture.as_ref(), &ctx.base_url, HERO_IMAGE_ALT).map(|img| {
        ResolvedImage {
            width: HERO_IMAGE_SIZE,
            height: HERO_IMAGE_SIZE,
            ..img
        }
    });
    let description = hero.description.as_deref().filter(|d| !d.is_empty());

    html! {
        section.hero {
            div.hero-inner {
                div.hero-copy {
                    (render_highlighted(&hero.title, TextTag::H1, "hero-title"))
                    div.hero-body {
                        (render_blocks(&hero.hero_rich_text, &ctx.base_url))
                    }
                    @if let Some(description) = description {
                        (render_highlighted(description, TextTag::P, "hero-description"))
                    }
                    div.hero-actions {
                        @for button in &hero.buttons {
                            (button_link(button, None))
                        }
                    }
                }
                @if let Some(picture) = &picture {
                    div.hero-media {
                        (media_item(picture, "hero-image"))
                    }
                }
            }
        }
    }
}

use super::RenderContext;
use super::components::{button_link, flat_card, flip_card};
use crate::types::{FeaturesContent, FeaturesRowContent};
use maud::{Markup, html};

/// Label suffix on the row's trailing call-to-action buttons.
const ROW_BUTTON_SUFFIX: &str = " >";

/// Grid of flip cards under a heading.
pub fn render_features(content: &FeaturesContent, ctx: &RenderContext) -> Markup {
    html! {
        section.features {
            div.section-header {
                h2.section-title { (content.heading) }
                p.section-description { (content.description) }
            }
            div.features-grid {
                @for feature in &content.feature {
                    (flip_card(feature, ctx))
                }
            }
        }
    }
}

/// Row of flat cards, followed by right-aligned call-to-action buttons.
pub fn render_features_row(content: &FeaturesRowContent, ctx: &RenderContext) -> Markup {
    html! {
        section.features {
            div.section-header {
                h2.section-title { (content.title) }
                p.section-description { (content.description) }
            }
            div.features-row {
                @for feature in &content.feature {
                    (flat_card(feature, ctx))
                }
            }
            @if !content.buttons.is_empty() {
                div.section-actions {
                    @for button in &content.buttons {
                        (button_link(button, Some(ROW_BUTTON_SUFFIX)))
                    }
                }
            }
        }
    }
}

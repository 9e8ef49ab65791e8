use super::RenderContext;
use super::components::{LinkTarget, footer_link, logo};
use super::icons::social_icon;
use crate::media::resolve_url;
use crate::types::{FooterContent, LinkItem};
use maud::{Markup, html};

/// Round social button. Unrecognized tags keep the link but show no icon.
fn social_link(link: &LinkItem) -> Markup {
    let target = LinkTarget::from_new_tab(link.new_tab);
    html! {
        a.social-link href=(link.url) title=(link.text) target=(target.as_attr())
            rel="noopener noreferrer" {
            @if let Some(icon) = social_icon(link.social.as_deref()) {
                (icon)
            }
        }
    }
}

/// Footer: acknowledgement column with social and legal links, then one
/// column per link category.
pub fn render_footer(footer: &FooterContent, ctx: &RenderContext) -> Markup {
    let logo_src = resolve_url(footer.logo_url.as_deref(), &ctx.base_url);
    let has_logo = logo_src.is_some() || footer.logo_text.is_some();

    html! {
        footer.site-footer {
            div.footer-inner {
                div.footer-grid {
                    div.footer-column {
                        p.footer-heading { (footer.acknowledgement) }
                        div.social-links {
                            @for link in &footer.social_links {
                                (social_link(link))
                            }
                        }
                        ul.footer-links {
                            @for link in &footer.legal_links {
                                (footer_link(link, ctx))
                            }
                        }
                    }
                    @for column in &footer.columns {
                        div.footer-column {
                            p.footer-heading { (column.title) }
                            ul.footer-links {
                                @for link in &column.links {
                                    (footer_link(link, ctx))
                                }
                            }
                        }
                    }
                }
                @if has_logo {
                    div.footer-bottom {
                        (logo(logo_src.as_deref(), footer.logo_text.as_deref()))
                    }
                }
            }
        }
    }
}

use super::RenderContext;
use crate::types::{FooterSection, SectionKind};
use maud::{Markup, html};

pub(super) fn render(footer: &FooterSection, ctx: &RenderContext<'_>) -> Markup {
    let key = SectionKind::Footer.key();
    html! {
        footer id=(key) data-section=(key) class="pb-surface pb-border border-t py-12" {
            div class="mx-auto flex max-w-6xl flex-col gap-6 px-6 md:flex-row md:items-center md:justify-between" {
                @if !footer.text.is_empty() {
                    p class="pb-muted text-sm" { (footer.text) }
                }
                @if !footer.links.is_empty() {
                    nav class="flex flex-wrap gap-6" aria-label="Footer" {
                        @for link in &footer.links {
                            a class={ "pb-body text-sm hover:" (ctx.primary("text", 600)) } href=(ctx.href(&link.link)) { (link.label) }
                        }
                    }
                }
                @if !footer.socials.is_empty() {
                    ul class="flex gap-4" {
                        @for social in &footer.socials {
                            li {
                                a class="pb-muted text-sm" href=(ctx.href(&social.url)) rel="noopener" aria-label=(social.platform) {
                                    (social.platform)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

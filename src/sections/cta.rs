use super::{ButtonStyle, RenderContext, button};
use crate::types::{CtaSection, SectionKind};
use maud::{Markup, html};

pub(super) fn render(cta: &CtaSection, ctx: &RenderContext<'_>) -> Markup {
    let key = SectionKind::Cta.key();
    html! {
        section id=(key) data-section=(key) data-animate class={ "py-20 " (ctx.primary("bg", 600)) } {
            div class="mx-auto max-w-4xl px-6 text-center" {
                @if !cta.headline.is_empty() {
                    h2 class="text-3xl font-bold text-white sm:text-4xl" { (cta.headline) }
                }
                @if !cta.text.is_empty() {
                    p class={ "mt-4 text-lg " (ctx.primary("text", 100)) } { (cta.text) }
                }
                div class="mt-8" {
                    (button(ctx, cta.button_text.as_deref(), cta.button_link.as_deref(), ButtonStyle::Inverted))
                }
            }
        }
    }
}

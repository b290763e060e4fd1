//! Hero: headline, subheadline, up to two calls to action, and the `hero`
//! image in one of three layouts.

use super::{ButtonStyle, RenderContext, button, image_or_placeholder};
use crate::types::{HeroLayout, HeroSection, SectionKind};
use maud::{Markup, html};

/// Image store key read by the hero.
pub const HERO_IMAGE_KEY: &str = "hero";

pub(super) fn render(hero: &HeroSection, ctx: &RenderContext<'_>) -> Markup {
    let key = SectionKind::Hero.key();
    let image = ctx.image(HERO_IMAGE_KEY);
    let alt = if hero.headline.is_empty() {
        "Hero image"
    } else {
        hero.headline.as_str()
    };

    let actions = html! {
        div class="mt-8 flex flex-wrap gap-4" {
            (button(ctx, hero.cta_text.as_deref(), hero.cta_link.as_deref(), ButtonStyle::Primary))
            (button(
                ctx,
                hero.secondary_cta_text.as_deref(),
                hero.secondary_cta_link.as_deref(),
                ButtonStyle::Secondary,
            ))
        }
    };

    match hero.layout {
        HeroLayout::Centered => html! {
            section id=(key) data-section=(key) class="py-24" {
                div class="mx-auto max-w-4xl px-6 text-center" {
                    h1 class={ "pb-heading text-4xl font-extrabold tracking-tight sm:text-6xl " (ctx.text("text", 900)) } {
                        (hero.headline)
                    }
                    @if !hero.subheadline.is_empty() {
                        p class={ "pb-body mt-6 text-xl " (ctx.text("text", 600)) } { (hero.subheadline) }
                    }
                    div class="flex justify-center" { (actions) }
                    div class="mt-12" {
                        (image_or_placeholder(image, alt, "mx-auto w-full rounded-2xl object-cover shadow-xl"))
                    }
                }
            }
        },
        HeroLayout::Split => html! {
            section id=(key) data-section=(key) class="py-24" {
                div class="mx-auto grid max-w-6xl items-center gap-12 px-6 md:grid-cols-2" {
                    div {
                        h1 class={ "pb-heading text-4xl font-extrabold tracking-tight sm:text-5xl " (ctx.text("text", 900)) } {
                            (hero.headline)
                        }
                        @if !hero.subheadline.is_empty() {
                            p class={ "pb-body mt-6 text-lg " (ctx.text("text", 600)) } { (hero.subheadline) }
                        }
                        (actions)
                    }
                    (image_or_placeholder(image, alt, "h-80 w-full rounded-2xl object-cover shadow-xl"))
                }
            }
        },
        HeroLayout::Background => html! {
            section id=(key) data-section=(key) class="relative isolate overflow-hidden py-32" {
                (image_or_placeholder(image, alt, "absolute inset-0 -z-10 h-full w-full object-cover"))
                div class="absolute inset-0 -z-10 bg-black/50" {}
                div class="mx-auto max-w-4xl px-6 text-center text-white" {
                    h1 class="text-4xl font-extrabold tracking-tight sm:text-6xl" { (hero.headline) }
                    @if !hero.subheadline.is_empty() {
                        p class="mt-6 text-xl text-white/80" { (hero.subheadline) }
                    }
                    div class="flex justify-center" { (actions) }
                }
            }
        },
    }
}

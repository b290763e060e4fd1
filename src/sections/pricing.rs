use super::{ButtonStyle, RenderContext, button, section_heading, section_shell};
use crate::types::{PricingPlan, PricingSection, SectionKind};
use maud::{Markup, html};

fn plan_card(plan: &PricingPlan, ctx: &RenderContext<'_>) -> Markup {
    let frame = if plan.highlighted {
        format!("ring-2 {}", ctx.primary("ring", 600))
    } else {
        "pb-border border".to_string()
    };
    let style = if plan.highlighted {
        ButtonStyle::Primary
    } else {
        ButtonStyle::Secondary
    };
    html! {
        div class={ "pb-surface relative flex flex-col rounded-2xl p-8 " (frame) } {
            @if plan.highlighted {
                span class={ "absolute -top-3 left-8 rounded-full px-3 py-1 text-xs font-semibold text-white " (ctx.primary("bg", 600)) } {
                    "Most popular"
                }
            }
            h3 class={ "pb-heading text-lg font-semibold " (ctx.text("text", 900)) } { (plan.name) }
            p class="mt-4 flex items-baseline gap-1" {
                span class={ "pb-heading text-4xl font-bold " (ctx.text("text", 900)) } { (plan.price) }
                @if !plan.period.is_empty() {
                    span class="pb-muted" { "/" (plan.period) }
                }
            }
            ul class="mt-6 flex-1 space-y-3" {
                @for feature in &plan.features {
                    li class={ "pb-body flex gap-2 " (ctx.text("text", 700)) } {
                        span class=(ctx.primary("text", 600)) aria-hidden="true" { "✓" }
                        (feature)
                    }
                }
            }
            div class="mt-8" {
                (button(ctx, plan.cta_text.as_deref(), plan.cta_link.as_deref(), style))
            }
        }
    }
}

pub(super) fn render(pricing: &PricingSection, ctx: &RenderContext<'_>) -> Markup {
    let content = html! {
        (section_heading(ctx, &pricing.title, &pricing.subtitle))
        div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3" {
            @for plan in &pricing.plans {
                (plan_card(plan, ctx))
            }
        }
    };
    section_shell(SectionKind::Pricing, true, "py-20", content)
}

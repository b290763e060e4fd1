//! Booking call-to-action. Scheduling itself lives with an external service
//! or a `modal:` dialog; the section only links to it.

use super::{ButtonStyle, RenderContext, button, section_shell};
use crate::types::{BookingSection, SectionKind};
use maud::{Markup, html};

pub(super) fn render(booking: &BookingSection, ctx: &RenderContext<'_>) -> Markup {
    let cta_text = booking.cta_text.as_deref().unwrap_or("Book now");
    let content = html! {
        div class={ "pb-border rounded-3xl border p-10 text-center " (ctx.primary("bg", 50)) } {
            @if !booking.title.is_empty() {
                h2 class={ "pb-heading text-3xl font-bold " (ctx.text("text", 900)) } { (booking.title) }
            }
            @if !booking.description.is_empty() {
                p class={ "pb-body mx-auto mt-4 max-w-2xl text-lg " (ctx.text("text", 600)) } { (booking.description) }
            }
            div class="mt-8" {
                (button(ctx, Some(cta_text), booking.link.as_deref(), ButtonStyle::Primary))
            }
        }
    };
    section_shell(SectionKind::Booking, true, "py-20", content)
}

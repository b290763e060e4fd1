use super::{RenderContext, section_heading, section_shell};
use crate::types::{ContactSection, SectionKind};
use maud::{Markup, html};

pub(super) fn render(contact: &ContactSection, ctx: &RenderContext<'_>) -> Markup {
    let field = "pb-surface pb-border w-full rounded-lg border px-4 py-3";
    let content = html! {
        (section_heading(ctx, &contact.title, &contact.subtitle))
        div class="grid gap-12 md:grid-cols-2" {
            dl class="space-y-6" {
                @if let Some(email) = contact.email.as_deref().filter(|e| !e.is_empty()) {
                    div {
                        dt class="pb-muted text-sm" { "Email" }
                        dd { a class=(ctx.primary("text", 600)) href=(ctx.href(&format!("mailto:{email}"))) { (email) } }
                    }
                }
                @if let Some(phone) = contact.phone.as_deref().filter(|p| !p.is_empty()) {
                    div {
                        dt class="pb-muted text-sm" { "Phone" }
                        dd { a class=(ctx.primary("text", 600)) href=(ctx.href(&format!("tel:{}", phone.replace(' ', "")))) { (phone) } }
                    }
                }
                @if let Some(address) = contact.address.as_deref().filter(|a| !a.is_empty()) {
                    div {
                        dt class="pb-muted text-sm" { "Address" }
                        dd class="pb-body whitespace-pre-line" { (address) }
                    }
                }
            }
            @if let Some(action) = contact.form_action.as_deref().filter(|a| !a.is_empty()) {
                form class="space-y-4" action=(ctx.href(action)) method="post" {
                    input class=(field) type="text" name="name" placeholder="Your name" required;
                    input class=(field) type="email" name="email" placeholder="Email address" required;
                    textarea class=(field) name="message" rows="5" placeholder="Message" required {}
                    button type="submit" class={ "rounded-lg px-6 py-3 font-semibold text-white " (ctx.primary("bg", 600)) } {
                        "Send message"
                    }
                }
            }
        }
    };
    section_shell(SectionKind::Contact, true, "py-20", content)
}

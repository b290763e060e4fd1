use super::{ButtonStyle, RenderContext, button, markdown, section_shell};
use crate::types::{CourseSection, SectionKind};
use maud::{Markup, html};

pub(super) fn render(course: &CourseSection, ctx: &RenderContext<'_>) -> Markup {
    let lesson_count: usize = course.modules.iter().map(|m| m.lessons.len()).sum();
    let content = html! {
        div class="grid gap-12 lg:grid-cols-3" {
            div class="lg:col-span-2" {
                @if !course.title.is_empty() {
                    h2 class={ "pb-heading text-3xl font-bold sm:text-4xl " (ctx.text("text", 900)) } { (course.title) }
                }
                div class={ "pb-body prose mt-6 max-w-none " (ctx.text("text", 600)) } {
                    (markdown(&course.description, ctx))
                }
                div class="mt-10 space-y-3" {
                    @for (idx, module) in course.modules.iter().enumerate() {
                        details class="pb-surface pb-border rounded-xl border p-5" open[idx == 0] {
                            summary class={ "pb-heading cursor-pointer font-semibold " (ctx.text("text", 900)) } {
                                "Module " (idx + 1) ": " (module.title)
                            }
                            ol class="pb-body mt-3 list-decimal space-y-1 pl-6" {
                                @for lesson in &module.lessons {
                                    li { (lesson) }
                                }
                            }
                        }
                    }
                }
            }
            aside class="pb-surface pb-border h-fit rounded-2xl border p-8" {
                @if let Some(price) = &course.price {
                    p class={ "text-4xl font-bold " (ctx.primary("text", 600)) } { (price) }
                }
                p class="pb-muted mt-2" {
                    (course.modules.len()) " modules · " (lesson_count) " lessons"
                }
                div class="mt-6" {
                    (button(ctx, course.cta_text.as_deref(), course.cta_link.as_deref(), ButtonStyle::Primary))
                }
            }
        }
    };
    section_shell(SectionKind::Course, true, "py-20", content)
}

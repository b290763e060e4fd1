use super::{RenderContext, section_heading, section_shell};
use crate::types::{SectionKind, TestimonialsSection};
use maud::{Markup, html};

/// Up to two uppercase initials for the avatar fallback.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub(super) fn render(block: &TestimonialsSection, ctx: &RenderContext<'_>) -> Markup {
    let content = html! {
        (section_heading(ctx, &block.title, ""))
        div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3" {
            @for (idx, item) in block.items.iter().enumerate() {
                figure class="pb-surface pb-border flex flex-col rounded-2xl border p-6" {
                    blockquote class={ "pb-body flex-1 text-lg italic " (ctx.text("text", 700)) } {
                        "“" (item.quote) "”"
                    }
                    figcaption class="mt-6 flex items-center gap-3" {
                        @match ctx.optional_image(&format!("testimonial_{idx}")) {
                            Some(src) => {
                                img class="h-12 w-12 rounded-full object-cover" src=(src) alt=(item.author) loading="lazy";
                            },
                            None => {
                                span class={ "flex h-12 w-12 items-center justify-center rounded-full font-semibold text-white " (ctx.primary("bg", 500)) } aria-hidden="true" {
                                    (initials(&item.author))
                                }
                            },
                        }
                        div {
                            div class={ "pb-heading font-semibold " (ctx.text("text", 900)) } { (item.author) }
                            @if !item.role.is_empty() {
                                div class="pb-muted text-sm" { (item.role) }
                            }
                        }
                    }
                }
            }
        }
    };
    section_shell(SectionKind::Testimonials, true, "py-20", content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::types::Testimonial;

    #[test]
    fn initials_from_author_name() {
        assert_eq!(initials("ada lovelace"), "AL");
        assert_eq!(initials("Plato"), "P");
        assert_eq!(initials("Jean Luc Picard"), "JL");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn avatar_image_by_position() {
        let fixture = Fixture::new();
        let doc = sample_document();
        let ctx = RenderContext::new(fixture.inputs(&doc));
        let block = TestimonialsSection {
            title: "Kind words".to_string(),
            items: vec![
                Testimonial {
                    quote: "Great".to_string(),
                    author: "Ada Lovelace".to_string(),
                    role: "Engineer".to_string(),
                },
                Testimonial {
                    quote: "Fine".to_string(),
                    author: "Bo Diddley".to_string(),
                    role: String::new(),
                },
            ],
        };
        let html = render(&block, &ctx).into_string();
        assert!(html.contains(r#"src="assets/images/testimonial_0.jpg""#));
        assert!(html.contains("BD"));
        assert!(ctx.into_diagnostics().is_empty());
    }
}

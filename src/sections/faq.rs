//! FAQ accordion markup.
//!
//! Each answer directly follows its question button and starts collapsed
//! (`max-height: 0`). The client runtime expands it to its natural height;
//! items toggle independently.

use super::{RenderContext, markdown, section_heading, section_shell};
use crate::types::{FaqSection, SectionKind};
use maud::{Markup, html};

pub(super) fn render(faq: &FaqSection, ctx: &RenderContext<'_>) -> Markup {
    let content = html! {
        (section_heading(ctx, &faq.title, ""))
        div class="mx-auto max-w-3xl space-y-4" {
            @for (idx, item) in faq.items.iter().enumerate() {
                @let answer_id = format!("faq-answer-{idx}");
                div class="pb-surface pb-border rounded-xl border" {
                    button type="button" class={ "pb-heading flex w-full items-center justify-between gap-4 p-5 text-left font-semibold " (ctx.text("text", 900)) }
                        data-faq-question aria-expanded="false" aria-controls=(answer_id) {
                        span { (item.question) }
                        span class="pb-faq-icon" aria-hidden="true" { "+" }
                    }
                    div id=(answer_id) class="pb-faq-answer" data-faq-answer style="max-height: 0px" {
                        div class={ "pb-body prose px-5 pb-5 " (ctx.text("text", 600)) } {
                            (markdown(&item.answer, ctx))
                        }
                    }
                }
            }
        }
    };
    section_shell(SectionKind::Faq, true, "py-20", content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::types::FaqItem;

    #[test]
    fn answers_start_collapsed_after_their_question() {
        let fixture = Fixture::new();
        let doc = sample_document();
        let ctx = RenderContext::new(fixture.inputs(&doc));
        let block = FaqSection {
            title: "FAQ".to_string(),
            items: vec![
                FaqItem {
                    question: "Is it fast?".to_string(),
                    answer: "**Very**.".to_string(),
                },
                FaqItem {
                    question: "Is it free?".to_string(),
                    answer: "No.".to_string(),
                },
            ],
        };
        let html = render(&block, &ctx).into_string();
        assert_eq!(html.matches("data-faq-question").count(), 2);
        assert_eq!(html.matches(r#"style="max-height: 0px""#).count(), 2);
        assert!(html.contains("<strong>Very</strong>"));
        let question = html.find("Is it fast?").unwrap();
        let answer = html.find("faq-answer-0\" class").unwrap();
        assert!(question < answer);
    }

    #[test]
    fn question_text_is_escaped() {
        let fixture = Fixture::new();
        let doc = sample_document();
        let ctx = RenderContext::new(fixture.inputs(&doc));
        let block = FaqSection {
            title: String::new(),
            items: vec![FaqItem {
                question: "<b>why</b>".to_string(),
                answer: String::new(),
            }],
        };
        let html = render(&block, &ctx).into_string();
        assert!(html.contains("&lt;b&gt;why&lt;/b&gt;"));
    }
}

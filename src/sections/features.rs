use super::{RenderContext, image_or_placeholder, section_heading, section_shell};
use crate::types::{FeaturesSection, SectionKind};
use maud::{Markup, html};

pub(super) fn render(features: &FeaturesSection, ctx: &RenderContext<'_>) -> Markup {
    let content = html! {
        (section_heading(ctx, &features.title, &features.subtitle))
        div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3" {
            @for (idx, item) in features.items.iter().enumerate() {
                div class="pb-surface pb-border rounded-2xl border p-6" {
                    @match ctx.optional_image(&format!("feature_{idx}")) {
                        Some(src) => {
                            (image_or_placeholder(Some(src), &item.title, "mb-4 h-12 w-12 rounded-lg object-cover"))
                        },
                        None => {
                            div class={ "mb-4 flex h-12 w-12 items-center justify-center rounded-lg text-2xl " (ctx.primary("bg", 100)) " " (ctx.primary("text", 700)) } {
                                (item.icon.as_deref().unwrap_or("★"))
                            }
                        },
                    }
                    h3 class={ "pb-heading text-lg font-semibold " (ctx.text("text", 900)) } { (item.title) }
                    p class={ "pb-body mt-2 " (ctx.text("text", 600)) } { (item.description) }
                }
            }
        }
    };
    section_shell(SectionKind::Features, true, "py-20", content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::types::FeatureItem;

    #[test]
    fn features_render_icons_and_optional_images() {
        let mut fixture = Fixture::new();
        fixture.assets.insert("feature_1", "https://cdn.example.com/f1.png");
        let doc = sample_document();
        let ctx = RenderContext::new(fixture.inputs(&doc));
        let block = FeaturesSection {
            title: "Why".to_string(),
            subtitle: String::new(),
            items: vec![
                FeatureItem {
                    title: "Fast".to_string(),
                    description: "Very".to_string(),
                    icon: Some("⚡".to_string()),
                },
                FeatureItem {
                    title: "Safe".to_string(),
                    description: "Quite".to_string(),
                    icon: None,
                },
            ],
        };
        let html = render(&block, &ctx).into_string();
        assert!(html.contains("⚡"));
        assert!(html.contains(r#"src="https://cdn.example.com/f1.png""#));
        assert!(html.contains("data-animate"));
        // Feature images are optional: no diagnostics
        assert!(ctx.into_diagnostics().is_empty());
    }

    #[test]
    fn empty_items_render_empty_grid() {
        let fixture = Fixture::new();
        let doc = sample_document();
        let ctx = RenderContext::new(fixture.inputs(&doc));
        let html = render(&FeaturesSection::default(), &ctx).into_string();
        assert!(html.contains("grid"));
        assert!(!html.contains("<h3"));
    }
}

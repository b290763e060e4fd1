use super::{RenderContext, image_or_placeholder, section_heading, section_shell};
use crate::types::{GallerySection, SectionKind};
use maud::{Markup, html};

pub(super) fn render(gallery: &GallerySection, ctx: &RenderContext<'_>) -> Markup {
    let content = html! {
        (section_heading(ctx, &gallery.title, ""))
        div class="grid grid-cols-2 gap-4 md:grid-cols-3" {
            @for (idx, item) in gallery.items.iter().enumerate() {
                @let alt = if item.alt.is_empty() { &item.caption } else { &item.alt };
                figure class="overflow-hidden rounded-xl" {
                    (image_or_placeholder(
                        ctx.image(&format!("gallery_{idx}")),
                        alt,
                        "aspect-square w-full object-cover transition duration-300 hover:scale-105",
                    ))
                    @if !item.caption.is_empty() {
                        figcaption class="pb-muted mt-2 text-sm" { (item.caption) }
                    }
                }
            }
        }
    };
    section_shell(SectionKind::Gallery, true, "py-20", content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostic;
    use crate::test_helpers::*;
    use crate::types::GalleryItem;

    #[test]
    fn gallery_images_by_index_with_placeholder() {
        let fixture = Fixture::new();
        let doc = sample_document();
        let ctx = RenderContext::new(fixture.inputs(&doc));
        let block = GallerySection {
            title: "Work".to_string(),
            items: vec![
                GalleryItem {
                    caption: "First".to_string(),
                    alt: String::new(),
                },
                GalleryItem::default(),
            ],
        };
        let html = render(&block, &ctx).into_string();
        assert!(html.contains(r#"src="assets/images/gallery_0.webp""#));
        assert!(html.contains(r#"alt="First""#));
        assert_eq!(html.matches("pb-placeholder").count(), 1);
        assert_eq!(
            ctx.into_diagnostics(),
            vec![Diagnostic::MissingImage {
                key: "gallery_1".to_string()
            }]
        );
    }
}

//! Product grid.
//!
//! The section block only lists product ids; names, prices and links come
//! from the catalog. A product image is looked up in the image store as
//! `product_<id>` first so that inline images get extracted like any other,
//! then falls back to the catalog's own `imageUrl`.

use super::{ButtonStyle, RenderContext, button, image_or_placeholder, section_heading, section_shell};
use crate::types::{Product, ProductsSection, SectionKind};
use maud::{Markup, html};

fn product_image<'a>(product: &'a Product, ctx: &RenderContext<'a>) -> Option<&'a str> {
    ctx.optional_image(&format!("product_{}", product.id))
        .or_else(|| {
            product
                .image_url
                .as_deref()
                .filter(|url| !url.is_empty())
                .and_then(|url| ctx.external(url))
        })
}

fn product_card(product: &Product, ctx: &RenderContext<'_>) -> Markup {
    html! {
        article class="pb-surface pb-border flex flex-col overflow-hidden rounded-2xl border" {
            (image_or_placeholder(product_image(product, ctx), &product.name, "aspect-[4/3] w-full object-cover"))
            div class="flex flex-1 flex-col p-6" {
                h3 class={ "pb-heading text-lg font-semibold " (ctx.text("text", 900)) } { (product.name) }
                @if !product.description.is_empty() {
                    p class={ "pb-body mt-2 flex-1 " (ctx.text("text", 600)) } { (product.description) }
                }
                div class="mt-6 flex items-center justify-between" {
                    span class={ "text-xl font-bold " (ctx.primary("text", 600)) } { (product.price) }
                    (button(ctx, Some("View"), product.link.as_deref(), ButtonStyle::Secondary))
                }
            }
        }
    }
}

pub(super) fn render(products: &ProductsSection, ctx: &RenderContext<'_>) -> Markup {
    let content = html! {
        (section_heading(ctx, &products.title, &products.subtitle))
        div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3" {
            @for id in &products.product_ids {
                @if let Some(product) = ctx.product(id) {
                    (product_card(product, ctx))
                }
            }
        }
    };
    section_shell(SectionKind::Products, true, "py-20", content)
}

//! Navigation header.
//!
//! The header sits above every section and is not part of `sectionOrder`.
//! It carries the controls the client runtime binds to:
//!
//! | Attribute | Behavior |
//! |-----------|----------|
//! | `data-theme-toggle` | flips the light/dark class on `<html>` and stores it |
//! | `data-menu-toggle` | opens and closes `#mobile-menu` |
//! | `data-mobile-menu` | the off-canvas menu; closes when one of its links is followed |
//!
//! Like section renderers, every href goes through the link resolver and the
//! image-mode logo through the asset mapping.

use crate::sections::RenderContext;
use crate::types::{LogoMode, MobileNavLayout, Nav, NavLayout, NavLink};
use maud::{Markup, html};

fn logo(nav: &Nav, ctx: &RenderContext<'_>) -> Markup {
    let content = nav.logo.content.trim();
    html! {
        a class={ "pb-heading text-xl font-bold " (ctx.text("text", 900)) } href="#" data-logo {
            @match nav.logo.mode {
                LogoMode::Text => {
                    (content)
                },
                LogoMode::Image => {
                    @match ctx.image(content) {
                        Some(src) => {
                            img class="h-8 w-auto" src=(src) alt="Logo";
                        },
                        None => {
                            span class="pb-placeholder inline-block h-8 w-24 rounded" role="img" aria-label="Logo" {}
                        },
                    }
                },
            }
        }
    }
}

fn link_list(items: &[NavLink], ctx: &RenderContext<'_>, class: &str) -> Markup {
    html! {
        @for item in items {
            a class=(class) href=(ctx.href(&item.link)) { (item.label) }
        }
    }
}

/// Sign-in, cart and theme toggle.
fn actions(nav: &Nav, ctx: &RenderContext<'_>) -> Markup {
    html! {
        div class="flex items-center gap-3" {
            @if let Some(sign_in) = &nav.sign_in {
                a class={ "pb-body hidden text-sm font-medium md:inline " (ctx.text("text", 700)) } href=(ctx.href(&sign_in.link)) {
                    (sign_in.label)
                }
            }
            @if let Some(cart) = &nav.cart {
                a class="pb-body relative" href=(ctx.href(&cart.link)) aria-label="Cart" {
                    span aria-hidden="true" { "🛒" }
                    @if let Some(count) = cart.count.filter(|c| *c > 0) {
                        span class={ "absolute -right-2 -top-2 rounded-full px-1.5 text-xs text-white " (ctx.primary("bg", 600)) } data-cart-count {
                            (count)
                        }
                    }
                }
            }
            button type="button" class="pb-border rounded-lg border p-2" data-theme-toggle aria-label="Toggle color theme" {
                span class="pb-theme-icon-light" aria-hidden="true" { "☀" }
                span class="pb-theme-icon-dark" aria-hidden="true" { "☾" }
            }
            button type="button" class="pb-border rounded-lg border p-2 md:hidden" data-menu-toggle
                aria-controls="mobile-menu" aria-expanded="false" aria-label="Open menu" {
                span aria-hidden="true" { "☰" }
            }
        }
    }
}

fn mobile_menu(nav: &Nav, ctx: &RenderContext<'_>) -> Markup {
    let (layout, class) = match nav.mobile_layout {
        MobileNavLayout::Drawer => (
            "drawer",
            "pb-surface pb-mobile-drawer fixed inset-y-0 right-0 z-50 w-72 p-6 shadow-xl md:hidden",
        ),
        MobileNavLayout::Dropdown => (
            "dropdown",
            "pb-surface pb-border pb-mobile-dropdown border-t px-6 py-4 md:hidden",
        ),
    };
    html! {
        div id="mobile-menu" class=(class) data-mobile-menu data-mobile-layout=(layout) hidden {
            nav class="flex flex-col gap-4" aria-label="Mobile" {
                (link_list(&nav.items, ctx, "pb-body text-lg"))
                @if let Some(sign_in) = &nav.sign_in {
                    a class={ "text-lg font-medium " (ctx.primary("text", 600)) } href=(ctx.href(&sign_in.link)) { (sign_in.label) }
                }
            }
        }
    }
}

/// Render the page header.
pub fn render_nav(nav: &Nav, ctx: &RenderContext<'_>) -> Markup {
    let link_class = format!("pb-body text-sm font-medium hover:{}", ctx.primary("text", 600));
    let desktop = match nav.layout {
        NavLayout::Standard => html! {
            div class="flex items-center justify-between gap-8" {
                (logo(nav, ctx))
                nav class="hidden items-center gap-6 md:flex" aria-label="Main" {
                    (link_list(&nav.items, ctx, &link_class))
                }
                (actions(nav, ctx))
            }
        },
        NavLayout::Centered => html! {
            div class="flex flex-col items-center gap-4" {
                div class="flex w-full items-center justify-between" {
                    span class="w-24" {}
                    (logo(nav, ctx))
                    (actions(nav, ctx))
                }
                nav class="hidden items-center gap-6 md:flex" aria-label="Main" {
                    (link_list(&nav.items, ctx, &link_class))
                }
            }
        },
        NavLayout::Split => {
            let (left, right) = nav.items.split_at(nav.items.len().div_ceil(2));
            html! {
                div class="flex items-center justify-between gap-8" {
                    nav class="hidden flex-1 items-center gap-6 md:flex" aria-label="Main" {
                        (link_list(left, ctx, &link_class))
                    }
                    (logo(nav, ctx))
                    div class="flex flex-1 items-center justify-end gap-6" {
                        nav class="hidden items-center gap-6 md:flex" aria-label="Secondary" {
                            (link_list(right, ctx, &link_class))
                        }
                        (actions(nav, ctx))
                    }
                }
            }
        }
    };
    html! {
        header class="pb-surface pb-border sticky top-0 z-40 border-b" data-nav-layout=(layout_name(nav.layout)) {
            div class="mx-auto max-w-6xl px-6 py-4" {
                (desktop)
            }
            (mobile_menu(nav, ctx))
        }
    }
}

fn layout_name(layout: NavLayout) -> &'static str {
    match layout {
        NavLayout::Standard => "standard",
        NavLayout::Centered => "centered",
        NavLayout::Split => "split",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostic;
    use crate::test_helpers::*;
    use crate::types::{CartLink, Logo};

    fn nav_with(layout: NavLayout) -> Nav {
        Nav {
            logo: Logo {
                mode: LogoMode::Text,
                content: "Acme".to_string(),
            },
            layout,
            items: vec![
                NavLink {
                    label: "Pricing".to_string(),
                    link: "#pricing".to_string(),
                },
                NavLink {
                    label: "About".to_string(),
                    link: "page:p1".to_string(),
                },
                NavLink {
                    label: "Blog".to_string(),
                    link: "https://blog.example.com".to_string(),
                },
            ],
            ..Nav::default()
        }
    }

    #[test]
    fn links_resolve_in_desktop_and_mobile_menus() {
        let fixture = Fixture::new();
        let doc = sample_document();
        let ctx = RenderContext::new(fixture.inputs(&doc));
        let html = render_nav(&nav_with(NavLayout::Standard), &ctx).into_string();
        assert_eq!(html.matches(r#"href="about-us.html""#).count(), 2);
        assert_eq!(html.matches(r##"href="#pricing""##).count(), 2);
        assert!(html.contains("data-theme-toggle"));
        assert!(html.contains(r#"aria-controls="mobile-menu""#));
        assert!(html.contains(r#"id="mobile-menu""#));
        assert!(html.contains(r#"data-mobile-layout="drawer""#));
    }

    #[test]
    fn split_layout_divides_items() {
        let fixture = Fixture::new();
        let doc = sample_document();
        let ctx = RenderContext::new(fixture.inputs(&doc));
        let html = render_nav(&nav_with(NavLayout::Split), &ctx).into_string();
        let logo = html.find("data-logo").unwrap();
        let about = html.find("about-us.html").unwrap();
        let blog = html.find("blog.example.com").unwrap();
        assert!(about < logo);
        assert!(logo < blog);
    }

    #[test]
    fn image_logo_uses_asset_mapping() {
        let mut fixture = Fixture::new();
        fixture.assets.insert("logo", "assets/images/logo.svg");
        let doc = sample_document();
        let ctx = RenderContext::new(fixture.inputs(&doc));
        let mut nav = nav_with(NavLayout::Centered);
        nav.logo = Logo {
            mode: LogoMode::Image,
            content: "logo".to_string(),
        };
        let html = render_nav(&nav, &ctx).into_string();
        assert!(html.contains(r#"src="assets/images/logo.svg""#));
        assert!(ctx.into_diagnostics().is_empty());
    }

    #[test]
    fn missing_logo_image_is_reported() {
        let fixture = Fixture::new();
        let doc = sample_document();
        let ctx = RenderContext::new(fixture.inputs(&doc));
        let mut nav = nav_with(NavLayout::Standard);
        nav.logo = Logo {
            mode: LogoMode::Image,
            content: "brand".to_string(),
        };
        let html = render_nav(&nav, &ctx).into_string();
        assert!(html.contains("pb-placeholder"));
        assert_eq!(
            ctx.into_diagnostics(),
            vec![Diagnostic::MissingImage {
                key: "brand".to_string()
            }]
        );
    }

    #[test]
    fn cart_count_shown_only_when_positive() {
        let fixture = Fixture::new();
        let doc = sample_document();
        let ctx = RenderContext::new(fixture.inputs(&doc));
        let mut nav = nav_with(NavLayout::Standard);
        nav.cart = Some(CartLink {
            link: "https://shop.example.com/cart".to_string(),
            count: Some(3),
        });
        let html = render_nav(&nav, &ctx).into_string();
        assert!(html.contains("data-cart-count"));

        nav.cart = Some(CartLink {
            link: "https://shop.example.com/cart".to_string(),
            count: Some(0),
        });
        let html = render_nav(&nav, &ctx).into_string();
        assert!(!html.contains("data-cart-count"));
    }
}

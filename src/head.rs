//! Document head composition.
//!
//! Builds the contents of `<head>` from the document's SEO block and the
//! compiler config:
//!
//! - charset, viewport, `<title>`, description and keywords
//! - Open Graph title/description/type, plus `og:image` only when the image
//!   store resolved the reserved `og_image` key
//! - author meta pairs, verbatim and in order
//! - generator tag, CSS framework, theme font and base styles
//! - structured data (see [`structured_data`]) and the author's head script
//!
//! The last group is author content emitted without validation and is kept
//! apart in [`ComposedHead::verbatim`]. Empty values are omitted rather than
//! emitted as empty attributes.

use crate::assets::{AssetPaths, OG_IMAGE_KEY};
use crate::config::{self, CompilerConfig};
use crate::diagnostics::Diagnostic;
use crate::types::{Seo, Theme};
use maud::{Markup, PreEscaped, html};

const BASE_CSS: &str = include_str!("../static/base.css");

/// Read-only inputs of the head composer.
#[derive(Debug, Clone, Copy)]
pub struct HeadInputs<'a> {
    pub seo: &'a Seo,
    pub theme: &'a Theme,
    pub head_script: Option<&'a str>,
    pub assets: &'a AssetPaths,
    pub config: &'a CompilerConfig,
}

/// Head children, split by origin.
#[derive(Debug)]
pub struct ComposedHead {
    /// Markup built by the compiler.
    pub generated: Markup,
    /// Structured data and head script, copied from the document.
    pub verbatim: Markup,
    pub diagnostics: Vec<Diagnostic>,
    /// Asset paths the generated markup references.
    pub asset_refs: Vec<String>,
}

impl ComposedHead {
    /// The complete `<head>` element.
    pub fn to_markup(&self) -> Markup {
        html! {
            head {
                (self.generated)
                (self.verbatim)
            }
        }
    }
}

/// Compose the document head.
pub fn compose_head(inputs: HeadInputs<'_>) -> ComposedHead {
    let seo = inputs.seo;
    let mut diagnostics = Vec::new();
    let structured = seo
        .structured_data
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(|raw| {
            let (markup, diagnostic) = structured_data(raw);
            diagnostics.extend(diagnostic);
            markup
        });
    let og_image = inputs.assets.get(OG_IMAGE_KEY);
    let font_href = font_stylesheet_url(inputs.theme, inputs.config);
    let css = format!(
        "{}\n{}\n{}",
        config::generate_color_css(&inputs.config.colors),
        font_css(inputs.theme),
        BASE_CSS
    );

    let generated = html! {
        meta charset="UTF-8";
        meta name="viewport" content="width=device-width, initial-scale=1.0";
        title { (seo.title) }
        @if !seo.description.is_empty() {
            meta name="description" content=(seo.description);
        }
        @if !seo.keywords.is_empty() {
            meta name="keywords" content=(seo.keywords);
        }
        meta property="og:title" content=(seo.title);
        @if !seo.description.is_empty() {
            meta property="og:description" content=(seo.description);
        }
        meta property="og:type" content="website";
        @if let Some(src) = og_image {
            meta property="og:image" content=(src);
        }
        @for tag in &seo.meta_tags {
            @if !tag.name.is_empty() {
                meta name=(tag.name) content=(tag.content);
            }
        }
        meta name="generator" content={ "pagebake " (env!("CARGO_PKG_VERSION")) };
        script src=(inputs.config.framework_url) {}
        @if let Some(href) = font_href {
            link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
            link rel="stylesheet" href=(href);
        }
        style { (PreEscaped(css)) }
    };

    let verbatim = html! {
        @if let Some(markup) = structured {
            (markup)
        }
        @if let Some(script) = inputs.head_script.filter(|s| !s.trim().is_empty()) {
            (PreEscaped(script))
        }
    };

    ComposedHead {
        generated,
        verbatim,
        diagnostics,
        asset_refs: og_image.map(str::to_string).into_iter().collect(),
    }
}

/// Emit structured data.
///
/// A snippet that already starts with `<script` is passed through
/// unchanged. Anything else is wrapped in a JSON-LD script tag; if it does
/// not parse as JSON it is still emitted, with a diagnostic.
pub fn structured_data(raw: &str) -> (Markup, Option<Diagnostic>) {
    let trimmed = raw.trim();
    if trimmed
        .get(..7)
        .is_some_and(|start| start.eq_ignore_ascii_case("<script"))
    {
        return (PreEscaped(trimmed.to_string()), None);
    }
    let diagnostic = serde_json::from_str::<serde_json::Value>(trimmed)
        .err()
        .map(|_| Diagnostic::StructuredDataNotJson);
    let markup = html! {
        script type="application/ld+json" { (PreEscaped(trimmed)) }
    };
    (markup, diagnostic)
}

/// Font stylesheet URL for the theme font, e.g.
/// `https://fonts.googleapis.com/css2?family=Open%20Sans:wght@400;700&display=swap`.
fn font_stylesheet_url(theme: &Theme, config: &CompilerConfig) -> Option<String> {
    let family = theme.font_family.trim();
    if family.is_empty() || config.fonts.stylesheet_url.trim().is_empty() {
        return None;
    }
    let weights = config
        .fonts
        .weights
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(";");
    Some(format!(
        "{}?family={}:wght@{}&display=swap",
        config.fonts.stylesheet_url,
        urlencoding::encode(family),
        weights
    ))
}

fn font_css(theme: &Theme) -> String {
    let family = theme.font_family.replace(['"', '\\', '<', '>', ';', '{', '}'], "");
    format!(":root {{ --pb-font: \"{family}\", ui-sans-serif, system-ui, sans-serif; }}")
}

//! Section renderer registry.
//!
//! Every section type has one renderer in a submodule of its own. The
//! registry is the [`Section`] enum: looking a kind up in a document yields a
//! variant borrowing that kind's data block, and [`Section::render`] dispatches
//! with an exhaustive `match`. Adding a section type means adding a
//! [`SectionKind`] variant, and the compiler then points at every place that
//! has to handle it.
//!
//! ## Composition
//!
//! [`plan_sections`] walks `sectionOrder` and keeps every key that names a
//! known kind with a data block present. Unknown keys, missing data and
//! repeated keys are skipped with a [`Diagnostic`]. [`render_sections`] then
//! renders the plan, in parallel above the configured threshold; output
//! order always follows the plan, never completion order.
//!
//! ## Renderer contract
//!
//! Renderers read their block and the shared [`RenderInputs`] and return a
//! self-contained fragment whose wrapper carries `id` and `data-section` equal
//! to the section key. Every href goes through [`RenderContext::href`], every
//! image through [`RenderContext::image`] or [`RenderContext::optional_image`],
//! and any other raw URL through [`RenderContext::external`]. Raw document
//! values never reach an `href` or `src` directly, including the links and
//! images inside author Markdown (see [`markdown`]).
//!
//! The context also records every asset path it handed out, so the compiler
//! can check bundle closure against what it emitted rather than against
//! free text that merely looks like a path.

mod booking;
mod contact;
mod course;
mod cta;
mod custom_form;
mod embed;
mod faq;
mod features;
mod footer;
mod gallery;
mod hero;
mod pricing;
mod products;
mod testimonials;
mod video;

pub use video::{VideoSource, video_source};

use crate::assets::AssetPaths;
use crate::diagnostics::Diagnostic;
use crate::links::{DEAD_LINK, LinkResolver, Resolution};
use crate::types::{PageDocument, PageRoster, Product, ProductCatalog, SectionKind, Theme};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, Tag, TagEnd, html as md_html};
use rayon::prelude::*;
use std::cell::RefCell;
use std::collections::BTreeSet;

/// One renderable section: a kind paired with its data block.
#[derive(Debug, Clone, Copy)]
pub enum Section<'a> {
    Hero(&'a crate::types::HeroSection),
    Features(&'a crate::types::FeaturesSection),
    Video(&'a crate::types::VideoSection),
    Testimonials(&'a crate::types::TestimonialsSection),
    Pricing(&'a crate::types::PricingSection),
    Faq(&'a crate::types::FaqSection),
    Contact(&'a crate::types::ContactSection),
    Booking(&'a crate::types::BookingSection),
    Gallery(&'a crate::types::GallerySection),
    Products(&'a crate::types::ProductsSection),
    Course(&'a crate::types::CourseSection),
    CustomForm(&'a crate::types::CustomFormSection),
    Embed(&'a crate::types::EmbedSection),
    Footer(&'a crate::types::FooterSection),
    Cta(&'a crate::types::CtaSection),
}

impl<'a> Section<'a> {
    /// The data block for `kind`, if the document has one.
    pub fn lookup(doc: &'a PageDocument, kind: SectionKind) -> Option<Self> {
        match kind {
            SectionKind::Hero => doc.hero.as_ref().map(Section::Hero),
            SectionKind::Features => doc.features.as_ref().map(Section::Features),
            SectionKind::Video => doc.video.as_ref().map(Section::Video),
            SectionKind::Testimonials => doc.testimonials.as_ref().map(Section::Testimonials),
            SectionKind::Pricing => doc.pricing.as_ref().map(Section::Pricing),
            SectionKind::Faq => doc.faq.as_ref().map(Section::Faq),
            SectionKind::Contact => doc.contact.as_ref().map(Section::Contact),
            SectionKind::Booking => doc.booking.as_ref().map(Section::Booking),
            SectionKind::Gallery => doc.gallery.as_ref().map(Section::Gallery),
            SectionKind::Products => doc.products.as_ref().map(Section::Products),
            SectionKind::Course => doc.course.as_ref().map(Section::Course),
            SectionKind::CustomForm => doc.custom_form.as_ref().map(Section::CustomForm),
            SectionKind::Embed => doc.embed.as_ref().map(Section::Embed),
            SectionKind::Footer => doc.footer.as_ref().map(Section::Footer),
            SectionKind::Cta => doc.cta.as_ref().map(Section::Cta),
        }
    }

    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Hero(_) => SectionKind::Hero,
            Section::Features(_) => SectionKind::Features,
            Section::Video(_) => SectionKind::Video,
            Section::Testimonials(_) => SectionKind::Testimonials,
            Section::Pricing(_) => SectionKind::Pricing,
            Section::Faq(_) => SectionKind::Faq,
            Section::Contact(_) => SectionKind::Contact,
            Section::Booking(_) => SectionKind::Booking,
            Section::Gallery(_) => SectionKind::Gallery,
            Section::Products(_) => SectionKind::Products,
            Section::Course(_) => SectionKind::Course,
            Section::CustomForm(_) => SectionKind::CustomForm,
            Section::Embed(_) => SectionKind::Embed,
            Section::Footer(_) => SectionKind::Footer,
            Section::Cta(_) => SectionKind::Cta,
        }
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> Markup {
        match self {
            Section::Hero(data) => hero::render(data, ctx),
            Section::Features(data) => features::render(data, ctx),
            Section::Video(data) => video::render(data, ctx),
            Section::Testimonials(data) => testimonials::render(data, ctx),
            Section::Pricing(data) => pricing::render(data, ctx),
            Section::Faq(data) => faq::render(data, ctx),
            Section::Contact(data) => contact::render(data, ctx),
            Section::Booking(data) => booking::render(data, ctx),
            Section::Gallery(data) => gallery::render(data, ctx),
            Section::Products(data) => products::render(data, ctx),
            Section::Course(data) => course::render(data, ctx),
            Section::CustomForm(data) => custom_form::render(data, ctx),
            Section::Embed(data) => embed::render(data, ctx),
            Section::Footer(data) => footer::render(data, ctx),
            Section::Cta(data) => cta::render(data, ctx),
        }
    }
}

// ============================================================================
// Planning and rendering
// ============================================================================

/// Sections to render, in order, plus what was skipped.
#[derive(Debug)]
pub struct SectionPlan<'a> {
    pub sections: Vec<Section<'a>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve `sectionOrder` against the document's data blocks.
pub fn plan_sections(doc: &PageDocument) -> SectionPlan<'_> {
    let mut sections = Vec::new();
    let mut diagnostics = Vec::new();
    let mut seen = BTreeSet::new();

    for key in &doc.section_order {
        let kind = match key.parse::<SectionKind>() {
            Ok(kind) => kind,
            Err(_) => {
                diagnostics.push(Diagnostic::UnknownSection { key: key.clone() });
                continue;
            }
        };
        if !seen.insert(kind) {
            diagnostics.push(Diagnostic::DuplicateSection { section: kind });
            continue;
        }
        match Section::lookup(doc, kind) {
            Some(section) => sections.push(section),
            None => diagnostics.push(Diagnostic::MissingSectionData { section: kind }),
        }
    }

    SectionPlan {
        sections,
        diagnostics,
    }
}

/// Read-only inputs shared by every renderer of one compilation.
#[derive(Debug, Clone, Copy)]
pub struct RenderInputs<'a> {
    pub theme: &'a Theme,
    pub assets: &'a AssetPaths,
    pub roster: &'a PageRoster,
    pub catalog: &'a ProductCatalog,
    /// Bundle directory of extracted images, without trailing slash.
    pub asset_dir: &'a str,
}

/// A rendered fragment with the diagnostics its renderer produced.
#[derive(Debug, Clone)]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub html: String,
    pub diagnostics: Vec<Diagnostic>,
    /// Asset paths the fragment references.
    pub asset_refs: Vec<String>,
}

/// Render one section with a fresh context.
pub fn render_section(section: &Section<'_>, inputs: RenderInputs<'_>) -> RenderedSection {
    let ctx = RenderContext::new(inputs);
    let html = section.render(&ctx).into_string();
    tracing::debug!(section = %section.kind(), bytes = html.len(), "rendered section");
    let (diagnostics, asset_refs) = ctx.into_parts();
    RenderedSection {
        kind: section.kind(),
        html,
        diagnostics,
        asset_refs,
    }
}

/// Render all planned sections, in plan order.
pub fn render_sections(
    sections: &[Section<'_>],
    inputs: RenderInputs<'_>,
    parallel: bool,
) -> Vec<RenderedSection> {
    if parallel {
        sections
            .par_iter()
            .map(|section| render_section(section, inputs))
            .collect()
    } else {
        sections
            .iter()
            .map(|section| render_section(section, inputs))
            .collect()
    }
}

// ============================================================================
// Render context
// ============================================================================

/// Per-fragment view of the shared inputs that records content diagnostics.
pub struct RenderContext<'a> {
    inputs: RenderInputs<'a>,
    diagnostics: RefCell<Vec<Diagnostic>>,
    asset_refs: RefCell<Vec<String>>,
}

impl<'a> RenderContext<'a> {
    pub fn new(inputs: RenderInputs<'a>) -> Self {
        Self {
            inputs,
            diagnostics: RefCell::new(Vec::new()),
            asset_refs: RefCell::new(Vec::new()),
        }
    }

    pub fn theme(&self) -> &'a Theme {
        self.inputs.theme
    }

    /// Resolve a user-facing link; dead page links are reported.
    pub fn href(&self, link: &str) -> String {
        match LinkResolver::new(self.inputs.roster).resolve(link) {
            Resolution::Dead { page_id } => {
                self.report(Diagnostic::DeadLink {
                    page_id: page_id.to_string(),
                });
                DEAD_LINK.to_string()
            }
            Resolution::PassThrough(link) if self.is_unbundled(link) => {
                self.report(Diagnostic::UnbundledReference {
                    value: link.to_string(),
                });
                DEAD_LINK.to_string()
            }
            resolution => resolution.into_href(),
        }
    }

    /// A raw URL taken from the document (video file, catalog image),
    /// dropped when it points at an asset the bundle does not contain.
    pub fn external<'v>(&self, value: &'v str) -> Option<&'v str> {
        if self.is_unbundled(value) {
            self.report(Diagnostic::UnbundledReference {
                value: value.to_string(),
            });
            return None;
        }
        Some(value)
    }

    fn is_unbundled(&self, value: &str) -> bool {
        value
            .strip_prefix(self.inputs.asset_dir)
            .is_some_and(|rest| rest.starts_with('/'))
            && !self.inputs.assets.contains_path(value)
    }

    /// Image path for a key the section needs; absence is reported.
    pub fn image(&self, key: &str) -> Option<&'a str> {
        let path = self.optional_image(key);
        if path.is_none() {
            self.report(Diagnostic::MissingImage {
                key: key.to_string(),
            });
        }
        path
    }

    /// Image path for a key the section can do without.
    pub fn optional_image(&self, key: &str) -> Option<&'a str> {
        let path = self.inputs.assets.get(key);
        if let Some(path) = path {
            self.asset_refs.borrow_mut().push(path.to_string());
        }
        path
    }

    /// Catalog record for a product id; absence is reported.
    pub fn product(&self, id: &str) -> Option<&'a Product> {
        let product = self.inputs.catalog.get(id);
        if product.is_none() {
            self.report(Diagnostic::MissingProduct { id: id.to_string() });
        }
        product
    }

    pub fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.into_parts().0
    }

    /// Diagnostics plus the asset paths handed out, in call order.
    pub fn into_parts(self) -> (Vec<Diagnostic>, Vec<String>) {
        (self.diagnostics.into_inner(), self.asset_refs.into_inner())
    }

    /// Utility class for the primary palette, e.g. `bg-indigo-600`.
    pub fn primary(&self, utility: &str, shade: u16) -> String {
        format!("{utility}-{}-{shade}", self.inputs.theme.primary_color)
    }

    /// Utility class for the text palette, e.g. `text-slate-600`.
    pub fn text(&self, utility: &str, shade: u16) -> String {
        format!("{utility}-{}-{shade}", self.inputs.theme.text_color)
    }
}

// ============================================================================
// Shared HTML components
// ============================================================================

/// Wrapper every body section renders into.
pub(crate) fn section_shell(kind: SectionKind, animate: bool, class: &str, content: Markup) -> Markup {
    html! {
        section id=(kind.key()) data-section=(kind.key()) data-animate[animate] class=(class) {
            div class="mx-auto max-w-6xl px-6" {
                (content)
            }
        }
    }
}

/// Title and optional subtitle at the top of a section.
pub(crate) fn section_heading(ctx: &RenderContext<'_>, title: &str, subtitle: &str) -> Markup {
    html! {
        @if !title.is_empty() || !subtitle.is_empty() {
            header class="mb-12 text-center" {
                @if !title.is_empty() {
                    h2 class={ "pb-heading text-3xl font-bold sm:text-4xl " (ctx.text("text", 900)) } { (title) }
                }
                @if !subtitle.is_empty() {
                    p class={ "pb-body mt-4 text-lg " (ctx.text("text", 600)) } { (subtitle) }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonStyle {
    Primary,
    Secondary,
    /// Light button on a primary-colored background.
    Inverted,
}

/// A call-to-action link styled as a button, or nothing when text or link
/// is missing.
pub(crate) fn button(
    ctx: &RenderContext<'_>,
    text: Option<&str>,
    link: Option<&str>,
    style: ButtonStyle,
) -> Markup {
    let (Some(text), Some(link)) = (text, link) else {
        return html! {};
    };
    if text.trim().is_empty() {
        return html! {};
    }
    let class = match style {
        ButtonStyle::Primary => format!(
            "inline-block rounded-lg px-6 py-3 font-semibold text-white shadow {} {}",
            ctx.primary("bg", 600),
            ctx.primary("hover:bg", 700)
        ),
        ButtonStyle::Secondary => format!(
            "inline-block rounded-lg border px-6 py-3 font-semibold {} {}",
            ctx.primary("border", 600),
            ctx.primary("text", 600)
        ),
        ButtonStyle::Inverted => format!(
            "inline-block rounded-lg bg-white px-6 py-3 font-semibold shadow {}",
            ctx.primary("text", 700)
        ),
    };
    html! {
        a class=(class) href=(ctx.href(link)) { (text) }
    }
}

/// An `<img>` for a resolved path, or a neutral placeholder block.
pub(crate) fn image_or_placeholder(path: Option<&str>, alt: &str, class: &str) -> Markup {
    html! {
        @match path {
            Some(src) => {
                img class=(class) src=(src) alt=(alt) loading="lazy";
            },
            None => {
                div class={ "pb-placeholder " (class) } role="img" aria-label=(alt) {}
            },
        }
    }
}

/// Render author Markdown to HTML.
///
/// Link targets go through [`RenderContext::href`]. An image target is tried
/// as an asset key first and as a raw URL second; an image with neither is
/// reduced to its alt text. Raw HTML is escaped and shown as text.
pub(crate) fn markdown(text: &str, ctx: &RenderContext<'_>) -> Markup {
    // One flag per open image: whether its start tag was dropped.
    let mut dropped = Vec::new();
    let events = Parser::new(text).filter_map(|event| match event {
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Some(Event::Start(Tag::Link {
            link_type,
            dest_url: ctx.href(&dest_url).into(),
            title,
            id,
        })),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => {
            let src = ctx
                .optional_image(&dest_url)
                .or_else(|| ctx.external(&dest_url))
                .map(str::to_string);
            dropped.push(src.is_none());
            src.map(|src| {
                Event::Start(Tag::Image {
                    link_type,
                    dest_url: src.into(),
                    title,
                    id,
                })
            })
        }
        Event::End(TagEnd::Image) => match dropped.pop() {
            Some(true) => None,
            _ => Some(Event::End(TagEnd::Image)),
        },
        Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
        event => Some(event),
    });
    let mut body = String::new();
    md_html::push_html(&mut body, events);
    PreEscaped(body)
}

//! Bundle assembly: the `compile` entry point.
//!
//! ```text
//! ImageStore ─→ extract_assets ─→ AssetPaths ─┐
//! PageRoster ──────────────────────────────────┼─→ nav + sections ─┐
//! PageDocument ─→ plan_sections ───────────────┘                   ├─→ index.html ─┐
//! Seo ─→ compose_head ─────────────────────────────────────────────┘                ├─→ CompiledBundle
//! extracted files ──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The document is assembled as doctype, `<html lang class>`, head, the nav
//! header, section fragments in `sectionOrder`, the author's body script
//! verbatim, and finally the inline client runtime.
//!
//! Compilation is a pure function of its inputs. Content problems are
//! returned as [`Diagnostic`]s; only contract violations by the caller are
//! errors.

use crate::assets::extract_assets;
use crate::bundle::{CompiledBundle, FileContent, INDEX_HTML};
use crate::config::{CompilerConfig, ConfigError};
use crate::diagnostics::Diagnostic;
use crate::head::{HeadInputs, compose_head};
use crate::nav::render_nav;
use crate::runtime::runtime_script;
use crate::sections::{RenderContext, RenderInputs, plan_sections, render_sections};
use crate::types::{ImageStore, PageDocument, PageRoster, ProductCatalog, SectionKind, Theme};
use maud::{DOCTYPE, PreEscaped, html};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("document JSON error: {0}")]
    Document(#[from] serde_json::Error),
    #[error("index.html references '{path}' but the bundle has no such entry")]
    DanglingReference { path: String },
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Result of one successful compilation.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub bundle: CompiledBundle,
    /// Sections rendered, in document order.
    pub sections: Vec<SectionKind>,
    /// Content problems, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile a page with the stock configuration.
pub fn compile(
    document: &PageDocument,
    images: &ImageStore,
    roster: &PageRoster,
    catalog: &ProductCatalog,
) -> Result<Compilation, CompileError> {
    compile_with_config(document, images, roster, catalog, &CompilerConfig::default())
}

/// Compile a document given as raw JSON.
///
/// A document missing a mandatory field (such as `theme`) is a caller error.
pub fn compile_json(
    document_json: &str,
    images: &ImageStore,
    roster: &PageRoster,
    catalog: &ProductCatalog,
    config: &CompilerConfig,
) -> Result<Compilation, CompileError> {
    let document: PageDocument = serde_json::from_str(document_json)?;
    compile_with_config(&document, images, roster, catalog, config)
}

pub fn compile_with_config(
    document: &PageDocument,
    images: &ImageStore,
    roster: &PageRoster,
    catalog: &ProductCatalog,
    config: &CompilerConfig,
) -> Result<Compilation, CompileError> {
    config.validate()?;
    validate_theme(&document.theme)?;
    let asset_dir = config.asset_dir.trim_end_matches('/');

    let extracted = extract_assets(images, asset_dir);
    let mut diagnostics = extracted.diagnostics;
    tracing::debug!(
        images = images.len(),
        files = extracted.files.len(),
        "extracted assets"
    );

    let plan = plan_sections(document);
    diagnostics.extend(plan.diagnostics);

    let inputs = RenderInputs {
        theme: &document.theme,
        assets: &extracted.paths,
        roster,
        catalog,
        asset_dir,
    };

    let head = compose_head(HeadInputs {
        seo: &document.seo,
        theme: &document.theme,
        head_script: document.scripts.head.as_deref(),
        assets: &extracted.paths,
        config,
    });
    diagnostics.extend(head.diagnostics.iter().cloned());

    let nav_ctx = RenderContext::new(inputs);
    let nav = render_nav(&document.nav, &nav_ctx);
    let (nav_diagnostics, nav_refs) = nav_ctx.into_parts();
    diagnostics.extend(nav_diagnostics);

    let parallel = plan.sections.len() >= config.processing.parallel_threshold;
    let rendered = render_sections(&plan.sections, inputs, parallel);
    tracing::debug!(sections = rendered.len(), parallel, "rendered sections");

    let mut bundle = extracted.files;

    // Closure covers the asset paths the compiler emitted; author text is
    // never parsed for paths.
    let emitted = head
        .asset_refs
        .iter()
        .chain(&nav_refs)
        .chain(rendered.iter().flat_map(|section| &section.asset_refs))
        .map(String::as_str);
    if let Some(path) = bundle.missing_reference(emitted, asset_dir) {
        return Err(CompileError::DanglingReference { path });
    }

    let mut sections = Vec::with_capacity(rendered.len());
    let mut body = String::new();
    for section in rendered {
        sections.push(section.kind);
        diagnostics.extend(section.diagnostics);
        body.push_str(&section.html);
    }

    let page = html! {
        (DOCTYPE)
        html lang=(config.lang) class=(config.default_mode.class()) {
            (head.to_markup())
            body class="antialiased" {
                (nav)
                main id="main" {
                    (PreEscaped(body))
                }
                @if let Some(script) = document.scripts.body.as_deref().filter(|s| !s.trim().is_empty()) {
                    (PreEscaped(script))
                }
                script { (PreEscaped(runtime_script())) }
            }
        }
    };
    bundle.insert(INDEX_HTML, FileContent::Text(page.into_string()));

    for diagnostic in &diagnostics {
        diagnostic.emit();
    }
    tracing::debug!(
        files = bundle.len(),
        diagnostics = diagnostics.len(),
        "compiled bundle"
    );

    Ok(Compilation {
        bundle,
        sections,
        diagnostics,
    })
}

/// Theme tokens end up in class names and CSS; they must be plain palette
/// tokens.
fn validate_theme(theme: &Theme) -> Result<(), CompileError> {
    for (field, value) in [
        ("theme.primaryColor", &theme.primary_color),
        ("theme.textColor", &theme.text_color),
    ] {
        let valid = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(CompileError::InvalidDocument(format!(
                "{field} must be a palette token like 'indigo', got '{value}'"
            )));
        }
    }
    if theme.font_family.trim().is_empty() {
        return Err(CompileError::InvalidDocument(
            "theme.fontFamily must not be empty".into(),
        ));
    }
    Ok(())
}

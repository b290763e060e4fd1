//! # pagebake
//!
//! Compiles a page document into a self-contained static bundle. A page is
//! described by a theme, SEO metadata, navigation and an ordered list of
//! typed content sections; its images live in a separate store keyed by
//! symbolic name. The output is one `index.html`, the extracted image files,
//! and an inline client script. No server runtime is needed to serve it.
//!
//! # Architecture: One Pure Pass
//!
//! ```text
//! PageDocument ┐
//! ImageStore   ├─→  compile  ─→  CompiledBundle { index.html, assets/images/* }
//! PageRoster   │                 + sections rendered
//! ProductCatalog┘                + diagnostics
//! ```
//!
//! [`compile::compile`] reads its four inputs and mutates nothing. Identical
//! inputs always give a byte-identical bundle, so bundles can be compared and
//! fingerprinted ([`bundle::CompiledBundle::fingerprint`]).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Document model: page, theme, SEO, nav, every section block, catalog records |
//! | [`assets`] | Extracts inline data-URI images into bundle files and maps keys to paths |
//! | [`links`] | Resolves `page:<id>` links through the roster |
//! | [`sections`] | Section registry: planning `sectionOrder` and one renderer per kind |
//! | [`nav`] | Header with menus, sign-in/cart and the theme toggle |
//! | [`head`] | `<head>`: SEO, Open Graph, structured data, styles |
//! | [`runtime`] | The fixed client script inlined in every page |
//! | [`compile`] | Assembles the document and the bundle |
//! | [`bundle`] | Output file map: closure check, fingerprint, writing to disk |
//! | [`diagnostics`] | Non-fatal content problems |
//! | [`config`] | `pagebake.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Content Never Fails a Build
//!
//! Two kinds of problems exist. Content problems (a section listed without
//! data, a missing image, a link to a page that does not exist) degrade to a
//! fallback and are reported as [`diagnostics::Diagnostic`]s: the section is
//! skipped, a placeholder is drawn, the link becomes `#`. Contract violations
//! by the caller (a document without a theme, an invalid config, a bundle
//! that would reference a file it does not contain) are the only errors
//! [`compile::compile`] returns.
//!
//! ## A Closed Section Registry
//!
//! Section kinds are a Rust enum, and dispatch is an exhaustive `match`.
//! Adding a kind is a compile error everywhere it still needs handling.
//!
//! ## Maud For Markup
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Every value from
//! the document is escaped by default; only the places that are meant to
//! carry author HTML (embed mounting, author scripts) opt out. Markdown is
//! rendered by pulldown-cmark with its links and images resolved like any
//! other document value and any raw HTML in it escaped.
//!
//! ## Author Scripts Are Trusted
//!
//! `scripts.head`, `scripts.body` and structured data are copied into the
//! page unmodified. They are the author's escape hatch for analytics, chat
//! widgets and custom markup; sanitizing them would break exactly what they
//! are for.

pub mod assets;
pub mod bundle;
pub mod compile;
pub mod config;
pub mod diagnostics;
pub mod head;
pub mod links;
pub mod nav;
pub mod output;
pub mod runtime;
pub mod sections;
pub mod types;

pub use bundle::{CompiledBundle, FileContent};
pub use compile::{Compilation, CompileError, compile, compile_json, compile_with_config};
pub use diagnostics::Diagnostic;

#[cfg(test)]
pub(crate) mod test_helpers;

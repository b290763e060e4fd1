//! Internal link resolution.
//!
//! Authors link to other pages of the same site with `page:<id>`. The roster
//! maps ids to public slugs, and a resolved link is the sibling document
//! `<slug>.html`. Everything else passes through untouched:
//!
//! ```text
//! page:p1              →  about-us.html      (roster has p1 → about-us)
//! page:unknown         →  #                  (dead link, reported)
//! https://example.com  →  https://example.com
//! #pricing             →  #pricing
//! modal:signup         →  modal:signup       (handled client-side)
//! ```
//!
//! Resolution is total: there is no input it fails on.

use crate::types::PageRoster;

const PAGE_PREFIX: &str = "page:";

/// Fallback href for links to pages missing from the roster.
pub const DEAD_LINK: &str = "#";

/// Outcome of resolving one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// `page:<id>` found in the roster.
    Page(String),
    /// `page:<id>` not in the roster.
    Dead { page_id: &'a str },
    /// Not an internal page link.
    PassThrough(&'a str),
}

impl Resolution<'_> {
    pub fn href(&self) -> &str {
        match self {
            Resolution::Page(path) => path,
            Resolution::Dead { .. } => DEAD_LINK,
            Resolution::PassThrough(link) => link,
        }
    }

    pub fn into_href(self) -> String {
        match self {
            Resolution::Page(path) => path,
            Resolution::Dead { .. } => DEAD_LINK.to_string(),
            Resolution::PassThrough(link) => link.to_string(),
        }
    }
}

/// Resolves links against a read-only roster for one compilation.
#[derive(Debug, Clone, Copy)]
pub struct LinkResolver<'r> {
    roster: &'r PageRoster,
}

impl<'r> LinkResolver<'r> {
    pub fn new(roster: &'r PageRoster) -> Self {
        Self { roster }
    }

    pub fn resolve<'a>(&self, link: &'a str) -> Resolution<'a> {
        let Some(page_id) = link.strip_prefix(PAGE_PREFIX) else {
            return Resolution::PassThrough(link);
        };
        match self.roster.get(page_id) {
            Some(slug) => Resolution::Page(page_path(slug)),
            None => Resolution::Dead { page_id },
        }
    }
}

/// Public path of the page with the given slug. An empty slug is the
/// site's home document.
fn page_path(slug: &str) -> String {
    let slug = slug.trim_matches('/');
    if slug.is_empty() {
        "index.html".to_string()
    } else {
        format!("{slug}.html")
    }
}

/// Resolve a single link to its href.
pub fn resolve_link(link: &str, roster: &PageRoster) -> String {
    LinkResolver::new(roster).resolve(link).into_href()
}

//! Non-fatal content diagnostics.
//!
//! A page author can never make compilation fail. Whatever is wrong with the
//! content degrades to a fallback (skip, placeholder, `#`, pass-through) and
//! is reported here instead. Diagnostics are returned in the order they were
//! produced and mirrored to `tracing` at `WARN` level.

use crate::types::SectionKind;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `sectionOrder` names a key no renderer exists for.
    UnknownSection { key: String },
    /// `sectionOrder` names a known section whose data block is absent.
    MissingSectionData { section: SectionKind },
    /// A section key appears more than once; later occurrences are skipped.
    DuplicateSection { section: SectionKind },
    /// A renderer referenced an image key with no usable store entry.
    MissingImage { key: String },
    /// A store value is neither a decodable data URI nor an external URL.
    UnusableImage { key: String, reason: String },
    /// `page:<id>` link whose id is not in the roster; rendered as `#`.
    DeadLink { page_id: String },
    /// A raw link or media URL points into the asset directory at a file the
    /// bundle does not contain; dropped.
    UnbundledReference { value: String },
    /// The products section lists an id the catalog did not resolve.
    MissingProduct { id: String },
    /// Structured data is neither a `<script>` tag nor valid JSON.
    /// It is still emitted, wrapped in a JSON-LD script tag.
    StructuredDataNotJson,
    /// An embed section carries no snippet.
    EmptyEmbed,
}

impl Diagnostic {
    /// Mirror the diagnostic to the `tracing` warning channel.
    pub fn emit(&self) {
        match self {
            Diagnostic::UnknownSection { key } => {
                tracing::warn!(key = %key, "{self}")
            }
            Diagnostic::MissingSectionData { section }
            | Diagnostic::DuplicateSection { section } => {
                tracing::warn!(section = %section, "{self}")
            }
            Diagnostic::MissingImage { key } | Diagnostic::UnusableImage { key, .. } => {
                tracing::warn!(image = %key, "{self}")
            }
            Diagnostic::DeadLink { page_id } => tracing::warn!(page = %page_id, "{self}"),
            Diagnostic::UnbundledReference { value } => {
                tracing::warn!(reference = %value, "{self}")
            }
            Diagnostic::MissingProduct { id } => tracing::warn!(product = %id, "{self}"),
            Diagnostic::StructuredDataNotJson | Diagnostic::EmptyEmbed => {
                tracing::warn!("{self}")
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownSection { key } => {
                write!(f, "unknown section '{key}' in section order, skipped")
            }
            Diagnostic::MissingSectionData { section } => {
                write!(f, "section '{section}' has no data, skipped")
            }
            Diagnostic::DuplicateSection { section } => {
                write!(f, "section '{section}' listed more than once, repeat skipped")
            }
            Diagnostic::MissingImage { key } => {
                write!(f, "image '{key}' not found, placeholder rendered")
            }
            Diagnostic::UnusableImage { key, reason } => {
                write!(f, "image '{key}' is unusable ({reason})")
            }
            Diagnostic::DeadLink { page_id } => {
                write!(f, "link to unknown page '{page_id}' rendered as '#'")
            }
            Diagnostic::UnbundledReference { value } => {
                write!(f, "reference '{value}' is not part of the bundle, dropped")
            }
            Diagnostic::MissingProduct { id } => {
                write!(f, "product '{id}' not in catalog, skipped")
            }
            Diagnostic::StructuredDataNotJson => {
                f.write_str("structured data is not valid JSON, emitted as-is")
            }
            Diagnostic::EmptyEmbed => f.write_str("embed section has no snippet"),
        }
    }
}

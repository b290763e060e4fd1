//! The compiled output set.
//!
//! A [`CompiledBundle`] maps relative output paths to file contents. It always
//! holds `index.html` and zero or more extracted image files. Entries are kept
//! in a `BTreeMap` so iteration, serialization and fingerprinting are
//! deterministic.
//!
//! ## Closure
//!
//! No entry may reference a bundle-internal path that is not itself a key.
//! The compiler checks the asset paths it emitted itself with
//! [`CompiledBundle::missing_reference`]; a failure there is a compiler
//! defect, not a content problem. [`CompiledBundle::verify_closure`] is the
//! after-the-fact check over a finished `index.html`: it reads `src`, `href`
//! and `poster` values and the `og:image` meta content, never free text.
//!
//! ## Wire format
//!
//! ```json
//! {
//!   "index.html": { "encoding": "utf8", "content": "<!DOCTYPE html>..." },
//!   "assets/images/hero.png": { "encoding": "base64", "content": "iVBORw0..." }
//! }
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Path of the HTML document inside every bundle.
pub const INDEX_HTML: &str = "index.html";

/// Attribute prefixes whose values may point at bundle files.
const REFERENCE_NEEDLES: [&str; 4] = [
    " src=\"",
    " href=\"",
    " poster=\"",
    " property=\"og:image\" content=\"",
];

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("entry '{path}' holds invalid base64: {source}")]
    Base64 {
        path: String,
        source: base64::DecodeError,
    },
    #[error("entry path '{0}' escapes the output directory")]
    UnsafePath(String),
}

/// File content, tagged by encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "encoding", content = "content", rename_all = "lowercase")]
pub enum FileContent {
    #[serde(rename = "utf8")]
    Text(String),
    /// Base64 payload, stored exactly as it appeared in the data URI.
    Base64(String),
}

impl FileContent {
    /// Raw bytes of the file, decoding base64 entries.
    pub fn to_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        match self {
            FileContent::Text(text) => Ok(text.as_bytes().to_vec()),
            FileContent::Base64(payload) => STANDARD.decode(payload),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            FileContent::Base64(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompiledBundle {
    files: BTreeMap<String, FileContent>,
}

impl CompiledBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, content: FileContent) {
        self.files.insert(path.into(), content);
    }

    /// Merge every entry of `other` into this bundle.
    pub fn extend(&mut self, other: CompiledBundle) {
        self.files.extend(other.files);
    }

    pub fn get(&self, path: &str) -> Option<&FileContent> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// All entry paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &FileContent)> {
        self.files.iter().map(|(path, content)| (path.as_str(), content))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The HTML document, if present.
    pub fn index_html(&self) -> Option<&str> {
        self.get(INDEX_HTML).and_then(FileContent::as_text)
    }

    /// Return the first bundle-internal reference in `index.html` that has no
    /// entry, or `None` when the bundle is closed.
    ///
    /// A reference is bundle-internal when it starts with `asset_dir/`.
    /// Absolute URLs, anchors and sibling page links are outside the bundle
    /// by construction.
    pub fn verify_closure(&self, asset_dir: &str) -> Option<String> {
        self.missing_reference(referenced_values(self.index_html()?), asset_dir)
    }

    /// First of `references` that lies under `asset_dir` but has no entry.
    pub fn missing_reference<'r>(
        &self,
        references: impl IntoIterator<Item = &'r str>,
        asset_dir: &str,
    ) -> Option<String> {
        let prefix = format!("{}/", asset_dir.trim_end_matches('/'));
        references
            .into_iter()
            .find(|value| value.starts_with(&prefix) && !self.contains(value))
            .map(str::to_string)
    }

    /// SHA-256 over all entries in path order, as a hex string.
    ///
    /// Identical bundles always produce identical fingerprints; the encoding
    /// tag is part of the hash so a text and a base64 entry never collide.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (path, content) in &self.files {
            hasher.update(path.as_bytes());
            hasher.update(b"\0");
            match content {
                FileContent::Text(text) => {
                    hasher.update(b"utf8\0");
                    hasher.update(text.as_bytes());
                }
                FileContent::Base64(payload) => {
                    hasher.update(b"base64\0");
                    hasher.update(payload.as_bytes());
                }
            }
            hasher.update(b"\0");
        }
        format!("{:x}", hasher.finalize())
    }

    /// Write every entry below `output_dir`, decoding base64 entries.
    pub fn write_to(&self, output_dir: &Path) -> Result<(), BundleError> {
        for (path, content) in &self.files {
            if path.starts_with('/') || path.split('/').any(|part| part == "..") {
                return Err(BundleError::UnsafePath(path.clone()));
            }
            let target = output_dir.join(path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let bytes = content.to_bytes().map_err(|source| BundleError::Base64 {
                path: path.clone(),
                source,
            })?;
            fs::write(&target, bytes)?;
        }
        Ok(())
    }
}

/// Collect the values of reference attributes (`src="..."` etc.) in `html`.
///
/// Only double-quoted values are recognized, which is what maud emits.
fn referenced_values(html: &str) -> Vec<&str> {
    let mut values = Vec::new();
    for needle in REFERENCE_NEEDLES {
        let mut rest = html;
        while let Some(start) = rest.find(needle) {
            let after = &rest[start + needle.len()..];
            match after.find('"') {
                Some(end) => {
                    values.push(&after[..end]);
                    rest = &after[end..];
                }
                None => break,
            }
        }
    }
    values
}

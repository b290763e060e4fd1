//! Asset extraction: inline data URIs → addressable bundle files.
//!
//! The image store holds each image either as an inline data URI or as an
//! already-external URL. Extraction turns every decodable
//! `data:image/<type>;base64,<payload>` value into a bundle entry at
//! `<asset_dir>/<key>.<ext>` and records the key → path mapping that section
//! renderers use for every `src`.
//!
//! ## Resolution rules
//!
//! | Store value | Mapping | File |
//! |-------------|---------|------|
//! | `data:image/png;base64,AAAA` | `assets/images/<key>.png` | payload, base64 |
//! | `https://cdn.example.com/a.jpg` | unchanged | none |
//! | any other non-data-URI string | unchanged | none |
//! | data URI with undecodable payload | unchanged + diagnostic | none |
//! | empty string | none (renders a placeholder) | none |
//! | relative path under `asset_dir` | none + diagnostic | none |
//!
//! The last rule keeps the bundle closed: a pass-through value pointing into
//! the asset directory would reference a file the bundle does not contain.
//!
//! Extraction never fails. Keys are iterated in sorted order, so file names
//! are stable across runs even when two keys sanitize to the same name.

use crate::bundle::{CompiledBundle, FileContent};
use crate::diagnostics::Diagnostic;
use crate::types::ImageStore;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::collections::{BTreeMap, BTreeSet};

/// Reserved image key for the Open Graph preview image.
pub const OG_IMAGE_KEY: &str = "og_image";

/// Resolved image key → path or URL usable as an `src`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetPaths {
    paths: BTreeMap<String, String>,
}

impl AssetPaths {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.paths.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether any key maps to exactly `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.paths.values().any(|p| p == path)
    }

    pub fn insert(&mut self, key: impl Into<String>, path: impl Into<String>) {
        self.paths.insert(key.into(), path.into());
    }
}

/// Output of [`extract_assets`].
#[derive(Debug, Default)]
pub struct ExtractedAssets {
    pub paths: AssetPaths,
    pub files: CompiledBundle,
    pub diagnostics: Vec<Diagnostic>,
}

/// A parsed `data:image/...;base64,...` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri<'a> {
    /// Media subtype, e.g. `png` or `svg+xml`.
    pub subtype: &'a str,
    pub payload: &'a str,
}

/// Parse an image data URI. Returns `None` for anything else.
///
/// Parameters between the media type and `;base64` (such as
/// `;charset=utf-8`) are accepted and ignored.
pub fn parse_data_uri(value: &str) -> Option<DataUri<'_>> {
    let rest = value.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let meta = meta.strip_suffix(";base64")?;
    let media_type = meta.split(';').next()?;
    let subtype = media_type.strip_prefix("image/")?;
    if subtype.is_empty() || payload.is_empty() {
        return None;
    }
    Some(DataUri { subtype, payload })
}

/// File extension for an image media subtype.
pub fn extension_for(subtype: &str) -> String {
    match subtype.to_ascii_lowercase().as_str() {
        "jpeg" | "pjpeg" | "jpg" => "jpg".to_string(),
        "svg+xml" | "svg" => "svg".to_string(),
        "x-icon" | "vnd.microsoft.icon" => "ico".to_string(),
        other => {
            let ext: String = other
                .chars()
                .take_while(|c| *c != '+')
                .filter(char::is_ascii_alphanumeric)
                .collect();
            if ext.is_empty() { "bin".to_string() } else { ext }
        }
    }
}

/// Reduce an image key to a safe file stem: `[A-Za-z0-9_-]`, others → `-`.
pub fn sanitize_key(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();
    if stem.is_empty() {
        "image".to_string()
    } else {
        stem
    }
}

/// Extract inline images from the store into bundle files.
pub fn extract_assets(images: &ImageStore, asset_dir: &str) -> ExtractedAssets {
    let asset_dir = asset_dir.trim_end_matches('/');
    let asset_prefix = format!("{asset_dir}/");
    let mut out = ExtractedAssets::default();
    let mut used_names = BTreeSet::new();

    for (key, value) in images {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let Some(uri) = parse_data_uri(value) else {
            if value.starts_with(&asset_prefix) {
                out.diagnostics.push(Diagnostic::UnusableImage {
                    key: key.clone(),
                    reason: format!("relative path '{value}' is not part of the bundle"),
                });
            } else {
                out.paths.insert(key.clone(), value);
            }
            continue;
        };

        if let Err(err) = STANDARD.decode(uri.payload) {
            out.diagnostics.push(Diagnostic::UnusableImage {
                key: key.clone(),
                reason: format!("invalid base64 payload: {err}"),
            });
            out.paths.insert(key.clone(), value);
            continue;
        }

        let ext = extension_for(uri.subtype);
        let stem = unique_stem(&sanitize_key(key), &ext, &mut used_names);
        let path = format!("{asset_dir}/{stem}.{ext}");
        tracing::debug!(image = %key, path = %path, "extracted inline image");
        out.files
            .insert(path.clone(), FileContent::Base64(uri.payload.to_string()));
        out.paths.insert(key.clone(), path);
    }

    out
}

fn unique_stem(stem: &str, ext: &str, used: &mut BTreeSet<String>) -> String {
    let mut candidate = stem.to_string();
    let mut n = 2;
    while !used.insert(format!("{candidate}.{ext}")) {
        candidate = format!("{stem}-{n}");
        n += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(entries: &[(&str, &str)]) -> ImageStore {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parse_png_data_uri() {
        let uri = parse_data_uri("data:image/png;base64,AAAA").unwrap();
        assert_eq!(uri.subtype, "png");
        assert_eq!(uri.payload, "AAAA");
    }

    #[test]
    fn parse_data_uri_with_parameters() {
        let uri = parse_data_uri("data:image/svg+xml;charset=utf-8;base64,PHN2Zz4=").unwrap();
        assert_eq!(uri.subtype, "svg+xml");
    }

    #[test]
    fn parse_rejects_non_image_and_non_base64() {
        assert_eq!(parse_data_uri("data:text/plain;base64,AAAA"), None);
        assert_eq!(parse_data_uri("data:image/png,rawbytes"), None);
        assert_eq!(parse_data_uri("https://example.com/a.png"), None);
        assert_eq!(parse_data_uri("data:image/png;base64,"), None);
    }

    #[test]
    fn extension_mapping() {
        assert_eq!(extension_for("png"), "png");
        assert_eq!(extension_for("jpeg"), "jpg");
        assert_eq!(extension_for("JPEG"), "jpg");
        assert_eq!(extension_for("svg+xml"), "svg");
        assert_eq!(extension_for("x-icon"), "ico");
        assert_eq!(extension_for("webp"), "webp");
        assert_eq!(extension_for("+++"), "bin");
    }

    #[test]
    fn sanitize_key_replaces_path_characters() {
        assert_eq!(sanitize_key("gallery_3"), "gallery_3");
        assert_eq!(sanitize_key("../etc/passwd"), "---etc-passwd");
        assert_eq!(sanitize_key(""), "image");
    }

    #[test]
    fn data_uri_becomes_bundle_file() {
        let out = extract_assets(
            &store(&[("hero", "data:image/png;base64,AAAA")]),
            "assets/images",
        );
        assert_eq!(out.paths.get("hero"), Some("assets/images/hero.png"));
        assert_eq!(
            out.files.get("assets/images/hero.png"),
            Some(&FileContent::Base64("AAAA".to_string()))
        );
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn external_url_passes_through_without_file() {
        let out = extract_assets(
            &store(&[("logo", "https://cdn.example.com/logo.svg")]),
            "assets/images",
        );
        assert_eq!(out.paths.get("logo"), Some("https://cdn.example.com/logo.svg"));
        assert!(out.files.is_empty());
    }

    #[test]
    fn malformed_value_maps_to_itself() {
        let out = extract_assets(&store(&[("hero", "not a uri")]), "assets/images");
        assert_eq!(out.paths.get("hero"), Some("not a uri"));
        assert!(out.files.is_empty());
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn undecodable_payload_is_reported_and_passed_through() {
        let value = "data:image/png;base64,@@@@";
        let out = extract_assets(&store(&[("hero", value)]), "assets/images");
        assert_eq!(out.paths.get("hero"), Some(value));
        assert!(out.files.is_empty());
        assert!(matches!(
            out.diagnostics.as_slice(),
            [Diagnostic::UnusableImage { key, .. }] if key == "hero"
        ));
    }

    #[test]
    fn empty_value_is_unmapped() {
        let out = extract_assets(&store(&[("hero", "  ")]), "assets/images");
        assert_eq!(out.paths.get("hero"), None);
    }

    #[test]
    fn relative_asset_path_is_rejected() {
        let out = extract_assets(
            &store(&[("hero", "assets/images/old.png")]),
            "assets/images",
        );
        assert_eq!(out.paths.get("hero"), None);
        assert_eq!(out.diagnostics.len(), 1);
    }

    #[test]
    fn colliding_sanitized_keys_get_suffix() {
        let out = extract_assets(
            &store(&[
                ("a/b", "data:image/png;base64,AAAA"),
                ("a?b", "data:image/png;base64,AAAA"),
            ]),
            "assets/images",
        );
        assert_eq!(out.paths.get("a/b"), Some("assets/images/a-b.png"));
        assert_eq!(out.paths.get("a?b"), Some("assets/images/a-b-2.png"));
        assert_eq!(out.files.len(), 2);
    }

    #[test]
    fn trailing_slash_in_asset_dir_is_ignored() {
        let out = extract_assets(
            &store(&[("hero", "data:image/jpeg;base64,AAAA")]),
            "static/img/",
        );
        assert_eq!(out.paths.get("hero"), Some("static/img/hero.jpg"));
    }
}

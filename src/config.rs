//! Compiler configuration.
//!
//! `pagebake.toml` is optional. When present it is layered over the stock
//! defaults: every key it sets wins, every key it leaves out keeps its
//! default. The merged table is deserialized and then checked with
//! [`CompilerConfig::validate`].
//!
//! ## Keys
//!
//! ```toml
//! lang = "en"
//! framework_url = "https://cdn.tailwindcss.com"
//! default_mode = "light"      # root class until the stored preference applies
//! asset_dir = "assets/images"
//!
//! [fonts]
//! stylesheet_url = "https://fonts.googleapis.com/css2"
//! weights = [400, 600, 700]
//!
//! [colors.light]              # [colors.dark] has the same keys
//! background = "#ffffff"
//! surface = "#f9fafb"
//! text = "#111827"
//! text_muted = "#6b7280"
//! border = "#e5e7eb"
//!
//! [processing]
//! max_processes = 4           # omit for one thread per core
//! parallel_threshold = 8      # sections before rendering goes parallel
//! ```
//!
//! Every table uses `deny_unknown_fields`, so a misspelled key is an error
//! instead of a silently ignored setting.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// File name looked up by [`load_config`].
pub const CONFIG_FILENAME: &str = "pagebake.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("config is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config cannot be encoded as TOML: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("invalid config value: {0}")]
    Validation(String),
}

fn invalid(message: &str) -> Result<(), ConfigError> {
    Err(ConfigError::Validation(message.to_string()))
}

/// Compiler configuration loaded from `pagebake.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// `lang` attribute of the root element.
    pub lang: String,
    /// CSS utility framework, loaded by reference from every bundle.
    pub framework_url: String,
    /// Color mode class on the root element before the runtime runs.
    pub default_mode: ColorMode,
    /// Directory (relative to the bundle root) for extracted images.
    pub asset_dir: String,
    pub fonts: FontsConfig,
    pub colors: ModePalettes,
    pub processing: ProcessingConfig,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            framework_url: "https://cdn.tailwindcss.com".to_string(),
            default_mode: ColorMode::Light,
            asset_dir: "assets/images".to_string(),
            fonts: FontsConfig::default(),
            colors: ModePalettes::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl CompilerConfig {
    /// Reject settings that would produce a broken or escaping bundle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dir = self.asset_dir.trim_end_matches('/');
        if dir.is_empty() || dir.starts_with('/') || dir.split('/').any(|p| p == "..") {
            return invalid("asset_dir must be a relative path inside the bundle");
        }
        if self.framework_url.trim().is_empty() {
            return invalid("framework_url must not be empty");
        }
        match self.fonts.weights.as_slice() {
            [] => invalid("fonts.weights must list at least one weight"),
            weights if weights.iter().any(|w| !(100..=900).contains(w)) => {
                invalid("fonts.weights must be between 100 and 900")
            }
            _ => Ok(()),
        }
    }
}

/// The two states of the page color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Class name applied to the root element.
    pub fn class(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

/// Web font loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    /// Stylesheet endpoint taking a css2-style `family=` query.
    pub stylesheet_url: String,
    pub weights: Vec<u32>,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            stylesheet_url: "https://fonts.googleapis.com/css2".to_string(),
            weights: vec![400, 600, 700],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Rendering threads; `None` means one per core. Never raised above
    /// the core count.
    pub max_processes: Option<usize>,
    /// Minimum number of sections before fragments render in parallel.
    pub parallel_threshold: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_processes: None,
            parallel_threshold: 8,
        }
    }
}

/// Thread count for the rendering pool: the configured maximum, clamped to
/// `1..=cores`.
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism().map_or(1, |n| n.get());
    match config.max_processes {
        Some(requested) => requested.clamp(1, cores),
        None => cores,
    }
}

/// Page palettes for both color modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModePalettes {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for ModePalettes {
    fn default() -> Self {
        Self {
            light: Palette::light(),
            dark: Palette::dark(),
        }
    }
}

/// Neutral colors for one mode. Accent colors come from the document theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub background: String,
    /// Cards, panels and form fields.
    pub surface: String,
    pub text: String,
    /// Secondary copy, captions, footer.
    pub text_muted: String,
    pub border: String,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: "#ffffff".into(),
            surface: "#f9fafb".into(),
            text: "#111827".into(),
            text_muted: "#6b7280".into(),
            border: "#e5e7eb".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#0b0f19".into(),
            surface: "#111827".into(),
            text: "#f3f4f6".into(),
            text_muted: "#9ca3af".into(),
            border: "#1f2937".into(),
        }
    }

    /// `(custom property, value)` pairs in declaration order.
    fn properties(&self) -> [(&'static str, &str); 5] {
        [
            ("--pb-bg", &self.background),
            ("--pb-surface", &self.surface),
            ("--pb-text", &self.text),
            ("--pb-text-muted", &self.text_muted),
            ("--pb-border", &self.border),
        ]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

// =============================================================================
// Loading
// =============================================================================

/// The stock configuration as a TOML value: the base layer every file is
/// merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(CompilerConfig::default())?)
}

/// Layer `overlay` onto `base` in place. Nested tables merge key by key;
/// any other overlay value wins outright.
pub fn merge_toml(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge_toml(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Read a config file as an overlay; `None` when the file does not exist.
pub fn read_overlay(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(toml::from_str(&text)?)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Apply `overlay` to `base`, deserialize, and validate.
pub fn resolve_config(
    mut base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<CompilerConfig, ConfigError> {
    if let Some(overlay) = overlay {
        merge_toml(&mut base, overlay);
    }
    let config = CompilerConfig::deserialize(base)?;
    config.validate()?;
    Ok(config)
}

/// Load `pagebake.toml` from `dir`, or the stock config if there is none.
pub fn load_config(dir: &Path) -> Result<CompilerConfig, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILENAME))
}

/// Load one config file over the stock defaults.
pub fn load_config_file(path: &Path) -> Result<CompilerConfig, ConfigError> {
    resolve_config(stock_defaults_value()?, read_overlay(path)?)
}

/// Documented stock `pagebake.toml`, printed by `pagebake gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# pagebake.toml
#
# Every key is optional; the values below are the defaults.
# Unknown keys are rejected.

# `lang` attribute of the generated <html> element.
lang = "en"

# CSS utility framework loaded by reference from every bundle.
framework_url = "https://cdn.tailwindcss.com"

# Color mode class on <html> before the visitor's stored preference
# (or their OS preference) is applied. "light" or "dark".
default_mode = "light"

# Bundle directory for images extracted from inline data URIs.
asset_dir = "assets/images"

## Fonts ######################################################################

[fonts]
# Stylesheet endpoint; the theme font family is passed as `family=`.
stylesheet_url = "https://fonts.googleapis.com/css2"

# Font weights to request (100-900).
weights = [400, 600, 700]

## Neutral colors #############################################################
# Accent colors come from the page theme. These cover page chrome and are
# switched by the `dark` class on <html>.

[colors.light]
background = "#ffffff"
surface = "#f9fafb"       # cards, panels, form fields
text = "#111827"
text_muted = "#6b7280"    # captions, footer, secondary copy
border = "#e5e7eb"

[colors.dark]
background = "#0b0f19"
surface = "#111827"
text = "#f3f4f6"
text_muted = "#9ca3af"
border = "#1f2937"

## Processing #################################################################

[processing]
# Rendering threads. Leave unset for one per CPU core.
# max_processes = 4

# Section fragments render in parallel once a page has at least this many.
parallel_threshold = 8
"##
}

/// CSS custom properties for both palettes.
///
/// Dark values are keyed on the `html.dark` class that the client runtime
/// toggles, not on `prefers-color-scheme`.
pub fn generate_color_css(colors: &ModePalettes) -> String {
    let block = |selector: &str, palette: &Palette| {
        let body: String = palette
            .properties()
            .iter()
            .map(|(name, value)| format!("    {name}: {value};\n"))
            .collect();
        format!("{selector} {{\n{body}}}")
    };
    format!(
        "{}\n\n{}",
        block(":root", &colors.light),
        block("html.dark", &colors.dark)
    )
}

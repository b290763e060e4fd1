//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output lists what the page is made of, not how it was computed: the
//! rendered sections in order, the files of the bundle, and every content
//! diagnostic. Diagnostics are shown even when logging is quiet, since they
//! are the author's only feedback about skipped content.
//!
//! # Output Format
//!
//! ```text
//! Sections
//! 001 hero
//! 002 features
//! 003 pricing
//!
//! Files
//!     assets/images/hero.png (48.2 KB)
//!     index.html (31.7 KB)
//!
//! Diagnostics
//!     section 'video' has no data, skipped
//!     link to unknown page 'p7' rendered as '#'
//!
//! Compiled 3 sections, 2 files, 2 diagnostics
//! Fingerprint: 9f86d081884c7d65...
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::bundle::FileContent;
use crate::compile::Compilation;
use crate::types::SectionKind;
use std::path::Path;

/// Prefix of every line listed under a heading.
const ITEM: &str = "    ";

/// `001 hero`: render position, 1-based and zero-padded to three digits.
fn section_line(position: usize, kind: SectionKind) -> String {
    format!("{position:03} {kind}")
}

fn item_line(item: impl std::fmt::Display) -> String {
    format!("{ITEM}{item}")
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Size of a file once written, without decoding it.
fn content_size(content: &FileContent) -> usize {
    match content {
        FileContent::Text(text) => text.len(),
        FileContent::Base64(payload) => {
            let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
            (payload.len() / 4 * 3).saturating_sub(padding)
        }
    }
}

/// Human-readable byte count.
fn format_size(bytes: usize) -> String {
    match bytes {
        0..1024 => format!("{bytes} B"),
        1024..1_048_576 => format!("{:.1} KB", bytes as f64 / 1024.0),
        _ => format!("{:.1} MB", bytes as f64 / 1_048_576.0),
    }
}

/// Format the result of a compilation.
pub fn format_compile_output(compilation: &Compilation) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Sections".to_string());
    if compilation.sections.is_empty() {
        lines.push(item_line("(none)"));
    }
    lines.extend(
        compilation
            .sections
            .iter()
            .enumerate()
            .map(|(i, kind)| section_line(i + 1, *kind)),
    );

    lines.push(String::new());
    lines.push("Files".to_string());
    for (path, content) in compilation.bundle.entries() {
        lines.push(item_line(format!(
            "{path} ({})",
            format_size(content_size(content))
        )));
    }

    if !compilation.diagnostics.is_empty() {
        lines.push(String::new());
        lines.push("Diagnostics".to_string());
        lines.extend(compilation.diagnostics.iter().map(item_line));
    }

    lines.push(String::new());
    lines.push(format!(
        "Compiled {}, {}, {}",
        plural(compilation.sections.len(), "section"),
        plural(compilation.bundle.len(), "file"),
        plural(compilation.diagnostics.len(), "diagnostic")
    ));
    lines.push(format!("Fingerprint: {}", compilation.bundle.fingerprint()));
    lines
}

pub fn print_compile_output(compilation: &Compilation) {
    for line in format_compile_output(compilation) {
        println!("{}", line);
    }
}

/// Format the confirmation after a bundle was written.
pub fn format_write_output(compilation: &Compilation, output_dir: &Path) -> Vec<String> {
    vec![format!(
        "Wrote {} to {}",
        plural(compilation.bundle.len(), "file"),
        output_dir.display()
    )]
}

pub fn print_write_output(compilation: &Compilation, output_dir: &Path) {
    for line in format_write_output(compilation, output_dir) {
        println!("{}", line);
    }
}

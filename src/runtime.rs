//! Client runtime.
//!
//! One fixed script is inlined at the end of every page. It depends only on
//! the compiler version, never on document content, and binds to the
//! attributes the renderers emit:
//!
//! - `data-theme-toggle`: light/dark class on `<html>`, persisted in
//!   `localStorage` under `pb-theme`, falling back to `prefers-color-scheme`
//! - `data-menu-toggle` / `data-mobile-menu`: mobile menu
//! - `data-faq-question`: animates the following answer's `max-height`
//! - `data-animate`: entrance animation through `IntersectionObserver`
//! - `data-embed`: decodes and mounts an embed snippet, re-creating scripts
//! - `modal:<name>` links: `pagebake:modal` event and `dialog[data-modal]`

/// The runtime script, headed by the compiler version.
pub const RUNTIME_JS: &str = concat!(
    "/* pagebake ",
    env!("CARGO_PKG_VERSION"),
    " */\n",
    include_str!("../static/runtime.js")
);

/// Text of the client runtime.
pub fn runtime_script() -> &'static str {
    RUNTIME_JS
}

//! Third-party embed snippets.
//!
//! The author's HTML is not inlined as markup: it is percent-encoded into a
//! `data-embed` attribute and the client runtime mounts it, re-creating each
//! `<script>` so that it executes. Scripts inserted via `innerHTML` never run.

use super::{RenderContext, section_heading, section_shell};
use crate::diagnostics::Diagnostic;
use crate::types::{EmbedSection, SectionKind};
use maud::{Markup, html};

pub(super) fn render(embed: &EmbedSection, ctx: &RenderContext<'_>) -> Markup {
    let code = embed.code.trim();
    if code.is_empty() {
        ctx.report(Diagnostic::EmptyEmbed);
    }
    let content = html! {
        (section_heading(ctx, &embed.title, ""))
        @if !code.is_empty() {
            div class="pb-embed mx-auto max-w-4xl" data-embed=(urlencoding::encode(code)) {}
        }
    };
    section_shell(SectionKind::Embed, true, "py-20", content)
}

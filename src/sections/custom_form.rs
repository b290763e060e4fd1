//! Author-defined form.
//!
//! Fields render by kind. A field without an explicit `name` submits under a
//! slug of its label. Without an `action` the form is marked
//! `data-static-form` and has nowhere to post to; hosting decides what to do
//! with it.

use super::{RenderContext, section_heading, section_shell};
use crate::types::{CustomFormSection, FieldKind, FormField, SectionKind};
use maud::{Markup, html};

const INPUT_CLASS: &str = "pb-surface pb-border w-full rounded-lg border px-4 py-3";

/// Form field name derived from a label: lowercase alphanumerics joined
/// by `_`.
fn field_name(field: &FormField, idx: usize) -> String {
    if !field.name.trim().is_empty() {
        return field.name.trim().to_string();
    }
    let slug = field
        .label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_");
    if slug.is_empty() {
        format!("field_{idx}")
    } else {
        slug
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Tel => "tel",
        FieldKind::Number => "number",
        FieldKind::Date => "date",
        FieldKind::Checkbox => "checkbox",
        FieldKind::Text | FieldKind::Textarea | FieldKind::Select => "text",
    }
}

fn render_field(field: &FormField, idx: usize) -> Markup {
    let name = field_name(field, idx);
    let id = format!("form-{name}");
    let placeholder = field.placeholder.as_deref().unwrap_or("");
    html! {
        @match field.kind {
            FieldKind::Checkbox => {
                label class="pb-body flex items-center gap-3" for=(id) {
                    input id=(id) type="checkbox" name=(name) required[field.required];
                    (field.label)
                }
            },
            FieldKind::Textarea => {
                div {
                    label class="pb-body mb-1 block text-sm font-medium" for=(id) { (field.label) }
                    textarea id=(id) class=(INPUT_CLASS) name=(name) rows="4" placeholder=(placeholder) required[field.required] {}
                }
            },
            FieldKind::Select => {
                div {
                    label class="pb-body mb-1 block text-sm font-medium" for=(id) { (field.label) }
                    select id=(id) class=(INPUT_CLASS) name=(name) required[field.required] {
                        @for option in &field.options {
                            option value=(option) { (option) }
                        }
                    }
                }
            },
            kind => {
                div {
                    label class="pb-body mb-1 block text-sm font-medium" for=(id) { (field.label) }
                    input id=(id) class=(INPUT_CLASS) type=(input_type(kind)) name=(name) placeholder=(placeholder) required[field.required];
                }
            },
        }
    }
}

pub(super) fn render(form: &CustomFormSection, ctx: &RenderContext<'_>) -> Markup {
    let action = form
        .action
        .as_deref()
        .filter(|a| !a.trim().is_empty())
        .map(|a| ctx.href(a));
    let submit_text = form.submit_text.as_deref().unwrap_or("Submit");
    let content = html! {
        (section_heading(ctx, &form.title, &form.description))
        form class="pb-surface pb-border mx-auto max-w-xl space-y-5 rounded-2xl border p-8"
            method="post" action=[action.as_deref()] data-static-form[action.is_none()] {
            @for (idx, field) in form.fields.iter().enumerate() {
                (render_field(field, idx))
            }
            button type="submit" class={ "w-full rounded-lg px-6 py-3 font-semibold text-white " (ctx.primary("bg", 600)) } {
                (submit_text)
            }
        }
    };
    section_shell(SectionKind::CustomForm, true, "py-20", content)
}

#![allow(dead_code)]

use oxide_form_fields::widgets::{render_field, FieldView};
use oxide_form_fields::{FieldMeta, FormState};

pub fn form_with_meta(name: &str, touched: bool, error: Option<&str>) -> FormState {
    let mut meta = FieldMeta::new();
    meta.touched = touched;
    meta.error = error.map(str::to_string);
    FormState::new().with_meta(name, meta)
}

pub fn render<V: FieldView>(form: &FormState, view: &V) -> Option<String> {
    render_field(form, view)
}

/// Strips tags and decodes entities, leaving only text content.
pub fn text_content(html: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim()
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

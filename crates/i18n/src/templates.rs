//! Default message templates for the built-in rules.
//!
//! `{field}` is replaced by the field label and `{param}` by the first rule
//! parameter. A template without `{field}` is rendered after the label.

use crate::Locale;

/// Label placeholder token.
pub const FIELD_TOKEN: &str = "{field}";
/// First-parameter placeholder token.
pub const PARAM_TOKEN: &str = "{param}";

const EN: &[(&str, &str)] = &[
    ("required", "{field} is required"),
    ("email", "invalid format"),
    ("password", "must contain letters and digits, length 6-20"),
];

const ZH: &[(&str, &str)] = &[
    ("required", "{field} 为必填字段"),
    ("email", "格式不正确"),
    ("password", "必须包含字母和数字，长度6-20位"),
];

/// Default `(rule, template)` pairs for `locale`.
#[must_use]
pub const fn default_templates(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Zh => ZH,
    }
}

/// Text used when no template exists for a rule in any usable locale.
#[must_use]
pub fn raw_failure_text(rule: &str, label: &str) -> String {
    format!("Field validation for '{label}' failed on the '{rule}' tag")
}

/// Substitute tokens in `template`.
///
/// Tokens are replaced in a single pass over the template, so token text
/// inside the label or the parameter is copied verbatim.
#[must_use]
pub fn render(template: &str, label: &str, params: &[&str]) -> String {
    let param = params.first().copied().unwrap_or_default();
    let mut rendered = String::with_capacity(template.len() + label.len() + param.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let (head, tail) = rest.split_at(start);
        rendered.push_str(head);
        if let Some(after) = tail.strip_prefix(FIELD_TOKEN) {
            rendered.push_str(label);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(PARAM_TOKEN) {
            rendered.push_str(param);
            rest = after;
        } else {
            rendered.push('{');
            rest = tail.get(1..).unwrap_or_default();
        }
    }
    rendered.push_str(rest);

    if template.contains(FIELD_TOKEN) {
        rendered
    } else {
        format!("{label} {rendered}")
    }
}

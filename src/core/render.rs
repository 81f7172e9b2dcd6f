//! Placeholder substitution for topic templates.
//!
//! Placeholders use single braces, `{name}`, where `name` is one of the
//! keys of [`ConfigDocument`]. Scalar fields are inserted verbatim; list
//! fields are rendered as bullet lines by [`format_list`]. Any other
//! `{...}` text passes through untouched, and substituted values are
//! never scanned again.

use super::document::ConfigDocument;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is a valid regex")
});

/// How a config field is read.
#[derive(Clone, Copy)]
pub enum Accessor {
    Text(fn(&ConfigDocument) -> &str),
    List(fn(&ConfigDocument) -> &[String]),
}

/// Every field that may appear in a template, keyed by its YAML name.
pub const FIELDS: &[(&str, Accessor)] = &[
    ("audience", Accessor::Text(|c| &c.audience)),
    ("learning_stage", Accessor::Text(|c| &c.learning_stage)),
    ("topic", Accessor::Text(|c| &c.topic)),
    ("context", Accessor::Text(|c| &c.context)),
    ("analogies", Accessor::Text(|c| &c.analogies)),
    ("concepts", Accessor::List(|c| &c.concepts)),
    (
        "explanation_requirements",
        Accessor::List(|c| &c.explanation_requirements),
    ),
    ("formatting", Accessor::List(|c| &c.formatting)),
    ("constraints", Accessor::List(|c| &c.constraints)),
    ("output_format", Accessor::List(|c| &c.output_format)),
    ("purpose", Accessor::Text(|c| &c.purpose)),
    ("tone", Accessor::Text(|c| &c.tone)),
];

impl Accessor {
    fn value(self, config: &ConfigDocument) -> Cow<'_, str> {
        match self {
            Accessor::Text(get) => Cow::Borrowed(get(config)),
            Accessor::List(get) => Cow::Owned(format_list(get(config))),
        }
    }
}

/// Renders list items as `"\n- a\n- b"`; an empty list renders as `""`.
pub fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!("\n- {}", items.join("\n- "))
}

/// Looks up the substitution value for a bare placeholder name.
pub fn lookup<'a>(name: &str, config: &'a ConfigDocument) -> Option<Cow<'a, str>> {
    FIELDS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, accessor)| accessor.value(config))
}

/// Replaces every occurrence of every known placeholder in `template`.
pub fn render(template: &str, config: &ConfigDocument) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match lookup(&caps[1], config) {
            Some(value) => value.into_owned(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

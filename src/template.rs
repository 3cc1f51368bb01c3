//! Deferred-value markers
//!
//! A property whose raw value contains a `{{ name }}` marker is not known
//! until run time. Validation treats such properties as deferred; once the
//! runtime arguments are available the markers are substituted here.

use crate::error::{Error, Result};
use crate::types::RuntimeArguments;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching deferred-value markers: {{ argument.name }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_\-]*(?:\.[a-zA-Z_][a-zA-Z0-9_\-]*)*)\s*\}\}")
        .expect("template regex is valid")
});

/// Render a template string with the given runtime arguments
///
/// Every marker must resolve; all undefined names are reported together.
pub fn render(template: &str, args: &RuntimeArguments) -> Result<String> {
    let mut undefined = Vec::new();

    let rendered = TEMPLATE_REGEX.replace_all(template, |cap: &regex::Captures<'_>| {
        let name = &cap[1];
        match args.get(name) {
            Some(value) => value.clone(),
            None => {
                undefined.push(name.to_string());
                cap[0].to_string()
            }
        }
    });

    if undefined.is_empty() {
        Ok(rendered.into_owned())
    } else {
        Err(Error::undefined_var(undefined.join(", ")))
    }
}

/// Check if a string contains deferred-value markers
pub fn has_templates(s: &str) -> bool {
    TEMPLATE_REGEX.is_match(s)
}

/// Extract all argument names from a template
pub fn extract_variables(template: &str) -> Vec<String> {
    TEMPLATE_REGEX
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .collect()
}

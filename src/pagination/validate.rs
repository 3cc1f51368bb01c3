//! Pagination property checks

use super::types::{ExtraRule, PaginationType, PAGINATION_INDEX_PLACEHOLDER};
use crate::config::{property, HttpSourceConfig};
use crate::diagnostics::DiagnosticSink;
use crate::error::{Error, Result};
use crate::resolve::require;

/// Check pagination properties against the selected pagination type
///
/// Order: the type's extra rule, then fields that must be empty, then
/// fields that must be set, then integer syntax of owned index fields.
pub fn validate_pagination(config: &HttpSourceConfig, sink: &mut DiagnosticSink) -> Result<()> {
    if config.is_deferred(property::PAGINATION_TYPE) {
        tracing::debug!("Pagination type is deferred, skipping pagination checks");
        return Ok(());
    }

    let pagination = require(config.pagination_type()?, property::PAGINATION_TYPE)?;
    let rules = pagination.rules();
    let reason = format!("pagination type is '{pagination}'");

    if let Some(ExtraRule::UrlIndexPlaceholder) = rules.extra {
        sink.check(check_index_placeholder(config, pagination))?;
    }

    for field in rules.forbidden() {
        sink.check(config.assert_is_not_set(field.property(), &reason))?;
    }

    for field in rules.required {
        sink.check(config.assert_is_set(field.property(), &reason))?;
    }

    for field in rules.required.iter().chain(rules.optional) {
        if field.is_numeric() {
            sink.check(config.long_property(field.property()).map(|_| ()))?;
        }
    }

    Ok(())
}

/// The URL must carry the index placeholder
fn check_index_placeholder(config: &HttpSourceConfig, pagination: PaginationType) -> Result<()> {
    if config.is_deferred(property::URL) {
        return Ok(());
    }

    let url = config.url.as_deref().unwrap_or_default();
    if url.contains(PAGINATION_INDEX_PLACEHOLDER) {
        Ok(())
    } else {
        Err(Error::invalid_property(
            property::URL,
            format!(
                "Url '{url}' must contain '{PAGINATION_INDEX_PLACEHOLDER}' placeholder \
                 when pagination type is '{pagination}'"
            ),
        ))
    }
}

//! Format and schema compatibility checks

use crate::config::{property, HttpSourceConfig};
use crate::diagnostics::DiagnosticSink;
use crate::error::{Error, Result};
use crate::resolve::require;

/// Check the output-shaping properties against the page format
///
/// - XML requires a result path; JSON may leave it empty.
/// - JSON and XML must produce a valid combined fields mapping.
/// - All other formats forbid both result path and fields mapping.
pub fn validate_format_fields(config: &HttpSourceConfig, sink: &mut DiagnosticSink) -> Result<()> {
    if config.is_deferred(property::FORMAT) {
        tracing::debug!("Format is deferred, skipping format checks");
        return Ok(());
    }

    let format = require(config.format()?, property::FORMAT)?;
    let reason = format!("page format is '{format}'");

    if format.is_structured() {
        if format.requires_result_path() {
            sink.check(config.assert_is_set(property::RESULT_PATH, &reason))?;
        }
        // Built only to surface schema and mapping syntax errors
        sink.check(config.full_fields_mapping().map(|_| ()))?;
    } else {
        sink.check(config.assert_is_not_set(property::RESULT_PATH, &reason))?;
        sink.check(config.assert_is_not_set(property::FIELDS_MAPPING, &reason))?;
    }

    Ok(())
}

/// Check that the output schema fits a single-field format
///
/// Runs separately from the main pass, once the schema is final. The
/// schema may be inferred rather than typed in, so a mismatch is a
/// stage-level error rather than a field-scoped one.
pub fn validate_schema(config: &HttpSourceConfig) -> Result<()> {
    if config.is_deferred(property::FORMAT) {
        return Ok(());
    }

    let format = require(config.format()?, property::FORMAT)?;
    let Some(expected) = format.single_field_type() else {
        return Ok(());
    };

    if config.is_deferred(property::SCHEMA) {
        tracing::debug!("Schema is deferred, skipping schema shape check");
        return Ok(());
    }

    let fits = config.schema()?.is_some_and(|schema| {
        schema
            .single_field()
            .is_some_and(|field| !field.nullable && field.field_type == expected)
    });

    if fits {
        Ok(())
    } else {
        Err(Error::stage(format!(
            "Schema must be a record with a single {expected} field."
        )))
    }
}

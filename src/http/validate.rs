//! HTTP settings checks

use super::types::RetryPolicy;
use crate::config::{property, HttpSourceConfig};
use crate::diagnostics::DiagnosticSink;
use crate::error::{Error, Result};
use crate::pagination::{PaginationCapability, PAGINATION_INDEX_PLACEHOLDER};
use crate::resolve::require;

/// Characters that may not appear unescaped anywhere in a URI
const ILLEGAL_URI_CHARS: &[char] = &[' ', '{', '}', '|', '^', '\\', '<', '>', '"', '`'];

/// The URL must be absolute and well formed
///
/// The pagination placeholder is replaced by `0` before parsing. The URL
/// parser percent-encodes characters a URI may not contain, so those are
/// rejected up front.
pub fn validate_url(config: &HttpSourceConfig) -> Result<()> {
    if config.is_deferred(property::URL) {
        tracing::debug!("URL is deferred, skipping URL syntax check");
        return Ok(());
    }

    let Some(raw) = config.url.as_deref().filter(|url| !url.is_empty()) else {
        return Err(Error::must_be_set(
            property::URL,
            "it locates the first page",
        ));
    };

    let candidate = raw.replace(PAGINATION_INDEX_PLACEHOLDER, "0");
    if candidate.contains(ILLEGAL_URI_CHARS) {
        return Err(Error::invalid_property(
            property::URL,
            format!("URL value is not valid: '{raw}'"),
        ));
    }

    match url::Url::parse(&candidate) {
        Ok(_) => Ok(()),
        Err(e) => Err(Error::invalid_property_caused_by(
            property::URL,
            format!("URL value is not valid: '{raw}'"),
            e,
        )),
    }
}

/// Parse the status-code table and check it against pagination
///
/// Skipping or forwarding a failed page is rejected when the selected
/// pagination strategy cannot resume after a skipped page.
pub fn validate_http_errors_handling(
    config: &HttpSourceConfig,
    capability: &dyn PaginationCapability,
    sink: &mut DiagnosticSink,
) -> Result<()> {
    if config.is_deferred(property::HTTP_ERRORS_HANDLING) {
        tracing::debug!("Error handling table is deferred, skipping");
        return Ok(());
    }

    let entries = config.http_error_handling_entries()?;
    if entries.is_empty() {
        return Ok(());
    }

    if config.is_deferred(property::PAGINATION_TYPE) {
        tracing::debug!("Pagination type is deferred, skipping page skipping check");
        return Ok(());
    }

    let pagination = require(config.pagination_type()?, property::PAGINATION_TYPE)?;
    if capability.supports_skipping_pages(config, pagination) {
        return Ok(());
    }

    for entry in entries.iter().filter(|entry| entry.action.needs_page_skipping()) {
        sink.report(Error::invalid_property(
            property::HTTP_ERRORS_HANDLING,
            format!(
                "Error handling strategy '{}' is not supported in combination with \
                 pagination type '{pagination}'",
                entry.action
            ),
        ))?;
    }

    Ok(())
}

/// Linear retries need an interval
pub fn validate_retry_policy(config: &HttpSourceConfig, sink: &mut DiagnosticSink) -> Result<()> {
    if config.is_deferred(property::RETRY_POLICY) {
        tracing::debug!("Retry policy is deferred, skipping retry checks");
        return Ok(());
    }

    let policy = require(config.retry_policy()?, property::RETRY_POLICY)?;
    if policy == RetryPolicy::Linear {
        sink.check(config.assert_is_set(
            property::LINEAR_RETRY_INTERVAL,
            "retry policy is linear",
        ))?;
        sink.check(config.linear_retry_interval().map(|_| ()))?;
    }

    Ok(())
}

/// Truststore settings are pointless without certificate verification
pub fn validate_tls(config: &HttpSourceConfig, sink: &mut DiagnosticSink) -> Result<()> {
    if config.is_deferred(property::VERIFY_HTTPS) || config.verify_https() {
        return Ok(());
    }

    sink.check(config.assert_is_not_set(
        property::TRUSTSTORE_FILE,
        &format!(
            "truststore settings are ignored due to disabled {}",
            property::VERIFY_HTTPS
        ),
    ))
}

/// The error handling selector must resolve when set
pub fn validate_error_handling(config: &HttpSourceConfig) -> Result<()> {
    config.error_handling().map(|_| ())
}

/// Key store and trust store types must resolve when set
pub fn validate_store_types(config: &HttpSourceConfig, sink: &mut DiagnosticSink) -> Result<()> {
    sink.check(config.keystore_type().map(|_| ()))?;
    sink.check(config.truststore_type().map(|_| ()))
}

/// Timeouts, retry duration and page delay must be integers when set
pub fn validate_numeric_settings(
    config: &HttpSourceConfig,
    sink: &mut DiagnosticSink,
) -> Result<()> {
    sink.check(config.max_retry_duration().map(|_| ()))?;
    sink.check(config.connect_timeout().map(|_| ()))?;
    sink.check(config.read_timeout().map(|_| ()))?;
    sink.check(config.wait_time_between_pages().map(|_| ()))
}

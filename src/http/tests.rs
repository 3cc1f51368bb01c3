//! Tests for the HTTP settings module

use super::*;
use crate::config::{property, HttpSourceConfig};
use crate::diagnostics::{DiagnosticSink, ValidationMode};
use crate::pagination::{DefaultPaginationCapability, PaginationCapability, PaginationType};
use crate::parse::first_match;
use test_case::test_case;

fn fail_fast() -> DiagnosticSink {
    DiagnosticSink::new(ValidationMode::FailFast)
}

/// Pretends every strategy can resume after a skipped page
struct AlwaysResumes;

impl PaginationCapability for AlwaysResumes {
    fn supports_skipping_pages(&self, _: &HttpSourceConfig, _: PaginationType) -> bool {
        true
    }
}

fn with_table(pagination_type: &str, table: &str) -> HttpSourceConfig {
    HttpSourceConfig::new()
        .with(property::PAGINATION_TYPE, pagination_type)
        .with(property::HTTP_ERRORS_HANDLING, table)
}

// ============================================================================
// Retryable error handling
// ============================================================================

#[test_case(RetryableErrorHandling::Success => ErrorHandling::Success)]
#[test_case(RetryableErrorHandling::Fail => ErrorHandling::Stop)]
#[test_case(RetryableErrorHandling::RetryAndSkip => ErrorHandling::Skip)]
#[test_case(RetryableErrorHandling::RetryAndSend => ErrorHandling::Send)]
fn test_after_retry(action: RetryableErrorHandling) -> ErrorHandling {
    action.after_retry()
}

#[test]
fn test_is_retry() {
    assert!(RetryableErrorHandling::RetryAndFail.is_retry());
    assert!(!RetryableErrorHandling::Skip.is_retry());
}

#[test]
fn test_table_keeps_declaration_order() {
    let config = HttpSourceConfig::new()
        .with(property::HTTP_ERRORS_HANDLING, "5\\d\\d:RETRY_AND_SEND,4\\d\\d:SEND,.*:FAIL");

    let entries = config.http_error_handling_entries().unwrap();
    let patterns: Vec<_> = entries.iter().map(|e| e.pattern()).collect();
    assert_eq!(patterns, vec!["5\\d\\d", "4\\d\\d", ".*"]);

    let matched = first_match(&entries, "500").unwrap();
    assert_eq!(matched.action, RetryableErrorHandling::RetryAndSend);
    let matched = first_match(&entries, "404").unwrap();
    assert_eq!(matched.action, RetryableErrorHandling::Send);
    let matched = first_match(&entries, "200").unwrap();
    assert_eq!(matched.action, RetryableErrorHandling::Fail);
}

// ============================================================================
// URL
// ============================================================================

#[test]
fn test_valid_url() {
    let config = HttpSourceConfig::new().with(property::URL, "https://api.example.com/v1/items");
    assert!(validate_url(&config).is_ok());
}

#[test]
fn test_url_with_placeholder_is_valid() {
    let config = HttpSourceConfig::new()
        .with(property::URL, "https://api.example.com/items?page={pagination.index}");
    assert!(validate_url(&config).is_ok());
}

#[test]
fn test_invalid_url() {
    let config = HttpSourceConfig::new().with(property::URL, "not-a-url");
    let err = validate_url(&config).unwrap_err();
    assert_eq!(err.property(), Some("url"));
    assert_eq!(err.to_string(), "URL value is not valid: 'not-a-url'");
    assert!(std::error::Error::source(&err).is_some());
}

#[test_case("https://api.example.com/items?q=a b"; "space")]
#[test_case("https://api.example.com/{page.index}/items"; "mistyped placeholder")]
#[test_case("https://api.example.com/a|b"; "pipe")]
#[test_case("https://api.example.com/x^y"; "caret")]
#[test_case("https://api.example.com/<id>"; "angle brackets")]
fn test_url_with_illegal_characters(url: &str) {
    let config = HttpSourceConfig::new().with(property::URL, url);
    let err = validate_url(&config).unwrap_err();
    assert_eq!(err.property(), Some("url"));
    assert_eq!(err.to_string(), format!("URL value is not valid: '{url}'"));
}

#[test]
fn test_missing_url() {
    let err = validate_url(&HttpSourceConfig::new()).unwrap_err();
    assert_eq!(err.property(), Some("url"));
}

#[test]
fn test_deferred_url() {
    let config = HttpSourceConfig::new().with(property::URL, "{{ endpoint }}/items");
    assert!(validate_url(&config).is_ok());
}

// ============================================================================
// Error table against pagination
// ============================================================================

#[test]
fn test_skip_rejected_for_link_pagination() {
    let config = with_table("Link in response body", "404:SKIP");
    let err = validate_http_errors_handling(&config, &DefaultPaginationCapability, &mut fail_fast())
        .unwrap_err();

    assert_eq!(err.property(), Some("httpErrorsHandling"));
    assert_eq!(
        err.to_string(),
        "Error handling strategy 'SKIP' is not supported in combination with \
         pagination type 'Link in response body'"
    );
}

#[test]
fn test_fail_and_success_allowed_for_link_pagination() {
    let config = with_table("Token in response body", "5\\d\\d:RETRY_AND_FAIL,404:SUCCESS");
    let result =
        validate_http_errors_handling(&config, &DefaultPaginationCapability, &mut fail_fast());
    assert!(result.is_ok());
}

#[test]
fn test_skip_allowed_for_increment_an_index() {
    let config = with_table("Increment an index", "404:RETRY_AND_SKIP,500:SEND");
    let result =
        validate_http_errors_handling(&config, &DefaultPaginationCapability, &mut fail_fast());
    assert!(result.is_ok());
}

#[test]
fn test_custom_capability_is_consulted() {
    let config = with_table("Custom", "404:SEND");
    assert!(validate_http_errors_handling(&config, &AlwaysResumes, &mut fail_fast()).is_ok());
    assert!(
        validate_http_errors_handling(&config, &DefaultPaginationCapability, &mut fail_fast())
            .is_err()
    );
}

#[test]
fn test_collect_all_reports_each_entry() {
    let config = with_table("Custom", "404:SEND,5\\d\\d:RETRY_AND_SKIP,401:FAIL");
    let mut sink = DiagnosticSink::new(ValidationMode::CollectAll);
    validate_http_errors_handling(&config, &DefaultPaginationCapability, &mut sink).unwrap();
    assert_eq!(sink.errors().len(), 2);
}

#[test]
fn test_invalid_regex() {
    let config = with_table("None", "5[0-9:FAIL");
    let err = validate_http_errors_handling(&config, &DefaultPaginationCapability, &mut fail_fast())
        .unwrap_err();
    assert_eq!(err.property(), Some("httpErrorsHandling"));
    assert!(err
        .to_string()
        .starts_with("Error handling regex '5[0-9' is not valid."));
}

#[test]
fn test_unknown_action() {
    let config = with_table("None", "500:RETRY");
    let err = validate_http_errors_handling(&config, &DefaultPaginationCapability, &mut fail_fast())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported value for 'httpErrorsHandling': 'RETRY'"
    );
}

#[test]
fn test_deferred_table_skips_check() {
    let config = with_table("Custom", "404:SKIP").deferring(property::HTTP_ERRORS_HANDLING);
    let result =
        validate_http_errors_handling(&config, &DefaultPaginationCapability, &mut fail_fast());
    assert!(result.is_ok());
}

#[test]
fn test_deferred_pagination_skips_cross_check() {
    let config = with_table("{{ pagination }}", "404:SKIP");
    let result =
        validate_http_errors_handling(&config, &DefaultPaginationCapability, &mut fail_fast());
    assert!(result.is_ok());
}

// ============================================================================
// Retry policy
// ============================================================================

#[test]
fn test_linear_requires_interval() {
    let config = HttpSourceConfig::new().with(property::RETRY_POLICY, "linear");
    let err = validate_retry_policy(&config, &mut fail_fast()).unwrap_err();
    assert_eq!(err.property(), Some("linearRetryInterval"));
    assert_eq!(
        err.to_string(),
        "Property 'linearRetryInterval' must be set, since retry policy is linear"
    );

    let config = config.with(property::LINEAR_RETRY_INTERVAL, "30");
    assert!(validate_retry_policy(&config, &mut fail_fast()).is_ok());
}

#[test]
fn test_linear_interval_must_be_numeric() {
    let config = HttpSourceConfig::new()
        .with(property::RETRY_POLICY, "linear")
        .with(property::LINEAR_RETRY_INTERVAL, "soon");
    let err = validate_retry_policy(&config, &mut fail_fast()).unwrap_err();
    assert_eq!(err.property(), Some("linearRetryInterval"));
}

#[test]
fn test_exponential_needs_no_interval() {
    let config = HttpSourceConfig::new().with(property::RETRY_POLICY, "Exponential");
    assert!(validate_retry_policy(&config, &mut fail_fast()).is_ok());
}

// ============================================================================
// TLS and the remaining settings
// ============================================================================

#[test]
fn test_truststore_rejected_without_verification() {
    let config = HttpSourceConfig::new()
        .with(property::VERIFY_HTTPS, "false")
        .with(property::TRUSTSTORE_FILE, "/etc/ssl/trust.jks");

    let err = validate_tls(&config, &mut fail_fast()).unwrap_err();
    assert_eq!(err.property(), Some("trustStoreFile"));
    assert_eq!(
        err.to_string(),
        "Property 'trustStoreFile' must not be set, since truststore settings are \
         ignored due to disabled verifyHttps"
    );

    let config = config.with(property::VERIFY_HTTPS, "true");
    assert!(validate_tls(&config, &mut fail_fast()).is_ok());
}

#[test]
fn test_deferred_verify_https_skips_tls_check() {
    let config = HttpSourceConfig::new()
        .with(property::VERIFY_HTTPS, "{{ verify }}")
        .with(property::TRUSTSTORE_FILE, "/etc/ssl/trust.jks");
    assert!(validate_tls(&config, &mut fail_fast()).is_ok());
}

#[test]
fn test_error_handling_selector() {
    let config = HttpSourceConfig::new().with(property::ERROR_HANDLING, "stopOnError");
    assert!(validate_error_handling(&config).is_ok());

    let config = HttpSourceConfig::new().with(property::ERROR_HANDLING, "ignore");
    assert_eq!(
        validate_error_handling(&config).unwrap_err().property(),
        Some("errorHandling")
    );
}

#[test]
fn test_store_types() {
    let config = HttpSourceConfig::new()
        .with(property::KEYSTORE_TYPE, "pkcs12")
        .with(property::TRUSTSTORE_TYPE, "PEM");
    let err = validate_store_types(&config, &mut fail_fast()).unwrap_err();
    assert_eq!(err.property(), Some("trustStoreType"));
}

#[test]
fn test_numeric_settings() {
    let config = HttpSourceConfig::new()
        .with(property::CONNECT_TIMEOUT, "60")
        .with(property::WAIT_TIME_BETWEEN_PAGES, "1s");
    let err = validate_numeric_settings(&config, &mut fail_fast()).unwrap_err();
    assert_eq!(err.property(), Some("waitTimeBetweenPages"));
}

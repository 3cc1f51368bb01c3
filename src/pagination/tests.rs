//! Tests for the pagination module

use super::*;
use crate::config::{property, HttpSourceConfig};
use crate::diagnostics::{DiagnosticSink, ValidationMode};
use crate::error::Result;
use crate::resolve::EnumWithValue;
use test_case::test_case;

const INDEX_URL: &str = "https://api.example.com/items?page={pagination.index}";

fn check(config: &HttpSourceConfig) -> Result<()> {
    validate_pagination(config, &mut DiagnosticSink::new(ValidationMode::FailFast))
}

fn collect(config: &HttpSourceConfig) -> Vec<String> {
    let mut sink = DiagnosticSink::new(ValidationMode::CollectAll);
    validate_pagination(config, &mut sink).unwrap();
    sink.errors()
        .iter()
        .filter_map(|e| e.property().map(str::to_string))
        .collect()
}

fn paginated(pagination_type: &str) -> HttpSourceConfig {
    HttpSourceConfig::new()
        .with(property::URL, "https://api.example.com/items")
        .with(property::PAGINATION_TYPE, pagination_type)
}

fn increment_an_index() -> HttpSourceConfig {
    paginated("Increment an index")
        .with(property::URL, INDEX_URL)
        .with(property::START_INDEX, "0")
        .with(property::INDEX_INCREMENT, "100")
}

// ============================================================================
// Rules
// ============================================================================

#[test]
fn test_rules_partition_fields() {
    for (_, pagination) in PaginationType::VALUES {
        let rules = pagination.rules();
        let forbidden: Vec<_> = rules.forbidden().collect();
        let owned = rules.required.len() + rules.optional.len();
        assert_eq!(forbidden.len() + owned, PaginationField::ALL.len());
        for field in rules.required.iter().chain(rules.optional) {
            assert!(!forbidden.contains(field), "{pagination}: {field:?}");
        }
    }
}

#[test]
fn test_increment_an_index_rules() {
    let rules = PaginationType::IncrementAnIndex.rules();
    assert_eq!(
        rules.required,
        &[PaginationField::StartIndex, PaginationField::IndexIncrement]
    );
    assert_eq!(rules.optional, &[PaginationField::MaxIndex]);
    assert_eq!(rules.extra, Some(ExtraRule::UrlIndexPlaceholder));
}

#[test_case(PaginationType::None => true)]
#[test_case(PaginationType::IncrementAnIndex => true)]
#[test_case(PaginationType::LinkInResponseHeader => false)]
#[test_case(PaginationType::LinkInResponseBody => false)]
#[test_case(PaginationType::TokenInResponseBody => false)]
#[test_case(PaginationType::Custom => false)]
fn test_default_capability(pagination: PaginationType) -> bool {
    DefaultPaginationCapability.supports_skipping_pages(&HttpSourceConfig::new(), pagination)
}

// ============================================================================
// None
// ============================================================================

#[test]
fn test_none_without_fields() {
    assert!(check(&paginated("None")).is_ok());
}

#[test_case(property::START_INDEX, "0")]
#[test_case(property::MAX_INDEX, "10")]
#[test_case(property::NEXT_PAGE_FIELD_PATH, "/next")]
#[test_case(property::CUSTOM_PAGINATION_CODE, "def get_next_page_url(url, page, headers): return None")]
fn test_none_forbids_pagination_fields(name: &str, value: &str) {
    let err = check(&paginated("None").with(name, value)).unwrap_err();
    assert_eq!(err.property(), Some(name));
    assert_eq!(
        err.to_string(),
        format!("Property '{name}' must not be set, since pagination type is 'None'")
    );
}

// ============================================================================
// Increment an index
// ============================================================================

#[test]
fn test_increment_an_index_valid() {
    assert!(check(&increment_an_index()).is_ok());
    assert!(check(&increment_an_index().with(property::MAX_INDEX, "1000")).is_ok());
}

#[test]
fn test_increment_an_index_requires_placeholder() {
    let config = increment_an_index().with(property::URL, "https://api.example.com/items");
    let err = check(&config).unwrap_err();
    assert_eq!(err.property(), Some("url"));
    assert_eq!(
        err.to_string(),
        "Url 'https://api.example.com/items' must contain '{pagination.index}' \
         placeholder when pagination type is 'Increment an index'"
    );
}

#[test]
fn test_placeholder_failure_is_independent_of_other_fields() {
    let config = paginated("Increment an index")
        .with(property::START_INDEX, "0")
        .with(property::INDEX_INCREMENT, "1")
        .with(property::MAX_INDEX, "5");
    assert_eq!(collect(&config), vec!["url"]);
}

#[test]
fn test_increment_an_index_requires_start_and_increment() {
    let config = paginated("Increment an index").with(property::URL, INDEX_URL);
    assert_eq!(collect(&config), vec!["startIndex", "indexIncrement"]);
}

#[test]
fn test_increment_an_index_rejects_non_numeric_index() {
    let config = increment_an_index().with(property::MAX_INDEX, "lots");
    let err = check(&config).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported value for 'maxIndex': 'lots'");
}

#[test]
fn test_deferred_url_skips_placeholder_rule() {
    let config = increment_an_index().with(property::URL, "{{ base.url }}");
    assert!(check(&config).is_ok());
}

// ============================================================================
// Link in response body
// ============================================================================

#[test]
fn test_link_in_response_body_requires_field_path() {
    let err = check(&paginated("Link in response body")).unwrap_err();
    assert_eq!(err.property(), Some("nextPageFieldPath"));

    let config = paginated("Link in response body").with(property::NEXT_PAGE_FIELD_PATH, "/next");
    assert!(check(&config).is_ok());
}

#[test]
fn test_link_in_response_body_forbids_other_fields() {
    let config = paginated("Link in response body")
        .with(property::NEXT_PAGE_FIELD_PATH, "/next")
        .with(property::START_INDEX, "0")
        .with(property::MAX_INDEX, "10")
        .with(property::INDEX_INCREMENT, "1")
        .with(property::NEXT_PAGE_TOKEN_PATH, "/token")
        .with(property::NEXT_PAGE_URL_PARAMETER, "page")
        .with(property::CUSTOM_PAGINATION_CODE, "code");

    assert_eq!(
        collect(&config),
        vec![
            "startIndex",
            "maxIndex",
            "indexIncrement",
            "nextPageTokenPath",
            "nextPageUrlParameter",
            "customPaginationCode",
        ]
    );
}

// ============================================================================
// Token in response body / Custom / header link
// ============================================================================

#[test]
fn test_token_in_response_body() {
    let config = paginated("Token in response body").with(property::NEXT_PAGE_TOKEN_PATH, "/token");
    let err = check(&config).unwrap_err();
    assert_eq!(err.property(), Some("nextPageUrlParameter"));

    let config = config.with(property::NEXT_PAGE_URL_PARAMETER, "pageToken");
    assert!(check(&config).is_ok());
}

#[test]
fn test_custom_requires_code() {
    let err = check(&paginated("Custom")).unwrap_err();
    assert_eq!(err.property(), Some("customPaginationCode"));
}

#[test]
fn test_link_in_response_header_owns_nothing() {
    assert!(check(&paginated("Link in response header")).is_ok());
    let config = paginated("Link in response header").with(property::NEXT_PAGE_FIELD_PATH, "/next");
    assert!(check(&config).is_err());
}

// ============================================================================
// Deferred values
// ============================================================================

#[test]
fn test_deferred_pagination_type_skips_everything() {
    let config = paginated("{{ pagination }}")
        .with(property::START_INDEX, "abc")
        .with(property::NEXT_PAGE_FIELD_PATH, "/next")
        .with(property::CUSTOM_PAGINATION_CODE, "code");
    assert!(check(&config).is_ok());
}

#[test]
fn test_deferred_field_is_exempt() {
    let config = paginated("None").with(property::START_INDEX, "{{ start }}");
    assert!(check(&config).is_ok());

    let config = paginated("Custom").deferring(property::CUSTOM_PAGINATION_CODE);
    assert!(check(&config).is_ok());
}

#[test]
fn test_missing_pagination_type() {
    let err = check(&HttpSourceConfig::new()).unwrap_err();
    assert_eq!(err.property(), Some("paginationType"));
}

#[test]
fn test_unknown_pagination_type() {
    let err = check(&paginated("Cursor")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported value for 'paginationType': 'Cursor'"
    );
}

//! HTTP request settings
//!
//! Covers the properties governing how pages are requested: the URL,
//! retry policy, the ordered status-code error-handling table, TLS and
//! timeouts.

mod types;
mod validate;

pub use types::{
    ErrorHandling, HttpErrorHandlerEntry, KeyStoreType, RetryPolicy, RetryableErrorHandling,
};
pub use validate::{
    validate_error_handling, validate_http_errors_handling, validate_numeric_settings,
    validate_retry_policy, validate_store_types, validate_tls, validate_url,
};

#[cfg(test)]
mod tests;

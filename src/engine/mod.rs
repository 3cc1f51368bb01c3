//! Validation engine module
//!
//! Runs every configuration check in a fixed order.
//!
//! # Overview
//!
//! The engine module provides:
//! - `ConfigValidator` - Orchestrates the checks of all other modules
//! - `ValidationReport` - Errors found by one pass, in step order
//!
//! # Step order
//!
//! 1. URL syntax
//! 2. Status-code error-handling table, checked against pagination capability
//! 3. Retry policy (linear requires an interval)
//! 4. Pagination properties
//! 5. Format properties
//! 6. OAuth2 properties
//! 7. TLS properties
//! 8. Error handling selector
//! 9. Key store and trust store types
//! 10. Numeric connection settings
//!
//! Each step is skipped when its governing property is deferred. The
//! schema shape check is a separate entry point (`validate_schema`) run
//! once the output schema is final.

mod types;

pub use types::ValidationReport;

use crate::auth::validate_oauth2;
use crate::config::HttpSourceConfig;
use crate::diagnostics::{DiagnosticSink, ValidationMode};
use crate::error::Result;
use crate::format::{validate_format_fields, validate_schema};
use crate::http::{
    validate_error_handling, validate_http_errors_handling, validate_numeric_settings,
    validate_retry_policy, validate_store_types, validate_tls, validate_url,
};
use crate::pagination::{validate_pagination, DefaultPaginationCapability, PaginationCapability};

/// Validates HTTP source configurations
///
/// Stateless apart from the pagination capability it consults; one
/// validator can check any number of configurations.
pub struct ConfigValidator {
    /// Answers whether a pagination strategy can skip a failed page
    capability: Box<dyn PaginationCapability + Send + Sync>,
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigValidator").finish_non_exhaustive()
    }
}

impl ConfigValidator {
    /// Create a validator using the built-in pagination capabilities
    pub fn new() -> Self {
        Self {
            capability: Box::new(DefaultPaginationCapability),
        }
    }

    /// Use a different pagination capability source
    #[must_use]
    pub fn with_capability(
        mut self,
        capability: impl PaginationCapability + Send + Sync + 'static,
    ) -> Self {
        self.capability = Box::new(capability);
        self
    }

    /// Validate, stopping at the first error
    pub fn validate(&self, config: &HttpSourceConfig) -> Result<()> {
        self.run(config, ValidationMode::FailFast).into_result()
    }

    /// Validate, collecting every error
    pub fn validate_all(&self, config: &HttpSourceConfig) -> ValidationReport {
        self.run(config, ValidationMode::CollectAll)
    }

    /// Validate in the given mode
    ///
    /// A fail-fast report holds at most one error.
    pub fn run(&self, config: &HttpSourceConfig, mode: ValidationMode) -> ValidationReport {
        let mut sink = DiagnosticSink::new(mode);

        let report = match self.run_steps(config, &mut sink) {
            Ok(()) => ValidationReport::new(sink.into_errors()),
            Err(error) => ValidationReport::new(vec![error]),
        };

        tracing::debug!(
            mode = ?mode,
            errors = report.errors().len(),
            "Configuration validation finished"
        );
        report
    }

    /// Check that the output schema fits the page format
    pub fn validate_schema(&self, config: &HttpSourceConfig) -> Result<()> {
        validate_schema(config)
    }

    fn run_steps(&self, config: &HttpSourceConfig, sink: &mut DiagnosticSink) -> Result<()> {
        step("url", sink, |_| validate_url(config))?;
        step("httpErrorsHandling", sink, |sink| {
            validate_http_errors_handling(config, self.capability.as_ref(), sink)
        })?;
        step("retryPolicy", sink, |sink| validate_retry_policy(config, sink))?;
        step("pagination", sink, |sink| validate_pagination(config, sink))?;
        step("format", sink, |sink| validate_format_fields(config, sink))?;
        step("oauth2", sink, |sink| validate_oauth2(config, sink))?;
        step("tls", sink, |sink| validate_tls(config, sink))?;
        step("errorHandling", sink, |_| validate_error_handling(config))?;
        step("storeTypes", sink, |sink| validate_store_types(config, sink))?;
        step("numericSettings", sink, |sink| {
            validate_numeric_settings(config, sink)
        })?;
        Ok(())
    }
}

/// Run one step; its hard failure is reported like any other error
fn step<F>(name: &str, sink: &mut DiagnosticSink, check: F) -> Result<()>
where
    F: FnOnce(&mut DiagnosticSink) -> Result<()>,
{
    tracing::debug!(step = name, "Running validation step");
    let result = check(sink);
    sink.check(result)
}

impl HttpSourceConfig {
    /// Validate with the built-in pagination capabilities, fail-fast
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::new().validate(self)
    }

    /// Validate with the built-in pagination capabilities, collecting all errors
    pub fn validate_all(&self) -> ValidationReport {
        ConfigValidator::new().validate_all(self)
    }

    /// Check that the output schema fits the page format
    pub fn validate_schema(&self) -> Result<()> {
        validate_schema(self)
    }
}

//! Diagnostic sink
//!
//! Every validator reports through a `DiagnosticSink`. The sink's mode
//! decides what a reported error does:
//! - `FailFast`: the error is returned immediately and validation stops.
//! - `CollectAll`: the error is recorded and validation continues.
//!
//! Both modes run the same checks in the same order, so the first
//! collected diagnostic is always the one fail-fast would have raised.

use crate::error::{Error, Result};
use serde::Serialize;

/// How the orchestrator reacts to a failed check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Stop at the first error
    #[default]
    FailFast,
    /// Record every error and keep going
    CollectAll,
}

/// Serializable view of one error, for UIs mapping properties to fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Offending property, or `None` for stage-level errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// Human-readable message
    pub message: String,
    /// Message of the underlying cause, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl From<&Error> for Diagnostic {
    fn from(error: &Error) -> Self {
        Self {
            property: error.property().map(str::to_string),
            message: error.to_string(),
            cause: std::error::Error::source(error).map(ToString::to_string),
        }
    }
}

/// Receives the errors raised by validators
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    mode: ValidationMode,
    errors: Vec<Error>,
}

impl DiagnosticSink {
    /// Create a sink for the given mode
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            errors: Vec::new(),
        }
    }

    /// Mode of this sink
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Report an error
    ///
    /// Fail-fast sinks hand the error straight back; collecting sinks
    /// record it and return `Ok`.
    pub fn report(&mut self, error: Error) -> Result<()> {
        match self.mode {
            ValidationMode::FailFast => Err(error),
            ValidationMode::CollectAll => {
                tracing::debug!(property = ?error.property(), "{error}");
                self.errors.push(error);
                Ok(())
            }
        }
    }

    /// Report the error of a failed check, if any
    pub fn check(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(error) => self.report(error),
        }
    }

    /// Errors recorded so far
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Take the recorded errors
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

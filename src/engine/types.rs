//! Engine types
//!
//! Outcome of a validation pass.

use crate::diagnostics::Diagnostic;
use crate::error::{Error, Result};

/// Every error found by one validation pass, in step order
#[derive(Debug, Default)]
pub struct ValidationReport {
    errors: Vec<Error>,
}

impl ValidationReport {
    /// Create a report from collected errors
    pub fn new(errors: Vec<Error>) -> Self {
        Self { errors }
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in the order they were found
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// First error, the one a fail-fast pass reports
    pub fn first_error(&self) -> Option<&Error> {
        self.errors.first()
    }

    /// Names of the offending properties, without duplicates
    pub fn invalid_properties(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.errors.iter().filter_map(Error::property) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Serializable view of every error
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(Diagnostic::from).collect()
    }

    /// Turn the report into a fail-fast result
    pub fn into_result(self) -> Result<()> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

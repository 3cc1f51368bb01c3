//! Common types used throughout the crate
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// Runtime arguments used to resolve deferred values
pub type RuntimeArguments = HashMap<String, String>;

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
///
/// A property counts as "set" only when it holds a non-empty string.
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

/// Borrowing counterpart of `OptionStringExt`
pub trait OptionStrExt<'a> {
    /// Returns the string slice only if it is non-empty
    fn non_empty(self) -> Option<&'a str>;

    /// Check whether a non-empty value is present
    fn is_set(self) -> bool;
}

impl<'a> OptionStrExt<'a> for Option<&'a String> {
    fn non_empty(self) -> Option<&'a str> {
        self.map(String::as_str).filter(|s| !s.is_empty())
    }

    fn is_set(self) -> bool {
        self.non_empty().is_some()
    }
}

impl<'a> OptionStrExt<'a> for Option<&'a str> {
    fn non_empty(self) -> Option<&'a str> {
        self.filter(|s| !s.is_empty())
    }

    fn is_set(self) -> bool {
        self.non_empty().is_some()
    }
}

//! Scalar resolvers
//!
//! Pure functions of the stored string. `None` and the empty string both
//! mean "not set".

use crate::error::{Error, Result};
use crate::types::OptionStrExt;

/// Resolve a boolean property
///
/// Only the exact string `"true"` is true. Anything else, including
/// garbage, silently resolves to `false`.
pub fn to_bool(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Resolve a 64-bit integer property
pub fn to_long(value: Option<&str>, property: &str) -> Result<Option<i64>> {
    let Some(value) = value.non_empty() else {
        return Ok(None);
    };

    value.parse::<i64>().map(Some).map_err(|e| {
        Error::invalid_property_caused_by(
            property,
            format!("Unsupported value for '{property}': '{value}'"),
            e,
        )
    })
}

/// Resolve a 32-bit integer property
pub fn to_int(value: Option<&str>, property: &str) -> Result<Option<i32>> {
    let Some(value) = value.non_empty() else {
        return Ok(None);
    };

    value.parse::<i32>().map(Some).map_err(|e| {
        Error::invalid_property_caused_by(
            property,
            format!("Unsupported value for '{property}': '{value}'"),
            e,
        )
    })
}

/// Turn an absent selector into an "unsupported value" error
pub fn require<T>(value: Option<T>, property: &str) -> Result<T> {
    value.ok_or_else(|| Error::unsupported_value(property, ""))
}

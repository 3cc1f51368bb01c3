//! Typed property resolution
//!
//! Converts raw string properties into typed values:
//! - booleans (exact `"true"`, anything else is `false`)
//! - integers and longs (non-numeric input is a field-scoped error)
//! - enum-like selectors, matched case-insensitively against a static
//!   table of declared tokens
//!
//! Values still holding a deferred-value marker are never parsed; the
//! accessors report them as `None`.

mod accessors;
mod enums;
mod properties;

pub(crate) use enums::enum_with_value;
pub use enums::{resolve_enum, EnumWithValue};
pub use properties::{require, to_bool, to_int, to_long};

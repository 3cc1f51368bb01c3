//! Pagination module
//!
//! Supports: None, Link in response header, Link in response body,
//! Token in response body, Increment an index, Custom
//!
//! # Overview
//!
//! Each pagination type owns a fixed set of pagination properties. Owned
//! properties are required (or merely allowed, like `maxIndex` for index
//! pagination); every other pagination property must stay empty. Adding a
//! type means declaring its rules, not touching the others.
//!
//! Whether a strategy can skip a page whose fetch failed is answered by a
//! `PaginationCapability`, consulted by the HTTP error-handling checks.

mod types;
mod validate;

pub use types::{
    DefaultPaginationCapability, ExtraRule, PaginationCapability, PaginationField,
    PaginationRules, PaginationType, PAGINATION_INDEX_PLACEHOLDER,
};
pub use validate::validate_pagination;

#[cfg(test)]
mod tests;

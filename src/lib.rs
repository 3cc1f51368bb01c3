// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # HTTP Source Configuration
//!
//! Validation and type resolution for declarative configurations of
//! paginated HTTP sources.
//!
//! ## Features
//!
//! - **Typed Resolution**: Booleans, integers and case-insensitive selectors from raw strings
//! - **Mini-Languages**: Lists, `key:value` maps and ordered `regex:action` tables
//! - **Pagination Rules**: Required and forbidden properties per pagination type
//! - **Deferred Values**: Properties known only at run time are exempt from static checks
//! - **Field-Scoped Diagnostics**: Every error names the property to fix
//! - **Fail-Fast or Collect-All**: Stop at the first error or report them all
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use http_source_config::{load_config_from_str, Result};
//!
//! fn main() -> Result<()> {
//!     let config = load_config_from_str(r#"
//! url: https://api.example.com/items?page={pagination.index}
//! format: json
//! retryPolicy: exponential
//! paginationType: Increment an index
//! startIndex: 1
//! indexIncrement: 1
//! httpErrorsHandling: 2..:SUCCESS,404:SKIP,5..:RETRY_AND_FAIL
//! "#)?;
//!
//!     // First error only
//!     config.validate()?;
//!
//!     // Every error, e.g. to highlight all invalid form fields
//!     for diagnostic in config.validate_all().diagnostics() {
//!         println!("{:?}: {}", diagnostic.property, diagnostic.message);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      ConfigValidator                            │
//! │  validate() → first error    validate_all() → ValidationReport  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │   HTTP   │ Pagination│    Format     │   Auth    │    TLS      │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ URL      │ Required  │ Result path   │ OAuth2    │ Truststore  │
//! │ Retry    │ Forbidden │ Fields map    │ fields    │ vs verify   │
//! │ Errors   │ Index URL │ Schema shape  │           │             │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//!                                │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  resolve (typed values, enums)  ·  parse (lists, maps, tables)  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types and diagnostics
pub mod error;

/// Common types and type aliases
pub mod types;

/// Raw configuration record and property names
pub mod config;

/// Deferred-value markers
pub mod template;

/// YAML / JSON configuration loader
pub mod loader;

/// Typed property and enum resolution
pub mod resolve;

/// List, map and regex-table parsers
pub mod parse;

/// Output schema parsing
pub mod schema;

/// Fail-fast and collect-all diagnostic sink
pub mod diagnostics;

/// Pagination types and rules
pub mod pagination;

/// URL, retry, error-table and TLS settings
pub mod http;

/// Authentication settings
pub mod auth;

/// Page formats and schema compatibility
pub mod format;

/// Validation orchestrator
pub mod engine;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{property, HttpSourceConfig};
pub use diagnostics::{Diagnostic, ValidationMode};
pub use engine::{ConfigValidator, ValidationReport};
pub use error::{Error, Result};
pub use loader::{load_config, load_config_from_str};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

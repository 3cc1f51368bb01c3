//! Output format module
//!
//! Supports: JSON, XML, TSV, CSV, Text, Blob
//!
//! # Overview
//!
//! The page format decides which output-shaping properties make sense:
//! structured formats (JSON, XML) locate records by a result path and map
//! fields by path, while single-field formats (Text, Blob) emit the whole
//! page as one string or bytes field and forbid both.

mod types;
mod validate;

pub use types::PageFormat;
pub use validate::{validate_format_fields, validate_schema};

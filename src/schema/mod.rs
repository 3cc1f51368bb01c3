//! Output schema access
//!
//! Parses the output schema property (a JSON record schema in the Avro
//! style) into an ordered list of named, typed fields.
//!
//! # Features
//!
//! - **Primitive Types**: boolean, int, long, float, double, bytes, string
//! - **Nullable Detection**: `["string", "null"]` unions become nullable fields
//! - **Logical Types**: resolved to their underlying primitive
//! - **Complex Types**: records, arrays, maps, enums and general unions

mod parser;
mod types;

pub use parser::parse_schema;
pub use types::{FieldType, RecordSchema, SchemaField};

//! Record schema parser

use super::types::{FieldType, RecordSchema, SchemaField};
use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Raw record as written in the schema property
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "type")]
    record_type: Value,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    field_type: Value,
}

/// Parse a JSON record schema into ordered fields
///
/// Failures are field-scoped errors on `property`.
pub fn parse_schema(text: &str, property: &str) -> Result<RecordSchema> {
    let raw: RawRecord = serde_json::from_str(text).map_err(|e| {
        Error::invalid_property_caused_by(
            property,
            format!("Unable to parse output schema: {text}"),
            e,
        )
    })?;

    if raw.record_type != Value::String("record".to_string()) {
        return Err(Error::invalid_property(
            property,
            format!("Output schema must be a record, found '{}'", raw.record_type),
        ));
    }

    let mut fields = Vec::with_capacity(raw.fields.len());
    for field in raw.fields {
        let (field_type, nullable) = parse_field_type(&field.field_type).ok_or_else(|| {
            Error::invalid_property(
                property,
                format!(
                    "Unsupported type '{}' for field '{}' in output schema",
                    field.field_type, field.name
                ),
            )
        })?;
        fields.push(SchemaField {
            name: field.name,
            field_type,
            nullable,
        });
    }

    Ok(RecordSchema {
        name: raw.name,
        fields,
    })
}

/// Parse a field type, returning the type and whether it is nullable
fn parse_field_type(value: &Value) -> Option<(FieldType, bool)> {
    match value {
        Value::String(name) => FieldType::from_primitive(name).map(|t| (t, false)),
        Value::Object(map) => {
            let type_value = map.get("type")?;
            match type_value.as_str() {
                Some("record") => Some((FieldType::Record, false)),
                Some("array") => Some((FieldType::Array, false)),
                Some("map") => Some((FieldType::Map, false)),
                Some("enum") => Some((FieldType::Enum, false)),
                Some("fixed") => Some((FieldType::Bytes, false)),
                // Logical types wrap a primitive or nested type
                _ => parse_field_type(type_value),
            }
        }
        Value::Array(branches) => {
            let mut types = Vec::with_capacity(branches.len());
            for branch in branches {
                types.push(parse_field_type(branch)?.0);
            }

            let has_null = types.contains(&FieldType::Null);
            let mut non_null: Vec<FieldType> = types
                .iter()
                .filter(|t| **t != FieldType::Null)
                .cloned()
                .collect();

            if non_null.len() == 1 {
                return Some((non_null.remove(0), has_null));
            }
            Some((FieldType::Union(types), false))
        }
        _ => None,
    }
}

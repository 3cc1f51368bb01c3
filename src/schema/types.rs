//! Schema types

use serde::Serialize;

/// Type of a schema field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Enum,
    Array,
    Map,
    Record,
    /// Union that is not a plain nullable type
    Union(Vec<FieldType>),
}

impl FieldType {
    /// Parse a primitive type name
    pub fn from_primitive(name: &str) -> Option<Self> {
        let field_type = match name {
            "null" => FieldType::Null,
            "boolean" => FieldType::Boolean,
            "int" => FieldType::Int,
            "long" => FieldType::Long,
            "float" => FieldType::Float,
            "double" => FieldType::Double,
            "bytes" => FieldType::Bytes,
            "string" => FieldType::String,
            _ => return None,
        };
        Some(field_type)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Null => write!(f, "null"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Int => write!(f, "int"),
            FieldType::Long => write!(f, "long"),
            FieldType::Float => write!(f, "float"),
            FieldType::Double => write!(f, "double"),
            FieldType::Bytes => write!(f, "bytes"),
            FieldType::String => write!(f, "string"),
            FieldType::Enum => write!(f, "enum"),
            FieldType::Array => write!(f, "array"),
            FieldType::Map => write!(f, "map"),
            FieldType::Record => write!(f, "record"),
            FieldType::Union(types) => {
                let names: Vec<String> = types.iter().map(ToString::to_string).collect();
                write!(f, "union<{}>", names.join(", "))
            }
        }
    }
}

/// A named field of a record schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaField {
    /// Field name
    pub name: String,

    /// Field type (the non-null branch for nullable fields)
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Whether the field also accepts null
    pub nullable: bool,
}

impl SchemaField {
    /// Create a non-nullable field
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: false,
        }
    }

    /// Create a nullable field
    pub fn nullable(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: true,
        }
    }
}

/// Record schema: ordered fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordSchema {
    /// Record name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Fields in declaration order
    pub fields: Vec<SchemaField>,
}

impl RecordSchema {
    /// Create a schema from fields
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self { name: None, fields }
    }

    /// Get a field by name
    pub fn get_field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// The only field, if the record has exactly one
    pub fn single_field(&self) -> Option<&SchemaField> {
        match self.fields.as_slice() {
            [field] => Some(field),
            _ => None,
        }
    }
}

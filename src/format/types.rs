//! Page format types

use crate::resolve::enum_with_value;
use crate::schema::FieldType;

enum_with_value! {
    /// Format of the HTTP response pages
    pub enum PageFormat {
        /// JSON document; records located by a JSON path
        Json => "json",
        /// XML document; records located by an XPath
        Xml => "xml",
        /// Tab separated values
        Tsv => "tsv",
        /// Comma separated values
        Csv => "csv",
        /// Whole page as a single string field
        Text => "text",
        /// Whole page as a single bytes field
        Blob => "blob",
    }
}

impl PageFormat {
    /// JSON and XML pages are navigated by path
    pub fn is_structured(self) -> bool {
        matches!(self, Self::Json | Self::Xml)
    }

    /// Whether a result path is mandatory
    ///
    /// JSON falls back to the document root when no path is given.
    pub fn requires_result_path(self) -> bool {
        matches!(self, Self::Xml)
    }

    /// Field type a single-field format must be mapped to
    pub fn single_field_type(self) -> Option<FieldType> {
        match self {
            Self::Text => Some(FieldType::String),
            Self::Blob => Some(FieldType::Bytes),
            _ => None,
        }
    }
}

//! Configuration document types

use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// A configuration document as written in YAML or JSON
///
/// ```yaml
/// url: https://api.example.com/items?page={pagination.index}
/// format: json
/// paginationType: Increment an index
/// startIndex: 0
/// indexIncrement: 1
/// deferred:
///   - maxIndex
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigDocument {
    /// Properties whose value arrives at run time
    #[serde(default)]
    pub deferred: Vec<String>,

    /// Every other top-level key is a property
    #[serde(flatten)]
    pub properties: BTreeMap<String, Value>,
}

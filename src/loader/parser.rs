//! Configuration document parser
//!
//! Reads a flat YAML (or JSON) document into an `HttpSourceConfig`.
//! Scalars are stringified, `null` and `""` mean absent, and an inline `schema`
//! mapping is serialized to its JSON text.

use crate::config::{property, HttpSourceConfig};
use crate::error::{Error, Result};
use crate::loader::types::ConfigDocument;
use crate::types::OptionStringExt;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Load a configuration from a YAML or JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<HttpSourceConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "Loading configuration file");
    load_config_from_str(&content)
}

/// Load a configuration from YAML or JSON text
pub fn load_config_from_str(text: &str) -> Result<HttpSourceConfig> {
    let document: ConfigDocument = serde_yaml::from_str(text)?;
    let mut config = HttpSourceConfig::new();

    for (name, value) in document.properties {
        if !property::ALL.contains(&name.as_str()) {
            tracing::warn!(property = %name, "Ignoring unknown property");
            continue;
        }

        if let Some(value) = scalar_to_string(&name, value)? {
            config.set(&name, value)?;
        }
    }

    for name in &document.deferred {
        config.mark_deferred(name)?;
    }

    Ok(config)
}

/// Stringify a property value; `None` for null or the empty string
fn scalar_to_string(name: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(s.none_if_empty()),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Mapping(_) if name == property::SCHEMA => {
            Ok(Some(serde_json::to_string(&value)?))
        }
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
            Err(Error::invalid_property(
                name,
                format!("Property '{name}' must be a scalar value"),
            ))
        }
    }
}

//! Configuration loader module
//!
//! Build configurations from YAML or JSON documents.
//!
//! # Overview
//!
//! The loader module provides:
//! - `ConfigDocument` - Flat property document plus its deferred list
//! - `load_config` / `load_config_from_str` - Parse into `HttpSourceConfig`
//!
//! Unknown keys are logged and ignored so documents may carry metadata
//! for other tools. Programmatic construction through
//! `HttpSourceConfig::from_properties` is strict and rejects them.

mod parser;
mod types;

pub use parser::{load_config, load_config_from_str};
pub use types::ConfigDocument;

//! OAuth2 checks

use super::types::OAUTH2_REQUIRED_PROPERTIES;
use crate::config::{property, HttpSourceConfig};
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;

/// With OAuth2 enabled, every endpoint and credential must be set
///
/// Each missing property is its own error, reported in a fixed order.
pub fn validate_oauth2(config: &HttpSourceConfig, sink: &mut DiagnosticSink) -> Result<()> {
    if config.is_deferred(property::OAUTH2_ENABLED) || !config.oauth2_enabled() {
        return Ok(());
    }

    for name in OAUTH2_REQUIRED_PROPERTIES {
        sink.check(config.assert_is_set(name, "OAuth2 is enabled"))?;
    }

    Ok(())
}

//! Auth configuration types

use crate::config::{property, HttpSourceConfig};
use crate::types::OptionStrExt;

/// Properties OAuth2 needs, in check order
pub const OAUTH2_REQUIRED_PROPERTIES: [&str; 5] = [
    property::AUTH_URL,
    property::TOKEN_URL,
    property::CLIENT_ID,
    property::CLIENT_SECRET,
    property::REFRESH_TOKEN,
];

/// Authentication applied to page requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// No authentication
    #[default]
    None,
    /// HTTP Basic with username and password
    Basic {
        /// Send credentials without waiting for a challenge
        preemptive: bool,
    },
    /// OAuth2 access token obtained with a refresh token
    OAuth2,
}

impl AuthMode {
    /// Authentication selected by the configuration
    ///
    /// OAuth2 takes precedence over basic credentials.
    pub fn of(config: &HttpSourceConfig) -> Self {
        if config.oauth2_enabled() {
            AuthMode::OAuth2
        } else if config.username.as_ref().is_set() {
            AuthMode::Basic {
                preemptive: config.preemptive_basic_auth(),
            }
        } else {
            AuthMode::None
        }
    }
}

//! Authentication module
//!
//! Supports: Basic, OAuth2 (refresh token flow)
//!
//! Basic credentials are optional pass-through values. When OAuth2 is
//! enabled every endpoint and credential of the refresh-token flow must
//! be configured.

mod types;
mod validate;

pub use types::{AuthMode, OAUTH2_REQUIRED_PROPERTIES};
pub use validate::validate_oauth2;

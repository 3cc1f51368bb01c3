//! Raw HTTP source configuration
//!
//! `HttpSourceConfig` is a plain record holding one optional raw string per
//! property, exactly as supplied by the caller. Typed values are produced on
//! demand by the `resolve` module; "is this property set" means "is the
//! string present and non-empty", independent of any parsing.

use crate::error::{Error, Result};
use crate::template;
use crate::types::{OptionStrExt, RuntimeArguments, StringMap};
use std::collections::BTreeSet;

/// Declares every property once: the record field, its public name
/// constant, and the name-based accessors.
macro_rules! http_source_properties {
    ($( $(#[$doc:meta])* $field:ident => $constant:ident = $name:literal ),* $(,)?) => {
        /// Property names as they appear in the flat configuration
        pub mod property {
            $(
                #[allow(missing_docs)]
                pub const $constant: &str = $name;
            )*

            /// Every known property name, in declaration order
            pub const ALL: &[&str] = &[$($name),*];
        }

        /// Configuration of a paginated HTTP source (raw strings)
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct HttpSourceConfig {
            $(
                $(#[$doc])*
                pub $field: Option<String>,
            )*
            /// Properties whose values are supplied at run time
            deferred: BTreeSet<String>,
        }

        impl HttpSourceConfig {
            /// Get the raw value of a property by name
            pub fn get(&self, name: &str) -> Option<&String> {
                match name {
                    $( $name => self.$field.as_ref(), )*
                    _ => None,
                }
            }

            fn slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
                match name {
                    $( $name => Some(&mut self.$field), )*
                    _ => None,
                }
            }

            fn slots_mut(&mut self) -> Vec<(&'static str, &mut Option<String>)> {
                vec![$( ($name, &mut self.$field), )*]
            }
        }
    };
}

http_source_properties! {
    /// Reference name of the source stage
    reference_name => REFERENCE_NAME = "referenceName",

    // Connection
    /// Url of the first page; must start with a protocol
    url => URL = "url",
    /// HTTP request method
    http_method => HTTP_METHOD = "httpMethod",
    /// Headers as `name:value` pairs separated by commas
    headers => HEADERS = "headers",
    /// Body sent with each request
    request_body => REQUEST_BODY = "requestBody",
    /// Connect timeout in seconds
    connect_timeout => CONNECT_TIMEOUT = "connectTimeout",
    /// Read timeout in seconds
    read_timeout => READ_TIMEOUT = "readTimeout",
    proxy_url => PROXY_URL = "proxyUrl",
    proxy_username => PROXY_USERNAME = "proxyUsername",
    proxy_password => PROXY_PASSWORD = "proxyPassword",

    // Basic auth
    preemptive_basic_auth => PREEMPTIVE_BASIC_AUTH = "preemptiveBasicAuth",
    username => USERNAME = "username",
    password => PASSWORD = "password",

    // Output shaping
    /// Page format token (json, xml, tsv, csv, text, blob)
    format => FORMAT = "format",
    /// JSON path or XPath to the records in a page
    result_path => RESULT_PATH = "resultPath",
    /// `field:path` pairs overriding the schema-derived mapping
    fields_mapping => FIELDS_MAPPING = "fieldsMapping",
    csv_skip_first_row => CSV_SKIP_FIRST_ROW = "csvSkipFirstRow",
    /// Output schema (JSON record schema)
    schema => SCHEMA = "schema",

    // Error handling and retries
    /// Ordered `status-regex:action` table
    http_errors_handling => HTTP_ERRORS_HANDLING = "httpErrorsHandling",
    /// What to do when a page cannot be turned into records
    error_handling => ERROR_HANDLING = "errorHandling",
    retry_policy => RETRY_POLICY = "retryPolicy",
    linear_retry_interval => LINEAR_RETRY_INTERVAL = "linearRetryInterval",
    max_retry_duration => MAX_RETRY_DURATION = "maxRetryDuration",

    // Pagination
    pagination_type => PAGINATION_TYPE = "paginationType",
    start_index => START_INDEX = "startIndex",
    max_index => MAX_INDEX = "maxIndex",
    index_increment => INDEX_INCREMENT = "indexIncrement",
    next_page_field_path => NEXT_PAGE_FIELD_PATH = "nextPageFieldPath",
    next_page_token_path => NEXT_PAGE_TOKEN_PATH = "nextPageTokenPath",
    next_page_url_parameter => NEXT_PAGE_URL_PARAMETER = "nextPageUrlParameter",
    custom_pagination_code => CUSTOM_PAGINATION_CODE = "customPaginationCode",
    /// Delay in milliseconds between page requests
    wait_time_between_pages => WAIT_TIME_BETWEEN_PAGES = "waitTimeBetweenPages",

    // OAuth2
    oauth2_enabled => OAUTH2_ENABLED = "oauth2Enabled",
    auth_url => AUTH_URL = "authUrl",
    token_url => TOKEN_URL = "tokenUrl",
    client_id => CLIENT_ID = "clientId",
    client_secret => CLIENT_SECRET = "clientSecret",
    /// Space separated OAuth2 scopes
    scopes => SCOPES = "scopes",
    refresh_token => REFRESH_TOKEN = "refreshToken",

    // TLS
    verify_https => VERIFY_HTTPS = "verifyHttps",
    keystore_file => KEYSTORE_FILE = "keystoreFile",
    keystore_type => KEYSTORE_TYPE = "keystoreType",
    keystore_password => KEYSTORE_PASSWORD = "keystorePassword",
    keystore_key_algorithm => KEYSTORE_KEY_ALGORITHM = "keystoreKeyAlgorithm",
    keystore_cert_alias_name => KEYSTORE_CERT_ALIAS_NAME = "keystoreCertAliasName",
    trust_store_file => TRUSTSTORE_FILE = "trustStoreFile",
    trust_store_type => TRUSTSTORE_TYPE = "trustStoreType",
    trust_store_password => TRUSTSTORE_PASSWORD = "trustStorePassword",
    trust_store_key_algorithm => TRUSTSTORE_KEY_ALGORITHM = "trustStoreKeyAlgorithm",
    transport_protocols => TRANSPORT_PROTOCOLS = "transportProtocols",
    /// Cipher suites; commas, colons or whitespace separate entries
    cipher_suites => CIPHER_SUITES = "cipherSuites",
}

impl HttpSourceConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from a flat property map
    ///
    /// Unknown property names are rejected so typos surface as
    /// field-scoped errors instead of silently missing settings.
    pub fn from_properties<I, K, V>(properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (name, value) in properties {
            let name = name.as_ref();
            config.set(name, value)?;
        }
        Ok(config)
    }

    /// Set a property by name
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<&mut Self> {
        let slot = self
            .slot_mut(name)
            .ok_or_else(|| Error::invalid_property(name, format!("Unknown property '{name}'")))?;
        *slot = Some(value.into());
        Ok(self)
    }

    /// Builder-style setter for programmatic construction
    ///
    /// Unknown property names are logged and ignored, as the loader does.
    /// Use `set` to get an error instead.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        if self.set(name, value).is_err() {
            tracing::warn!(property = %name, "Ignoring unknown property");
        }
        self
    }

    /// Clear a property by name
    pub fn unset(&mut self, name: &str) -> Result<&mut Self> {
        let slot = self
            .slot_mut(name)
            .ok_or_else(|| Error::invalid_property(name, format!("Unknown property '{name}'")))?;
        *slot = None;
        Ok(self)
    }

    /// Mark a property as deferred (its value arrives at run time)
    pub fn mark_deferred(&mut self, name: &str) -> Result<&mut Self> {
        if !property::ALL.contains(&name) {
            return Err(Error::invalid_property(
                name,
                format!("Unknown property '{name}'"),
            ));
        }
        self.deferred.insert(name.to_string());
        Ok(self)
    }

    /// Builder-style variant of `mark_deferred`
    ///
    /// Unknown property names are logged and ignored.
    #[must_use]
    pub fn deferring(mut self, name: &str) -> Self {
        if self.mark_deferred(name).is_err() {
            tracing::warn!(property = %name, "Ignoring unknown deferred property");
        }
        self
    }

    /// Check whether a property's final value is not yet known
    ///
    /// True when the property was explicitly marked deferred or its raw
    /// value still contains a `{{ name }}` marker.
    pub fn is_deferred(&self, name: &str) -> bool {
        self.deferred.contains(name)
            || self
                .get(name)
                .is_some_and(|value| template::has_templates(value))
    }

    /// Check whether a property holds a non-empty value
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_set()
    }

    /// Require a property to be set
    ///
    /// Deferred properties are exempt: their final value is unknown.
    pub fn assert_is_set(&self, name: &str, reason: &str) -> Result<()> {
        if self.is_deferred(name) || self.is_set(name) {
            Ok(())
        } else {
            Err(Error::must_be_set(name, reason))
        }
    }

    /// Require a property to be empty
    ///
    /// Deferred properties are exempt: their final value is unknown.
    pub fn assert_is_not_set(&self, name: &str, reason: &str) -> Result<()> {
        if self.is_deferred(name) || !self.is_set(name) {
            Ok(())
        } else {
            Err(Error::must_not_be_set(name, reason))
        }
    }

    /// Names of all deferred properties
    pub fn deferred_properties(&self) -> Vec<String> {
        property::ALL
            .iter()
            .filter(|name| self.is_deferred(name))
            .map(|name| (*name).to_string())
            .collect()
    }

    /// Runtime argument names referenced by `{{ name }}` markers
    ///
    /// Explicitly deferred properties without a marker are looked up by
    /// their own property name.
    pub fn runtime_argument_names(&self) -> BTreeSet<String> {
        let mut names: BTreeSet<String> = property::ALL
            .iter()
            .filter_map(|name| self.get(name))
            .flat_map(|value| template::extract_variables(value))
            .collect();

        for name in &self.deferred {
            if !self.get(name).is_some_and(|value| template::has_templates(value)) {
                names.insert(name.clone());
            }
        }
        names
    }

    /// All set properties as a flat map
    pub fn to_properties(&self) -> StringMap {
        property::ALL
            .iter()
            .filter_map(|name| self.get(name).map(|v| ((*name).to_string(), v.clone())))
            .collect()
    }

    /// Substitute runtime arguments into every deferred value
    ///
    /// Returns a configuration with no deferred properties left.
    pub fn with_runtime_arguments(&self, args: &RuntimeArguments) -> Result<Self> {
        let mut resolved = self.clone();

        for name in std::mem::take(&mut resolved.deferred) {
            if let Some(value) = args.get(&name) {
                resolved.set(&name, value.clone())?;
            } else if !resolved
                .get(&name)
                .is_some_and(|value| template::has_templates(value))
            {
                return Err(Error::undefined_var(name));
            }
        }

        for (name, slot) in resolved.slots_mut() {
            if let Some(value) = slot.as_mut() {
                if template::has_templates(value) {
                    tracing::trace!(property = name, "Substituting runtime arguments");
                    *value = template::render(value, args)?;
                }
            }
        }

        Ok(resolved)
    }
}

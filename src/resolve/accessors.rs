//! Typed accessors on the raw configuration
//!
//! Every accessor is computed on demand from the stored string. Values
//! that are absent or deferred come back as `None` (or `false` for
//! booleans); only present, concrete values are parsed.

use super::enums::{resolve_enum, EnumWithValue};
use super::properties::{to_bool, to_int, to_long};
use crate::config::{property, HttpSourceConfig};
use crate::error::Result;
use crate::format::PageFormat;
use crate::http::{ErrorHandling, HttpErrorHandlerEntry, KeyStoreType, RetryPolicy};
use crate::pagination::PaginationType;
use crate::parse::{parse_key_value_map, parse_list, parse_regex_action_table, KeyValueMap};
use crate::schema::{parse_schema, RecordSchema};
use crate::types::OptionStrExt;

impl HttpSourceConfig {
    /// Raw value unless absent, empty or deferred
    fn concrete(&self, name: &str) -> Option<&str> {
        if self.is_deferred(name) {
            return None;
        }
        self.get(name).non_empty()
    }

    fn enum_property<T: EnumWithValue>(&self, name: &str) -> Result<Option<T>> {
        self.concrete(name)
            .map(|token| resolve_enum::<T>(token, name))
            .transpose()
    }

    /// Resolve any integer property by name
    pub fn long_property(&self, name: &str) -> Result<Option<i64>> {
        to_long(self.concrete(name), name)
    }

    /// Resolve any 32-bit integer property by name
    pub fn int_property(&self, name: &str) -> Result<Option<i32>> {
        to_int(self.concrete(name), name)
    }

    /// Resolve any boolean property by name
    pub fn bool_property(&self, name: &str) -> bool {
        to_bool(self.concrete(name))
    }

    // ------------------------------------------------------------------------
    // Selectors
    // ------------------------------------------------------------------------

    pub fn format(&self) -> Result<Option<PageFormat>> {
        self.enum_property(property::FORMAT)
    }

    pub fn pagination_type(&self) -> Result<Option<PaginationType>> {
        self.enum_property(property::PAGINATION_TYPE)
    }

    pub fn retry_policy(&self) -> Result<Option<RetryPolicy>> {
        self.enum_property(property::RETRY_POLICY)
    }

    pub fn error_handling(&self) -> Result<Option<ErrorHandling>> {
        self.enum_property(property::ERROR_HANDLING)
    }

    pub fn keystore_type(&self) -> Result<Option<KeyStoreType>> {
        self.enum_property(property::KEYSTORE_TYPE)
    }

    pub fn truststore_type(&self) -> Result<Option<KeyStoreType>> {
        self.enum_property(property::TRUSTSTORE_TYPE)
    }

    // ------------------------------------------------------------------------
    // Flags
    // ------------------------------------------------------------------------

    pub fn csv_skip_first_row(&self) -> bool {
        self.bool_property(property::CSV_SKIP_FIRST_ROW)
    }

    pub fn preemptive_basic_auth(&self) -> bool {
        self.bool_property(property::PREEMPTIVE_BASIC_AUTH)
    }

    pub fn oauth2_enabled(&self) -> bool {
        self.bool_property(property::OAUTH2_ENABLED)
    }

    pub fn verify_https(&self) -> bool {
        self.bool_property(property::VERIFY_HTTPS)
    }

    // ------------------------------------------------------------------------
    // Numbers
    // ------------------------------------------------------------------------

    /// Seconds between retries under the linear policy
    pub fn linear_retry_interval(&self) -> Result<Option<i64>> {
        self.long_property(property::LINEAR_RETRY_INTERVAL)
    }

    /// Upper bound in seconds for all retries of one request
    pub fn max_retry_duration(&self) -> Result<Option<i64>> {
        self.long_property(property::MAX_RETRY_DURATION)
    }

    pub fn connect_timeout(&self) -> Result<Option<i32>> {
        self.int_property(property::CONNECT_TIMEOUT)
    }

    pub fn read_timeout(&self) -> Result<Option<i32>> {
        self.int_property(property::READ_TIMEOUT)
    }

    pub fn start_index(&self) -> Result<Option<i64>> {
        self.long_property(property::START_INDEX)
    }

    pub fn max_index(&self) -> Result<Option<i64>> {
        self.long_property(property::MAX_INDEX)
    }

    /// May be negative
    pub fn index_increment(&self) -> Result<Option<i64>> {
        self.long_property(property::INDEX_INCREMENT)
    }

    /// Milliseconds to wait between page requests
    pub fn wait_time_between_pages(&self) -> Result<Option<i64>> {
        self.long_property(property::WAIT_TIME_BETWEEN_PAGES)
    }

    // ------------------------------------------------------------------------
    // Structured values
    // ------------------------------------------------------------------------

    pub fn headers_map(&self) -> Result<KeyValueMap> {
        parse_key_value_map(self.concrete(property::HEADERS), property::HEADERS)
    }

    /// Ordered status-code table; first match wins at run time
    pub fn http_error_handling_entries(&self) -> Result<Vec<HttpErrorHandlerEntry>> {
        parse_regex_action_table(
            self.concrete(property::HTTP_ERRORS_HANDLING),
            property::HTTP_ERRORS_HANDLING,
        )
    }

    /// Parsed output schema, if one is set
    pub fn schema(&self) -> Result<Option<RecordSchema>> {
        self.concrete(property::SCHEMA)
            .map(|text| parse_schema(text, property::SCHEMA))
            .transpose()
    }

    /// Field name to path mapping
    ///
    /// Every schema field defaults to the root-relative path `/<name>`;
    /// explicit `fieldsMapping` entries override the defaults.
    pub fn full_fields_mapping(&self) -> Result<KeyValueMap> {
        let mut mapping: KeyValueMap = self
            .schema()?
            .map(|schema| {
                schema
                    .fields
                    .into_iter()
                    .map(|field| {
                        let path = format!("/{}", field.name);
                        (field.name, path)
                    })
                    .collect()
            })
            .unwrap_or_default();

        mapping.merge(parse_key_value_map(
            self.concrete(property::FIELDS_MAPPING),
            property::FIELDS_MAPPING,
        )?);
        Ok(mapping)
    }

    pub fn transport_protocols_list(&self) -> Vec<String> {
        parse_list(self.concrete(property::TRANSPORT_PROTOCOLS))
    }

    /// Cipher suites; commas, colons and whitespace all separate entries
    pub fn cipher_suites_list(&self) -> Vec<String> {
        self.concrete(property::CIPHER_SUITES)
            .map(|value| {
                value
                    .split(|c: char| c == ',' || c == ':' || c.is_whitespace())
                    .filter(|suite| !suite.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// OAuth2 scopes, space separated
    pub fn scopes_list(&self) -> Vec<String> {
        self.concrete(property::SCOPES)
            .map(|value| value.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

//! Mini-language parsers
//!
//! Several properties embed a small structured language in one string:
//! - lists: `a,b,c`
//! - key-value maps: `name:value,other:value` (headers, fields mapping)
//! - ordered regex-action tables: `5\d\d:RETRY_AND_FAIL,404:SKIP`
//!
//! Entries split on the FIRST colon only, so values may contain colons
//! (URLs, header values). An entry without any colon is a field-scoped
//! error naming the source property.

use crate::error::{Error, Result, ResultExt};
use crate::resolve::{resolve_enum, EnumWithValue};
use crate::types::OptionStrExt;
use regex::Regex;
use std::fmt;

const ENTRY_SEPARATOR: char = ',';
const KEY_VALUE_SEPARATOR: char = ':';

// ============================================================================
// Lists
// ============================================================================

/// Split a comma separated list
///
/// Absent or empty input yields an empty list. Trailing empty items are
/// dropped; inner empty items are kept.
pub fn parse_list(value: Option<&str>) -> Vec<String> {
    let Some(value) = value.non_empty() else {
        return Vec::new();
    };

    let mut items: Vec<String> = value.split(ENTRY_SEPARATOR).map(str::to_string).collect();
    while items.last().is_some_and(String::is_empty) {
        items.pop();
    }
    items
}

// ============================================================================
// Key-value maps
// ============================================================================

/// Insertion-ordered string map
///
/// Re-inserting an existing key replaces its value in place, so the key
/// keeps its original position (last write wins, first position wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueMap {
    entries: Vec<(String, String)>,
}

impl KeyValueMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Overlay another map; its values win
    pub fn merge(&mut self, other: KeyValueMap) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }
}

impl fmt::Display for KeyValueMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "{ENTRY_SEPARATOR}")?;
            }
            write!(f, "{key}{KEY_VALUE_SEPARATOR}{value}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for KeyValueMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Parse `key:value,key:value` into an ordered map
pub fn parse_key_value_map(value: Option<&str>, property: &str) -> Result<KeyValueMap> {
    let mut result = KeyValueMap::new();

    let Some(value) = value.non_empty() else {
        return Ok(result);
    };

    for entry in value.split(ENTRY_SEPARATOR).filter(|e| !e.is_empty()) {
        let (key, value) = entry.split_once(KEY_VALUE_SEPARATOR).ok_or_else(|| {
            Error::invalid_property(
                property,
                format!(
                    "Entry '{entry}' of property '{property}' is not valid. \
                     Expected 'key{KEY_VALUE_SEPARATOR}value'"
                ),
            )
        })?;
        result.insert(key, value);
    }

    Ok(result)
}

// ============================================================================
// Regex-action tables
// ============================================================================

/// One row of an ordered regex-action table
#[derive(Debug, Clone)]
pub struct RegexActionEntry<T> {
    /// Pattern as declared
    pattern: String,
    /// Pattern anchored at both ends
    regex: Regex,
    /// Action applied on match
    pub action: T,
}

impl<T> RegexActionEntry<T> {
    /// Pattern as declared by the user
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check whether the whole input matches this entry
    pub fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

/// Parse an ordered `regex:action` table
///
/// Declaration order is preserved exactly; callers apply first-match-wins.
pub fn parse_regex_action_table<T: EnumWithValue>(
    value: Option<&str>,
    property: &str,
) -> Result<Vec<RegexActionEntry<T>>> {
    let map = parse_key_value_map(value, property)?;
    let mut entries = Vec::with_capacity(map.len());

    for (pattern, token) in map {
        // Compile the declared pattern first so errors quote the user's text
        let regex = Regex::new(&pattern)
            .and_then(|_| Regex::new(&format!("^(?:{pattern})$")))
            .with_property(property, || {
                format!("Error handling regex '{pattern}' is not valid.")
            })?;
        let action = resolve_enum::<T>(&token, property)?;

        tracing::trace!(property, pattern = %pattern, action = action.value(), "Parsed table entry");
        entries.push(RegexActionEntry {
            pattern,
            regex,
            action,
        });
    }

    Ok(entries)
}

/// First entry whose pattern matches the whole input
pub fn first_match<'a, T>(
    entries: &'a [RegexActionEntry<T>],
    input: &str,
) -> Option<&'a RegexActionEntry<T>> {
    entries.iter().find(|entry| entry.matches(input))
}

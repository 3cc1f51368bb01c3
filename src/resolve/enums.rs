//! Enum-by-value lookup
//!
//! Every selector property (format, pagination type, retry policy, error
//! handling, key store type) resolves through one generic lookup over a
//! static registration table of `(token, variant)` pairs.

use crate::error::{Error, Result};

/// A closed set of variants, each declared with a string token
pub trait EnumWithValue: Copy + Sized + 'static {
    /// Registration table: declared token and its variant
    const VALUES: &'static [(&'static str, Self)];

    /// Declared token of this variant
    fn value(self) -> &'static str;
}

/// Resolve a token into a variant, ignoring case
///
/// Fails with a field-scoped error naming both the property and the
/// offending token when nothing matches.
pub fn resolve_enum<T: EnumWithValue>(token: &str, property: &str) -> Result<T> {
    T::VALUES
        .iter()
        .find(|(value, _)| value.eq_ignore_ascii_case(token))
        .map(|(_, variant)| *variant)
        .ok_or_else(|| Error::unsupported_value(property, token))
}

/// Declares an enum together with its token table and `Display`.
macro_rules! enum_with_value {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::resolve::EnumWithValue for $name {
            const VALUES: &'static [(&'static str, Self)] = &[ $( ($token, Self::$variant), )+ ];

            fn value(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(<Self as $crate::resolve::EnumWithValue>::value(*self))
            }
        }
    };
}

pub(crate) use enum_with_value;

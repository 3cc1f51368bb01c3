//! Pagination types and traits
//!
//! Defines the pagination variants, the properties they own, and the
//! capability query used by error-handling validation.

use crate::config::{property, HttpSourceConfig};
use crate::resolve::enum_with_value;

/// Placeholder substituted with the current index in the page URL
pub const PAGINATION_INDEX_PLACEHOLDER: &str = "{pagination.index}";

enum_with_value! {
    /// Strategy used to locate the next page
    pub enum PaginationType {
        /// Single page
        None => "None",
        /// Next page URL taken from the `Link` response header
        LinkInResponseHeader => "Link in response header",
        /// Next page URL taken from a field of the response body
        LinkInResponseBody => "Link in response body",
        /// Next page token taken from the body and appended as a URL parameter
        TokenInResponseBody => "Token in response body",
        /// Index substituted into the URL and incremented per page
        IncrementAnIndex => "Increment an index",
        /// User code computes the next page URL
        Custom => "Custom",
    }
}

/// Properties that only make sense for some pagination types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationField {
    StartIndex,
    MaxIndex,
    IndexIncrement,
    NextPageFieldPath,
    NextPageTokenPath,
    NextPageUrlParameter,
    CustomPaginationCode,
}

impl PaginationField {
    /// Every pagination-specific field, in check order
    pub const ALL: [PaginationField; 7] = [
        PaginationField::StartIndex,
        PaginationField::MaxIndex,
        PaginationField::IndexIncrement,
        PaginationField::NextPageFieldPath,
        PaginationField::NextPageTokenPath,
        PaginationField::NextPageUrlParameter,
        PaginationField::CustomPaginationCode,
    ];

    /// Property name of this field
    pub fn property(self) -> &'static str {
        match self {
            PaginationField::StartIndex => property::START_INDEX,
            PaginationField::MaxIndex => property::MAX_INDEX,
            PaginationField::IndexIncrement => property::INDEX_INCREMENT,
            PaginationField::NextPageFieldPath => property::NEXT_PAGE_FIELD_PATH,
            PaginationField::NextPageTokenPath => property::NEXT_PAGE_TOKEN_PATH,
            PaginationField::NextPageUrlParameter => property::NEXT_PAGE_URL_PARAMETER,
            PaginationField::CustomPaginationCode => property::CUSTOM_PAGINATION_CODE,
        }
    }

    /// Whether the field holds an integer
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PaginationField::StartIndex | PaginationField::MaxIndex | PaginationField::IndexIncrement
        )
    }
}

/// Rule beyond plain field presence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraRule {
    /// The URL must contain `{pagination.index}`
    UrlIndexPlaceholder,
}

/// Properties a pagination type owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRules {
    /// Must be set
    pub required: &'static [PaginationField],
    /// May be set or empty
    pub optional: &'static [PaginationField],
    /// Additional semantic rule
    pub extra: Option<ExtraRule>,
}

impl PaginationRules {
    const NONE: Self = Self {
        required: &[],
        optional: &[],
        extra: None,
    };

    /// Must be empty: every pagination field the type does not own
    pub fn forbidden(&self) -> impl Iterator<Item = PaginationField> + '_ {
        PaginationField::ALL
            .into_iter()
            .filter(|field| !self.required.contains(field) && !self.optional.contains(field))
    }
}

impl PaginationType {
    /// Owned properties and extra rule of this type
    pub fn rules(self) -> PaginationRules {
        match self {
            PaginationType::None | PaginationType::LinkInResponseHeader => PaginationRules::NONE,
            PaginationType::LinkInResponseBody => PaginationRules {
                required: &[PaginationField::NextPageFieldPath],
                ..PaginationRules::NONE
            },
            PaginationType::TokenInResponseBody => PaginationRules {
                required: &[
                    PaginationField::NextPageTokenPath,
                    PaginationField::NextPageUrlParameter,
                ],
                ..PaginationRules::NONE
            },
            PaginationType::IncrementAnIndex => PaginationRules {
                required: &[PaginationField::StartIndex, PaginationField::IndexIncrement],
                optional: &[PaginationField::MaxIndex],
                extra: Some(ExtraRule::UrlIndexPlaceholder),
            },
            PaginationType::Custom => PaginationRules {
                required: &[PaginationField::CustomPaginationCode],
                ..PaginationRules::NONE
            },
        }
    }

    /// Whether pagination can carry on after a page is skipped
    ///
    /// Strategies that read the next page location out of the current
    /// page lose their cursor when that page fails.
    pub fn supports_skipping_pages(self) -> bool {
        matches!(self, PaginationType::None | PaginationType::IncrementAnIndex)
    }
}

/// Capability query answered by the pagination layer
pub trait PaginationCapability {
    /// Can the selected strategy resume after skipping a failed page?
    fn supports_skipping_pages(
        &self,
        config: &HttpSourceConfig,
        pagination_type: PaginationType,
    ) -> bool;
}

/// Capabilities of the built-in pagination strategies
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPaginationCapability;

impl PaginationCapability for DefaultPaginationCapability {
    fn supports_skipping_pages(
        &self,
        _config: &HttpSourceConfig,
        pagination_type: PaginationType,
    ) -> bool {
        pagination_type.supports_skipping_pages()
    }
}

//! Records exchanged with the transparency platform backend
//!
//! All records are defined by the server. The console deserializes them
//! leniently and never derives or validates their fields.

use serde::{Deserialize, Serialize};

/// Declares a wire enum with a stable label per variant and an `Unknown`
/// catch-all for values introduced server-side later.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
            /// Value not known to this client
            #[serde(rename = "unknown", other)]
            Unknown,
        }

        impl $name {
            /// Every known value, in declaration order
            pub const ALL: &'static [Self] = &[$( Self::$variant ),+];

            /// Wire label of this value
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                    Self::Unknown => "unknown",
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| {
                        let expected: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        format!("unknown value '{s}', expected one of: {}", expected.join(", "))
                    })
            }
        }
    };
}

/// Implements [`PageFilters`] for a filter struct with `page` and `per_page` fields.
macro_rules! page_filters {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::types::PageFilters for $ty {
                fn page(&self) -> u32 {
                    self.page
                }

                fn set_page(&mut self, page: u32) {
                    self.page = page.max(1);
                }

                fn per_page(&self) -> u32 {
                    self.per_page
                }
            }
        )+
    };
}

pub mod audit;
pub mod companies;
pub mod dashboard;
pub mod notifications;
pub mod onboarding;
pub mod permissions;
pub mod products;
pub mod system;
pub mod tickets;
pub mod users;

pub use audit::*;
pub use companies::*;
pub use dashboard::*;
pub use notifications::*;
pub use onboarding::*;
pub use permissions::*;
pub use products::*;
pub use system::*;
pub use tickets::*;
pub use users::*;

/// Default rows per page when a filter is built without configuration
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Records that carry a server-assigned identifier
pub trait Identified {
    /// Server-assigned identifier
    fn id(&self) -> &str;
}

/// Filter objects that carry server-side pagination
pub trait PageFilters {
    /// Current page (1-based)
    fn page(&self) -> u32;

    /// Move to another page
    fn set_page(&mut self, page: u32);

    /// Rows per page
    fn per_page(&self) -> u32;
}

/// One page of a list endpoint, normalized across the different envelopes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Rows on this page
    pub items: Vec<T>,
    /// Total rows matching the filter across all pages
    pub total: u64,
}

impl<T> Page<T> {
    /// Number of pages needed for `total` rows at `per_page` rows each
    #[must_use]
    pub const fn total_pages(&self, per_page: u32) -> u64 {
        crate::utils::total_pages(self.total, per_page)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// `{data, total}` envelope used by user, company and product listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPage<T> {
    /// Rows on this page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Total matching rows
    #[serde(default)]
    pub total: u64,
}

impl<T> From<DataPage<T>> for Page<T> {
    fn from(page: DataPage<T>) -> Self {
        Self {
            items: page.data,
            total: page.total,
        }
    }
}

/// Body of every bulk endpoint: one action applied to many ids
///
/// The id list is serialized under an entity-specific key (`user_ids`,
/// `ticket_ids`, ...) by the client, so this struct is not serialized directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkRequest {
    /// Action name understood by the backend, e.g. `suspend` or `close`
    pub operation: String,
    /// Target ids
    pub ids: Vec<String>,
    /// Free-text justification recorded in the audit log
    pub reason: String,
}

/// Sort direction for list filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_enum_values_are_tolerated() {
        let role: UserRole = serde_json::from_str("\"auditor\"").unwrap();
        assert_eq!(role, UserRole::Unknown);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"unknown\"");
    }

    #[test]
    fn test_labelled_enum_from_str_is_case_insensitive() {
        assert_eq!("HIGH".parse::<TicketPriority>().unwrap(), TicketPriority::High);
        let err = "severe".parse::<TicketPriority>().unwrap_err();
        assert!(err.contains("low, medium, high, urgent"));
    }

    #[test]
    fn test_data_page_conversion() {
        let page: DataPage<User> =
            serde_json::from_str(r#"{"data": [], "total": 42}"#).unwrap();
        let page: Page<User> = page.into();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 42);
        assert_eq!(page.total_pages(20), 3);
    }

    #[test]
    fn test_set_page_never_goes_below_one() {
        let mut filters = UserFilters::default();
        filters.set_page(0);
        assert_eq!(filters.page(), 1);
    }
}

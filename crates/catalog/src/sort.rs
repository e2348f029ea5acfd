//! Catalog ordering.
//!
//! Sort keys round-trip through the `sort` query parameter using the same
//! kebab-case tokens the storefront writes into the address bar.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use atelier_core::{DomainError, Locale};

use crate::product::Product;

/// Ordering applied to a category listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// The catalog's own curated order; sorting is a no-op.
    Featured,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    DateDesc,
    DateAsc,
}

impl SortKey {
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::DateDesc => "date-desc",
            Self::DateAsc => "date-asc",
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "date-desc" => Ok(Self::DateDesc),
            "date-asc" => Ok(Self::DateAsc),
            other => Err(DomainError::validation(format!("unknown sort key {other:?}"))),
        }
    }
}

/// Stable in-place sort of a listing.
///
/// Name ordering compares the locale-resolved display name; price ordering
/// compares the effective (sale-aware) price.
pub fn sort_products(products: &mut [Product], key: SortKey, locale: &Locale) {
    match key {
        SortKey::Featured => {}
        SortKey::NameAsc => {
            products.sort_by(|a, b| a.name().resolve(locale).cmp(b.name().resolve(locale)));
        }
        SortKey::NameDesc => {
            products.sort_by(|a, b| b.name().resolve(locale).cmp(a.name().resolve(locale)));
        }
        SortKey::PriceAsc => {
            products.sort_by_key(|p| p.pricing().effective());
        }
        SortKey::PriceDesc => {
            products.sort_by(|a, b| b.pricing().effective().cmp(&a.pricing().effective()));
        }
        SortKey::DateDesc => {
            products.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        }
        SortKey::DateAsc => {
            products.sort_by_key(|p| p.created_at());
        }
    }
}

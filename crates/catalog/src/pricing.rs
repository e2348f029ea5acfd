//! Product pricing.

use serde::{Deserialize, Serialize};

use atelier_core::{DomainError, DomainResult, ValueObject};

/// Base and optional sale price, in the smallest currency unit (e.g., cents).
///
/// Invariant: `sale <= base` when a sale price is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    pub base: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale: Option<u64>,
}

impl Pricing {
    pub fn regular(base: u64) -> Self {
        Self { base, sale: None }
    }

    pub fn on_sale(base: u64, sale: u64) -> Self {
        Self {
            base,
            sale: Some(sale),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if let Some(sale) = self.sale {
            if sale > self.base {
                return Err(DomainError::validation(format!(
                    "sale price {sale} exceeds base price {}",
                    self.base
                )));
            }
        }
        Ok(())
    }

    pub fn is_on_sale(&self) -> bool {
        self.sale.is_some()
    }

    /// The price the customer pays: sale price if present, else base price.
    pub fn effective(&self) -> u64 {
        self.sale.unwrap_or(self.base)
    }

    /// Base minus sale when on sale, else zero (nothing to display).
    pub fn discount(&self) -> u64 {
        self.sale.map_or(0, |sale| self.base - sale)
    }
}

impl ValueObject for Pricing {}

/// Render a minor-unit amount as `"1,234.56"`.
///
/// The currency symbol is the caller's concern.
pub fn format_cents(cents: u64) -> String {
    let units = (cents / 100).to_string();
    let frac = cents % 100;
    let mut grouped = String::with_capacity(units.len() + units.len() / 3 + 3);
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('.');
    grouped.push_str(&format!("{frac:02}"));
    grouped
}

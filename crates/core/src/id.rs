//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers here are opaque strings minted by the commerce backend; the
//! domain never generates them. `FromStr` is the validating entry point for
//! untrusted input (e.g. a `variant` query parameter) and rejects empty or
//! whitespace-bearing values.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a purchasable variant within a product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(String);

/// Identifier of a size.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeId(String);

/// Identifier of a color.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(String);

macro_rules! impl_str_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a backend-issued identifier as-is.
            ///
            /// Prefer `FromStr` when the value comes from an untrusted source
            /// such as the address bar.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub(crate) fn check(raw: &str) -> Result<(), DomainError> {
                if raw.is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, ": empty")));
                }
                if raw.chars().any(char::is_whitespace) {
                    return Err(DomainError::invalid_id(concat!(
                        $name,
                        ": contains whitespace"
                    )));
                }
                Ok(())
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::check(s)?;
                Ok(Self(s.to_owned()))
            }
        }
    };
}

impl_str_newtype!(ProductId, "ProductId");
impl_str_newtype!(VariantId, "VariantId");
impl_str_newtype!(SizeId, "SizeId");
impl_str_newtype!(ColorId, "ColorId");

//! `atelier-catalog` — product catalog domain model.
//!
//! Products are supplied whole by the commerce backend and are read-only
//! here; this crate models them, enforces their construction invariants, and
//! derives the collections the storefront renders (distinct sizes, colors per
//! size, stock bands, price lines, catalog ordering).

pub mod pricing;
pub mod product;
pub mod sort;
pub mod stock;

pub use pricing::{Pricing, format_cents};
pub use product::{Color, Image, Product, Size, Variant};
pub use sort::{SortKey, sort_products};
pub use stock::{LOW_STOCK_THRESHOLD, StockBand};

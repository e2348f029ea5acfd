//! `atelier-storefront` — variant selection for the product detail view.
//!
//! A product detail view owns exactly one [`Selection`]: the variant currently
//! presented to the customer. The selection is resolved from the `variant`
//! query parameter on mount (and again on back/forward navigation), moves
//! through size/color clicks, and is written back to the address bar — without
//! a history entry, without a scroll reset, and without ever re-triggering its
//! own resolution.

pub mod display;
pub mod selection;
pub mod sync;

pub use display::{ColorOption, ImageView, PriceLines, ProductView, SizeOption, StockNotice};
pub use selection::{Selection, SelectionCommand, SelectionEvent};
pub use sync::{AddressError, AddressProvider, ReplaceOptions, SelectionSync};

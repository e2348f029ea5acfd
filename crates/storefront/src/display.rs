//! Display projection for the product detail view.
//!
//! Pure read model over the current [`Selection`]: everything the renderer
//! needs, with the disabled-state and purchase-gating rules already applied.

use serde::Serialize;

use atelier_catalog::{StockBand, format_cents};
use atelier_core::{ColorId, Locale, SizeId, VariantId};

use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

/// Formatted price rows. `original` and `saved` are only present on sale —
/// the discount row is hidden otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceLines {
    pub effective: String,
    pub original: Option<String>,
    pub saved: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeOption {
    pub id: SizeId,
    pub label: String,
    pub selected: bool,
    /// Every color of this size is sold out.
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorOption {
    pub id: ColorId,
    pub label: String,
    pub selected: bool,
    /// The (selected size, this color) variant is missing or sold out.
    pub disabled: bool,
}

/// Stock notice for the selected variant. Sold-out selections show no notice
/// at all; the disabled purchase action carries that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockNotice {
    /// Running low; `remaining` is the exact count to display.
    Low { remaining: u32 },
    /// Plenty left; no count is shown.
    InStock,
}

/// Everything the product detail renderer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub name: String,
    pub images: Vec<ImageView>,
    pub price: PriceLines,
    pub sizes: Vec<SizeOption>,
    /// Empty until a variant (and therefore a size) is selected.
    pub colors: Vec<ColorOption>,
    pub stock: Option<StockNotice>,
    /// The id handed to the purchase collaborator; `None` disables both
    /// purchase actions (sold out or nothing to select).
    pub purchase: Option<VariantId>,
}

impl ProductView {
    pub fn project(selection: &Selection, locale: &Locale) -> Self {
        let product = selection.product();
        let selected = selection.selected_variant();
        let pricing = product.pricing();

        let images = selected
            .map(|v| {
                v.images
                    .iter()
                    .map(|image| ImageView {
                        url: image.url.clone(),
                        alt: image.alt_text.resolve(locale).to_owned(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let price = PriceLines {
            effective: format_cents(pricing.effective()),
            original: pricing.is_on_sale().then(|| format_cents(pricing.base)),
            saved: pricing.is_on_sale().then(|| format_cents(pricing.discount())),
        };

        let sizes = product
            .distinct_sizes()
            .into_iter()
            .map(|size| SizeOption {
                id: size.id.clone(),
                label: size.name.resolve(locale).to_owned(),
                selected: selected.is_some_and(|v| v.size.id == size.id),
                disabled: !product.size_has_stock(&size.id),
            })
            .collect();

        let colors = selected
            .map(|current| {
                product
                    .colors_for_size(&current.size.id)
                    .into_iter()
                    .map(|color| ColorOption {
                        id: color.id.clone(),
                        label: color.name.resolve(locale).to_owned(),
                        selected: current.color.id == color.id,
                        disabled: !product.color_in_stock(&current.size.id, &color.id),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let stock = selected.and_then(|v| match StockBand::of(v.stock) {
            StockBand::SoldOut => None,
            StockBand::Low { remaining } => Some(StockNotice::Low { remaining }),
            StockBand::InStock => Some(StockNotice::InStock),
        });

        let purchase = selected.filter(|v| v.in_stock()).map(|v| v.id.clone());

        Self {
            name: product.name().resolve(locale).to_owned(),
            images,
            price,
            sizes,
            colors,
            stock,
            purchase,
        }
    }
}

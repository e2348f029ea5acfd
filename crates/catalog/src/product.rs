//! Product, its variants, and the collections derived from them.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use atelier_core::{
    ColorId, DomainError, DomainResult, Entity, LocalizedText, ProductId, SizeId, ValueObject,
    VariantId,
};

use crate::pricing::Pricing;

/// Product photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub alt_text: LocalizedText,
}

impl ValueObject for Image {}

/// A size option as carried by a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub id: SizeId,
    pub name: LocalizedText,
}

/// A color option as carried by a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: ColorId,
    pub name: LocalizedText,
}

/// A purchasable size/color combination of a product.
///
/// `stock == 0` variants remain visible (and directly addressable via a deep
/// link) but are not selectable for purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub stock: u32,
    pub size: Size,
    pub color: Color,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Variant {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Entity for Variant {
    type Id = VariantId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A product together with all of its variants.
///
/// Supplied whole by the commerce backend before a view mounts; read-only
/// afterwards. Variants have no existence outside their product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: LocalizedText,
    pricing: Pricing,
    variants: Vec<Variant>,
    created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: LocalizedText,
        pricing: Pricing,
        variants: Vec<Variant>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let product = Self {
            id,
            name,
            pricing,
            variants,
            created_at,
        };
        product.validate()?;
        Ok(product)
    }

    /// Parse a product from the backend's JSON payload, then validate it.
    pub fn from_json(payload: &str) -> DomainResult<Self> {
        let product: Self = serde_json::from_str(payload)
            .map_err(|e| DomainError::validation(format!("malformed product payload: {e}")))?;
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.name.default_text().trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        self.pricing.validate()?;

        let mut ids: IndexMap<&VariantId, ()> = IndexMap::new();
        let mut pairs: IndexMap<(&SizeId, &ColorId), &VariantId> = IndexMap::new();
        for variant in &self.variants {
            variant.id.as_str().parse::<VariantId>()?;
            if ids.insert(&variant.id, ()).is_some() {
                return Err(DomainError::conflict(format!(
                    "duplicate variant id {}",
                    variant.id
                )));
            }
            if let Some(first) = pairs.insert((&variant.size.id, &variant.color.id), &variant.id) {
                return Err(DomainError::invariant(format!(
                    "variants {first} and {} share size {} / color {}",
                    variant.id, variant.size.id, variant.color.id
                )));
            }
        }
        Ok(())
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &LocalizedText {
        &self.name
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn variant(&self, id: &VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.id == id)
    }

    /// First variant in list order with stock, if any.
    pub fn first_in_stock(&self) -> Option<&Variant> {
        self.variants.iter().find(|v| v.in_stock())
    }

    /// First in-stock variant of the given size, in list order.
    pub fn first_in_stock_of_size(&self, size_id: &SizeId) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|v| &v.size.id == size_id && v.in_stock())
    }

    /// The exact (size, color) variant, provided it has stock.
    pub fn in_stock_pair(&self, size_id: &SizeId, color_id: &ColorId) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|v| &v.size.id == size_id && &v.color.id == color_id && v.in_stock())
    }

    /// Distinct sizes in first-seen order, scanning variants in list order.
    ///
    /// Equality is by size id; the first-seen instance wins for display name.
    pub fn distinct_sizes(&self) -> Vec<&Size> {
        let mut seen: IndexMap<&SizeId, &Size> = IndexMap::new();
        for variant in &self.variants {
            seen.entry(&variant.size.id).or_insert(&variant.size);
        }
        seen.into_values().collect()
    }

    /// Distinct colors available for a size, first-seen order.
    ///
    /// Not filtered by stock: a sold-out color still shows, it is just
    /// disabled (`color_in_stock`).
    pub fn colors_for_size(&self, size_id: &SizeId) -> Vec<&Color> {
        let mut seen: IndexMap<&ColorId, &Color> = IndexMap::new();
        for variant in self.variants.iter().filter(|v| &v.size.id == size_id) {
            seen.entry(&variant.color.id).or_insert(&variant.color);
        }
        seen.into_values().collect()
    }

    /// A size control is enabled iff some variant of that size has stock.
    pub fn size_has_stock(&self, size_id: &SizeId) -> bool {
        self.variants
            .iter()
            .any(|v| &v.size.id == size_id && v.in_stock())
    }

    /// A color control is enabled iff the exact (size, color) variant exists
    /// with stock.
    pub fn color_in_stock(&self, size_id: &SizeId, color_id: &ColorId) -> bool {
        self.in_stock_pair(size_id, color_id).is_some()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(id: &str, name: &str) -> Size {
        Size {
            id: SizeId::new(id),
            name: LocalizedText::plain(name),
        }
    }

    fn color(id: &str, name: &str) -> Color {
        Color {
            id: ColorId::new(id),
            name: LocalizedText::plain(name),
        }
    }

    fn variant(id: &str, size_id: &str, color_id: &str, stock: u32) -> Variant {
        Variant {
            id: VariantId::new(id),
            stock,
            size: size(size_id, size_id.to_uppercase().as_str()),
            color: color(color_id, color_id),
            images: vec![Image {
                url: format!("https://cdn.example.com/{id}.jpg"),
                alt_text: LocalizedText::plain(id),
            }],
        }
    }

    fn product(variants: Vec<Variant>) -> Product {
        Product::new(
            ProductId::new("p1"),
            LocalizedText::plain("Wide Leg Jeans"),
            Pricing::regular(12_000),
            variants,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_size_color_pair() {
        let err = Product::new(
            ProductId::new("p1"),
            LocalizedText::plain("Wide Leg Jeans"),
            Pricing::regular(12_000),
            vec![variant("v1", "s", "red", 1), variant("v2", "s", "red", 2)],
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn rejects_duplicate_variant_id_and_blank_name() {
        let err = Product::new(
            ProductId::new("p1"),
            LocalizedText::plain("Wide Leg Jeans"),
            Pricing::regular(12_000),
            vec![variant("v1", "s", "red", 1), variant("v1", "m", "red", 2)],
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let err = Product::new(
            ProductId::new("p1"),
            LocalizedText::plain("   "),
            Pricing::regular(12_000),
            vec![],
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_sale_price_above_base() {
        let err = Product::new(
            ProductId::new("p1"),
            LocalizedText::plain("Wide Leg Jeans"),
            Pricing::on_sale(10_000, 11_000),
            vec![],
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn distinct_sizes_first_seen_order_and_name() {
        let p = product(vec![
            variant("v1", "m", "red", 1),
            variant("v2", "s", "red", 1),
            variant("v3", "m", "blue", 1),
            variant("v4", "l", "red", 0),
        ]);
        let sizes: Vec<&str> = p.distinct_sizes().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(sizes, vec!["m", "s", "l"]);
        // First-seen instance wins for display name.
        assert_eq!(
            p.distinct_sizes()[0].name.default_text(),
            "M",
        );
    }

    #[test]
    fn colors_for_size_restricted_and_unfiltered_by_stock() {
        let p = product(vec![
            variant("v1", "s", "red", 0),
            variant("v2", "s", "blue", 3),
            variant("v3", "m", "green", 2),
        ]);
        let colors: Vec<&str> = p
            .colors_for_size(&SizeId::new("s"))
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        // Sold-out red still listed.
        assert_eq!(colors, vec!["red", "blue"]);
        assert!(p.colors_for_size(&SizeId::new("xl")).is_empty());
    }

    #[test]
    fn disabled_state_predicates() {
        let p = product(vec![
            variant("v1", "s", "red", 0),
            variant("v2", "s", "blue", 3),
            variant("v3", "m", "red", 0),
        ]);
        assert!(p.size_has_stock(&SizeId::new("s")));
        assert!(!p.size_has_stock(&SizeId::new("m")));
        assert!(!p.color_in_stock(&SizeId::new("s"), &ColorId::new("red")));
        assert!(p.color_in_stock(&SizeId::new("s"), &ColorId::new("blue")));
        // Pair that does not exist at all.
        assert!(!p.color_in_stock(&SizeId::new("m"), &ColorId::new("blue")));
    }

    #[test]
    fn lookups_respect_list_order() {
        let p = product(vec![
            variant("v1", "s", "red", 0),
            variant("v2", "s", "blue", 3),
            variant("v3", "m", "red", 2),
        ]);
        assert_eq!(p.first_in_stock().unwrap().id.as_str(), "v2");
        assert_eq!(
            p.first_in_stock_of_size(&SizeId::new("m")).unwrap().id.as_str(),
            "v3"
        );
        assert!(p.first_in_stock_of_size(&SizeId::new("xl")).is_none());
        assert!(
            p.in_stock_pair(&SizeId::new("s"), &ColorId::new("red"))
                .is_none()
        );
    }

    #[test]
    fn from_json_parses_and_validates() {
        let payload = r#"{
            "id": "p1",
            "name": { "default": "Wide Leg Jeans", "overrides": { "ar": "جينز واسع" } },
            "pricing": { "base": 12000, "sale": 9000 },
            "created_at": "2026-03-01T09:30:00Z",
            "variants": [
                {
                    "id": "v1",
                    "stock": 2,
                    "size": { "id": "s", "name": { "default": "S" } },
                    "color": { "id": "indigo", "name": { "default": "Indigo" } },
                    "images": [
                        { "url": "https://cdn.example.com/v1.jpg",
                          "alt_text": { "default": "front view" } }
                    ]
                }
            ]
        }"#;
        let p = Product::from_json(payload).unwrap();
        assert_eq!(p.id().as_str(), "p1");
        assert_eq!(p.pricing().effective(), 9_000);
        assert_eq!(p.variants().len(), 1);

        assert!(Product::from_json("{").is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Build a valid product from (size, color, stock) triples, skipping
        /// duplicate pairs the way the backend's uniqueness constraint would.
        pub(crate) fn product_from_triples(triples: &[(u8, u8, u32)]) -> Product {
            let mut variants = Vec::new();
            let mut pairs = IndexMap::new();
            for (i, &(s, c, stock)) in triples.iter().enumerate() {
                if pairs.insert((s, c), ()).is_some() {
                    continue;
                }
                variants.push(variant(
                    &format!("v{i}"),
                    &format!("s{s}"),
                    &format!("c{c}"),
                    stock,
                ));
            }
            product(variants)
        }

        proptest! {
            #[test]
            fn distinct_sizes_unique_and_first_seen(
                triples in proptest::collection::vec((0u8..4, 0u8..4, 0u32..6), 0..16)
            ) {
                let p = product_from_triples(&triples);
                let sizes = p.distinct_sizes();

                prop_assert!(sizes.len() <= p.variants().len());

                let mut ids: Vec<&SizeId> = sizes.iter().map(|s| &s.id).collect();
                let before = ids.len();
                ids.dedup();
                prop_assert_eq!(before, ids.len());

                // Order equals first occurrence order over the variant list.
                let mut expected: Vec<&SizeId> = Vec::new();
                for v in p.variants() {
                    if !expected.contains(&&v.size.id) {
                        expected.push(&v.size.id);
                    }
                }
                prop_assert_eq!(ids, expected);
            }

            #[test]
            fn colors_for_size_subset_of_size_variants(
                triples in proptest::collection::vec((0u8..4, 0u8..4, 0u32..6), 0..16)
            ) {
                let p = product_from_triples(&triples);
                for s in p.distinct_sizes() {
                    let colors = p.colors_for_size(&s.id);
                    for c in &colors {
                        prop_assert!(
                            p.variants().iter().any(|v| v.size.id == s.id && v.color.id == c.id)
                        );
                    }
                    // Disabled iff no in-stock variant of the size.
                    prop_assert_eq!(
                        p.size_has_stock(&s.id),
                        colors.iter().any(|c| p.color_in_stock(&s.id, &c.id))
                    );
                }
            }
        }
    }
}

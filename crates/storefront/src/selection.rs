//! The selection aggregate.
//!
//! `Selection` owns the (read-only) product supplied at view mount plus the
//! mutable selection state, and evolves through pure `handle`/`apply` in the
//! usual aggregate shape. A product whose variant list changes identity gets a
//! fresh `Selection` via [`Selection::mount`]; within one mount the variant
//! list never changes.

use serde::{Deserialize, Serialize};

use atelier_catalog::{Product, Variant};
use atelier_core::{Aggregate, AggregateRoot, ColorId, DomainError, ProductId, SizeId, VariantId};

/// Command: a mount/navigation observation or a user click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionCommand {
    /// The externally observed `variant` query value (mount, deep link,
    /// back/forward). `None` when the parameter is absent.
    SyncFromAddress { requested: Option<String> },
    /// The customer clicked a size control.
    SelectSize { size_id: SizeId },
    /// The customer clicked a color control.
    SelectColor { color_id: ColorId },
}

/// Event: what actually happened to the selection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// The raw address value was consumed. Recorded even when it does not
    /// change the selection, so the write-back guard compares against what
    /// was actually observed.
    AddressObserved { raw: Option<String> },
    /// The presented variant changed.
    SelectionChanged { variant_id: VariantId },
    /// The selected id was written to the address bar.
    AddressPublished { variant_id: VariantId },
}

/// The single variant currently presented for one product view.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    product: Product,
    selected: Option<VariantId>,
    last_address: Option<String>,
    version: u64,
}

impl Selection {
    /// Fresh state for a newly mounted view; nothing selected until the first
    /// `SyncFromAddress` runs.
    pub fn mount(product: Product) -> Self {
        Self {
            product,
            selected: None,
            last_address: None,
            version: 0,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn selected_id(&self) -> Option<&VariantId> {
        self.selected.as_ref()
    }

    pub fn selected_variant(&self) -> Option<&Variant> {
        self.selected.as_ref().and_then(|id| self.product.variant(id))
    }

    /// The raw `variant` value last observed from, or published to, the
    /// address bar.
    pub fn last_address(&self) -> Option<&str> {
        self.last_address.as_deref()
    }

    /// The id that still needs writing to the address bar, if any.
    ///
    /// `None` whenever the selected id equals the last observed/published
    /// address value — the guard that keeps an address-derived selection from
    /// being written straight back out (no feedback loop).
    pub fn pending_publish(&self) -> Option<&VariantId> {
        self.selected
            .as_ref()
            .filter(|id| Some(id.as_str()) != self.last_address.as_deref())
    }

    /// Strict resolution priority for an externally supplied variant id:
    /// exact match (stock ignored, so an out-of-stock deep link still shows
    /// its variant), else first in-stock, else first variant, else nothing.
    /// A malformed id behaves exactly like an unknown one.
    fn resolve_from_address(&self, requested: Option<&str>) -> Option<&Variant> {
        if let Some(raw) = requested {
            if let Ok(id) = raw.parse::<VariantId>() {
                if let Some(variant) = self.product.variant(&id) {
                    return Some(variant);
                }
            }
        }
        self.product
            .first_in_stock()
            .or_else(|| self.product.variants().first())
    }

    /// `SelectionChanged` iff `target` exists and differs from the current
    /// selection; the empty vec is the silent no-op.
    fn changed_to(&self, target: Option<&Variant>) -> Vec<SelectionEvent> {
        match target {
            Some(variant) if self.selected.as_ref() != Some(&variant.id) => {
                vec![SelectionEvent::SelectionChanged {
                    variant_id: variant.id.clone(),
                }]
            }
            _ => Vec::new(),
        }
    }

    fn handle_sync(&self, requested: Option<&str>) -> Vec<SelectionEvent> {
        let mut events = vec![SelectionEvent::AddressObserved {
            raw: requested.map(str::to_owned),
        }];
        events.extend(self.changed_to(self.resolve_from_address(requested)));
        events
    }

    /// Size click: keep the customer's color if that pair is in stock, else
    /// the first in-stock variant of the size, else leave everything alone.
    fn handle_select_size(&self, size_id: &SizeId) -> Vec<SelectionEvent> {
        let Some(current) = self.selected_variant() else {
            return Vec::new();
        };
        let target = self
            .product
            .in_stock_pair(size_id, &current.color.id)
            .or_else(|| self.product.first_in_stock_of_size(size_id));
        self.changed_to(target)
    }

    /// Color click: only the exact (current size, color) variant with stock
    /// qualifies; anything else is a silent no-op.
    fn handle_select_color(&self, color_id: &ColorId) -> Vec<SelectionEvent> {
        let Some(current) = self.selected_variant() else {
            return Vec::new();
        };
        self.changed_to(self.product.in_stock_pair(&current.size.id, color_id))
    }
}

impl AggregateRoot for Selection {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        self.product.id()
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Aggregate for Selection {
    type Command = SelectionCommand;
    type Event = SelectionEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            SelectionEvent::AddressObserved { raw } => {
                self.last_address = raw.clone();
            }
            SelectionEvent::SelectionChanged { variant_id } => {
                self.selected = Some(variant_id.clone());
            }
            SelectionEvent::AddressPublished { variant_id } => {
                self.last_address = Some(variant_id.as_str().to_owned());
            }
        }

        self.version += 1;
    }

    /// Never fails: malformed input and unsatisfiable clicks resolve to
    /// fallbacks or the empty event list, not errors.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        Ok(match command {
            SelectionCommand::SyncFromAddress { requested } => {
                self.handle_sync(requested.as_deref())
            }
            SelectionCommand::SelectSize { size_id } => self.handle_select_size(size_id),
            SelectionCommand::SelectColor { color_id } => self.handle_select_color(color_id),
        })
    }
}

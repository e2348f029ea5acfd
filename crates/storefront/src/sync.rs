//! Address-bar synchronization.
//!
//! The driver here is the only place selection state meets the outside world.
//! Each entry point dispatches one command (handle, then apply every event)
//! and only afterwards performs at most one address write, so a single user
//! action is never observable as two different selections and a write never
//! fires for a selection that was itself derived from the current address
//! value.

use thiserror::Error;
use tracing::debug;

use atelier_catalog::Product;
use atelier_core::{Aggregate, ColorId, SizeId, VariantId};

use crate::selection::{Selection, SelectionCommand, SelectionEvent};

/// Failure surfaced by the navigation collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("address provider unavailable: {0}")]
pub struct AddressError(pub String);

/// How an address write behaves.
///
/// Variant write-backs use the default: replace the current entry (no
/// back-button stop) and keep the scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceOptions {
    pub add_history_entry: bool,
    pub reset_scroll: bool,
}

/// Navigation seam: read and replace the `variant` query parameter.
pub trait AddressProvider {
    /// Current value of the `variant` query parameter, if present.
    fn variant_param(&self) -> Option<String>;

    /// Replace the `variant` query parameter with the given id.
    fn replace_variant_param(
        &mut self,
        variant: &VariantId,
        options: ReplaceOptions,
    ) -> Result<(), AddressError>;
}

/// Owns a [`Selection`] and keeps it in step with an [`AddressProvider`].
pub struct SelectionSync<P: AddressProvider> {
    selection: Selection,
    provider: P,
}

impl<P: AddressProvider> SelectionSync<P> {
    /// Mount the view: resolve the initial selection from the current address
    /// value and publish it if it diverges.
    pub fn mount(product: Product, provider: P) -> Self {
        let mut sync = Self {
            selection: Selection::mount(product),
            provider,
        };
        sync.resync();
        sync
    }

    /// The externally observed variant parameter changed (back/forward
    /// navigation); re-resolve against it.
    pub fn on_address_change(&mut self) {
        self.resync();
    }

    pub fn select_size(&mut self, size_id: SizeId) {
        self.dispatch(SelectionCommand::SelectSize { size_id });
    }

    pub fn select_color(&mut self, color_id: ColorId) {
        self.dispatch(SelectionCommand::SelectColor { color_id });
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn resync(&mut self) {
        let requested = self.provider.variant_param();
        self.dispatch(SelectionCommand::SyncFromAddress { requested });
    }

    fn dispatch(&mut self, command: SelectionCommand) {
        // Selection::handle has no failing paths; unsatisfiable commands just
        // produce no events.
        let events = self.selection.handle(&command).unwrap_or_default();
        for event in &events {
            self.selection.apply(event);
        }
        debug!(?command, applied = events.len(), "selection transition");
        self.flush_address();
    }

    /// One guarded write, strictly after the selection state has settled.
    fn flush_address(&mut self) {
        let Some(variant_id) = self.selection.pending_publish().cloned() else {
            return;
        };
        match self
            .provider
            .replace_variant_param(&variant_id, ReplaceOptions::default())
        {
            Ok(()) => {
                debug!(variant = %variant_id, "published selection to address");
                self.selection
                    .apply(&SelectionEvent::AddressPublished { variant_id });
            }
            Err(err) => {
                // The provider owns this failure; the write stays pending and
                // is retried on the next transition.
                debug!(%err, "variant address write-back failed");
            }
        }
    }
}

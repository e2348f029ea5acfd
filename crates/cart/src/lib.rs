//! `atelier-cart` — cart and purchase collaborator contracts.
//!
//! The storefront never executes cart mutations itself; it decides *whether*
//! a purchase action is available and *which* variant id it carries, then
//! hands the id to an implementation of these traits. Network transport and
//! server-side cart state live behind them.

use thiserror::Error;

use atelier_core::VariantId;

/// Failure surfaced by a cart collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The cart service could not be reached.
    #[error("cart service unavailable")]
    Unavailable,

    /// The cart service refused the operation.
    #[error("cart operation rejected: {reason}")]
    Rejected { reason: String },
}

/// Handle onto the customer's server-side cart.
pub trait CartProvider {
    /// Re-fetch cart state from the server.
    ///
    /// The sign-in flow calls this after a successful login, once the server
    /// has merged the anonymous cart into the account cart; without it the
    /// view would keep showing the pre-merge contents.
    fn refresh_cart(&self) -> Result<(), CartError>;
}

/// Purchase actions for a specific, in-stock variant.
pub trait PurchaseAction {
    fn add_to_cart(&self, variant: &VariantId) -> Result<(), CartError>;

    fn buy_now(&self, variant: &VariantId) -> Result<(), CartError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingCart {
        refreshes: RefCell<u32>,
        added: RefCell<Vec<VariantId>>,
    }

    impl CartProvider for RecordingCart {
        fn refresh_cart(&self) -> Result<(), CartError> {
            *self.refreshes.borrow_mut() += 1;
            Ok(())
        }
    }

    impl PurchaseAction for RecordingCart {
        fn add_to_cart(&self, variant: &VariantId) -> Result<(), CartError> {
            self.added.borrow_mut().push(variant.clone());
            Ok(())
        }

        fn buy_now(&self, variant: &VariantId) -> Result<(), CartError> {
            self.add_to_cart(variant)
        }
    }

    #[test]
    fn contracts_are_object_safe() {
        let cart = RecordingCart::default();
        let provider: &dyn CartProvider = &cart;
        let action: &dyn PurchaseAction = &cart;

        provider.refresh_cart().unwrap();
        action.add_to_cart(&VariantId::new("v1")).unwrap();

        assert_eq!(*cart.refreshes.borrow(), 1);
        assert_eq!(cart.added.borrow().len(), 1);
    }

    #[test]
    fn errors_render_for_logging() {
        assert_eq!(CartError::Unavailable.to_string(), "cart service unavailable");
        let err = CartError::Rejected {
            reason: "variant sold out".into(),
        };
        assert_eq!(err.to_string(), "cart operation rejected: variant sold out");
    }
}

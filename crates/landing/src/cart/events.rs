//! Events emitted by [`CartStore`](super::CartStore).
//!
//! Views subscribe to these instead of being redrawn from inside the
//! mutation methods.

use billease_core::{PlanName, Price};

use super::CartState;

/// Something happened to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// The persisted contents changed; carries the new state for re-rendering.
    Changed(CartState),
    /// A plan was added (new line or quantity bump).
    PlanAdded(PlanName),
    /// The cart was cleared, explicitly or by an acknowledged checkout.
    Cleared,
    /// Checkout was attempted on an empty cart.
    CheckoutEmpty,
    /// Checkout is awaiting the user's acknowledgement.
    CheckoutConfirmation { total: Price },
}

impl CartEvent {
    /// Text for the notification surface, if this event shows one.
    #[must_use]
    pub fn notification(&self) -> Option<String> {
        match self {
            Self::PlanAdded(plan) => Some(format!("{plan} plan added to cart!")),
            Self::Cleared => Some("Cart cleared!".to_owned()),
            Self::CheckoutEmpty => Some("Your cart is empty!".to_owned()),
            Self::Changed(_) | Self::CheckoutConfirmation { .. } => None,
        }
    }
}

/// Callback registered with [`CartStore::subscribe`](super::CartStore::subscribe).
pub type CartListener = Box<dyn FnMut(&CartEvent)>;

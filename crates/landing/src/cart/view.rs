//! Cart display data.
//!
//! The view is rebuilt from scratch after every change, so the position
//! carried by each line is only valid until the next render.

use billease_core::Price;

use super::{CartAction, CartLineItem, CartState};

/// Text shown in place of the line list when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    /// Position in the list, used as `data-index` on the line's controls.
    pub index: usize,
    /// Heading, e.g. `"Pro Plan"`.
    pub title: String,
    /// Unit price, e.g. `"$9.99"`.
    pub unit_price: String,
    pub quantity: u32,
    /// Price line, e.g. `"$9.99 x 2"`.
    pub summary: String,
    /// `unit_price * quantity`, e.g. `"$19.98"`.
    pub line_total: String,
}

impl CartItemView {
    fn new(index: usize, line: &CartLineItem) -> Self {
        let unit_price = line.unit_price().to_string();
        Self {
            index,
            title: format!("{} Plan", line.plan()),
            summary: format!("{unit_price} x {}", line.quantity()),
            unit_price,
            quantity: line.quantity(),
            line_total: line.line_total().to_string(),
        }
    }

    /// The three controls rendered next to this line.
    #[must_use]
    pub const fn controls(&self) -> [CartAction; 3] {
        [
            CartAction::Decrease(self.index),
            CartAction::Increase(self.index),
            CartAction::Remove(self.index),
        ]
    }
}

/// The whole cart as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Formatted total, `"$0.00"` when empty.
    pub total: String,
    /// Sum of quantities, for a header badge.
    pub item_count: u32,
}

impl CartView {
    /// An empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Price::ZERO.to_string(),
            item_count: 0,
        }
    }

    /// Returns `true` if there are no lines to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The empty-cart placeholder, when it should be shown.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_CART_MESSAGE)
    }
}

impl Default for CartView {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&CartState> for CartView {
    fn from(state: &CartState) -> Self {
        Self {
            items: state
                .items()
                .iter()
                .enumerate()
                .map(|(index, line)| CartItemView::new(index, line))
                .collect(),
            total: state.total().to_string(),
            item_count: state.item_count(),
        }
    }
}

//! Cart contents and their persisted JSON form.

use billease_core::{PlanName, Price};
use serde::{Deserialize, Serialize};

/// One plan in the cart.
///
/// Serialized as `{"type": "Pro", "quantity": 2, "price": 9.99}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(rename = "type")]
    plan: PlanName,
    quantity: u32,
    #[serde(rename = "price")]
    unit_price: Price,
}

impl CartLineItem {
    /// A new line with quantity 1.
    #[must_use]
    pub const fn new(plan: PlanName, unit_price: Price) -> Self {
        Self {
            plan,
            quantity: 1,
            unit_price,
        }
    }

    /// The plan this line is for.
    #[must_use]
    pub const fn plan(&self) -> &PlanName {
        &self.plan
    }

    /// Number of units, always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price per unit captured when the plan was first added.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Ordered cart contents, unique by plan name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Decode the persisted value.
    ///
    /// A missing value, malformed JSON, or anything other than an array is an
    /// empty cart. Array entries that do not decode (missing fields, negative
    /// price), have quantity 0, or whose line total does not fit a [`Price`]
    /// are skipped, and an entry repeating an earlier plan is folded into it.
    #[must_use]
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::new();
        };

        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed cart data");
                return Self::new();
            }
        };

        let mut state = Self::new();
        for entry in entries {
            let item = match serde_json::from_value::<CartLineItem>(entry) {
                Ok(item) if item.quantity == 0 => {
                    tracing::warn!(plan = %item.plan, "Skipping cart line with zero quantity");
                    continue;
                }
                Ok(item) if item.unit_price.checked_times(item.quantity).is_none() => {
                    tracing::warn!(plan = %item.plan, "Skipping cart line with oversized total");
                    continue;
                }
                Ok(item) => item,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed cart line");
                    continue;
                }
            };

            match state.items.iter_mut().find(|line| line.plan == item.plan) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => state.items.push(item),
            }
        }
        state
    }

    /// Encode as the persisted JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if a price cannot be represented as a JSON number.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Line at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CartLineItem> {
        self.items.get(index)
    }

    /// Position of the line for `plan`.
    #[must_use]
    pub fn position(&self, plan: &PlanName) -> Option<usize> {
        self.items.iter().position(|line| &line.plan == plan)
    }

    /// Number of distinct plans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Sum of `unit_price * quantity`, zero when empty.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Bump the line for `plan`, or append one priced at `price`.
    ///
    /// An existing line keeps the price it was first added with.
    pub fn add(&mut self, plan: PlanName, price: Price) {
        match self.items.iter_mut().find(|line| line.plan == plan) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.items.push(CartLineItem::new(plan, price)),
        }
    }

    /// Increment the line at `index`. Returns `false` if there is none.
    pub fn increase(&mut self, index: usize) -> bool {
        self.items.get_mut(index).is_some_and(|line| {
            line.quantity = line.quantity.saturating_add(1);
            true
        })
    }

    /// Decrement the line at `index` unless it is already at 1.
    ///
    /// Returns `false` only if there is no line at `index`; a line at
    /// quantity 1 is left alone and still reports `true`.
    pub fn decrease(&mut self, index: usize) -> bool {
        self.items.get_mut(index).is_some_and(|line| {
            if line.quantity > 1 {
                line.quantity -= 1;
            }
            true
        })
    }

    /// Remove the line at `index`, whatever its quantity.
    pub fn remove(&mut self, index: usize) -> Option<CartLineItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

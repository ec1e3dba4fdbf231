//! The cart store.

use core::fmt;

use billease_core::{PlanName, Price};
use tracing::instrument;

use super::{CartAction, CartEvent, CartLineItem, CartListener, CartState};
use crate::catalog::PlanCatalog;
use crate::config::StorageConfig;
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Storage key for the cart.
pub const CART_KEY: &str = "billeasy_cart";

/// Result of [`CartStore::checkout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Checkout {
    /// Nothing to check out; the user was told the cart is empty.
    Empty,
    /// The confirmation is on screen, waiting for the user.
    Pending(CheckoutConfirmation),
}

/// A checkout confirmation awaiting acknowledgement.
///
/// Pass it to [`CartStore::acknowledge`] when the user closes the
/// confirmation, or to [`CartStore::dismiss`] if they back out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct CheckoutConfirmation {
    total: Price,
}

impl CheckoutConfirmation {
    /// The order total shown on the confirmation.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }
}

/// Authoritative cart contents, persisted in a [`KeyValueStore`].
///
/// No cart is cached in memory between calls: every mutation reads the
/// stored value, applies the change and writes it back, then notifies
/// subscribers. Listeners run synchronously in registration order.
pub struct CartStore<S> {
    storage: S,
    catalog: PlanCatalog,
    key: String,
    listeners: Vec<CartListener>,
}

impl<S: fmt::Debug> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("storage", &self.storage)
            .field("key", &self.key)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> CartStore<S> {
    /// A store over `storage` using the default key and catalog.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            catalog: PlanCatalog::default(),
            key: CART_KEY.to_owned(),
            listeners: Vec::new(),
        }
    }

    /// A store using the cart key from `config`.
    pub fn with_config(storage: S, config: &StorageConfig) -> Self {
        Self {
            key: config.cart_key.clone(),
            ..Self::new(storage)
        }
    }

    /// Replace the plan catalog used to price newly added plans.
    #[must_use]
    pub fn with_catalog(mut self, catalog: PlanCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The catalog used to price newly added plans.
    pub const fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// The storage key the cart lives under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Register a listener for every subsequent [`CartEvent`].
    pub fn subscribe(&mut self, listener: impl FnMut(&CartEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Read the current cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be read. Malformed
    /// stored data is not an error; it reads as an empty cart.
    pub fn state(&self) -> Result<CartState> {
        let raw = self.storage.get(&self.key)?;
        Ok(CartState::decode(raw.as_deref()))
    }

    /// Current cart lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be read.
    pub fn items(&self) -> Result<Vec<CartLineItem>> {
        Ok(self.state()?.items().to_vec())
    }

    /// Sum of `unit_price * quantity` over the current lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be read.
    pub fn total(&self) -> Result<Price> {
        Ok(self.state()?.total())
    }

    /// Add one unit of `plan`.
    ///
    /// An existing line is bumped and keeps its original price; a new line
    /// is priced from the catalog (zero for unknown plans).
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    #[instrument(skip(self, plan))]
    pub fn add(&mut self, plan: impl Into<PlanName>) -> Result<()> {
        let plan = plan.into();
        let mut state = self.state()?;

        if state.position(&plan).is_none() && !self.catalog.contains(&plan) {
            tracing::debug!(plan = %plan, "Plan not in catalog, pricing at zero");
        }
        let price = self.catalog.price_of(&plan);
        state.add(plan.clone(), price);

        self.persist(&state)?;
        tracing::info!(plan = %plan, items = state.len(), "Plan added to cart");
        self.emit(&CartEvent::Changed(state));
        self.emit(&CartEvent::PlanAdded(plan));
        Ok(())
    }

    /// Add one unit to the line at `index`.
    ///
    /// Returns `Ok(false)` without touching storage if `index` is out of
    /// range.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    #[instrument(skip(self))]
    pub fn increase(&mut self, index: usize) -> Result<bool> {
        self.update(index, "increase", CartState::increase)
    }

    /// Remove one unit from the line at `index`, never going below 1.
    ///
    /// A line at quantity 1 is left as it is. Returns `Ok(false)` without
    /// touching storage if `index` is out of range.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    #[instrument(skip(self))]
    pub fn decrease(&mut self, index: usize) -> Result<bool> {
        self.update(index, "decrease", CartState::decrease)
    }

    /// Delete the line at `index` regardless of its quantity.
    ///
    /// Returns `Ok(false)` without touching storage if `index` is out of
    /// range.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    #[instrument(skip(self))]
    pub fn remove(&mut self, index: usize) -> Result<bool> {
        self.update(index, "remove", |state, index| state.remove(index).is_some())
    }

    /// [`increase`](Self::increase) addressed by plan name.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn increase_plan(&mut self, plan: &PlanName) -> Result<bool> {
        match self.state()?.position(plan) {
            Some(index) => self.increase(index),
            None => Ok(Self::missing_plan(plan, "increase")),
        }
    }

    /// [`decrease`](Self::decrease) addressed by plan name.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn decrease_plan(&mut self, plan: &PlanName) -> Result<bool> {
        match self.state()?.position(plan) {
            Some(index) => self.decrease(index),
            None => Ok(Self::missing_plan(plan, "decrease")),
        }
    }

    /// [`remove`](Self::remove) addressed by plan name.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn remove_plan(&mut self, plan: &PlanName) -> Result<bool> {
        match self.state()?.position(plan) {
            Some(index) => self.remove(index),
            None => Ok(Self::missing_plan(plan, "remove")),
        }
    }

    /// Apply a decoded per-line control.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn apply(&mut self, action: CartAction) -> Result<bool> {
        match action {
            CartAction::Increase(index) => self.increase(index),
            CartAction::Decrease(index) => self.decrease(index),
            CartAction::Remove(index) => self.remove(index),
        }
    }

    /// Decode a rendered control's `data-action` and `data-index` and apply
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::CartAction`](crate::LandingError::CartAction)
    /// if the attributes do not decode, or an error if the storage backend
    /// fails.
    pub fn apply_control(&mut self, action: &str, index: &str) -> Result<bool> {
        let action = CartAction::from_control(action, index)?;
        self.apply(action)
    }

    /// Delete the cart from storage entirely.
    ///
    /// The key is removed rather than set to an empty array.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(&self.key)?;
        tracing::info!("Cart cleared");
        self.emit(&CartEvent::Changed(CartState::new()));
        self.emit(&CartEvent::Cleared);
        Ok(())
    }

    /// Start the simulated checkout.
    ///
    /// An empty cart only raises [`CartEvent::CheckoutEmpty`]. Otherwise a
    /// [`CartEvent::CheckoutConfirmation`] is emitted and the cart stays as
    /// it is until the confirmation is acknowledged.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be read.
    #[instrument(skip(self))]
    pub fn checkout(&mut self) -> Result<Checkout> {
        let state = self.state()?;
        if state.is_empty() {
            tracing::info!("Checkout attempted on empty cart");
            self.emit(&CartEvent::CheckoutEmpty);
            return Ok(Checkout::Empty);
        }

        let total = state.total();
        tracing::info!(%total, items = state.item_count(), "Checkout confirmation shown");
        self.emit(&CartEvent::CheckoutConfirmation { total });
        Ok(Checkout::Pending(CheckoutConfirmation { total }))
    }

    /// The user closed the checkout confirmation: the order is done and the
    /// cart is cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn acknowledge(&mut self, confirmation: CheckoutConfirmation) -> Result<()> {
        tracing::info!(total = %confirmation.total, "Checkout acknowledged");
        self.clear()
    }

    /// The user backed out of the checkout confirmation; the cart is kept.
    pub fn dismiss(&self, confirmation: CheckoutConfirmation) {
        tracing::debug!(total = %confirmation.total, "Checkout confirmation dismissed");
    }

    fn update(
        &mut self,
        index: usize,
        action: &'static str,
        apply: impl FnOnce(&mut CartState, usize) -> bool,
    ) -> Result<bool> {
        let mut state = self.state()?;
        if !apply(&mut state, index) {
            tracing::warn!(index, action, len = state.len(), "Cart index out of range, ignoring");
            return Ok(false);
        }

        self.persist(&state)?;
        tracing::debug!(index, action, "Cart line updated");
        self.emit(&CartEvent::Changed(state));
        Ok(true)
    }

    fn missing_plan(plan: &PlanName, action: &'static str) -> bool {
        tracing::warn!(plan = %plan, action, "Plan not in cart, ignoring");
        false
    }

    fn persist(&self, state: &CartState) -> Result<()> {
        let encoded = state.encode()?;
        self.storage.set(&self.key, &encoded)?;
        Ok(())
    }

    fn emit(&mut self, event: &CartEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::LandingError;
    use crate::storage::MemoryStore;

    fn store() -> (CartStore<MemoryStore>, MemoryStore) {
        let storage = MemoryStore::new();
        (CartStore::new(storage.clone()), storage)
    }

    fn recorded(cart: &mut CartStore<MemoryStore>) -> Rc<RefCell<Vec<CartEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        cart.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        events
    }

    #[test]
    fn test_new_store_is_empty() {
        let (cart, storage) = store();
        assert!(cart.items().unwrap().is_empty());
        assert_eq!(cart.total().unwrap(), Price::ZERO);
        assert!(!storage.contains(CART_KEY));
    }

    #[test]
    fn test_add_persists_json_layout() {
        let (mut cart, storage) = store();
        cart.add("Pro").unwrap();
        assert_eq!(
            storage.raw(CART_KEY).unwrap(),
            r#"[{"type":"Pro","quantity":1,"price":9.99}]"#
        );
    }

    #[test]
    fn test_add_same_plan_groups() {
        let (mut cart, _) = store();
        cart.add("Pro").unwrap();
        cart.add("Pro").unwrap();
        cart.add("Business").unwrap();

        let items = cart.items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].plan(), &PlanName::new("Pro"));
        assert_eq!(items[0].quantity(), 2);
        assert_eq!(items[1].unit_price(), Price::from_cents(2999));
        assert_eq!(cart.total().unwrap(), Price::from_cents(4997));
    }

    #[test]
    fn test_add_keeps_captured_price_after_catalog_change() {
        let (mut cart, storage) = store();
        cart.add("Pro").unwrap();

        let mut repriced = CartStore::new(storage).with_catalog(PlanCatalog::new([(
            PlanName::new("Pro"),
            Price::from_cents(1499),
        )]));
        repriced.add("Pro").unwrap();

        let items = repriced.items().unwrap();
        assert_eq!(items[0].quantity(), 2);
        assert_eq!(items[0].unit_price(), Price::from_cents(999));
    }

    #[test]
    fn test_add_unknown_plan_is_free() {
        let (mut cart, _) = store();
        cart.add("Enterprise").unwrap();
        let items = cart.items().unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].unit_price().is_zero());
    }

    #[test]
    fn test_add_emits_changed_then_added() {
        let (mut cart, _) = store();
        let events = recorded(&mut cart);

        cart.add("Pro").unwrap();

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], CartEvent::Changed(state) if state.len() == 1));
        assert_eq!(events[1], CartEvent::PlanAdded(PlanName::new("Pro")));
    }

    #[test]
    fn test_decrease_at_one_is_noop() {
        let (mut cart, _) = store();
        cart.add("Pro").unwrap();
        assert!(cart.decrease(0).unwrap());
        assert_eq!(cart.items().unwrap()[0].quantity(), 1);
    }

    #[test]
    fn test_increase_then_decrease() {
        let (mut cart, _) = store();
        cart.add("Pro").unwrap();
        cart.increase(0).unwrap();
        cart.increase(0).unwrap();
        assert_eq!(cart.items().unwrap()[0].quantity(), 3);
        cart.decrease(0).unwrap();
        assert_eq!(cart.items().unwrap()[0].quantity(), 2);
    }

    #[test]
    fn test_out_of_range_leaves_storage_untouched() {
        let (mut cart, storage) = store();
        cart.add("Pro").unwrap();
        let before = storage.raw(CART_KEY);
        let events = recorded(&mut cart);

        assert!(!cart.increase(1).unwrap());
        assert!(!cart.decrease(7).unwrap());
        assert!(!cart.remove(1).unwrap());

        assert_eq!(storage.raw(CART_KEY), before);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_remove_shifts_positions() {
        let (mut cart, _) = store();
        cart.add("Free").unwrap();
        cart.add("Pro").unwrap();
        cart.add("Business").unwrap();

        assert!(cart.remove(0).unwrap());

        let items = cart.items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].plan(), &PlanName::new("Pro"));
    }

    #[test]
    fn test_plan_keyed_operations() {
        let (mut cart, _) = store();
        cart.add("Free").unwrap();
        cart.add("Pro").unwrap();

        let pro = PlanName::new("Pro");
        assert!(cart.increase_plan(&pro).unwrap());
        assert_eq!(cart.items().unwrap()[1].quantity(), 2);
        assert!(cart.decrease_plan(&pro).unwrap());
        assert_eq!(cart.items().unwrap()[1].quantity(), 1);
        assert!(cart.remove_plan(&pro).unwrap());
        assert!(!cart.remove_plan(&pro).unwrap());
        assert_eq!(cart.items().unwrap().len(), 1);
    }

    #[test]
    fn test_apply_dispatches() {
        let (mut cart, _) = store();
        cart.add("Pro").unwrap();
        assert!(cart.apply(CartAction::Increase(0)).unwrap());
        assert_eq!(cart.items().unwrap()[0].quantity(), 2);
        assert!(cart.apply(CartAction::Remove(0)).unwrap());
        assert!(cart.items().unwrap().is_empty());
    }

    #[test]
    fn test_clear_removes_key() {
        let (mut cart, storage) = store();
        cart.add("Pro").unwrap();
        let events = recorded(&mut cart);

        cart.clear().unwrap();

        assert!(!storage.contains(CART_KEY));
        assert!(cart.items().unwrap().is_empty());
        assert_eq!(events.borrow().last(), Some(&CartEvent::Cleared));
    }

    #[test]
    fn test_malformed_storage_reads_empty_and_is_overwritten() {
        let (mut cart, storage) = store();
        storage.set(CART_KEY, "definitely not json").unwrap();

        assert!(cart.items().unwrap().is_empty());

        cart.add("Pro").unwrap();
        assert_eq!(cart.items().unwrap().len(), 1);
    }

    #[test]
    fn test_checkout_empty() {
        let (mut cart, storage) = store();
        let events = recorded(&mut cart);

        assert_eq!(cart.checkout().unwrap(), Checkout::Empty);

        assert_eq!(*events.borrow(), vec![CartEvent::CheckoutEmpty]);
        assert!(!storage.contains(CART_KEY));
    }

    #[test]
    fn test_checkout_acknowledge_clears() {
        let (mut cart, storage) = store();
        cart.add("Pro").unwrap();

        let Checkout::Pending(confirmation) = cart.checkout().unwrap() else {
            panic!("expected a pending checkout");
        };
        assert_eq!(confirmation.total(), Price::from_cents(999));
        assert!(storage.contains(CART_KEY));

        cart.acknowledge(confirmation).unwrap();
        assert!(!storage.contains(CART_KEY));
    }

    #[test]
    fn test_checkout_dismiss_keeps_cart() {
        let (mut cart, _) = store();
        cart.add("Business").unwrap();

        if let Checkout::Pending(confirmation) = cart.checkout().unwrap() {
            cart.dismiss(confirmation);
        }

        assert_eq!(cart.items().unwrap().len(), 1);
    }

    #[test]
    fn test_configured_key() {
        let storage = MemoryStore::new();
        let config = StorageConfig {
            cart_key: "custom_cart".to_owned(),
            ..StorageConfig::default()
        };
        let mut cart = CartStore::with_config(storage.clone(), &config);
        cart.add("Pro").unwrap();
        assert!(storage.contains("custom_cart"));
        assert!(!storage.contains(CART_KEY));
    }

    #[test]
    fn test_apply_control_decodes_attributes() {
        let (mut cart, _) = store();
        cart.add("Pro").unwrap();

        assert!(cart.apply_control("increase", "0").unwrap());
        assert_eq!(cart.items().unwrap()[0].quantity(), 2);

        let err = cart.apply_control("explode", "0").unwrap_err();
        assert!(matches!(err, LandingError::CartAction(_)));
        let err = cart.apply_control("remove", "-1").unwrap_err();
        assert!(matches!(err, LandingError::CartAction(_)));
        assert_eq!(cart.items().unwrap().len(), 1);
    }

    #[test]
    fn test_oversized_stored_price_does_not_panic() {
        let (mut cart, storage) = store();
        storage
            .set(CART_KEY, r#"[{"type":"Pro","quantity":2,"price":7e28}]"#)
            .unwrap();

        assert!(cart.items().unwrap().is_empty());
        assert_eq!(cart.total().unwrap(), Price::ZERO);
        assert_eq!(cart.checkout().unwrap(), Checkout::Empty);
    }
}

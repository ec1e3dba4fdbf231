//! Integration tests for the BillEase landing page.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p billease-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end cart flows over shared storage
//! - `cart_properties` - Property tests for cart invariants
//! - `page_state` - Theme, contact form and notification behaviour

use std::cell::RefCell;
use std::rc::Rc;

use billease_landing::cart::{CartEvent, CartStore};
use billease_landing::storage::MemoryStore;

/// Events captured from a [`CartStore`] subscription.
pub type EventLog = Rc<RefCell<Vec<CartEvent>>>;

/// A cart over a fresh in-memory store, plus a handle on the same store and
/// a log of every event the cart emits.
#[must_use]
pub fn recorded_cart() -> (CartStore<MemoryStore>, MemoryStore, EventLog) {
    let storage = MemoryStore::new();
    let mut cart = CartStore::new(storage.clone());

    let log: EventLog = Rc::default();
    let sink = Rc::clone(&log);
    cart.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    (cart, storage, log)
}

/// Parse the raw cart value as JSON for structural comparison.
///
/// # Panics
///
/// Panics if the stored value is not valid JSON.
#[must_use]
pub fn stored_json(storage: &MemoryStore, key: &str) -> Option<serde_json::Value> {
    storage
        .raw(key)
        .map(|raw| serde_json::from_str(&raw).expect("stored cart is valid JSON"))
}

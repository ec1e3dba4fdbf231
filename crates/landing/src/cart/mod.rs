//! Shopping cart.
//!
//! - [`CartStore`] - read-modify-write operations over a [`KeyValueStore`](crate::storage::KeyValueStore)
//! - [`CartState`] / [`CartLineItem`] - the cart contents and their JSON form
//! - [`CartEvent`] - change notifications for views and the notification surface
//! - [`CartView`] - display data re-derived from a [`CartState`]
//! - [`CartAction`] - per-line controls decoded from rendered markup

mod action;
mod events;
mod state;
mod store;
mod view;

pub use action::{CartAction, CartActionError};
pub use events::{CartEvent, CartListener};
pub use state::{CartLineItem, CartState};
pub use store::{CART_KEY, CartStore, Checkout, CheckoutConfirmation};
pub use view::{CartItemView, CartView, EMPTY_CART_MESSAGE};

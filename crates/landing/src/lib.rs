//! BillEase landing page behaviour.
//!
//! Everything the landing page does in response to user events, expressed
//! without a DOM so it runs in the browser (`wasm32`) and natively:
//!
//! - [`cart`] - plan cart persisted in a key-value store, with checkout
//! - [`theme`] - light/dark preference
//! - [`notification`] - single-slot transient messages
//! - [`contact`] - contact form validation
//! - [`navbar`] - sticky header, mobile menu, anchor scrolling
//! - [`animation`] - reveal-on-scroll and card hover styles
//!
//! Persistence goes through [`storage::KeyValueStore`]; pick
//! [`storage::MemoryStore`] for tests, `FileStore` natively, or
//! `BrowserStore` (feature `browser`) for `window.localStorage`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod animation;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod navbar;
pub mod notification;
pub mod storage;
#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
pub mod theme;

pub use config::LandingConfig;
pub use error::{LandingError, Result};

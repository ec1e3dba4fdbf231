//! BillEase Core - Shared types library.
//!
//! This crate provides common types used across all BillEase components:
//! - `landing` - Landing page behaviour (cart, theme, contact form, navigation)
//! - `cli` - Native harness that drives the landing behaviour from a terminal
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! browser bindings. This keeps it lightweight and allows it to be used
//! both natively and from `wasm32`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for prices, emails, plan names and themes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

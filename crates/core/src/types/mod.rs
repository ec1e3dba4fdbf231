//! Core types for BillEase.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod plan;
pub mod price;
pub mod theme;

pub use email::{Email, EmailError};
pub use plan::PlanName;
pub use price::Price;
pub use theme::Theme;

//! Subcommand implementations.

pub mod cart;
pub mod contact;
pub mod theme;

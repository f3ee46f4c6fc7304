//! shoplist-core
//!
//! Pure domain types and validation rules for the shopping list.
//! No I/O here; storage and transport live in their own crates.

pub mod error;
pub mod models;
pub mod validate;

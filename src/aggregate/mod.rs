//! Aggregate module
//!
//! Entities that own state and enforce invariants on it.

pub mod account;

pub use account::{Account, AccountConfig};

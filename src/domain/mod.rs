//! Domain module
//!
//! Core domain types and business rules.

pub mod amount;
pub mod error;
pub mod limits;
pub mod username;

pub use amount::{Amount, AmountError, Balance};
pub use error::DomainError;
pub use limits::AccountLimits;
pub use username::{Username, UsernameError};

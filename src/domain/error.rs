//! Domain Error Types
//!
//! Pure domain errors raised by account validation.

use rust_decimal::Decimal;
use thiserror::Error;

use super::amount::AmountError;
use super::username::UsernameError;

/// Business rule violations of the Account entity.
///
/// Every rejected construction or mutation surfaces exactly one of these,
/// so callers branch on the variant instead of inspecting the balance.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Username missing or too short
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Initial balance below the floor
    #[error("Invalid initial balance: {given} is below the minimum of {minimum}")]
    InvalidInitialBalance { given: Decimal, minimum: Decimal },

    /// Deposit would bring the balance to or above the ceiling
    #[error("Deposit exceeds maximum: {balance} + {amount} must stay below {maximum}")]
    DepositExceedsMax {
        balance: Decimal,
        amount: Decimal,
        maximum: Decimal,
    },

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Amount is negative or unparseable
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
}

impl DomainError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Stable machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUsername(_) => "invalid_username",
            Self::InvalidInitialBalance { .. } => "invalid_initial_balance",
            Self::DepositExceedsMax { .. } => "deposit_exceeds_max",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::InvalidAmount(_) => "invalid_amount",
        }
    }

    /// Check if this error was raised while constructing an account
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUsername(_) | Self::InvalidInitialBalance { .. }
        )
    }
}

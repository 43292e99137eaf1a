//! Account limits
//!
//! Business thresholds applied when opening and mutating an account.

use rust_decimal::Decimal;

/// Minimum username length in characters
pub const DEFAULT_MIN_USERNAME_LENGTH: usize = 7;

/// Minimum balance at construction (6.0)
pub const DEFAULT_MIN_INITIAL_BALANCE: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Ceiling a deposit may not reach (100000.0)
pub const DEFAULT_MAX_BALANCE: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Thresholds enforced by an `Account`.
///
/// The floor is inclusive (a balance equal to it is accepted), the ceiling
/// is exclusive (a deposit landing exactly on it is rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLimits {
    pub min_username_length: usize,
    pub min_initial_balance: Decimal,
    pub max_balance: Decimal,
}

impl AccountLimits {
    pub fn new(min_username_length: usize, min_initial_balance: Decimal, max_balance: Decimal) -> Self {
        Self {
            min_username_length,
            min_initial_balance,
            max_balance,
        }
    }

    /// Check if the floor is non-negative and sits strictly below the ceiling
    pub fn is_consistent(&self) -> bool {
        self.min_initial_balance >= Decimal::ZERO && self.min_initial_balance < self.max_balance
    }

    /// Check if a resulting balance stays below the ceiling
    pub fn allows_balance(&self, balance: Decimal) -> bool {
        balance < self.max_balance
    }
}

impl Default for AccountLimits {
    fn default() -> Self {
        Self::new(
            DEFAULT_MIN_USERNAME_LENGTH,
            DEFAULT_MIN_INITIAL_BALANCE,
            DEFAULT_MAX_BALANCE,
        )
    }
}

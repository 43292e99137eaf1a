//! Account Aggregate
//!
//! Account owns a username and a balance and guards every change to them.
//! Construction validates both fields together; deposits and withdrawals are
//! validated before the balance is touched, so a rejected operation leaves
//! the account exactly as it was.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{AccountLimits, Amount, Balance, DomainError, Username};

/// Construction parameters for an `Account`
///
/// `username` is optional so that an absent or `null` name coming from
/// outside is rejected as `InvalidUsername` rather than failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default)]
    pub username: Option<String>,
    pub initial_balance: Decimal,
}

impl AccountConfig {
    pub fn new(username: impl Into<String>, initial_balance: Decimal) -> Self {
        Self {
            username: Some(username.into()),
            initial_balance,
        }
    }

    /// Config without a username
    pub fn anonymous(initial_balance: Decimal) -> Self {
        Self {
            username: None,
            initial_balance,
        }
    }
}

/// Account Aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// Owner name (validated)
    username: Username,

    /// Current balance
    balance: Balance,

    /// Thresholds this account was opened with
    #[serde(skip)]
    limits: AccountLimits,
}

impl Account {
    /// Open an account with the default limits.
    ///
    /// # Errors
    /// - `DomainError::InvalidUsername` if the username is missing or shorter than 7 characters
    /// - `DomainError::InvalidInitialBalance` if the initial balance is below 6.0
    pub fn new(config: AccountConfig) -> Result<Self, DomainError> {
        Self::with_limits(config, AccountLimits::default())
    }

    /// Open an account enforcing `limits`.
    ///
    /// The username is checked first, so it is the reported error when both
    /// fields are invalid.
    pub fn with_limits(config: AccountConfig, limits: AccountLimits) -> Result<Self, DomainError> {
        let username = Username::from_optional(config.username, limits.min_username_length)?;

        // A balance is never negative, whatever floor the limits carry
        let minimum = limits.min_initial_balance.max(Decimal::ZERO);
        if config.initial_balance < minimum {
            return Err(DomainError::InvalidInitialBalance {
                given: config.initial_balance,
                minimum,
            });
        }

        tracing::debug!(%username, balance = %config.initial_balance, "account opened");

        Ok(Self {
            username,
            balance: Balance::new(config.initial_balance),
            limits,
        })
    }

    /// Deposit `amount` into the account.
    ///
    /// Rejected when the resulting balance would reach or pass the ceiling.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), DomainError> {
        let amount = Amount::new(amount)?;
        let new_balance = match self.balance.credited(&amount) {
            Some(new_balance) if self.limits.allows_balance(new_balance) => new_balance,
            // Overflowing `Decimal` is past any ceiling
            _ => {
                tracing::debug!(username = %self.username, %amount, "deposit rejected");
                return Err(DomainError::DepositExceedsMax {
                    balance: self.balance.value(),
                    amount: amount.value(),
                    maximum: self.limits.max_balance,
                });
            }
        };

        self.balance = Balance::new(new_balance);
        tracing::debug!(username = %self.username, %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    /// Withdraw `amount` from the account.
    ///
    /// Withdrawing the whole balance is allowed and leaves it at zero.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), DomainError> {
        let amount = Amount::new(amount)?;

        let new_balance = match self.balance.debited(&amount) {
            Some(new_balance) if self.balance.is_sufficient_for(&amount) => new_balance,
            _ => {
                tracing::debug!(username = %self.username, %amount, "withdrawal rejected");
                return Err(DomainError::insufficient_funds(
                    amount.value(),
                    self.balance.value(),
                ));
            }
        };

        self.balance = Balance::new(new_balance);
        tracing::debug!(username = %self.username, %amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    pub fn limits(&self) -> &AccountLimits {
        &self.limits
    }
}

//! Command definitions
//!
//! Commands represent intentions to open or change an account.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::Account;
use crate::error::AppError;

/// A single line of a session script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AccountCommand {
    /// Open a new account, replacing any account already open
    Open {
        #[serde(default)]
        username: Option<String>,
        initial_balance: Decimal,
    },

    /// Deposit into the open account
    Deposit { amount: Decimal },

    /// Withdraw from the open account
    Withdraw { amount: Decimal },

    /// Report the open account's balance
    Balance,
}

impl AccountCommand {
    pub fn open(username: impl Into<String>, initial_balance: Decimal) -> Self {
        Self::Open {
            username: Some(username.into()),
            initial_balance,
        }
    }

    pub fn deposit(amount: Decimal) -> Self {
        Self::Deposit { amount }
    }

    pub fn withdraw(amount: Decimal) -> Self {
        Self::Withdraw { amount }
    }

    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            AccountCommand::Open { .. } => "open",
            AccountCommand::Deposit { .. } => "deposit",
            AccountCommand::Withdraw { .. } => "withdraw",
            AccountCommand::Balance => "balance",
        }
    }
}

/// Account state after a command
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    pub username: String,
    pub balance: Decimal,
}

impl From<&Account> for AccountSnapshot {
    fn from(account: &Account) -> Self {
        Self {
            username: account.username().to_string(),
            balance: account.balance().value(),
        }
    }
}

/// Result of one script line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// Command applied
    Ok {
        command: &'static str,
        username: String,
        balance: Decimal,
    },

    /// Command parsed but refused by a business rule
    Rejected {
        command: &'static str,
        error_code: &'static str,
        error: String,
    },

    /// Line could not be parsed as a command
    Invalid {
        error_code: &'static str,
        error: String,
    },
}

impl CommandOutcome {
    pub fn ok(command: &'static str, snapshot: AccountSnapshot) -> Self {
        Self::Ok {
            command,
            username: snapshot.username,
            balance: snapshot.balance,
        }
    }

    pub fn rejected(command: &'static str, err: &AppError) -> Self {
        Self::Rejected {
            command,
            error_code: err.error_code(),
            error: err.to_string(),
        }
    }

    pub fn invalid(err: &AppError) -> Self {
        Self::Invalid {
            error_code: err.error_code(),
            error: err.to_string(),
        }
    }
}

/// Totals for a replayed session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub accepted: u64,
    pub rejected: u64,
    pub invalid: u64,
}

impl SessionSummary {
    pub fn record(&mut self, outcome: &CommandOutcome) {
        match outcome {
            CommandOutcome::Ok { .. } => self.accepted += 1,
            CommandOutcome::Rejected { .. } => self.rejected += 1,
            CommandOutcome::Invalid { .. } => self.invalid += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.accepted + self.rejected + self.invalid
    }
}

//! Session Handler
//!
//! Replays a script of account commands, one JSON object per line, against a
//! single open account.

use std::io::{BufRead, Write};

use crate::aggregate::{Account, AccountConfig};
use crate::domain::AccountLimits;
use crate::error::{AppError, AppResult};

use super::{AccountCommand, AccountSnapshot, CommandOutcome, SessionSummary};

/// Handler holding the account a session operates on
#[derive(Debug, Default)]
pub struct SessionHandler {
    limits: AccountLimits,
    account: Option<Account>,
}

impl SessionHandler {
    pub fn new(limits: AccountLimits) -> Self {
        Self {
            limits,
            account: None,
        }
    }

    /// Currently open account, if any
    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// Execute a single command.
    ///
    /// A rejected `open` keeps the previously open account.
    pub fn execute(&mut self, command: AccountCommand) -> AppResult<AccountSnapshot> {
        match command {
            AccountCommand::Open {
                username,
                initial_balance,
            } => {
                let config = AccountConfig {
                    username,
                    initial_balance,
                };
                let account = Account::with_limits(config, self.limits)?;
                let snapshot = AccountSnapshot::from(&account);
                self.account = Some(account);
                Ok(snapshot)
            }
            AccountCommand::Deposit { amount } => {
                let account = self.account.as_mut().ok_or(AppError::NoOpenAccount)?;
                account.deposit(amount)?;
                Ok(AccountSnapshot::from(&*account))
            }
            AccountCommand::Withdraw { amount } => {
                let account = self.account.as_mut().ok_or(AppError::NoOpenAccount)?;
                account.withdraw(amount)?;
                Ok(AccountSnapshot::from(&*account))
            }
            AccountCommand::Balance => {
                let account = self.account.as_ref().ok_or(AppError::NoOpenAccount)?;
                Ok(AccountSnapshot::from(account))
            }
        }
    }

    /// Parse and execute one script line.
    ///
    /// Returns `None` for blank lines and `#` comments.
    pub fn handle_line(&mut self, line: &str) -> Option<CommandOutcome> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let command: AccountCommand = match serde_json::from_str(line) {
            Ok(command) => command,
            Err(e) => {
                let err = AppError::InvalidCommand(e.to_string());
                tracing::warn!(line, error = %e, "skipping malformed command");
                return Some(CommandOutcome::invalid(&err));
            }
        };

        let name = command.name();
        let outcome = match self.execute(command) {
            Ok(snapshot) => CommandOutcome::ok(name, snapshot),
            Err(err) => {
                tracing::info!(command = name, code = err.error_code(), "command rejected: {}", err);
                CommandOutcome::rejected(name, &err)
            }
        };

        Some(outcome)
    }

    /// Replay every line of `input`, writing one JSON outcome per line to `output`.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> AppResult<SessionSummary>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = SessionSummary::default();

        for line in input.lines() {
            let line = line?;
            if let Some(outcome) = self.handle_line(&line) {
                summary.record(&outcome);
                serde_json::to_writer(&mut output, &outcome)?;
                output.write_all(b"\n")?;
            }
        }

        output.flush()?;
        tracing::info!(
            accepted = summary.accepted,
            rejected = summary.rejected,
            invalid = summary.invalid,
            "session finished"
        );

        Ok(summary)
    }
}

//! guarded_account Library
//!
//! Account value object with guarded construction, deposit and withdrawal,
//! plus the session handler and configuration used by the binaries.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod logging;
mod error;

pub use aggregate::{Account, AccountConfig};
pub use config::{Config, ConfigError, LogFormat};
pub use domain::{AccountLimits, Amount, AmountError, Balance, DomainError, Username, UsernameError};
pub use error::{AppError, AppResult};
pub use handlers::{AccountCommand, CommandOutcome, SessionHandler, SessionSummary};

//! Command Handlers module
//!
//! Handlers that drive an account from parsed commands.

mod commands;
mod session_handler;


pub use commands::*;
pub use session_handler::SessionHandler;

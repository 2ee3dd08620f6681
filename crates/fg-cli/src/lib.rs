//! flag-game - terminal client for Guess the Flag
//!
//! ```bash
//! flag-game register --name Ada --email ada@example.com \
//!     --password hunter22 --confirm-password hunter22
//! flag-game play
//! flag-game scores --json
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod game_client;
pub mod logger;
pub mod output;
pub mod play;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::{Commands, ProviderArg};
pub use error::{CliError, Result as CliResult};
pub use game_client::GameClient;

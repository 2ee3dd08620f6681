use fg_core::AuthProvider;

use clap::{Subcommand, ValueEnum};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create an account with email and password
    Register {
        /// Name shown on your profile
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Log in and link the account to your profile
    Login {
        #[arg(long, value_enum, default_value_t = ProviderArg::Password)]
        provider: ProviderArg,
        /// Required for password login
        #[arg(long)]
        email: Option<String>,
        /// Required for password login
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in profile
    Whoami,

    /// Play one round
    Play {
        /// Seed for a reproducible round
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show your high scores
    Scores {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderArg {
    Password,
    Github,
}

impl From<ProviderArg> for AuthProvider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Password => AuthProvider::Password,
            ProviderArg::Github => AuthProvider::GitHub,
        }
    }
}

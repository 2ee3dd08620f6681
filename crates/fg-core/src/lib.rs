//! Flag Game core: score retention, identity reconciliation, quiz rules and
//! the contracts for the services that store and authenticate players.

pub mod app;
pub mod codec;
pub mod collaborators;
pub mod error;
pub mod game;
pub mod identity;
pub mod ledger;
pub mod models;
pub mod services;

#[cfg(test)]
mod tests;

pub use error_location::ErrorLocation;

pub use app::app_context::AppContext;
pub use app::auth_state::AuthState;
pub use app::destination::Destination;
pub use app::navigator::Navigator;
pub use collaborators::auth_service::AuthService;
pub use collaborators::profile_store::ProfileStore;
pub use collaborators::score_store::ScoreStore;
pub use error::{CoreError, Result};
pub use game::answer_outcome::AnswerOutcome;
pub use game::country::Country;
pub use game::game_round::GameRound;
pub use game::question::Question;
pub use game::round_rules::RoundRules;
pub use game::streak_scorer::StreakScorer;
pub use identity::identity_reconciler::{DEFAULT_DISPLAY_NAME, IdentityReconciler};
pub use identity::reconcile_action::ReconcileAction;
pub use ledger::decision::Decision;
pub use ledger::score_ledger::{DEFAULT_LEDGER_CAPACITY, ScoreLedger};
pub use models::auth_provider::AuthProvider;
pub use models::external_identity::ExternalIdentity;
pub use models::new_profile::NewProfile;
pub use models::profile_patch::ProfilePatch;
pub use models::score_entry::ScoreEntry;
pub use models::session::Session;
pub use models::user_profile::UserProfile;
pub use services::account_service::AccountService;
pub use services::high_score_service::HighScoreService;
pub use services::registration_form::RegistrationForm;

//! Wires the SQLite collaborators into the game services.

use crate::error::Result as CliResult;

use fg_config::Config;
use fg_core::{
    AccountService, Decision, GameRound, HighScoreService, IdentityReconciler, RoundRules,
    ScoreLedger, UserProfile,
};
use fg_db::{Database, DatabaseOptions};

use std::sync::Arc;
use std::time::Duration;

use log::info;
use rand::Rng;

pub struct GameClient {
    database: Database,
    accounts: AccountService,
    high_scores: HighScoreService,
    rules: RoundRules,
}

impl GameClient {
    /// Open the configured database and build the services over it
    pub async fn open(config: &Config) -> CliResult<Self> {
        let path = config.database_path()?;
        let options = DatabaseOptions {
            max_connections: config.database.max_connections,
            busy_timeout: Duration::from_secs(config.database.busy_timeout_secs),
        };
        let database = Database::connect_with(&path, options).await?;

        Ok(Self::new(database, config))
    }

    pub fn new(database: Database, config: &Config) -> Self {
        let accounts = AccountService::new(
            Arc::new(database.auth_service()),
            Arc::new(database.profile_store()),
            IdentityReconciler::new(config.profile.default_display_name.trim()),
        );
        let high_scores = HighScoreService::new(
            Arc::new(database.score_store()),
            ScoreLedger::new(config.ledger.capacity),
        );
        let rules = RoundRules {
            questions_per_round: config.game.questions_per_round,
            choices_per_question: config.game.choices_per_question,
            streak_points: config.game.streak_points,
        };

        Self {
            database,
            accounts,
            high_scores,
            rules,
        }
    }

    pub fn accounts(&self) -> &AccountService {
        &self.accounts
    }

    pub fn high_scores(&self) -> &HighScoreService {
        &self.high_scores
    }

    pub fn rules(&self) -> RoundRules {
        self.rules
    }

    pub fn new_round<R: Rng>(&self, rng: R) -> CliResult<GameRound<R>> {
        Ok(GameRound::new(self.rules, rng)?)
    }

    pub async fn record_score(&self, profile: &UserProfile, score: i64) -> CliResult<Decision> {
        let decision = self
            .high_scores
            .record_game_result(profile.id, score)
            .await?;
        info!(
            "Recorded round for {}: score={}, qualified={}",
            profile.email,
            score,
            decision.qualified()
        );
        Ok(decision)
    }

    pub async fn close(&self) {
        self.database.close().await;
    }
}

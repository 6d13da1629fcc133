//! Game-state service: the single owner of the scoreboard.
//!
//! Every operation runs its whole read-modify-write under one lock, so
//! concurrent requests from different actix workers cannot both pass the
//! "no winner yet" check.

use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::rules::{coerce_score, coerce_threshold};
use crate::domain::state::GameState;
use crate::domain::{roster, scoring, Players, WinThreshold};
use crate::errors::domain::DomainError;

/// Read-only view of the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub players: Players,
    pub win_threshold: WinThreshold,
    pub winner: Option<String>,
    pub game_over: bool,
}

/// Result of AddPlayer: the stored name plus the updated roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAdded {
    pub name: String,
    pub players: Players,
}

/// Result of AddScore and RemovePlayer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub players: Players,
    pub winner: Option<String>,
    pub game_over: bool,
}

/// Result of SetThreshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdOutcome {
    pub win_threshold: WinThreshold,
    pub winner: Option<String>,
    pub game_over: bool,
}

#[derive(Debug, Default)]
pub struct GameStateService {
    state: Mutex<GameState>,
}

impl GameStateService {
    pub fn new(win_threshold: WinThreshold) -> Self {
        Self {
            state: Mutex::new(GameState::with_threshold(win_threshold)),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let state = self.state.lock();
        GameSnapshot {
            players: state.players.clone(),
            win_threshold: state.win_threshold,
            winner: state.winner.clone(),
            game_over: state.game_over(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.state.lock().players.len()
    }

    pub fn add_player(&self, raw_name: &str) -> Result<PlayerAdded, DomainError> {
        let mut state = self.state.lock();
        let name = roster::add_player(&mut state, raw_name).inspect_err(|e| {
            debug!(error = %e, "game.add_player_rejected");
        })?;

        info!(player = %name, players = state.players.len(), "game.player_added");
        Ok(PlayerAdded {
            name,
            players: state.players.clone(),
        })
    }

    /// Add a round score. An unknown player is reported before a bad score.
    pub fn add_score(
        &self,
        player: &str,
        raw_score: Option<&Value>,
    ) -> Result<ScoreOutcome, DomainError> {
        let mut state = self.state.lock();
        if !state.players.contains(player) {
            debug!(player = %player, "game.add_score_unknown_player");
            return Err(roster::player_not_found());
        }
        let score = coerce_score(raw_score).inspect_err(|e| {
            debug!(player = %player, error = %e, "game.add_score_rejected");
        })?;

        let had_winner = state.game_over();
        let total = scoring::add_score(&mut state, player, score)?;

        info!(player = %player, score, total, "game.score_added");
        if !had_winner {
            if let Some(winner) = &state.winner {
                info!(
                    winner = %winner,
                    threshold = state.win_threshold.get(),
                    "game.winner_declared"
                );
            }
        }

        Ok(score_outcome(&state))
    }

    pub fn set_threshold(
        &self,
        raw_threshold: Option<&Value>,
    ) -> Result<ThresholdOutcome, DomainError> {
        let threshold = coerce_threshold(raw_threshold).inspect_err(|e| {
            debug!(error = %e, "game.set_threshold_rejected");
        })?;

        let mut state = self.state.lock();
        scoring::set_threshold(&mut state, threshold);
        info!(
            threshold = threshold.get(),
            winner = ?state.winner,
            "game.threshold_set"
        );

        Ok(ThresholdOutcome {
            win_threshold: state.win_threshold,
            winner: state.winner.clone(),
            game_over: state.game_over(),
        })
    }

    pub fn reset_game(&self) -> Players {
        let mut state = self.state.lock();
        let dropped = state.players.len();
        roster::reset_game(&mut state);
        info!(dropped, "game.reset");
        state.players.clone()
    }

    pub fn reset_scores(&self) -> Players {
        let mut state = self.state.lock();
        scoring::reset_scores(&mut state);
        info!(players = state.players.len(), "game.scores_reset");
        state.players.clone()
    }

    pub fn remove_player(&self, player: &str) -> Result<ScoreOutcome, DomainError> {
        let mut state = self.state.lock();
        let was_winner = state.winner.as_deref() == Some(player);
        roster::remove_player(&mut state, player).inspect_err(|e| {
            debug!(player = %player, error = %e, "game.remove_player_rejected");
        })?;

        info!(
            player = %player,
            was_winner,
            winner = ?state.winner,
            "game.player_removed"
        );
        Ok(score_outcome(&state))
    }
}

fn score_outcome(state: &GameState) -> ScoreOutcome {
    ScoreOutcome {
        players: state.players.clone(),
        winner: state.winner.clone(),
        game_over: state.game_over(),
    }
}

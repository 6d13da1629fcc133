use crate::domain::players::Players;
use crate::domain::rules::WinThreshold;

/// Entire game container, sufficient for pure domain operations.
///
/// `game_over` is not stored: it is `winner.is_some()` by definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    /// Roster in insertion order.
    pub players: Players,
    /// Current win threshold.
    pub win_threshold: WinThreshold,
    /// First player to reach the threshold, if any. Sticky until cleared.
    pub winner: Option<String>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(win_threshold: WinThreshold) -> Self {
        Self {
            win_threshold,
            ..Self::default()
        }
    }

    pub fn game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn clear_winner(&mut self) {
        self.winner = None;
    }

    /// Replace the winner with the first player, in roster order, whose score
    /// meets the current threshold (or none).
    pub fn rescan_winner(&mut self) {
        self.winner = first_qualifying(&self.players, self.win_threshold).map(str::to_string);
    }
}

/// First player, in roster order, whose score meets `threshold`.
pub fn first_qualifying(players: &Players, threshold: WinThreshold) -> Option<&str> {
    players
        .iter()
        .find(|(_, p)| threshold.is_met_by(p.score))
        .map(|(name, _)| name)
}

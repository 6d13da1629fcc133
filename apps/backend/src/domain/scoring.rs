use crate::domain::rules::WinThreshold;
use crate::domain::roster::player_not_found;
use crate::domain::state::GameState;
use crate::errors::domain::{DomainError, ValidationKind};

/// Add one round score to `name` and check only that player for a win.
///
/// The first player to reach the threshold stays the winner; later players
/// crossing it do not replace them. Returns the player's new total.
pub fn add_score(state: &mut GameState, name: &str, score: i64) -> Result<i64, DomainError> {
    let threshold = state.win_threshold;
    let player = state.players.get_mut(name).ok_or_else(player_not_found)?;

    let total = player.score.checked_add(score).ok_or_else(|| {
        DomainError::validation(ValidationKind::Score, "Score is out of range")
    })?;
    player.score = total;
    player.rounds.push(score);

    if state.winner.is_none() && threshold.is_met_by(total) {
        state.winner = Some(name.to_string());
    }
    Ok(total)
}

/// Zero every score and history, keeping the roster. No rescan is needed:
/// every score is 0 and the threshold is positive.
pub fn reset_scores(state: &mut GameState) {
    for player in state.players.values_mut() {
        player.clear();
    }
    state.clear_winner();
}

/// Replace the threshold, then rescan every player for the first match.
pub fn set_threshold(state: &mut GameState, threshold: WinThreshold) {
    state.win_threshold = threshold;
    state.rescan_winner();
}

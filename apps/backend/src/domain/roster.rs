//! Roster changes: adding, removing and wiping players.

use crate::domain::players::Player;
use crate::domain::rules::normalize_name;
use crate::domain::state::GameState;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// Add a player with score 0 and no rounds. Returns the stored (trimmed) name.
pub fn add_player(state: &mut GameState, raw_name: &str) -> Result<String, DomainError> {
    let name = normalize_name(raw_name)?;
    if !state.players.insert(name.clone(), Player::new()) {
        return Err(DomainError::conflict(
            ConflictKind::DuplicatePlayer,
            "Player already exists",
        ));
    }
    Ok(name)
}

/// Remove a player. Removing the current winner rescans the remaining
/// players; removing anyone else leaves the winner untouched.
pub fn remove_player(state: &mut GameState, name: &str) -> Result<Player, DomainError> {
    let removed = state.players.remove(name).ok_or_else(player_not_found)?;
    if state.winner.as_deref() == Some(name) {
        state.rescan_winner();
    }
    Ok(removed)
}

/// Drop every player and the winner. The threshold is kept.
pub fn reset_game(state: &mut GameState) {
    state.players.clear();
    state.clear_winner();
}

pub(crate) fn player_not_found() -> DomainError {
    DomainError::not_found(NotFoundKind::Player, "Player not found")
}

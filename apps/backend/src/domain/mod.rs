//! Domain layer: pure game-state logic, no HTTP and no locking.

pub mod players;
pub mod roster;
pub mod rules;
pub mod scoring;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_scoring;

// Re-exports for ergonomics
pub use players::{Player, Players};
pub use rules::{WinThreshold, DEFAULT_WIN_THRESHOLD};
pub use state::{first_qualifying, GameState};

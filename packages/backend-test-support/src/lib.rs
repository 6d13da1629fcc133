//! Test support shared by the scoreboard backend's unit and integration tests:
//! one-time log initialisation and assertions on the JSON error contract.

pub mod error_body;
pub mod logging;

use std::sync::Arc;

use crate::config::Config;
use crate::services::game_state::GameStateService;

/// Application state shared by every handler as `web::Data<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The one scoreboard this process serves
    pub game: Arc<GameStateService>,
    pub config: Config,
}

impl AppState {
    /// Create a fresh game using the config's initial threshold
    pub fn new(config: Config) -> Self {
        Self {
            game: Arc::new(GameStateService::new(config.initial_win_threshold)),
            config,
        }
    }
}

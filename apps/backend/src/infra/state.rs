use crate::config::Config;
use crate::domain::WinThreshold;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: Config,
    win_threshold: Option<WinThreshold>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            win_threshold: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Override the starting threshold from the config.
    pub fn with_win_threshold(mut self, threshold: WinThreshold) -> Self {
        self.win_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> AppState {
        let mut config = self.config;
        if let Some(threshold) = self.win_threshold {
            config.initial_win_threshold = threshold;
        }
        AppState::new(config)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

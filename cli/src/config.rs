use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigStore, FileConfigSource, Validate, YamlConfigFormat};
use tictactoe_engine::tictactoe::{FirstPlayerMode, OpponentKind};

const CONFIG_FILE_NAME: &str = "tictactoe_ai.yaml";
const MAX_GAMES: u32 = 10_000;

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub type CliConfigStore = ConfigStore<FileConfigSource, CliConfig, YamlConfigFormat>;

pub fn get_config_store(path: Option<PathBuf>) -> CliConfigStore {
    ConfigStore::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CliConfig {
    pub parallel: bool,
    pub opponent: OpponentKind,
    pub first_player: FirstPlayerMode,
    pub games: u32,
    pub seed: Option<u64>,
    pub log_prefix: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            opponent: OpponentKind::Perfect,
            first_player: FirstPlayerMode::Alternate,
            games: 10,
            seed: None,
            log_prefix: Some("TicTacToe".to_string()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 || self.games > MAX_GAMES {
            return Err(format!("Games must be between 1 and {}", MAX_GAMES));
        }
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("Log prefix must not be blank".to_string());
        }
        Ok(())
    }
}

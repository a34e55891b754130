use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

const CONFIG_JSON_PATH: &str = "config/config.json";

// ---------- Settings model ----------
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub log_file: PathBuf,
    pub refresh_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("server.log"),
            refresh_ms: 1000,
        }
    }
}

/// Load `config/config.json` next to the working directory. A missing file is
/// the normal case and yields the defaults; a malformed one is logged and
/// also falls back to defaults.
pub fn load_config() -> Config {
    load_config_from(Path::new(CONFIG_JSON_PATH))
}

fn load_config_from(path: &Path) -> Config {
    match fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(e) => {
                warn!("couldn't parse {}: {}", path.display(), e);
                Config::default()
            }
        },
        Err(_) => Config::default(),
    }
}

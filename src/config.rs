use crate::image::DEFAULT_CONFIDENCE_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Load environment variables from .env file with robust parsing.
/// Handles values with spaces without requiring quotes.
pub fn load_dotenv() {
    load_dotenv_from(Path::new(".env"));
}

fn load_dotenv_from(env_path: &Path) {
    let content = match fs::read_to_string(env_path) {
        Ok(c) => c,
        Err(_) => return,
    };

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let mut value = value.trim();

            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = &value[1..value.len() - 1];
            }

            // Real environment wins over .env
            if std::env::var(key).is_err() {
                // SAFETY: called from main before the tokio runtime spawns any worker
                unsafe { std::env::set_var(key, value) };
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub image: ImageConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding sensors, arming status and alarm status.
    pub state_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    pub confidence_threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub interval_secs: u64,
}

impl StorageConfig {
    /// Default location of the state file.
    ///
    /// Uses the platform data directory when available, otherwise the
    /// current working directory.
    pub fn default_state_file() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("security-monitor"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("state.json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                state_file: StorageConfig::default_state_file(),
            },
            image: ImageConfig {
                confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            },
            simulation: SimulationConfig { interval_secs: 5 },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from `lookup`, falling back to defaults for missing
    /// or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("SECURITY_STATE_FILE") {
            config.storage.state_file = PathBuf::from(path);
        }
        if let Some(threshold) = lookup("CAT_CONFIDENCE_THRESHOLD")
            && let Ok(t) = threshold.parse()
        {
            config.image.confidence_threshold = t;
        }
        if let Some(interval) = lookup("SIMULATION_INTERVAL_SECS")
            && let Ok(i) = interval.parse::<u64>()
            && i > 0
        {
            config.simulation.interval_secs = i;
        }

        config
    }
}

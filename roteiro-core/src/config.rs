//! User configuration at ~/.config/roteiro/config.toml

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_CITY_CONTEXT, DEFAULT_GEOCODER_URL};
use crate::error::{CoreError, CoreResult};
use crate::storage::FileStorage;

static DEFAULT_DATA_DIR: &str = "~/.local/share/roteiro";
static ENV_PREFIX: &str = "ROTEIRO";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_city_context() -> String {
    DEFAULT_CITY_CONTEXT.to_string()
}

fn default_geocoder_url() -> String {
    DEFAULT_GEOCODER_URL.to_string()
}

fn default_user_agent() -> String {
    format!("roteiro/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RoteiroConfig {
    /// Where the itinerary is stored.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Appended to every address before geocoding.
    #[serde(default = "default_city_context")]
    pub city_context: String,

    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,

    /// Nominatim rejects requests without an identifying agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for RoteiroConfig {
    fn default() -> Self {
        RoteiroConfig {
            data_dir: default_data_dir(),
            city_context: default_city_context(),
            geocoder_url: default_geocoder_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl RoteiroConfig {
    pub fn config_path() -> CoreResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CoreError::Config("Could not determine config directory".into()))?
            .join("roteiro");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, writing a commented default on first run.
    /// `ROTEIRO_*` environment variables override file values.
    pub fn load() -> CoreResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CoreResult<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: &Path, env: Environment) -> CoreResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| CoreError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CoreError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_path())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CoreResult<()> {
        let contents = format!(
            "\
# roteiro configuration

# Where your itinerary is stored:
# data_dir = \"{}\"

# City, state and country added to every address lookup:
# city_context = \"{}\"

# Address search service (Nominatim compatible):
# geocoder_url = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_CITY_CONTEXT, DEFAULT_GEOCODER_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CoreError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CoreError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

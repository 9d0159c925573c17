// Generator configuration and config file discovery

use super::error::ConfigError;
use super::prompts::MarketingRole;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file name looked up in the current and home directories
pub const CONFIG_FILE_NAME: &str = ".promokit.json";

/// Token floor for a full bundle, whatever the role's own limit
pub const BUNDLE_MIN_TOKENS: u32 = 1500;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Overrides the role's temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Overrides the role's token limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_role")]
    pub role: MarketingRole,

    /// Only read by the CLI, which passes it to the orchestrator explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_timeout_ms() -> u64 {
    30000
}

fn default_role() -> MarketingRole {
    MarketingRole::CampaignPlanner
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: None,
            max_tokens: None,
            timeout_ms: default_timeout_ms(),
            role: default_role(),
            api_key: None,
        }
    }
}

impl GeneratorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or_else(|| self.role.config().temperature)
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or_else(|| self.role.config().max_tokens.max(BUNDLE_MIN_TOKENS))
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load the first config file found, or defaults when there is none
    pub fn discover() -> Result<Self, ConfigError> {
        match find_config() {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading config");
                Self::from_file(path)
            }
            None => {
                tracing::debug!("No {} found, using default config", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Write an example config file
    pub fn write_example(path: &Path) -> Result<(), ConfigError> {
        let example = Self {
            temperature: Some(0.7),
            api_key: Some(String::new()),
            ..Self::default()
        };
        example.to_file(path)
    }
}

/// Look for a config file in the current directory, then the home directory
pub fn find_config() -> Option<PathBuf> {
    let local_config = PathBuf::from(CONFIG_FILE_NAME);
    if local_config.exists() {
        return Some(local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(CONFIG_FILE_NAME);
        if home_config.exists() {
            return Some(home_config);
        }
    }

    None
}

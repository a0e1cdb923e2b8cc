use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result, anyhow};
use config::Config;
use serde::Deserialize;

use crate::constant;

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub name: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            name: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl ModelConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reads the bearer token from the environment variable named by `api_key_env`.
    pub fn api_key(&self) -> Result<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            Ok(_) => Err(anyhow!("{} is set but empty", self.api_key_env)),
            Err(err) => Err(anyhow!("{}: {}", self.api_key_env, err)),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HTTPChannelConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// sessions untouched for this long are dropped
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

impl Default for HTTPChannelConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}

impl HTTPChannelConfig {
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub http: HTTPChannelConfig,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            model: ModelConfig::default(),
            http: HTTPChannelConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
struct AllConfig {
    #[serde(default)]
    assistant: AssistantConfig,
}

fn default_greeting() -> String {
    constant::DEFAULT_GREETING.into()
}

fn default_endpoint() -> String {
    constant::DEFAULT_ENDPOINT.into()
}

fn default_model() -> String {
    constant::DEFAULT_MODEL.into()
}

fn default_temperature() -> f64 {
    constant::DEFAULT_TEMPERATURE
}

fn default_timeout_secs() -> u64 {
    constant::DEFAULT_TIMEOUT_SECS
}

fn default_api_key_env() -> String {
    constant::DEFAULT_API_KEY_ENV.into()
}

fn default_port() -> u16 {
    constant::DEFAULT_HTTP_PORT
}

fn default_session_ttl_secs() -> u64 {
    constant::DEFAULT_SESSION_TTL_SECS
}

impl AssistantConfig {
    pub fn default_path() -> Result<PathBuf> {
        let mut path = dirs::home_dir().context("cannot resolve home directory")?;
        path.push(constant::DEFAULT_CONFIG_PATH);

        Ok(path)
    }

    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let default_path = Self::default_path()?;
                log::warn!(
                    "config path not inputed, fallback to {}",
                    default_path.display()
                );

                default_path
            }
        };

        if !path.exists() {
            log::warn!(
                "{} not found, generating a new config file",
                path.display()
            );

            Self::create_file(path.clone())?;
        }

        let settings = Config::builder()
            .add_source(config::File::from(path.clone()))
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;

        let config = settings
            .try_deserialize::<AllConfig>()
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::info!("config loaded: {}", path.display());

        Ok(config.assistant)
    }

    pub fn create_file(path: PathBuf) -> Result<()> {
        if let Some(parent_dir) = path.parent() {
            fs::create_dir_all(parent_dir)?;
        }

        fs::write(&path, constant::DEFAULT_CONFIG_TOML)
            .with_context(|| format!("failed to write config {}", path.display()))?;

        Ok(())
    }
}

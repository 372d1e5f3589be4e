use lodge_states::State;
use log::info;
use serde::Deserialize;
use thiserror::Error;
use ustr::Ustr;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("API_BASE_URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url.trim_end_matches('/')))
        }
    }

    /// Loads the configuration, letting `API_BASE_URL` override the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_env::from_iter(std::env::vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        match raw.api_base_url {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                info!("Using provided API_BASE_URL: {url}");
                Ok(Self::new(url))
            }
            Some(url) => Err(ConfigError::InvalidBaseUrl(url)),
            None => Ok(Self::default()),
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                // Same origin as the page serving the app.
                String::new()
            } else {
                "http://localhost:8080".to_owned()
            },
        }
    }
}

impl State for BusinessConfig {}

use crate::error::{ChatError, Result};
use serde::Deserialize;
use std::env;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    pub endpoint: String,
}

impl ChatConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let endpoint = env::var("WORKFLOW_ENDPOINT")
            .map_err(|_| ChatError::Config("WORKFLOW_ENDPOINT not set".to_string()))?;

        Ok(ChatConfig { endpoint })
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ChatError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config: ChatConfig = toml::from_str(&contents)
            .map_err(|e| ChatError::Config(format!("Failed to parse config file: {}", e)))?;

        // Allow environment variables to override file config
        if let Ok(endpoint) = env::var("WORKFLOW_ENDPOINT") {
            config.endpoint = endpoint;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(ChatError::Config("Endpoint is empty".to_string()));
        }

        if !self.endpoint.starts_with("http") {
            return Err(ChatError::Config(format!(
                "Endpoint must start with http: {}",
                self.endpoint
            )));
        }

        Ok(())
    }
}

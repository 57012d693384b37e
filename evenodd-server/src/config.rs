//! Server configuration
//!
//! Defaults work out of the box; an optional TOML file and `EVENODD_`
//! environment variables layer on top.

use evenodd_spk::SpeechConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Speech synthesis settings
    pub speech: SpeechConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            speech: SpeechConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port must be greater than 0".to_string());
        }

        self.speech.validate()?;

        Ok(())
    }

    /// Load configuration: defaults, then an optional file, then
    /// `EVENODD_`-prefixed environment variables.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&ServerConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("EVENODD")
                .separator("__")
                .try_parsing(true),
        );

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

        Ok(config)
    }
}

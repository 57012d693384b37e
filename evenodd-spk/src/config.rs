//! Configuration for speech synthesis

use serde::{Deserialize, Serialize};

/// Speech synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Enable speech synthesis
    pub enabled: bool,

    /// TTS provider
    pub provider: TtsProvider,

    /// Base URL of the TTS service
    pub endpoint: String,

    /// API key (optional, only used by the custom provider)
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Enable in-memory audio caching
    pub enable_cache: bool,

    /// Maximum number of cached audio clips
    pub max_cache_entries: usize,

    /// Maximum concurrent synthesis requests
    pub queue_size: usize,
}

/// TTS provider type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TtsProvider {
    /// The unauthenticated Google Translate TTS endpoint (what the gTTS
    /// library calls)
    GoogleTranslate,
    /// A generic JSON TTS endpoint returning raw or base64 audio
    Custom,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: TtsProvider::GoogleTranslate,
            endpoint: "https://translate.google.com".to_string(),
            api_key: None,
            timeout_secs: 10,
            enable_cache: true,
            max_cache_entries: 256,
            queue_size: 16,
        }
    }
}

impl SpeechConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("Endpoint cannot be empty".to_string());
        }

        if self.endpoint.len() > 2048 {
            return Err("Endpoint URL too long (max 2048 chars)".to_string());
        }

        if self.endpoint.chars().any(|c| c == '\0' || c.is_control()) {
            return Err("Endpoint contains invalid characters".to_string());
        }

        let parsed = url::Url::parse(&self.endpoint)
            .map_err(|e| format!("Invalid endpoint URL: {}", e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!(
                "Unsupported URL scheme: {}. Only http:// and https:// are allowed.",
                parsed.scheme()
            ));
        }

        if self.timeout_secs == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.timeout_secs > 300 {
            return Err("Timeout too large (max 300 seconds)".to_string());
        }

        if let Some(ref key) = self.api_key {
            if key.chars().any(|c| c == '\0' || c.is_control()) {
                return Err("API key contains invalid characters".to_string());
            }
        }

        if self.queue_size == 0 {
            return Err("Queue size must be greater than 0".to_string());
        }

        if self.queue_size > 10_000 {
            return Err("Queue size too large (max 10000)".to_string());
        }

        if self.max_cache_entries > 100_000 {
            return Err("Cache entry limit too large (max 100000)".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SpeechConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_endpoint_rejected() {
        let config = SpeechConfig {
            endpoint: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_http_scheme_rejected() {
        let config = SpeechConfig {
            endpoint: "ftp://tts.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SpeechConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_queue_rejected() {
        let config = SpeechConfig {
            queue_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

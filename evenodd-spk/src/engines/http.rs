//! HTTP TTS engine
//! Supports the Google Translate TTS endpoint and generic custom endpoints

use crate::config::{SpeechConfig, TtsProvider};
use crate::engines::TtsEngine;
use crate::error::SpeechError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

const MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024; // 10MB max

/// HTTP-based TTS engine
pub struct HttpTtsEngine {
    provider: TtsProvider,
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTtsEngine {
    /// Create an engine from a validated speech config
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::Engine(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            provider: config.provider.clone(),
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Synthesize via the unauthenticated Google Translate TTS endpoint.
    ///
    /// This is the service the original gTTS client talks to: a GET with
    /// the text and language code as query parameters, answered with raw
    /// MP3 bytes.
    async fn synthesize_google_translate(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Bytes, SpeechError> {
        let url = format!("{}/translate_tts", self.endpoint);
        let textlen = text.chars().count().to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language_code),
                ("q", text),
                ("total", "1"),
                ("idx", "0"),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SpeechError::Engine(format!("TTS request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(SpeechError::Engine(format!(
                "TTS endpoint error ({}): language '{}' may be unsupported",
                status, language_code
            )));
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Engine(format!("Failed to read audio response: {}", e)))?;

        if audio_bytes.len() > MAX_RESPONSE_SIZE {
            return Err(SpeechError::Engine(format!(
                "Response too large ({} bytes, max {} bytes)",
                audio_bytes.len(),
                MAX_RESPONSE_SIZE
            )));
        }

        if audio_bytes.is_empty() {
            return Err(SpeechError::Engine("TTS endpoint returned no audio".to_string()));
        }

        Ok(audio_bytes)
    }

    /// Synthesize via a generic JSON TTS endpoint.
    ///
    /// POSTs `{text, language, format}` and accepts either raw audio bytes
    /// or a JSON body with a base64 `audio`/`data`/`audioContent` field.
    async fn synthesize_custom(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Bytes, SpeechError> {
        let request_body = json!({
            "text": text,
            "language": language_code,
            "format": "mp3",
        });

        let url = format!("{}/v1/synthesize", self.endpoint);

        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");

        if let Some(ref key) = self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SpeechError::Engine(format!("Custom TTS request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .map(|s| {
                    if s.len() > 1000 {
                        let truncated: String = s.chars().take(1000).collect();
                        format!("{}...", truncated)
                    } else {
                        s
                    }
                })
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SpeechError::Engine(format!(
                "Custom TTS error ({}): {}",
                status, error_text
            )));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > MAX_RESPONSE_SIZE as u64 {
                return Err(SpeechError::Engine(format!(
                    "Response too large ({} bytes, max {} bytes)",
                    content_length, MAX_RESPONSE_SIZE
                )));
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Engine(format!("Failed to read audio response: {}", e)))?;

        if body.len() > MAX_RESPONSE_SIZE {
            return Err(SpeechError::Engine(format!(
                "Response too large ({} bytes, max {} bytes)",
                body.len(),
                MAX_RESPONSE_SIZE
            )));
        }

        // JSON responses carry the audio as base64 in a well-known field
        if body.len() > 2 && body[0] == b'{' && body[body.len() - 1] == b'}' {
            if let Ok(json_response) = serde_json::from_slice::<serde_json::Value>(&body) {
                if let Some(audio_base64) = json_response
                    .get("audio")
                    .or_else(|| json_response.get("data"))
                    .or_else(|| json_response.get("audioContent"))
                    .and_then(|v| v.as_str())
                {
                    use base64::{engine::general_purpose, Engine as _};
                    let decoded = general_purpose::STANDARD.decode(audio_base64).map_err(
                        |e| SpeechError::Engine(format!("Failed to decode base64 audio: {}", e)),
                    )?;
                    if decoded.len() > MAX_RESPONSE_SIZE {
                        return Err(SpeechError::Engine("Decoded audio too large".to_string()));
                    }
                    return Ok(Bytes::from(decoded));
                }
            }
        }

        if body.is_empty() {
            return Err(SpeechError::Engine("TTS endpoint returned no audio".to_string()));
        }

        Ok(body)
    }
}

#[async_trait]
impl TtsEngine for HttpTtsEngine {
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Bytes, SpeechError> {
        if text.is_empty() {
            return Err(SpeechError::Engine("Text cannot be empty".to_string()));
        }

        if language_code.is_empty() || language_code.len() > 32 {
            return Err(SpeechError::Engine(format!(
                "Invalid language code: '{}'",
                language_code
            )));
        }

        if !language_code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(SpeechError::Engine(format!(
                "Invalid language code: '{}'",
                language_code
            )));
        }

        match self.provider {
            TtsProvider::GoogleTranslate => {
                self.synthesize_google_translate(text, language_code).await
            }
            TtsProvider::Custom => self.synthesize_custom(text, language_code).await,
        }
    }

    fn is_available(&self) -> bool {
        !self.endpoint.is_empty()
    }

    fn name(&self) -> &str {
        match self.provider {
            TtsProvider::GoogleTranslate => "Google Translate TTS",
            TtsProvider::Custom => "Custom API TTS",
        }
    }
}

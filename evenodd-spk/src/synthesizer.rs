//! Speech synthesizer with caching and queue management

use crate::config::SpeechConfig;
use crate::engines::http::HttpTtsEngine;
use crate::engines::TtsEngine;
use crate::error::SpeechError;
use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

const MAX_TEXT_LENGTH: usize = 100_000;
const MAX_AUDIO_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Front-end over a TTS engine: bounds concurrent requests and caches
/// audio so repeated play-button presses for the same sentence do not
/// re-hit the service.
///
/// There is no retry: a failed synthesis surfaces once to the caller.
pub struct SpeechSynthesizer {
    config: Arc<SpeechConfig>,
    engine: Arc<dyn TtsEngine>,
    cache: Arc<RwLock<HashMap<String, CachedAudio>>>,
    queue_semaphore: Arc<Semaphore>,
}

#[derive(Clone)]
struct CachedAudio {
    audio: Bytes,
    timestamp: chrono::DateTime<chrono::Utc>,
}

impl SpeechSynthesizer {
    /// Create a synthesizer backed by the HTTP engine the config selects
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        let engine = HttpTtsEngine::new(&config)?;
        Self::with_engine(config, Arc::new(engine))
    }

    /// Create a synthesizer over an explicit engine (used by tests and by
    /// callers that implement their own `TtsEngine`)
    pub fn with_engine(
        config: SpeechConfig,
        engine: Arc<dyn TtsEngine>,
    ) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Config)?;

        if !config.enabled {
            return Err(SpeechError::Config(
                "Speech synthesis is disabled".to_string(),
            ));
        }

        if !engine.is_available() {
            return Err(SpeechError::Engine(format!(
                "TTS engine '{}' not available",
                engine.name()
            )));
        }

        let queue_size = config.queue_size;

        Ok(Self {
            config: Arc::new(config),
            engine,
            cache: Arc::new(RwLock::new(HashMap::new())),
            queue_semaphore: Arc::new(Semaphore::new(queue_size)),
        })
    }

    /// Synthesize a sentence to audio bytes.
    ///
    /// Waits for a queue slot if the configured number of concurrent
    /// requests is already in flight.
    pub async fn speak(&self, text: &str, language_code: &str) -> Result<Bytes, SpeechError> {
        let _permit = self
            .queue_semaphore
            .acquire()
            .await
            .map_err(|e| SpeechError::Synthesizer(format!("Failed to acquire queue permit: {}", e)))?;

        self.synthesize_internal(text, language_code).await
    }

    async fn synthesize_internal(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Bytes, SpeechError> {
        if text.is_empty() {
            return Err(SpeechError::Synthesizer("Text cannot be empty".to_string()));
        }

        if text.contains('\0') {
            return Err(SpeechError::Synthesizer(
                "Text contains null bytes".to_string(),
            ));
        }

        if text.len() > MAX_TEXT_LENGTH {
            return Err(SpeechError::Synthesizer(format!(
                "Text too long (max {} bytes)",
                MAX_TEXT_LENGTH
            )));
        }

        let cache_key = cache_key(text, language_code);

        if self.config.enable_cache {
            let cache_hit = {
                let cache = self.cache.read();
                cache.get(&cache_key).cloned()
            };
            if let Some(cached) = cache_hit {
                debug!("Cache hit for language '{}'", language_code);
                return Ok(cached.audio);
            }
        }

        let audio = self.engine.synthesize(text, language_code).await?;

        if audio.len() > MAX_AUDIO_SIZE {
            return Err(SpeechError::Synthesizer(format!(
                "Generated audio too large ({} bytes, max {} bytes)",
                audio.len(),
                MAX_AUDIO_SIZE
            )));
        }

        if self.config.enable_cache {
            {
                let mut cache = self.cache.write();
                cache.insert(
                    cache_key,
                    CachedAudio {
                        audio: audio.clone(),
                        timestamp: chrono::Utc::now(),
                    },
                );
            }
            self.evict_if_full();
        }

        Ok(audio)
    }

    /// Drop the oldest entries once the cache exceeds its entry limit
    fn evict_if_full(&self) {
        let keys_to_remove = {
            let cache = self.cache.read();
            if cache.len() <= self.config.max_cache_entries {
                return;
            }
            let excess = cache.len() - self.config.max_cache_entries;
            let mut entries: Vec<_> = cache
                .iter()
                .map(|(k, v)| (k.clone(), v.timestamp))
                .collect();
            entries.sort_by_key(|(_, ts)| *ts);
            entries
                .into_iter()
                .take(excess)
                .map(|(k, _)| k)
                .collect::<Vec<_>>()
        };

        if !keys_to_remove.is_empty() {
            let removed = keys_to_remove.len();
            let mut cache = self.cache.write();
            for key in keys_to_remove {
                cache.remove(&key);
            }
            warn!("Audio cache full, evicted {} oldest entries", removed);
        }
    }

    /// Number of cached audio clips
    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Number of synthesis requests currently in flight
    pub fn queue_usage(&self) -> usize {
        self.config
            .queue_size
            .saturating_sub(self.queue_semaphore.available_permits())
    }

    /// Engine name, for diagnostics
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }
}

/// Deterministic cache key over sentence and language
fn cache_key(text: &str, language_code: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.update([0u8]);
    hasher.update(language_code.as_bytes());
    format!("{:x}", hasher.finalize())
}

//! TTS engine implementations

pub mod http;

use crate::error::SpeechError;
use async_trait::async_trait;
use bytes::Bytes;

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync {
    /// Synthesize a sentence in the given language to audio bytes
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Bytes, SpeechError>;

    /// Check if engine is usable as configured
    fn is_available(&self) -> bool;

    /// Get engine name
    fn name(&self) -> &str;
}

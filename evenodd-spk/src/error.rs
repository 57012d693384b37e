//! Error types for evenodd-spk

use thiserror::Error;

/// Speech synthesis errors
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Synthesizer error: {0}")]
    Synthesizer(String),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

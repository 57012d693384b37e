//! evenodd-spk: speech synthesis collaborator
//!
//! Converts an already-formatted sentence plus a language code into audio
//! bytes via an HTTP text-to-speech service. Failures surface once as a
//! `SpeechError`; there is no retry, and a synthesis failure never touches
//! the parity result that produced the sentence.

pub mod config;
pub mod engines;
pub mod error;
pub mod synthesizer;

pub use config::{SpeechConfig, TtsProvider};
pub use engines::http::HttpTtsEngine;
pub use engines::TtsEngine;
pub use error::SpeechError;
pub use synthesizer::SpeechSynthesizer;

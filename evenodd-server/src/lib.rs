//! evenodd-server: web surface for the even/odd game
//!
//! Thin JSON API over the core crates. The browser (or any client) is the
//! rendering collaborator: it collects the name, number and language
//! selector, displays the localized sentences, and plays the audio bytes
//! back verbatim.

pub mod config;
pub mod http;

pub use config::ServerConfig;

//! evenodd-i18n: locale catalog and response formatting
//!
//! Holds the per-language text bundles (one `LocaleBundle` per supported
//! language) and the pure formatting step that turns a parity result plus
//! a user name into localized sentences.
//!
//! Templates are plain data strings with `{number}` and `{name}` tokens,
//! rendered by a single-pass interpolator. No executable code lives in the
//! catalog.

pub mod bundle;
pub mod catalog;
pub mod format;

pub use bundle::{Language, LocaleBundle, MessageTemplate};
pub use catalog::bundle;
pub use format::{format_response, FormattedResponse};

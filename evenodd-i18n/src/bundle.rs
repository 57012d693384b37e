//! Language selectors and locale bundles

use evenodd_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::French,
        Language::Spanish,
        Language::German,
        Language::Italian,
    ];

    /// Short code handed to the speech service ("en", "fr", ...).
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::German => "de",
            Language::Italian => "it",
        }
    }

    /// English display name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Italian => "Italian",
        }
    }

    /// Parse a selector: accepts the short code or the English name,
    /// case-insensitively. Anything else is `Error::UnknownLanguage`.
    pub fn from_selector(selector: &str) -> Result<Language> {
        let s = selector.trim();
        for lang in Language::ALL {
            if s.eq_ignore_ascii_case(lang.code()) || s.eq_ignore_ascii_case(lang.name()) {
                return Ok(lang);
            }
        }
        Err(Error::UnknownLanguage(selector.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_selector(s)
    }
}

/// A format string with `{number}` and `{name}` tokens.
///
/// Pure data: rendering happens in `format::render`, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTemplate(pub &'static str);

impl MessageTemplate {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// The complete set of localized text for one language.
///
/// Immutable configuration data, constructed once in the catalog.
/// Every text field must be non-empty; an empty field is a catalog
/// defect, not a runtime branch.
#[derive(Debug, Clone, Copy)]
pub struct LocaleBundle {
    /// Short code used by the speech service.
    pub language_code: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name_prompt: &'static str,
    pub number_prompt: &'static str,
    pub play_button: &'static str,
    pub even_template: MessageTemplate,
    pub odd_template: MessageTemplate,
    pub even_info: &'static str,
    pub odd_info: &'static str,
    pub error_msg: &'static str,
    pub audio_error: &'static str,
}

impl LocaleBundle {
    /// Labeled text fields, for completeness checks.
    pub fn text_fields(&self) -> [(&'static str, &'static str); 11] {
        [
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("name_prompt", self.name_prompt),
            ("number_prompt", self.number_prompt),
            ("play_button", self.play_button),
            ("even_template", self.even_template.as_str()),
            ("odd_template", self.odd_template.as_str()),
            ("even_info", self.even_info),
            ("odd_info", self.odd_info),
            ("error_msg", self.error_msg),
            ("audio_error", self.audio_error),
        ]
    }

    /// Panics if any field is empty. Called once at catalog access in
    /// debug builds.
    pub(crate) fn verify(&self) {
        debug_assert!(!self.language_code.is_empty(), "empty language_code");
        for (label, value) in self.text_fields() {
            debug_assert!(!value.is_empty(), "empty locale field: {label}");
        }
    }
}

//! Response formatting
//!
//! Combines a parity result, the user's name and the active locale bundle
//! into the two output sentences. Pure: identical inputs always produce
//! identical output.

use crate::bundle::{LocaleBundle, MessageTemplate};
use evenodd_core::ParityResult;
use serde::{Deserialize, Serialize};

/// The localized sentences handed to the rendering and speech collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResponse {
    pub result_sentence: String,
    pub info_sentence: String,
}

/// Select the even or odd half of the bundle and render it.
///
/// The name is interpolated as-is; display sanitization is the rendering
/// collaborator's job.
pub fn format_response(
    parity: &ParityResult,
    name: &str,
    bundle: &LocaleBundle,
) -> FormattedResponse {
    let (template, info) = if parity.is_even {
        (bundle.even_template, bundle.even_info)
    } else {
        (bundle.odd_template, bundle.odd_info)
    };

    FormattedResponse {
        result_sentence: render(template, parity.value, name),
        info_sentence: info.to_string(),
    }
}

/// Apply a message template to a number and name.
pub fn render(template: MessageTemplate, number: i64, name: &str) -> String {
    let number = number.to_string();
    interpolate(template.as_str(), &[("number", &number), ("name", name)])
}

/// Single-pass `{token}` interpolation. Unmatched tokens and unclosed
/// braces are emitted as-is; substituted values are never re-scanned.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }
        let mut token = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            token.push(c);
        }
        match args.iter().find(|(n, _)| *n == token) {
            Some((_, value)) if closed => result.push_str(value),
            _ => {
                result.push('{');
                result.push_str(&token);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}

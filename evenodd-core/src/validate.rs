//! Input validation
//!
//! Turns the two free-form form fields (name, number-as-text) into a
//! `ValidInput` or a typed failure. The number is parsed as a base-10
//! signed 64-bit integer: an optional leading `+`/`-`, digits only, no
//! fractional part, no surrounding characters, no embedded whitespace.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

/// A validated submission, ready for parity evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidInput {
    /// User-supplied display name, kept as entered.
    pub name: String,
    /// Parsed number (i64 is the supported representation).
    pub number: i64,
}

/// Validate the raw form fields.
///
/// Empty or whitespace-only fields fail with `Error::MissingInput` before
/// any parsing is attempted. A number that parses but exceeds the i64
/// range fails with `Error::OutOfRange`; any other parse failure is
/// `Error::NotAWholeNumber`.
pub fn validate(raw_name: &str, raw_number: &str) -> Result<ValidInput> {
    if raw_name.trim().is_empty() || raw_number.trim().is_empty() {
        return Err(Error::MissingInput);
    }

    let number = raw_number.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Error::OutOfRange(raw_number.to_string())
        }
        _ => Error::NotAWholeNumber(raw_number.to_string()),
    })?;

    Ok(ValidInput {
        name: raw_name.to_string(),
        number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_missing_input() {
        assert_eq!(validate("", "4"), Err(Error::MissingInput));
    }

    #[test]
    fn empty_number_is_missing_input() {
        assert_eq!(validate("Alice", ""), Err(Error::MissingInput));
    }

    #[test]
    fn whitespace_only_is_missing_input() {
        assert_eq!(validate("   ", "4"), Err(Error::MissingInput));
        assert_eq!(validate("Alice", " \t "), Err(Error::MissingInput));
    }

    #[test]
    fn fractional_rejected() {
        assert!(matches!(
            validate("Alice", "4.5"),
            Err(Error::NotAWholeNumber(_))
        ));
    }

    #[test]
    fn words_rejected() {
        assert!(matches!(
            validate("Alice", "four"),
            Err(Error::NotAWholeNumber(_))
        ));
    }

    #[test]
    fn trailing_junk_rejected() {
        assert!(matches!(
            validate("Alice", "4a"),
            Err(Error::NotAWholeNumber(_))
        ));
    }

    #[test]
    fn embedded_whitespace_rejected() {
        assert!(matches!(
            validate("Alice", "4 2"),
            Err(Error::NotAWholeNumber(_))
        ));
        assert!(matches!(
            validate("Alice", " 4"),
            Err(Error::NotAWholeNumber(_))
        ));
    }

    #[test]
    fn signed_values_accepted() {
        assert_eq!(validate("Alice", "-7").unwrap().number, -7);
        assert_eq!(validate("Alice", "+7").unwrap().number, 7);
        assert_eq!(validate("Alice", "0").unwrap().number, 0);
    }

    #[test]
    fn i64_bounds() {
        assert_eq!(
            validate("Alice", "9223372036854775807").unwrap().number,
            i64::MAX
        );
        assert_eq!(
            validate("Alice", "-9223372036854775808").unwrap().number,
            i64::MIN
        );
        assert!(matches!(
            validate("Alice", "9223372036854775808"),
            Err(Error::OutOfRange(_))
        ));
        assert!(matches!(
            validate("Alice", "-9223372036854775809"),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn name_kept_as_entered() {
        let input = validate("Alice ", "4").unwrap();
        assert_eq!(input.name, "Alice ");
    }
}

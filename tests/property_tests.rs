//! Property-based tests for the validator, parity evaluator and formatter

use evenodd_core::{is_even, validate, Error, ParityResult};
use evenodd_i18n::{bundle, format_response, Language};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parity_matches_remainder(n in any::<i64>()) {
        prop_assert_eq!(is_even(n), n % 2 == 0);
    }

    #[test]
    fn parity_flips_between_neighbors(n in any::<i64>().prop_filter("avoid overflow", |n| *n < i64::MAX)) {
        prop_assert_ne!(is_even(n), is_even(n + 1));
    }

    #[test]
    fn canonical_decimal_strings_validate(n in any::<i64>()) {
        let input = validate("Alice", &n.to_string()).unwrap();
        prop_assert_eq!(input.number, n);
    }

    #[test]
    fn alphabetic_strings_never_validate(s in "[a-zA-Z]{1,12}") {
        prop_assert!(matches!(
            validate("Alice", &s),
            Err(Error::NotAWholeNumber(_))
        ));
    }

    #[test]
    fn formatting_is_pure(n in any::<i64>(), name in "[A-Za-z]{1,16}") {
        let parity = ParityResult::evaluate(n);
        for lang in Language::ALL {
            let b = bundle(lang);
            let first = format_response(&parity, &name, b);
            let second = format_response(&parity, &name, b);
            prop_assert_eq!(&first, &second);
            prop_assert!(first.result_sentence.contains(&name));
            prop_assert!(first.result_sentence.contains(&n.to_string()));
        }
    }

    #[test]
    fn info_sentence_tracks_parity(n in any::<i64>()) {
        let parity = ParityResult::evaluate(n);
        let b = bundle(Language::English);
        let response = format_response(&parity, "Sam", b);
        let expected = if parity.is_even { b.even_info } else { b.odd_info };
        prop_assert_eq!(response.info_sentence, expected);
    }
}

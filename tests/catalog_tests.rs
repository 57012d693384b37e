//! Locale catalog completeness and exact-text tests

use evenodd_core::ParityResult;
use evenodd_i18n::{bundle, format_response, Language};

#[test]
fn all_bundles_complete_and_nonempty() {
    for lang in Language::ALL {
        let b = bundle(lang);
        assert_eq!(b.language_code, lang.code());
        for (label, value) in b.text_fields() {
            assert!(!value.is_empty(), "{lang}: field {label} is empty");
        }
    }
}

#[test]
fn english_bundle_exact_texts() {
    let b = bundle(Language::English);
    assert_eq!(b.title, "🔢 Even or Odd Fun Game for Kids!");
    assert_eq!(b.play_button, "🔊 Play Voice");
    assert_eq!(b.error_msg, "🚫 Please enter a valid whole number.");
    assert_eq!(b.audio_error, "⚠️ Oops! Could not play audio.");
    assert_eq!(
        b.odd_info,
        "🧐 An odd number is NOT divisible by 2. Example: 1, 3, 5..."
    );
}

#[test]
fn spanish_templates_use_inverted_exclamation() {
    let parity = ParityResult::evaluate(6);
    let response = format_response(&parity, "Sofía", bundle(Language::Spanish));
    assert_eq!(response.result_sentence, "¡6 es un número par, Sofía! 🎊");
}

#[test]
fn german_odd_template() {
    let parity = ParityResult::evaluate(9);
    let response = format_response(&parity, "Lena", bundle(Language::German));
    assert_eq!(
        response.result_sentence,
        "9 ist eine ungerade Zahl, Lena! 🎪"
    );
}

#[test]
fn italian_even_template() {
    let parity = ParityResult::evaluate(8);
    let response = format_response(&parity, "Luca", bundle(Language::Italian));
    assert_eq!(response.result_sentence, "8 è un numero pari, Luca! 🎨");
}

#[test]
fn selector_parsing_covers_codes_and_names() {
    for lang in Language::ALL {
        assert_eq!(Language::from_selector(lang.code()).unwrap(), lang);
        assert_eq!(Language::from_selector(lang.name()).unwrap(), lang);
        assert_eq!(
            Language::from_selector(&lang.name().to_uppercase()).unwrap(),
            lang
        );
    }
}

#[test]
fn bundles_are_shareable_across_threads() {
    // 'static data, no synchronization needed
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let lang = Language::ALL[i % Language::ALL.len()];
                bundle(lang).title.to_string()
            })
        })
        .collect();
    for handle in handles {
        assert!(!handle.join().unwrap().is_empty());
    }
}

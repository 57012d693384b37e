//! Static locale catalog
//!
//! One `LocaleBundle` per supported language, defined at compile time and
//! read-only thereafter. Safe to share across any number of concurrent
//! evaluations without synchronization.

use crate::bundle::{Language, LocaleBundle, MessageTemplate};

static ENGLISH: LocaleBundle = LocaleBundle {
    language_code: "en",
    title: "🔢 Even or Odd Fun Game for Kids!",
    subtitle: "Learn numbers and languages with sound and smiles 😊",
    name_prompt: "🧒 What is your name?",
    number_prompt: "🔢 Type any number:",
    play_button: "🔊 Play Voice",
    even_template: MessageTemplate("{number} is an even number, {name}! 🎉"),
    odd_template: MessageTemplate("{number} is an odd number, {name}! 🎉"),
    even_info: "✅ An even number is divisible by 2. Example: 2, 4, 6...",
    odd_info: "🧐 An odd number is NOT divisible by 2. Example: 1, 3, 5...",
    error_msg: "🚫 Please enter a valid whole number.",
    audio_error: "⚠️ Oops! Could not play audio.",
};

static FRENCH: LocaleBundle = LocaleBundle {
    language_code: "fr",
    title: "🔢 Jeu Pair ou Impair pour Enfants!",
    subtitle: "Apprenez les nombres et les langues avec du son et des sourires 😊",
    name_prompt: "🧒 Quel est votre nom?",
    number_prompt: "🔢 Tapez n'importe quel nombre:",
    play_button: "🔊 Jouer la Voix",
    even_template: MessageTemplate("{number} est un nombre pair, {name}! 🎈"),
    odd_template: MessageTemplate("{number} est un nombre impair, {name}! 🎈"),
    even_info: "✅ Un nombre pair est divisible par 2. Exemple: 2, 4, 6...",
    odd_info: "🧐 Un nombre impair N'est PAS divisible par 2. Exemple: 1, 3, 5...",
    error_msg: "🚫 Veuillez entrer un nombre entier valide.",
    audio_error: "⚠️ Oups! Impossible de lire l'audio.",
};

static SPANISH: LocaleBundle = LocaleBundle {
    language_code: "es",
    title: "🔢 ¡Juego Par o Impar para Niños!",
    subtitle: "Aprende números e idiomas con sonido y sonrisas 😊",
    name_prompt: "🧒 ¿Cuál es tu nombre?",
    number_prompt: "🔢 Escribe cualquier número:",
    play_button: "🔊 Reproducir Voz",
    even_template: MessageTemplate("¡{number} es un número par, {name}! 🎊"),
    odd_template: MessageTemplate("¡{number} es un número impar, {name}! 🎊"),
    even_info: "✅ Un número par es divisible por 2. Ejemplo: 2, 4, 6...",
    odd_info: "🧐 Un número impar NO es divisible por 2. Ejemplo: 1, 3, 5...",
    error_msg: "🚫 Por favor ingresa un número entero válido.",
    audio_error: "⚠️ ¡Ups! No se pudo reproducir el audio.",
};

static GERMAN: LocaleBundle = LocaleBundle {
    language_code: "de",
    title: "🔢 Gerade oder Ungerade Spiel für Kinder!",
    subtitle: "Lerne Zahlen und Sprachen mit Klang und Lächeln 😊",
    name_prompt: "🧒 Wie heißt du?",
    number_prompt: "🔢 Gib eine beliebige Zahl ein:",
    play_button: "🔊 Stimme Abspielen",
    even_template: MessageTemplate("{number} ist eine gerade Zahl, {name}! 🎪"),
    odd_template: MessageTemplate("{number} ist eine ungerade Zahl, {name}! 🎪"),
    even_info: "✅ Eine gerade Zahl ist durch 2 teilbar. Beispiel: 2, 4, 6...",
    odd_info: "🧐 Eine ungerade Zahl ist NICHT durch 2 teilbar. Beispiel: 1, 3, 5...",
    error_msg: "🚫 Bitte gib eine gültige ganze Zahl ein.",
    audio_error: "⚠️ Ups! Audio konnte nicht abgespielt werden.",
};

static ITALIAN: LocaleBundle = LocaleBundle {
    language_code: "it",
    title: "🔢 Gioco Pari o Dispari per Bambini!",
    subtitle: "Impara numeri e lingue con suoni e sorrisi 😊",
    name_prompt: "🧒 Qual è il tuo nome?",
    number_prompt: "🔢 Scrivi qualsiasi numero:",
    play_button: "🔊 Riproduci Voce",
    even_template: MessageTemplate("{number} è un numero pari, {name}! 🎨"),
    odd_template: MessageTemplate("{number} è un numero dispari, {name}! 🎨"),
    even_info: "✅ Un numero pari è divisibile per 2. Esempio: 2, 4, 6...",
    odd_info: "🧐 Un numero dispari NON è divisibile per 2. Esempio: 1, 3, 5...",
    error_msg: "🚫 Inserisci un numero intero valido.",
    audio_error: "⚠️ Ops! Impossibile riprodurre l'audio.",
};

/// Look up the bundle for a language selector.
///
/// Total over `Language`: unknown selectors are rejected earlier, when
/// the selector string is parsed.
pub fn bundle(language: Language) -> &'static LocaleBundle {
    let bundle = match language {
        Language::English => &ENGLISH,
        Language::French => &FRENCH,
        Language::Spanish => &SPANISH,
        Language::German => &GERMAN,
        Language::Italian => &ITALIAN,
    };
    bundle.verify();
    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_complete_bundle() {
        for lang in Language::ALL {
            let b = bundle(lang);
            assert_eq!(b.language_code, lang.code());
            for (label, value) in b.text_fields() {
                assert!(!value.is_empty(), "{lang}: empty field {label}");
            }
        }
    }

    #[test]
    fn templates_carry_both_tokens() {
        for lang in Language::ALL {
            let b = bundle(lang);
            for template in [b.even_template, b.odd_template] {
                assert!(template.as_str().contains("{number}"), "{lang}");
                assert!(template.as_str().contains("{name}"), "{lang}");
            }
        }
    }

    #[test]
    fn codes_are_distinct() {
        let mut codes: Vec<&str> = Language::ALL.iter().map(|l| bundle(*l).language_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 5);
    }
}

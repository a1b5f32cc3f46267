//! Localized UI strings for the oracle front-end.
//!
//! Every [`Language`] has a complete [`TranslationBundle`] and a suggestion
//! list; completeness is enforced by the type (non-optional fields), so a
//! missing key is a build-time defect rather than a runtime case.

use serde::{Deserialize, Serialize};

use crate::store::{Derived, Store, Subscription};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// Locale code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Display name in the language's native script
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::De]
    }

    /// Parse a language from its locale code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            _ => None,
        }
    }
}

/// A verdict the oracle can deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    Maybe,
}

/// The complete set of localized strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationBundle {
    pub ask: &'static str,
    pub placeholder: &'static str,
    pub get_answer: &'static str,
    pub logout: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub maybe: &'static str,
    pub thinking: &'static str,
}

impl TranslationBundle {
    /// Localized verdict string for an oracle answer
    pub fn answer(&self, answer: Answer) -> &'static str {
        match answer {
            Answer::Yes => self.yes,
            Answer::No => self.no,
            Answer::Maybe => self.maybe,
        }
    }
}

const EN: TranslationBundle = TranslationBundle {
    ask: "Ask JaNOracle",
    placeholder: "What's your question?",
    get_answer: "Get Answer",
    logout: "I'm done seeking wisdom",
    yes: "Absolutely YES!",
    no: "Definitely NO.",
    maybe: "Hmm... MAYBE.",
    thinking: "The oracle is thinking...",
};

const DE: TranslationBundle = TranslationBundle {
    ask: "Frage JaNOracle",
    placeholder: "Was möchtest du wissen?",
    get_answer: "Antwort holen",
    logout: "Ich habe genug Weisheit gefunden",
    yes: "Aber natürlich, JA!",
    no: "Ganz klar, NEIN.",
    maybe: "Vielleicht... wer weiß?",
    thinking: "Das Orakel denkt nach...",
};

// Example questions shown under the input box, in display order.
const EN_SUGGESTIONS: &[&str] = &[
    "Should I eat that?",
    "Is it my destiny?",
    "Will I win the lottery?",
];

const DE_SUGGESTIONS: &[&str] = &[
    "Soll ich das essen?",
    "Ist es mein Schicksal?",
    "Werde ich im Lotto gewinnen?",
];

/// Translation bundle for a language. Total over [`Language`]; never fails.
pub fn bundle(language: Language) -> &'static TranslationBundle {
    match language {
        Language::En => &EN,
        Language::De => &DE,
    }
}

/// Suggested questions for a language, in display order.
pub fn suggestions(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => EN_SUGGESTIONS,
        Language::De => DE_SUGGESTIONS,
    }
}

/// The current UI language plus its two derived projections: the translation
/// bundle and the suggestion list. Setting the language recomputes both and
/// notifies their subscribers synchronously.
pub struct LanguageStore {
    language: Store<Language>,
    bundle: Derived<&'static TranslationBundle>,
    suggestions: Derived<&'static [&'static str]>,
}

impl LanguageStore {
    pub fn new() -> Self {
        let language = Store::new(Language::default());
        let bundle = language.derive(|language| bundle(*language));
        let suggestions = language.derive(|language| suggestions(*language));
        Self {
            language,
            bundle,
            suggestions,
        }
    }

    pub fn get(&self) -> Language {
        self.language.get()
    }

    pub fn set(&self, language: Language) {
        self.language.set(language);
    }

    /// Translation bundle for the current language
    pub fn bundle(&self) -> &'static TranslationBundle {
        self.bundle.get()
    }

    /// Suggested questions for the current language
    pub fn suggestions(&self) -> &'static [&'static str] {
        self.suggestions.get()
    }

    pub fn subscribe(&self, f: impl FnMut(&Language) + 'static) -> Subscription {
        self.language.subscribe(f)
    }

    pub fn subscribe_bundle(
        &self,
        f: impl FnMut(&&'static TranslationBundle) + 'static,
    ) -> Subscription {
        self.bundle.subscribe(f)
    }

    pub fn subscribe_suggestions(
        &self,
        f: impl FnMut(&&'static [&'static str]) + 'static,
    ) -> Subscription {
        self.suggestions.subscribe(f)
    }
}

impl Default for LanguageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_bundles_complete_for_all_languages() {
        for language in Language::all() {
            let b = bundle(*language);
            let strings = [
                b.ask,
                b.placeholder,
                b.get_answer,
                b.logout,
                b.yes,
                b.no,
                b.maybe,
                b.thinking,
            ];
            for s in strings {
                assert!(!s.is_empty(), "empty string in {language:?} bundle");
            }
        }
    }

    #[test]
    fn test_suggestions_nonempty_and_in_display_order() {
        for language in Language::all() {
            assert!(!suggestions(*language).is_empty());
        }
        assert_eq!(
            suggestions(Language::En),
            &[
                "Should I eat that?",
                "Is it my destiny?",
                "Will I win the lottery?",
            ],
        );
        assert_eq!(suggestions(Language::De)[0], "Soll ich das essen?");
    }

    #[test]
    fn test_language_round_trip_through_bundle() {
        let store = LanguageStore::new();
        assert_eq!(store.bundle().ask, "Ask JaNOracle");

        store.set(Language::De);
        assert_eq!(store.bundle().ask, "Frage JaNOracle");
        assert_eq!(store.suggestions()[0], "Soll ich das essen?");

        store.set(Language::En);
        assert_eq!(store.bundle().ask, "Ask JaNOracle");
    }

    #[test]
    fn test_bundle_subscribers_notified_on_language_change() {
        let store = LanguageStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let slot = Rc::clone(&seen);
        let _sub = store.subscribe_bundle(move |b| slot.borrow_mut().push(b.ask));

        store.set(Language::De);
        store.set(Language::En);
        assert_eq!(*seen.borrow(), vec!["Frage JaNOracle", "Ask JaNOracle"]);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("de"), Some(Language::De));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_answer_lookup() {
        assert_eq!(bundle(Language::En).answer(Answer::Yes), "Absolutely YES!");
        assert_eq!(
            bundle(Language::De).answer(Answer::Maybe),
            "Vielleicht... wer weiß?"
        );
    }
}

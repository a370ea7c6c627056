use std::fmt::{self, Display};

/// A synthesis voice reported by the speech capability.
///
/// Voices are snapshots: the capability owns the real voice, and the reader refers to it by its
/// URI.
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct Voice {
    uri: String,
    name: String,
    language: String,
}

impl Voice {
    /// Creates a voice snapshot from its identifier, display name, and language tag.
    pub fn new<U, N, L>(uri: U, name: N, language: L) -> Self
    where
        U: Into<String>,
        N: Into<String>,
        L: Into<String>,
    {
        Self {
            uri: uri.into(),
            name: name.into(),
            language: language.into(),
        }
    }

    /// Returns the identifier the capability uses for this voice.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the human-readable name of this voice.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the language tag of this voice, e.g. `en-US`.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.language)
    }
}

enum Condition {
    UriEq(String),
    NameEq(String),
    LanguagePrefix(String),
}

impl Condition {
    fn matches(&self, voice: &Voice) -> bool {
        match self {
            Self::UriEq(uri) => voice.uri == *uri,
            Self::NameEq(name) => voice.name.eq_ignore_ascii_case(name),
            Self::LanguagePrefix(prefix) => voice
                .language
                .get(..prefix.len())
                .map_or(false, |head| head.eq_ignore_ascii_case(prefix)),
        }
    }
}

/// Matches voices against a conjunction of conditions.
#[derive(Default)]
pub struct VoiceSelector {
    conditions: Vec<Condition>,
}

impl VoiceSelector {
    /// Creates a selector that matches every voice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the voice identifier to be equal to the given one.
    pub fn uri_eq<S: AsRef<str>>(self, uri: S) -> Self {
        self.append_condition(Condition::UriEq(uri.as_ref().to_string()))
    }

    /// Requires the voice name to be equal to the given one, ignoring ASCII case.
    pub fn name_eq<S: AsRef<str>>(self, name: S) -> Self {
        self.append_condition(Condition::NameEq(name.as_ref().to_string()))
    }

    /// Requires the voice language tag to start with the given locale, ignoring ASCII case. For
    /// example, the locale `en` matches both `en-US` and `en-GB`.
    pub fn language_starts_with<S: AsRef<str>>(self, locale: S) -> Self {
        self.append_condition(Condition::LanguagePrefix(locale.as_ref().to_string()))
    }

    /// Returns whether the given voice satisfies every condition of this selector.
    pub fn matches(&self, voice: &Voice) -> bool {
        self.conditions.iter().all(|cond| cond.matches(voice))
    }

    /// Returns the first voice in the list that satisfies this selector.
    pub fn find<'v>(&self, voices: &'v [Voice]) -> Option<&'v Voice> {
        voices.iter().find(|voice| self.matches(voice))
    }

    fn append_condition(mut self, cond: Condition) -> Self {
        self.conditions.push(cond);
        self
    }
}

/// Picks the voice to select when the user has not chosen one.
///
/// Prefers a voice in the primary locale, then one in the fallback locale, then the first voice
/// in the list. Returns `None` only if the list is empty.
pub fn default_voice<'v>(
    voices: &'v [Voice],
    primary_locale: &str,
    fallback_locale: &str,
) -> Option<&'v Voice> {
    VoiceSelector::new()
        .language_starts_with(primary_locale)
        .find(voices)
        .or_else(|| VoiceSelector::new().language_starts_with(fallback_locale).find(voices))
        .or_else(|| voices.first())
}

use std::time::Duration;

use serde::Deserialize;

use crate::tts::{Pitch, Rate};
use crate::Result;

const LOCALE_VAR: &str = "READ_ALOUD_LOCALE";
const FALLBACK_LOCALE_VAR: &str = "READ_ALOUD_FALLBACK_LOCALE";
const NOTICE_TIMEOUT_VAR: &str = "READ_ALOUD_NOTICE_TIMEOUT_MS";

/// Settings for a [`Reader`](crate::Reader).
///
/// Every field has a default, so a TOML document only needs to list the settings it changes:
///
/// ```
/// let config = read_aloud::ReaderConfig::from_toml_str("primary_locale = \"de\"").unwrap();
/// assert_eq!(config.primary_locale, "de");
/// assert_eq!(config.fallback_locale, "en");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Language voices are preferred in when choosing the default voice
    pub primary_locale: String,
    /// Language used when no voice matches the primary locale
    pub fallback_locale: String,
    /// How long the "download not supported" notice stays visible, in milliseconds
    pub notice_timeout_ms: u64,
    /// Initial voice pitch
    pub pitch: f32,
    /// Initial rate of speech
    pub rate: f32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            primary_locale: "ko".to_string(),
            fallback_locale: "en".to_string(),
            notice_timeout_ms: 5_000,
            pitch: 1.0,
            rate: 1.0,
        }
    }
}

impl ReaderConfig {
    /// Parses the configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Returns the default configuration, overridden by the `READ_ALOUD_LOCALE`,
    /// `READ_ALOUD_FALLBACK_LOCALE`, and `READ_ALOUD_NOTICE_TIMEOUT_MS` environment variables.
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(locale) = std::env::var(LOCALE_VAR) {
            config.primary_locale = locale;
        }
        if let Ok(locale) = std::env::var(FALLBACK_LOCALE_VAR) {
            config.fallback_locale = locale;
        }
        if let Some(timeout) =
            std::env::var(NOTICE_TIMEOUT_VAR).ok().and_then(|s| s.parse::<u64>().ok())
        {
            config.notice_timeout_ms = timeout;
        }
        config
    }

    /// Returns how long the download notice stays visible.
    pub fn notice_timeout(&self) -> Duration {
        Duration::from_millis(self.notice_timeout_ms)
    }

    pub(crate) fn initial_pitch(&self) -> Pitch {
        Pitch::new(self.pitch)
    }

    pub(crate) fn initial_rate(&self) -> Rate {
        Rate::new(self.rate)
    }
}

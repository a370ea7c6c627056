use std::fmt::{self, Display};

mod types;

pub use types::{Pitch, Rate};

use super::Voice;

/// Identifies one submitted utterance. Identifiers are never reused within a reader, so an event
/// carrying an older identifier is known to belong to a superseded utterance.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct UtteranceId(pub(crate) u64);

impl UtteranceId {
    /// Returns the numeric value of this identifier.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for UtteranceId {
    fn from(source: u64) -> Self {
        Self(source)
    }
}

impl Display for UtteranceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A request to read some text aloud with a given voice, pitch, and rate.
#[derive(Debug, PartialEq, Clone)]
pub struct Utterance {
    /// The text to read
    pub text: String,
    /// The voice to read it with
    pub voice: Voice,
    /// The voice pitch
    pub pitch: Pitch,
    /// The rate of speech
    pub rate: Rate,
}

impl Utterance {
    /// Creates a request to read the given text with the given voice at normal pitch and rate.
    pub fn new<S: Into<String>>(text: S, voice: Voice) -> Self {
        Self {
            text: text.into(),
            voice,
            pitch: Pitch::default(),
            rate: Rate::default(),
        }
    }

    /// Sets the pitch of this utterance.
    pub fn with_pitch<P: Into<Pitch>>(mut self, pitch: P) -> Self {
        self.pitch = pitch.into();
        self
    }

    /// Sets the rate of this utterance.
    pub fn with_rate<R: Into<Rate>>(mut self, rate: R) -> Self {
        self.rate = rate.into();
        self
    }
}

use std::fmt::{self, Display};
use std::str::FromStr;

use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// The closed set of error codes a speech capability can report for a failed utterance.
///
/// The string forms are the kebab-case names hosts use on the wire, e.g. `audio-busy`.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorCode {
    /// The utterance was removed from the queue before it started.
    Canceled,
    /// The utterance was interrupted while it was being spoken.
    Interrupted,
    /// The audio output device is in use by another application.
    AudioBusy,
    /// The audio output device could not be found or opened.
    AudioHardware,
    /// A network synthesis service could not be reached.
    Network,
    /// No synthesis engine is available.
    SynthesisUnavailable,
    /// The engine failed while rendering the speech.
    SynthesisFailed,
    /// No voice is available for the requested language.
    LanguageUnavailable,
    /// The requested voice is not available.
    VoiceUnavailable,
    /// The text exceeds the engine's length limit.
    TextTooLong,
    /// The pitch, rate, or another argument is out of range.
    InvalidArgument,
    /// The host does not allow speech synthesis right now.
    NotAllowed,
    /// The engine does not support the request.
    NotSupported,
    /// The engine failed for a reason it did not disclose.
    Unknown,
}

impl ErrorCode {
    /// Returns the user-facing message for this code.
    pub fn message(self) -> &'static str {
        match self {
            Self::Canceled => "Speech was canceled.",
            Self::Interrupted => "Speech was interrupted.",
            Self::AudioBusy => "The audio device is busy. Try again in a moment.",
            Self::AudioHardware => "The audio device could not be used.",
            Self::Network => "A network error occurred during speech synthesis.",
            Self::SynthesisUnavailable => "No speech engine is available.",
            Self::SynthesisFailed => "The speech engine failed to read the text.",
            Self::LanguageUnavailable => "No voice is available for this language.",
            Self::VoiceUnavailable => "The selected voice is not available.",
            Self::TextTooLong => "The text is too long to be read.",
            Self::InvalidArgument => "The pitch or rate is not valid for this voice.",
            Self::NotAllowed => "Speech synthesis is not allowed right now.",
            Self::NotSupported => "This voice does not support the request.",
            Self::Unknown => "The speech engine reported an unknown problem.",
        }
    }
}

/// Message used when a capability reports a failure without any code.
pub const UNKNOWN_FAILURE_MESSAGE: &str = "An unknown error occurred during speech synthesis.";

/// Translates a raw error code reported by a speech capability into a user-facing message.
///
/// The translation is total: unrecognized codes produce a generic message that includes the raw
/// code, and a missing code produces [`UNKNOWN_FAILURE_MESSAGE`].
pub fn describe_error_code(code: Option<&str>) -> String {
    match code {
        None => UNKNOWN_FAILURE_MESSAGE.to_string(),
        Some(raw) => match ErrorCode::from_str(raw) {
            Ok(code) => code.message().to_string(),
            Err(_) => format!("Speech synthesis failed (error: {}).", raw),
        },
    }
}

/// A failed utterance, as reported by the speech capability.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Default)]
pub struct SynthesisFailure {
    code: Option<String>,
}

impl SynthesisFailure {
    /// Creates a failure with the given raw code, or with no code at all.
    pub fn new(code: Option<String>) -> Self {
        Self {
            code,
        }
    }

    /// Returns the raw code as reported by the capability.
    pub fn raw_code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the code if it belongs to the known set.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code.as_deref().and_then(|s| ErrorCode::from_str(s).ok())
    }
}

impl From<ErrorCode> for SynthesisFailure {
    fn from(code: ErrorCode) -> Self {
        let raw: &'static str = code.into();
        Self::from(raw)
    }
}

impl From<&str> for SynthesisFailure {
    fn from(raw: &str) -> Self {
        Self::new(Some(raw.to_string()))
    }
}

impl Display for SynthesisFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe_error_code(self.raw_code()))
    }
}

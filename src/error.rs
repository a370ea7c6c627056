use thiserror::Error;

use crate::tts::SynthesisFailure;

/// The error type returned by the reader and its speech capabilities.
///
/// Every variant's `Display` output is the message shown to the user in the status banner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The host has no speech synthesis capability. This is fatal for the session.
    #[error("Speech synthesis is not supported on this system.")]
    Unsupported,

    /// The text to read is empty or consists only of whitespace.
    #[error("Enter text to read.")]
    EmptyText,

    /// The capability has not reported any voices.
    #[error("No voices are available.")]
    NoVoices,

    /// No voice is selected and none could be chosen as the default.
    #[error("Select a voice.")]
    NoVoiceSelected,

    /// A download was requested with no text to render.
    #[error("There is nothing to download. Enter some text first.")]
    NothingToDownload,

    /// Informational notice set by the download stub. It clears itself after a delay.
    #[error("Downloading speech is not supported yet.")]
    DownloadUnsupported,

    /// The capability reported an error while rendering an utterance.
    #[error("{0}")]
    Synthesis(SynthesisFailure),

    /// The reader was torn down and no longer drives the capability.
    #[error("The reader is no longer active.")]
    Detached,

    /// The capability rejected a request outright.
    #[error("The speech engine failed: {0}")]
    Engine(String),

    /// The reader configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Engine(source.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Self::Config(source.to_string())
    }
}

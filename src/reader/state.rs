use crate::tts::{Pitch, Rate, Voice};
use crate::Error;

/// Everything the reader displays, owned by the [`Reader`](super::Reader).
///
/// The state can only be changed through the reader's operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub(crate) text: String,
    pub(crate) voices: Vec<Voice>,
    pub(crate) selected_voice_uri: Option<String>,
    pub(crate) is_speaking: bool,
    pub(crate) is_loading: bool,
    pub(crate) error: Option<Error>,
    pub(crate) pitch: Pitch,
    pub(crate) rate: Rate,
}

impl ViewState {
    pub(crate) fn new(pitch: Pitch, rate: Rate) -> Self {
        Self {
            text: String::new(),
            voices: Vec::new(),
            selected_voice_uri: None,
            is_speaking: false,
            is_loading: true,
            error: None,
            pitch,
            rate,
        }
    }

    /// The text to read.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The most recently fetched voice catalog.
    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    /// The identifier of the selected voice.
    pub fn selected_voice_uri(&self) -> Option<&str> {
        self.selected_voice_uri.as_deref()
    }

    /// The selected voice, if it is present in the catalog.
    pub fn selected_voice(&self) -> Option<&Voice> {
        let uri = self.selected_voice_uri.as_deref()?;
        self.voices.iter().find(|voice| voice.uri() == uri)
    }

    /// Whether the most recent utterance is being spoken.
    pub fn is_speaking(&self) -> bool {
        self.is_speaking
    }

    /// Whether the voice catalog is still being loaded.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The error or notice shown in the status banner.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// The user-facing message of the current error.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// The voice pitch.
    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    /// The rate of speech.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

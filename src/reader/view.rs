use std::fmt::{self, Display};

use crate::tts::{Pitch, Rate};

use super::ViewState;

/// An event produced by one of the reader's controls.
#[derive(Debug, Clone, PartialEq)]
pub enum UserInput {
    /// The contents of the text input changed.
    EditText(String),
    /// A voice was picked in the voice selector, or the selection was cleared.
    SelectVoice(Option<String>),
    /// The pitch slider moved.
    SetPitch(f32),
    /// The rate slider moved.
    SetRate(f32),
    /// The speak/stop button was pressed.
    ToggleSpeech,
    /// The download button was pressed.
    Download,
    /// The clear button was pressed.
    Clear,
}

/// An entry of the voice selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceOption {
    /// Identifier passed back in [`UserInput::SelectVoice`]
    pub uri: String,
    /// Text shown for this entry
    pub label: String,
    /// Whether this entry is the selected one
    pub selected: bool,
}

/// The rendered form of a [`ViewState`]: what each control shows and whether it accepts input.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Contents of the text input
    pub text: String,
    /// Entries of the voice selector
    pub voices: Vec<VoiceOption>,
    /// Position of the pitch slider
    pub pitch: Pitch,
    /// Position of the rate slider
    pub rate: Rate,
    /// Label of the speak/stop button
    pub speak_label: &'static str,
    /// Whether the speak/stop button can be pressed
    pub speak_enabled: bool,
    /// Whether the download button can be pressed
    pub download_enabled: bool,
    /// Whether the clear button can be pressed
    pub clear_enabled: bool,
    /// Whether the loading indicator is shown
    pub loading: bool,
    /// Message shown in the status banner
    pub status: Option<String>,
}

impl View {
    pub(crate) fn from_state(state: &ViewState, supported: bool) -> Self {
        let selected = state.selected_voice_uri();
        let voices = state
            .voices()
            .iter()
            .map(|voice| VoiceOption {
                uri: voice.uri().to_string(),
                label: voice.to_string(),
                selected: selected == Some(voice.uri()),
            })
            .collect();
        let has_text = !state.text().trim().is_empty();

        Self {
            text: state.text().to_string(),
            voices,
            pitch: state.pitch(),
            rate: state.rate(),
            speak_label: if state.is_speaking() { "Stop" } else { "Speak" },
            speak_enabled: state.is_speaking()
                || (supported && !state.is_loading() && has_text),
            download_enabled: supported && has_text,
            clear_enabled: !state.text().is_empty(),
            loading: supported && state.is_loading(),
            status: state.error_message(),
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Text: {}", self.text)?;
        if self.loading {
            writeln!(f, "Voices: loading...")?;
        } else {
            writeln!(f, "Voices:")?;
            for (idx, voice) in self.voices.iter().enumerate() {
                let marker = if voice.selected { '*' } else { ' ' };
                writeln!(f, " {}{}) {}", marker, idx + 1, voice.label)?;
            }
        }
        writeln!(f, "Pitch: {}  Rate: {}", self.pitch, self.rate)?;
        write!(f, "[{}]", self.speak_label)?;
        if let Some(status) = &self.status {
            write!(f, "\n! {}", status)?;
        }
        Ok(())
    }
}

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::ReaderConfig;
use crate::tts::{
    default_voice, CapabilityEvent, Pitch, Rate, SpeechCapability, Utterance, UtteranceId, Voice,
};
use crate::{Error, Result};

mod state;
mod view;

pub use state::ViewState;
pub use view::{UserInput, View, VoiceOption};

/// Identifies one display of the download notice. A token only clears the notice it was issued
/// for.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct NoticeToken(u64);

/// A request to call [`Reader::expire_notice`] with the given token once the delay has elapsed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NoticeTimer {
    /// Token to pass to [`Reader::expire_notice`]
    pub token: NoticeToken,
    /// How long to wait before expiring the notice
    pub after: Duration,
}

/// Reads text aloud through a [`SpeechCapability`], and keeps the [`ViewState`] describing what
/// the user sees.
///
/// The reader is a synchronous state machine. The host feeds it user input through its operations
/// (or [`handle_input`](Self::handle_input)), capability events through
/// [`handle_event`](Self::handle_event), and notice expiries through
/// [`expire_notice`](Self::expire_notice), all from a single thread of control.
///
/// At most one utterance is active at any time. Lifecycle events are matched against the active
/// utterance's identifier, and events for any other utterance are dropped.
pub struct Reader<C: SpeechCapability> {
    config: ReaderConfig,
    capability: Option<C>,
    state: ViewState,
    active: Option<UtteranceId>,
    next_utterance: u64,
    notice: Option<NoticeToken>,
    next_notice: u64,
    timer: Option<NoticeTimer>,
    attached: bool,
}

impl<C: SpeechCapability> Reader<C> {
    /// Creates a reader over the given capability and loads its voices. Pass `None` if the host has
    /// no speech synthesis; the reader will then report [`Error::Unsupported`] for the rest of its
    /// life.
    pub fn new(config: ReaderConfig, capability: Option<C>) -> Self {
        let state = ViewState::new(config.initial_pitch(), config.initial_rate());
        let mut reader = Self {
            config,
            capability,
            state,
            active: None,
            next_utterance: 0,
            notice: None,
            next_notice: 0,
            timer: None,
            attached: false,
        };

        match reader.capability.as_mut() {
            Some(capability) => {
                capability.watch_voices(true);
                reader.attached = true;
                reader.load_voices();
            }
            None => {
                warn!("speech synthesis is not available on this host");
                reader.state.is_loading = false;
                reader.state.error = Some(Error::Unsupported);
            }
        }
        reader
    }

    /// Returns the current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Renders the current state.
    pub fn view(&self) -> View {
        View::from_state(&self.state, self.capability.is_some())
    }

    /// Returns the configuration this reader was created with.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Returns the capability, unless the host has none.
    pub fn capability(&self) -> Option<&C> {
        self.capability.as_ref()
    }

    /// Fetches the voice catalog from the capability.
    ///
    /// An empty catalog leaves the reader loading, waiting for the capability to signal that its
    /// voices changed.
    pub fn load_voices(&mut self) {
        if !self.attached {
            return;
        }
        let capability = match self.capability.as_ref() {
            Some(capability) => capability,
            None => return,
        };

        match capability.voices() {
            Ok(voices) if voices.is_empty() => {
                debug!("voice catalog is empty, waiting for the capability to report voices");
            }
            Ok(voices) => {
                info!(count = voices.len(), "loaded voice catalog");
                self.state.voices = voices;
                self.state.is_loading = false;
                self.set_error(None);
                if self.state.selected_voice().is_none() {
                    self.state.selected_voice_uri = self.default_voice().map(|v| v.uri().to_string());
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch the voice catalog");
                self.state.is_loading = false;
                self.set_error(Some(err));
            }
        }
    }

    /// Reads the current text aloud with the selected voice, pitch, and rate.
    ///
    /// Fails without submitting anything if the text is blank, if there are no voices, or if no
    /// voice can be selected. A selected voice that has disappeared from the catalog is replaced
    /// with the first voice in the catalog. Any utterance already in progress is canceled first.
    /// After [`teardown`](Self::teardown), fails with [`Error::Detached`] and leaves the state as
    /// it is.
    pub fn speak(&mut self) -> Result<UtteranceId> {
        if self.capability.is_none() {
            return self.fail(Error::Unsupported);
        }
        if !self.attached {
            return Err(Error::Detached);
        }
        if self.state.text.trim().is_empty() {
            return self.fail(Error::EmptyText);
        }
        if self.state.voices.is_empty() {
            return self.fail(Error::NoVoices);
        }
        let voice = match self.resolve_voice() {
            Some(voice) => voice,
            None => return self.fail(Error::NoVoiceSelected),
        };

        self.clear_error();
        self.cancel_active();

        self.next_utterance += 1;
        let id = UtteranceId(self.next_utterance);
        let utterance = Utterance {
            text: self.state.text.clone(),
            voice,
            pitch: self.state.pitch,
            rate: self.state.rate,
        };

        let capability = match self.capability.as_mut() {
            Some(capability) => capability,
            None => return self.fail(Error::Unsupported),
        };
        debug!(id = %id, voice = utterance.voice.uri(), "submitting utterance");
        match capability.speak(id, &utterance) {
            Ok(()) => {
                self.active = Some(id);
                Ok(id)
            }
            Err(err) => {
                warn!(id = %id, error = %err, "capability rejected the utterance");
                self.fail(err)
            }
        }
    }

    /// Stops the utterance in progress, if any. Calling this when nothing is being spoken has no
    /// effect.
    pub fn stop(&mut self) {
        self.cancel_active();
    }

    /// Stops the active utterance if there is one, then empties the text and clears the error.
    pub fn clear_text(&mut self) {
        if self.active.is_some() || self.state.is_speaking {
            self.stop();
        }
        self.state.text.clear();
        self.clear_error();
    }

    /// Speaks if the reader is idle, stops if it is speaking.
    pub fn toggle_speech(&mut self) -> Result<()> {
        if self.state.is_speaking {
            self.stop();
            Ok(())
        } else {
            self.speak().map(|_| ())
        }
    }

    /// Downloading speech is not supported. With text present, this shows a notice that clears
    /// itself once the configured delay elapses; the returned token must be passed to
    /// [`expire_notice`](Self::expire_notice) at that time. The same request is also available
    /// from [`take_timer`](Self::take_timer).
    pub fn download_speech(&mut self) -> Result<NoticeToken> {
        if self.capability.is_some() && !self.attached {
            return Err(Error::Detached);
        }
        if self.state.text.trim().is_empty() {
            return self.fail(Error::NothingToDownload);
        }

        self.set_error(Some(Error::DownloadUnsupported));
        self.next_notice += 1;
        let token = NoticeToken(self.next_notice);
        self.notice = Some(token);
        self.timer = Some(NoticeTimer {
            token,
            after: self.config.notice_timeout(),
        });
        Ok(token)
    }

    /// Clears the download notice, but only if the notice shown is the one the token was issued
    /// for. Returns whether the notice was cleared.
    pub fn expire_notice(&mut self, token: NoticeToken) -> bool {
        if self.notice != Some(token) {
            debug!(?token, "ignoring expiry of a superseded notice");
            return false;
        }
        self.set_error(None);
        true
    }

    /// Returns the pending notice timer, if any, leaving none in its place.
    pub fn take_timer(&mut self) -> Option<NoticeTimer> {
        self.timer.take()
    }

    /// Replaces the text. Clears the current error, unless it is the download notice.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.state.text = text.into();
        if self.notice.is_none() {
            self.clear_error();
        }
    }

    /// Selects the voice with the given identifier, or clears the selection.
    pub fn select_voice(&mut self, uri: Option<String>) {
        self.state.selected_voice_uri = uri;
    }

    /// Sets the pitch for future utterances.
    pub fn set_pitch<P: Into<Pitch>>(&mut self, pitch: P) {
        self.state.pitch = pitch.into();
    }

    /// Sets the rate of speech for future utterances.
    pub fn set_rate<R: Into<Rate>>(&mut self, rate: R) {
        self.state.rate = rate.into();
    }

    /// Applies an input event from one of the reader's controls. Failures are reported through the
    /// state's error.
    pub fn handle_input(&mut self, input: UserInput) {
        match input {
            UserInput::EditText(text) => self.set_text(text),
            UserInput::SelectVoice(uri) => self.select_voice(uri),
            UserInput::SetPitch(pitch) => self.set_pitch(pitch),
            UserInput::SetRate(rate) => self.set_rate(rate),
            UserInput::ToggleSpeech => {
                let _ = self.toggle_speech();
            }
            UserInput::Download => {
                let _ = self.download_speech();
            }
            UserInput::Clear => self.clear_text(),
        }
    }

    /// Applies an event emitted by the capability. Events for utterances other than the active
    /// one, and every event after [`teardown`](Self::teardown), are ignored.
    pub fn handle_event(&mut self, event: CapabilityEvent) {
        if !self.attached {
            debug!(?event, "ignoring capability event after teardown");
            return;
        }
        if let Some(id) = event.utterance_id() {
            if self.active != Some(id) {
                debug!(id = %id, "ignoring event for a superseded utterance");
                return;
            }
        }

        match event {
            CapabilityEvent::Started(id) => {
                debug!(id = %id, "utterance started");
                self.state.is_speaking = true;
            }
            CapabilityEvent::Ended(id) => {
                debug!(id = %id, "utterance ended");
                self.active = None;
                self.state.is_speaking = false;
            }
            CapabilityEvent::Failed(id, failure) => {
                warn!(id = %id, code = ?failure.raw_code(), "utterance failed");
                self.active = None;
                self.state.is_speaking = false;
                self.set_error(Some(Error::Synthesis(failure)));
            }
            CapabilityEvent::VoicesChanged => self.load_voices(),
        }
    }

    /// Stops listening to the capability and cancels the utterance in progress. The reader ignores
    /// all capability events afterwards. Called automatically when the reader is dropped.
    pub fn teardown(&mut self) {
        if !self.attached {
            return;
        }
        if self.active.is_some() || self.state.is_speaking {
            self.cancel_active();
        }
        if let Some(capability) = self.capability.as_mut() {
            capability.watch_voices(false);
        }
        self.attached = false;
        debug!("reader detached from the capability");
    }

    fn default_voice(&self) -> Option<&Voice> {
        default_voice(
            &self.state.voices,
            &self.config.primary_locale,
            &self.config.fallback_locale,
        )
    }

    fn resolve_voice(&mut self) -> Option<Voice> {
        let voice = match self.state.selected_voice_uri.as_deref() {
            Some(uri) => match self.state.selected_voice() {
                Some(voice) => voice.clone(),
                None => {
                    let first = self.state.voices.first()?.clone();
                    debug!(missing = uri, substitute = first.uri(), "selected voice is gone");
                    first
                }
            },
            None => self.default_voice()?.clone(),
        };
        self.state.selected_voice_uri = Some(voice.uri().to_string());
        Some(voice)
    }

    fn cancel_active(&mut self) {
        if let Some(capability) = self.capability.as_mut() {
            capability.cancel();
        }
        if let Some(id) = self.active.take() {
            debug!(id = %id, "canceled utterance");
        }
        self.state.is_speaking = false;
    }

    fn clear_error(&mut self) {
        if self.capability.is_some() {
            self.set_error(None);
        }
    }

    fn set_error(&mut self, error: Option<Error>) {
        self.notice = None;
        self.state.error = error;
    }

    fn fail<T>(&mut self, error: Error) -> Result<T> {
        debug!(error = %error, "operation failed");
        self.set_error(Some(error.clone()));
        Err(error)
    }
}

impl<C: SpeechCapability> Drop for Reader<C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

use crate::Result;

use super::{Utterance, UtteranceId, Voice};

mod event;

pub use event::{CapabilityEvent, EventHandler};

/// The speech synthesis service provided by the host.
///
/// A capability renders one utterance at a time and reports progress asynchronously, through the
/// [`EventHandler`] it was created with. None of its methods may block while speech is rendered.
///
/// Hosts without any speech synthesis are represented by the absence of a capability, not by an
/// implementation that always fails.
pub trait SpeechCapability {
    /// Returns the voices currently available. The list may be empty while the capability is still
    /// discovering its voices, in which case it will emit [`CapabilityEvent::VoicesChanged`] once
    /// they are known.
    fn voices(&self) -> Result<Vec<Voice>>;

    /// Enables or disables [`CapabilityEvent::VoicesChanged`] notifications.
    fn watch_voices(&mut self, _enabled: bool) {}

    /// Schedules the rendering of the given utterance. The identifier must be passed back with
    /// every lifecycle event of this utterance.
    fn speak(&mut self, id: UtteranceId, utterance: &Utterance) -> Result<()>;

    /// Stops rendering the current utterance, if any. Returns immediately; events for the canceled
    /// utterance may still be delivered afterwards.
    fn cancel(&mut self);
}

impl<C: SpeechCapability + ?Sized> SpeechCapability for Box<C> {
    fn voices(&self) -> Result<Vec<Voice>> {
        (**self).voices()
    }

    fn watch_voices(&mut self, enabled: bool) {
        (**self).watch_voices(enabled)
    }

    fn speak(&mut self, id: UtteranceId, utterance: &Utterance) -> Result<()> {
        (**self).speak(id, utterance)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}

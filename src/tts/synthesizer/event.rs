use crate::tts::{SynthesisFailure, UtteranceId};

/// An asynchronous notification from a speech capability.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CapabilityEvent {
    /// The capability started speaking the utterance with the given identifier.
    Started(UtteranceId),
    /// The capability finished speaking the utterance with the given identifier.
    Ended(UtteranceId),
    /// The utterance with the given identifier failed, was canceled, or was interrupted.
    Failed(UtteranceId, SynthesisFailure),
    /// The set of available voices changed and should be fetched again.
    VoicesChanged,
}

impl CapabilityEvent {
    /// Returns the identifier of the utterance this event belongs to, if any.
    pub fn utterance_id(&self) -> Option<UtteranceId> {
        match self {
            Self::Started(id) | Self::Ended(id) | Self::Failed(id, _) => Some(*id),
            Self::VoicesChanged => None,
        }
    }
}

/// The handler a speech capability calls for every event it emits.
///
/// Capabilities may call the handler from any thread, and may keep calling it for an utterance
/// after it has been canceled.
pub trait EventHandler: Send + Sync {
    /// Called when the capability emits an event.
    fn on_event(&self, event: CapabilityEvent);
}

impl<F: Fn(CapabilityEvent) + Send + Sync> EventHandler for F {
    fn on_event(&self, event: CapabilityEvent) {
        self(event)
    }
}

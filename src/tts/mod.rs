//! Speech capabilities: voices, utterances, lifecycle events, and the translation of engine error
//! codes into user-facing messages.

mod failure;
mod speech;
mod synthesizer;
mod voice;

pub use self::failure::{describe_error_code, ErrorCode, SynthesisFailure, UNKNOWN_FAILURE_MESSAGE};
pub use self::speech::{Pitch, Rate, Utterance, UtteranceId};
pub use self::synthesizer::{CapabilityEvent, EventHandler, SpeechCapability};
pub use self::voice::{default_voice, Voice, VoiceSelector};

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use read_aloud::tts::{SpeechCapability, Utterance, UtteranceId, Voice};
use read_aloud::{Reader, ReaderConfig, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Watch(bool),
    Speak(UtteranceId, Utterance),
    Cancel,
}

#[derive(Default)]
struct Shared {
    voices: Vec<Voice>,
    calls: Vec<Call>,
    reject_speech: bool,
}

/// A capability that records every call and never renders anything. Events are delivered by the
/// tests themselves.
#[derive(Clone, Default)]
pub struct FakeCapability {
    shared: Arc<Mutex<Shared>>,
}

impl FakeCapability {
    pub fn with_voices(voices: Vec<Voice>) -> Self {
        let fake = Self::default();
        fake.set_voices(voices);
        fake
    }

    pub fn set_voices(&self, voices: Vec<Voice>) {
        self.shared.lock().unwrap().voices = voices;
    }

    pub fn reject_speech(&self) {
        self.shared.lock().unwrap().reject_speech = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.shared.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.shared.lock().unwrap().calls.clear();
    }

    pub fn spoken(&self) -> Vec<(UtteranceId, Utterance)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Speak(id, utterance) => Some((id, utterance)),
                _ => None,
            })
            .collect()
    }
}

impl SpeechCapability for FakeCapability {
    fn voices(&self) -> Result<Vec<Voice>> {
        Ok(self.shared.lock().unwrap().voices.clone())
    }

    fn watch_voices(&mut self, enabled: bool) {
        self.shared.lock().unwrap().calls.push(Call::Watch(enabled));
    }

    fn speak(&mut self, id: UtteranceId, utterance: &Utterance) -> Result<()> {
        let mut shared = self.shared.lock().unwrap();
        if shared.reject_speech {
            return Err(read_aloud::Error::Engine("device unplugged".to_string()));
        }
        shared.calls.push(Call::Speak(id, utterance.clone()));
        Ok(())
    }

    fn cancel(&mut self) {
        self.shared.lock().unwrap().calls.push(Call::Cancel);
    }
}

pub fn english() -> Voice {
    Voice::new("v1", "Samantha", "en-US")
}

pub fn korean() -> Voice {
    Voice::new("v2", "Yuna", "ko-KR")
}

pub fn german() -> Voice {
    Voice::new("v3", "Anna", "de-DE")
}

/// Creates a reader over a fake capability with the given voices, keeping a handle to the fake.
pub fn reader_with(voices: Vec<Voice>) -> (Reader<FakeCapability>, FakeCapability) {
    let fake = FakeCapability::with_voices(voices);
    let reader = Reader::new(ReaderConfig::default(), Some(fake.clone()));
    (reader, fake)
}

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use ::tokio::process::Command;
use ::tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::tts::{
    CapabilityEvent, ErrorCode, EventHandler, Pitch, Rate, SpeechCapability, Utterance,
    UtteranceId, Voice,
};
use crate::{Error, Result};

const BIN_VAR: &str = "ESPEAK_BIN";
const NORMAL_WORDS_PER_MINUTE: f32 = 175.0;
const NORMAL_PITCH: f32 = 50.0;
const MAX_PITCH: u32 = 99;

#[derive(Default)]
struct Catalog {
    voices: Vec<Voice>,
    error: Option<Error>,
}

/// A speech capability that renders utterances with the `espeak-ng` command-line synthesizer,
/// one process per utterance.
#[cfg_attr(docsrs, doc(cfg(feature = "espeak")))]
pub struct EspeakCapability {
    bin: PathBuf,
    handler: Arc<dyn EventHandler>,
    catalog: Arc<Mutex<Catalog>>,
    watching: Arc<AtomicBool>,
    current: Option<oneshot::Sender<()>>,
}

impl EspeakCapability {
    /// Looks for the synthesizer binary in `ESPEAK_BIN`, then for `espeak-ng` and `espeak` on the
    /// `PATH`. Returns `None` if there is none, i.e. if the host has no speech capability.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn detect<E: EventHandler + 'static>(handler: E) -> Option<Self> {
        let bin = find_binary()?;
        info!(bin = ?bin, "detected espeak-ng binary");
        Some(Self::with_binary(bin, handler))
    }

    /// Creates a capability that runs the given binary. The voice catalog is fetched in the
    /// background, and the handler receives [`CapabilityEvent::VoicesChanged`] once it is known.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_binary<P, E>(bin: P, handler: E) -> Self
    where
        P: Into<PathBuf>,
        E: EventHandler + 'static,
    {
        let capability = Self {
            bin: bin.into(),
            handler: Arc::new(handler),
            catalog: Arc::new(Mutex::new(Catalog::default())),
            watching: Arc::new(AtomicBool::new(false)),
            current: None,
        };
        capability.fetch_voices();
        capability
    }

    fn fetch_voices(&self) {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("--voices").stdin(Stdio::null()).stderr(Stdio::null());
        let catalog = self.catalog.clone();
        let watching = self.watching.clone();
        let handler = self.handler.clone();

        ::tokio::spawn(async move {
            let fetched = match cmd.output().await {
                Ok(output) if output.status.success() => {
                    Ok(parse_voice_list(&String::from_utf8_lossy(&output.stdout)))
                }
                Ok(output) => {
                    Err(Error::Engine(format!("voice listing exited with {}", output.status)))
                }
                Err(err) => Err(Error::from(err)),
            };

            {
                let mut catalog = catalog.lock().unwrap_or_else(PoisonError::into_inner);
                match fetched {
                    Ok(voices) => {
                        debug!(count = voices.len(), "fetched espeak-ng voices");
                        catalog.voices = voices;
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to list espeak-ng voices");
                        catalog.error = Some(err);
                    }
                }
            }

            if watching.load(Ordering::Acquire) {
                handler.on_event(CapabilityEvent::VoicesChanged);
            }
        });
    }
}

impl SpeechCapability for EspeakCapability {
    fn voices(&self) -> Result<Vec<Voice>> {
        let catalog = self.catalog.lock().unwrap_or_else(PoisonError::into_inner);
        match &catalog.error {
            Some(err) => Err(err.clone()),
            None => Ok(catalog.voices.clone()),
        }
    }

    fn watch_voices(&mut self, enabled: bool) {
        self.watching.store(enabled, Ordering::Release);
    }

    fn speak(&mut self, id: UtteranceId, utterance: &Utterance) -> Result<()> {
        self.cancel();

        let mut child = Command::new(&self.bin)
            .arg("-v")
            .arg(utterance.voice.uri())
            .arg("-p")
            .arg(pitch_arg(utterance.pitch).to_string())
            .arg("-s")
            .arg(words_per_minute(utterance.rate).to_string())
            .arg("--")
            .arg(&utterance.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        let (tx, rx) = oneshot::channel();
        self.current = Some(tx);
        let handler = self.handler.clone();

        ::tokio::spawn(async move {
            handler.on_event(CapabilityEvent::Started(id));
            let status = ::tokio::select! {
                status = child.wait() => Some(status),
                _ = rx => None,
            };
            let event = match status {
                Some(Ok(status)) if status.success() => CapabilityEvent::Ended(id),
                Some(Ok(status)) => {
                    warn!(id = %id, %status, "espeak-ng exited with an error");
                    CapabilityEvent::Failed(id, ErrorCode::SynthesisFailed.into())
                }
                Some(Err(err)) => {
                    warn!(id = %id, error = %err, "failed to wait for espeak-ng");
                    CapabilityEvent::Failed(id, ErrorCode::SynthesisFailed.into())
                }
                None => {
                    if let Err(err) = child.kill().await {
                        warn!(id = %id, error = %err, "failed to stop espeak-ng");
                    }
                    CapabilityEvent::Failed(id, ErrorCode::Canceled.into())
                }
            };
            handler.on_event(event);
        });
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(tx) = self.current.take() {
            let _ = tx.send(());
        }
    }
}

/// Maps a pitch onto espeak-ng's `-p` scale, where 50 is normal.
pub fn pitch_arg(pitch: Pitch) -> u32 {
    ((pitch.value() * NORMAL_PITCH).round() as u32).min(MAX_PITCH)
}

/// Maps a rate onto espeak-ng's `-s` scale, in words per minute.
pub fn words_per_minute(rate: Rate) -> u32 {
    (rate.value() * NORMAL_WORDS_PER_MINUTE).round() as u32
}

/// Parses the output of `espeak-ng --voices` into a voice catalog.
///
/// Each voice is identified by its voice file, which `espeak-ng -v` accepts. Lines that do not
/// have the expected columns, including the header, are skipped.
pub fn parse_voice_list(listing: &str) -> Vec<Voice> {
    listing
        .lines()
        .filter_map(|line| {
            let mut columns = line.split_whitespace();
            let priority = columns.next()?;
            priority.parse::<u32>().ok()?;
            let language = columns.next()?;
            let _age_gender = columns.next()?;
            let name = columns.next()?;
            let file = columns.next()?;
            Some(Voice::new(file, name.replace('_', " "), language))
        })
        .collect()
}

fn find_binary() -> Option<PathBuf> {
    if let Ok(bin) = std::env::var(BIN_VAR) {
        let bin = PathBuf::from(bin);
        if bin.exists() {
            return Some(bin);
        }
    }
    find_on_path("espeak-ng").or_else(|| find_on_path("espeak"))
}

fn find_on_path(bin: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(bin))
        .find(|candidate| is_file(candidate))
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|meta| meta.is_file()).unwrap_or(false)
}

//! Support for driving a reader on Tokio.

#[cfg(feature = "espeak")]
mod espeak;
mod reader;

#[cfg(feature = "espeak")]
pub use espeak::{parse_voice_list, pitch_arg, words_per_minute, EspeakCapability};
pub use reader::{reader_channel, LoopEvent, ReaderEvents, ReaderHandle};

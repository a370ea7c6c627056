#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A read-aloud controller over a host-provided speech synthesis capability.
//!
//! # Features
//!
//! The goal of this crate is to take care of everything between a text box and a speech engine:
//! choosing a voice, validating the request, keeping a single utterance in flight, and turning the
//! engine's asynchronous events and error codes into something a user can read. It does not
//! synthesize speech itself, and it does not draw anything on the screen.
//!
//! ## Speech capabilities
//!
//! The [tts] module defines the [`SpeechCapability`](tts::SpeechCapability) trait a host
//! implements to expose its speech engine: enumerating voices, speaking an
//! [`Utterance`](tts::Utterance), and canceling it. Capabilities report progress through the
//! [`EventHandler`](tts::EventHandler) they were created with, tagging each event with the
//! identifier of the utterance it belongs to.
//!
//! The module also provides the translation of the engine's error codes into user-facing messages
//! (see [`describe_error_code`](tts::describe_error_code)).
//!
//! ## The reader
//!
//! A [`Reader`] owns the [`ViewState`]: the text, the voice catalog and selection, pitch and rate,
//! and the flags and message shown to the user. Every change goes through one of its operations,
//! such as [`speak`](Reader::speak), [`stop`](Reader::stop), or
//! [`handle_event`](Reader::handle_event). The state can be rendered into a [`View`] describing
//! what each control shows.
//!
//! The reader is synchronous and never sleeps. The one delayed action it needs, clearing the
//! "download not supported" notice, is handed to the host as a [`NoticeTimer`].
//!
//! ## Tokio
//!
//! With the `tokio-rt` feature, the [tokio] module provides an event loop that drives a reader
//! from a single channel and runs its timers. With the `espeak` feature, it also provides a
//! capability backed by the `espeak-ng` command-line synthesizer.

mod config;
mod error;
mod reader;
pub mod tts;

#[cfg(feature = "tokio-rt")]
pub mod tokio;

pub use config::ReaderConfig;
pub use error::Error;
pub use reader::{NoticeTimer, NoticeToken, Reader, UserInput, View, ViewState, VoiceOption};

/// The type returned by the reader and its speech capabilities.
pub type Result<T> = std::result::Result<T, Error>;

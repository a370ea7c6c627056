use ::tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::reader::{NoticeTimer, NoticeToken, Reader, UserInput, View};
use crate::tts::{CapabilityEvent, EventHandler, SpeechCapability};

/// A message consumed by the reader's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopEvent {
    /// Input from one of the reader's controls
    Input(UserInput),
    /// An event emitted by the speech capability
    Capability(CapabilityEvent),
    /// The delay of the download notice with the given token elapsed
    NoticeExpired(NoticeToken),
    /// The reader is no longer displayed
    Shutdown,
}

/// The sending half of the reader's event loop.
///
/// A handle is also an [`EventHandler`], so it can be given to a speech capability to route the
/// capability's events into the loop.
#[cfg_attr(docsrs, doc(cfg(feature = "tokio-rt")))]
#[derive(Clone)]
pub struct ReaderHandle {
    tx: UnboundedSender<LoopEvent>,
}

impl ReaderHandle {
    /// Posts user input to the loop. Returns `false` if the loop has ended.
    pub fn send_input(&self, input: UserInput) -> bool {
        self.tx.send(LoopEvent::Input(input)).is_ok()
    }

    /// Asks the loop to tear the reader down and return it.
    pub fn shutdown(&self) {
        let _ = self.tx.send(LoopEvent::Shutdown);
    }
}

impl EventHandler for ReaderHandle {
    fn on_event(&self, event: CapabilityEvent) {
        let _ = self.tx.send(LoopEvent::Capability(event));
    }
}

/// The receiving half of the reader's event loop.
#[cfg_attr(docsrs, doc(cfg(feature = "tokio-rt")))]
pub struct ReaderEvents {
    rx: UnboundedReceiver<LoopEvent>,
    tx: UnboundedSender<LoopEvent>,
}

/// Creates the channel that feeds a reader's event loop.
///
/// Create the channel first, give a clone of the handle to the speech capability, then create the
/// [`Reader`] and pass it to [`ReaderEvents::run`].
#[cfg_attr(docsrs, doc(cfg(feature = "tokio-rt")))]
pub fn reader_channel() -> (ReaderHandle, ReaderEvents) {
    let (tx, rx) = unbounded_channel();
    (
        ReaderHandle {
            tx: tx.clone(),
        },
        ReaderEvents {
            rx,
            tx,
        },
    )
}

impl ReaderEvents {
    /// Applies every event posted to the loop to the reader, one at a time, calling `render` with
    /// the resulting view after each of them (and once before the first).
    ///
    /// Notice timers requested by the reader are run on the Tokio runtime and post their expiry
    /// back to the loop. The loop ends when it receives [`LoopEvent::Shutdown`]; the reader is then
    /// torn down and returned.
    pub async fn run<C, F>(mut self, mut reader: Reader<C>, mut render: F) -> Reader<C>
    where
        C: SpeechCapability,
        F: FnMut(&View),
    {
        render(&reader.view());
        while let Some(event) = self.rx.recv().await {
            match event {
                LoopEvent::Input(input) => reader.handle_input(input),
                LoopEvent::Capability(event) => reader.handle_event(event),
                LoopEvent::NoticeExpired(token) => {
                    reader.expire_notice(token);
                }
                LoopEvent::Shutdown => break,
            }
            if let Some(timer) = reader.take_timer() {
                self.schedule(timer);
            }
            render(&reader.view());
        }

        reader.teardown();
        reader
    }

    fn schedule(&self, timer: NoticeTimer) {
        debug!(token = ?timer.token, after = ?timer.after, "scheduling notice expiry");
        let tx = self.tx.clone();
        ::tokio::spawn(async move {
            ::tokio::time::sleep(timer.after).await;
            let _ = tx.send(LoopEvent::NoticeExpired(timer.token));
        });
    }
}

//! Background reader that turns the input stream into framed messages.

use crate::{LineFramer, Message};

use std::{
    io::{self, ErrorKind, Read},
    sync::mpsc,
    thread::{self, JoinHandle},
};

use tracing::{debug, info, instrument, warn};

/// Size of a single read from the input stream.
pub const READ_CHUNK_SIZE: usize = 4096;

/// What the pump hands to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum PumpEvent {
    /// A complete, parsed message.
    Message(Message),
    /// The input stream closed or failed. Always the last event.
    EndOfStream,
}

/// Destination of pump events, typically an event loop proxy.
///
/// `post` transfers ownership of the event. Returning `false` means the
/// consumer is gone and the pump should stop.
pub trait PumpSink: Send + 'static {
    /// Deliver one event to the UI thread.
    fn post(&self, event: PumpEvent) -> bool;
}

impl PumpSink for mpsc::Sender<PumpEvent> {
    fn post(&self, event: PumpEvent) -> bool {
        self.send(event).is_ok()
    }
}

/// Owns the input stream and the [`LineFramer`], never the tray state.
pub struct InputPump<R, S> {
    reader: R,
    sink: S,
    framer: LineFramer,
}

impl<R, S> InputPump<R, S>
where
    R: Read + Send + 'static,
    S: PumpSink,
{
    /// Pump `reader` into `sink`.
    pub fn new(reader: R, sink: S) -> Self {
        Self {
            reader,
            sink,
            framer: LineFramer::new(),
        }
    }

    /// Run the pump on a dedicated thread.
    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("trayline-input".to_string())
            .spawn(move || self.run())
    }

    /// Read until end of stream, posting each message as soon as it is framed.
    ///
    /// A read error is treated like end of stream. [`PumpEvent::EndOfStream`]
    /// is posted exactly once on the way out unless the consumer is gone.
    #[instrument(skip(self))]
    pub fn run(mut self) {
        let mut chunk = [0u8; READ_CHUNK_SIZE];

        loop {
            match self.reader.read(&mut chunk) {
                Ok(0) => {
                    info!("Input stream closed");
                    break;
                }
                Ok(read) => {
                    for message in self.framer.feed(&chunk[..read]) {
                        if !self.sink.post(PumpEvent::Message(message)) {
                            debug!("Consumer gone, stopping input pump");
                            return;
                        }
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "Input stream read failed, treating as closed");
                    break;
                }
            }
        }

        let pending = self.framer.pending();
        if pending > 0 {
            debug!(pending, "Discarding unterminated trailing input");
        }

        let _ = self.sink.post(PumpEvent::EndOfStream);
    }
}

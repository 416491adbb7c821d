//! Serialized, line-atomic writes of outbound events.

use crate::Event;

use std::{
    fmt,
    io::{self, Write},
    sync::{Arc, Mutex},
};

use tracing::{debug, error, warn};

/// Writes one [`Event`] per line to the parent process.
///
/// Cloning shares the same output lock, so clones on different threads never
/// interleave bytes within a line. The lock is held only for the write and
/// flush of an already serialized line. Write failures are logged and
/// swallowed: a vanished parent is not a reason to bring down the tray.
#[derive(Clone)]
pub struct Emitter {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Emitter {
    /// Emit to an arbitrary writer.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Emit to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Serialize `event` and write it as a single flushed line.
    pub fn emit(&self, event: &Event) {
        let mut line = match serde_json::to_vec(event) {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, ?event, "Failed to serialize event");
                return;
            }
        };
        line.push(b'\n');

        // A writer that panicked mid-line already lost that line; the next
        // one still starts on a fresh line, so keep going.
        let mut sink = self.sink.lock().unwrap_or_else(|e| {
            warn!("Output lock poisoned, recovering: {}", e);
            e.into_inner()
        });

        if let Err(e) = sink.write_all(&line).and_then(|()| sink.flush()) {
            debug!(error = %e, ?event, "Failed to write event");
        }
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter").finish_non_exhaustive()
    }
}

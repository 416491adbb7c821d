//! Trayline Core Library
//!
//! Protocol engine for a system tray helper process driven over
//! newline-delimited JSON on stdin/stdout.
//!
//! The parent sends commands (`setMenu`, `setIcon`, `setTooltip`, `quit`);
//! the helper answers with events (`ready`, `menuRequested`, `clicked`).
//! This crate owns framing, event output, menu construction and dispatch.
//! Native rendering lives behind [`TrayBackend`].
//!
//! # Example
//!
//! ```no_run
//! use trayline_core::{Emitter, InputPump, PumpEvent, StartupOptions, TrayBackend, TraySession};
//!
//! use std::sync::mpsc;
//!
//! fn run<B: TrayBackend>(backend: B) -> trayline_core::CoreResult<()> {
//!     let mut session = TraySession::new(backend, Emitter::stdout());
//!     session.start(StartupOptions::default())?;
//!
//!     let (tx, rx) = mpsc::channel();
//!     let _ = InputPump::new(std::io::stdin(), tx).spawn();
//!
//!     while let Ok(PumpEvent::Message(message)) = rx.recv() {
//!         if session.apply(message) == trayline_core::Flow::Exit {
//!             return Ok(());
//!         }
//!     }
//!     session.shutdown(trayline_core::ShutdownReason::EndOfStream);
//!     Ok(())
//! }
//! ```

pub mod codec;
mod error;
mod menu;
mod protocol;
mod pump;
mod session;

pub use {
    error::CoreError,
    error::Result as CoreResult,
    menu::{DispatchId, IdentifierRegistry, ItemKey, MAX_TRACKED_ITEMS, MenuEntry, MenuNode, MenuTree},
    protocol::{Command, Emitter, Event, LineFramer, Message},
    pump::{InputPump, PumpEvent, PumpSink, READ_CHUNK_SIZE},
    session::{
        DEFAULT_TOOLTIP, Flow, IconAsset, MAX_TOOLTIP_UTF16_UNITS, SessionState,
        ShutdownReason, StartupOptions, TrayBackend, TraySession, truncate_tooltip,
    },
};

#[cfg(test)]
mod tests;

//! Newline framing for the inbound byte stream.

use crate::Message;

use tracing::{debug, trace};

/// Splits a byte stream into `\n`-terminated records and parses each one.
///
/// Bytes after the last newline are carried over to the next [`feed`] call,
/// so a message may arrive split across any number of reads. Records are
/// handed to the JSON parser verbatim: a trailing `\r` is not stripped.
///
/// [`feed`]: LineFramer::feed
#[derive(Debug, Default)]
pub struct LineFramer {
    carry: Vec<u8>,
    /// Prefix of `carry` already known to contain no newline.
    scanned: usize,
}

impl LineFramer {
    /// Create a framer with an empty carry buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `chunk` and return every message completed by it, in order.
    ///
    /// Lines that are empty or fail to parse are dropped.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Message> {
        self.carry.extend_from_slice(chunk);

        let mut messages = Vec::new();
        let mut line_start = 0;
        let mut search_from = self.scanned;

        while let Some(offset) = self.carry[search_from..].iter().position(|&b| b == b'\n') {
            let line_end = search_from + offset;
            if let Some(message) = parse_line(&self.carry[line_start..line_end]) {
                messages.push(message);
            }
            line_start = line_end + 1;
            search_from = line_start;
        }

        self.carry.drain(..line_start);
        self.scanned = self.carry.len();

        messages
    }

    /// Number of buffered bytes still waiting for a newline.
    pub fn pending(&self) -> usize {
        self.carry.len()
    }
}

fn parse_line(line: &[u8]) -> Option<Message> {
    if line.is_empty() {
        trace!("Skipping empty line");
        return None;
    }

    match serde_json::from_slice::<Message>(line) {
        Ok(message) => Some(message),
        Err(e) => {
            debug!(error = %e, line_len = line.len(), "Dropping malformed line");
            None
        }
    }
}

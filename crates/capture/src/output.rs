// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture window around a single demonstration run.

use std::borrow::Cow;
use std::io::Write;
use tracing::debug;

/// Bytes a demonstration wrote during one capture window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    bytes: Vec<u8>,
}

impl CapturedOutput {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Run `action` with a fresh in-memory sink as its standard output.
///
/// The sink lives only for the duration of the call: it is dropped on
/// every exit path, including an unwinding panic, so nothing leaks into
/// the next capture window. The action's own result is returned untouched
/// alongside whatever it managed to write.
pub fn capture<F, T>(action: F) -> (CapturedOutput, T)
where
    F: FnOnce(&mut dyn Write) -> T,
{
    let mut sink: Vec<u8> = Vec::new();
    debug!("capture window opened");
    let result = action(&mut sink);
    debug!(bytes = sink.len(), "capture window closed");
    (CapturedOutput::new(sink), result)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped capture of a console's output.

use crate::console::{Console, Sink, SinkId};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Errors reading captured output
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("captured output is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),
}

/// Shared byte buffer installed as a console sink while capturing.
#[derive(Clone, Default)]
pub(crate) struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    pub(crate) fn snapshot(&self) -> Vec<u8> {
        self.0.lock().clone()
    }

    fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.0.lock())
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Scoped ownership of a [`Console`]'s sink.
///
/// While the guard lives, everything written to the console lands in an
/// in-memory buffer. The previous sink is put back by [`CaptureGuard::finish`]
/// or, on every other exit path including unwinding, by `Drop`.
///
/// Guards may end in any order. Ending a guard also ends every capture started
/// after it, so the console always returns to the sink that was active before
/// the guard began.
#[must_use = "dropping the guard ends the capture immediately"]
pub struct CaptureGuard<'a> {
    console: &'a Console,
    id: SinkId,
    saved: Option<Sink>,
    buffer: Buffer,
}

impl<'a> CaptureGuard<'a> {
    pub(crate) fn install(console: &'a Console) -> Self {
        let buffer = Buffer::default();
        let sink = Sink::new(buffer.clone());
        let id = sink.id;
        let saved = console.begin_capture(sink);
        Self {
            console,
            id,
            saved: Some(saved),
            buffer,
        }
    }

    /// Bytes captured so far, without ending the capture.
    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.snapshot()
    }

    /// Restore the saved sink and return everything captured.
    pub fn finish(mut self) -> Captured {
        self.restore();
        Captured {
            bytes: self.buffer.take(),
        }
    }

    fn restore(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.console.end_capture(self.id, saved);
        }
    }
}

impl Drop for CaptureGuard<'_> {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Output recorded by a finished capture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Captured {
    bytes: Vec<u8>,
}

impl Captured {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the captured output as text.
    pub fn to_text(&self) -> Result<&str, CaptureError> {
        Ok(std::str::from_utf8(&self.bytes)?)
    }

    /// Convert the captured output into an owned string.
    pub fn into_text(self) -> Result<String, CaptureError> {
        String::from_utf8(self.bytes).map_err(|e| CaptureError::NotUtf8(e.utf8_error()))
    }
}

/// Run `f` with `console` redirected into a buffer.
///
/// The original sink is restored before this returns, whether `f` succeeds,
/// fails or panics. Errors from `f` are passed through unchanged.
pub fn capture<T, E, F>(console: &Console, f: F) -> Result<(T, Captured), E>
where
    F: FnOnce(&Console) -> Result<T, E>,
{
    let guard = console.capture();
    let value = f(console)?;
    Ok((value, guard.finish()))
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;

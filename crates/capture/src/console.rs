// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console handle with a replaceable sink.

use crate::guard::CaptureGuard;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SINK_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a sink installed in a [`Console`].
///
/// Every installed sink gets a fresh id, so comparing ids tells whether the
/// sink active now is the same one that was active earlier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SinkId(u64);

impl SinkId {
    fn next() -> Self {
        Self(NEXT_SINK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sink#{}", self.0)
    }
}

pub(crate) struct Sink {
    pub(crate) id: SinkId,
    pub(crate) writer: Box<dyn Write + Send>,
}

impl Sink {
    pub(crate) fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            id: SinkId::next(),
            writer: Box::new(writer),
        }
    }
}

struct State {
    sink: Sink,
    /// Sinks installed by live captures, oldest first.
    captures: Vec<SinkId>,
}

/// Output handle that forwards writes to its active sink.
pub struct Console {
    state: Mutex<State>,
}

impl Console {
    /// Console writing to the process stdout.
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Console writing to `writer`.
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            state: Mutex::new(State {
                sink: Sink::new(writer),
                captures: Vec::new(),
            }),
        }
    }

    /// Id of the sink currently receiving writes.
    pub fn active_sink(&self) -> SinkId {
        self.state.lock().sink.id
    }

    /// Redirect this console into a fresh in-memory buffer until the returned
    /// guard is finished or dropped.
    pub fn capture(&self) -> CaptureGuard<'_> {
        CaptureGuard::install(self)
    }

    /// Install a capture sink, returning the sink it replaced.
    pub(crate) fn begin_capture(&self, sink: Sink) -> Sink {
        let mut state = self.state.lock();
        state.captures.push(sink.id);
        std::mem::replace(&mut state.sink, sink)
    }

    /// End the capture that installed `id`, putting `saved` back.
    ///
    /// Captures started after `id` end with it. Returns false, leaving the
    /// console untouched, when `id` was already ended that way.
    pub(crate) fn end_capture(&self, id: SinkId, saved: Sink) -> bool {
        let mut state = self.state.lock();
        let Some(depth) = state.captures.iter().position(|c| *c == id) else {
            return false;
        };
        state.captures.truncate(depth);
        let mut ended = std::mem::replace(&mut state.sink, saved);
        // Capture buffers never fail to flush.
        let _ = ended.writer.flush();
        true
    }

    /// Number of captures currently redirecting this console.
    pub fn capture_depth(&self) -> usize {
        self.state.lock().captures.len()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Console")
            .field("active_sink", &state.sink.id)
            .field("capture_depth", &state.captures.len())
            .finish()
    }
}

impl Write for &Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.state.lock().sink.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.state.lock().sink.writer.flush()
    }
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.state.get_mut().sink.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.state.get_mut().sink.writer.flush()
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;

//! Global stdout stream state.
//!
//! The safe model of the stream lives in `backslant-core`; this module owns
//! the descriptor. One process-global stream for fd 1, guarded by a mutex so
//! concurrent `_putchar`/`print_diagonal` calls serialize instead of
//! interleaving within a byte sequence.

use std::sync::OnceLock;

use backslant_core::sink::CharSink;
use backslant_core::stream::{BUFSIZ, BufMode, StreamBuffer};
use parking_lot::Mutex;

use crate::config;

/// Buffered output stream over a file descriptor.
///
/// A failed descriptor write latches the error state; every later write
/// reports failure without touching the descriptor again. There is no
/// `clearerr` surface.
pub struct StdoutStream {
    fd: i32,
    buffer: StreamBuffer,
    error: bool,
}

impl StdoutStream {
    /// Wrap an existing descriptor with the given buffering mode.
    pub fn with_fd(fd: i32, mode: BufMode) -> Self {
        Self {
            fd,
            buffer: StreamBuffer::new(mode, BUFSIZ),
            error: false,
        }
    }

    /// Whether a descriptor write has failed.
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Write one byte through the buffer, flushing to the descriptor as the
    /// buffering mode requires. Returns `false` once the stream has failed.
    pub fn write_byte(&mut self, byte: u8) -> bool {
        if self.error {
            return false;
        }
        let flush = self.buffer.write(&[byte]);
        if flush.is_empty() {
            return true;
        }
        if write_all(self.fd, &flush) {
            true
        } else {
            self.error = true;
            false
        }
    }

    /// Force out any buffered bytes.
    pub fn flush(&mut self) -> bool {
        if self.error {
            return false;
        }
        let pending = self.buffer.take_pending();
        if pending.is_empty() || write_all(self.fd, &pending) {
            true
        } else {
            self.error = true;
            false
        }
    }
}

impl CharSink for StdoutStream {
    fn put(&mut self, byte: u8) {
        // The drawing contract never inspects the primitive's result; a
        // descriptor failure is observable only through the error latch.
        let _ = self.write_byte(byte);
    }
}

fn write_all(fd: i32, mut data: &[u8]) -> bool {
    while !data.is_empty() {
        let rc = unsafe { libc::write(fd, data.as_ptr().cast(), data.len()) };
        if rc <= 0 {
            return false;
        }
        data = &data[rc as usize..];
    }
    true
}

/// The process-global stdout stream, created on first use with the
/// configured buffering mode.
pub fn stdout() -> &'static Mutex<StdoutStream> {
    static STDOUT: OnceLock<Mutex<StdoutStream>> = OnceLock::new();
    STDOUT.get_or_init(|| {
        Mutex::new(StdoutStream::with_fd(
            libc::STDOUT_FILENO,
            config::stdout_mode(),
        ))
    })
}

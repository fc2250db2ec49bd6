//! Write-side buffered output engine.
//!
//! POSIX stdio write buffering in three modes: fully-buffered (_IOFBF),
//! line-buffered (_IOLBF), and unbuffered (_IONBF).
//!
//! Reference: POSIX.1-2024 setvbuf, ISO C11 7.21.3
//!
//! The buffer is pure state: `write` returns the bytes the caller must push
//! to the underlying descriptor now, and retains the rest. Mode changes are
//! rejected once I/O has occurred (POSIX: setvbuf must precede any I/O).
//! Only the write path exists here; this library never reads.

/// Default buffer size (POSIX BUFSIZ).
pub const BUFSIZ: usize = 8192;

/// Buffering mode constants matching POSIX `_IOFBF`, `_IOLBF`, `_IONBF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufMode {
    /// Fully buffered: flush when the buffer is full.
    Full,
    /// Line buffered: flush through the last newline written.
    Line,
    /// Unbuffered: every write goes straight through.
    None,
}

/// POSIX constant values for the setvbuf mode argument.
pub const IOFBF: i32 = 0;
pub const IOLBF: i32 = 1;
pub const IONBF: i32 = 2;

impl BufMode {
    /// Convert from the POSIX integer constant.
    pub fn from_posix(mode: i32) -> Option<BufMode> {
        match mode {
            IOFBF => Some(BufMode::Full),
            IOLBF => Some(BufMode::Line),
            IONBF => Some(BufMode::None),
            _ => Option::None,
        }
    }
}

/// Write-side stream buffer.
///
/// Invariant: `buf.len() <= cap` between calls (pending bytes never exceed
/// the configured capacity).
#[derive(Debug)]
pub struct StreamBuffer {
    /// Bytes accepted but not yet handed back for flushing.
    buf: Vec<u8>,
    /// Configured capacity (0 when unbuffered).
    cap: usize,
    /// Buffering mode.
    mode: BufMode,
    /// Whether any write has occurred (disables set_mode per POSIX).
    io_started: bool,
}

impl StreamBuffer {
    /// Create a new buffer with the given mode and capacity.
    pub fn new(mode: BufMode, capacity: usize) -> Self {
        let cap = if matches!(mode, BufMode::None) {
            0
        } else {
            capacity.max(1)
        };
        Self {
            buf: Vec::with_capacity(cap),
            cap,
            mode,
            io_started: false,
        }
    }

    /// Fully-buffered with default BUFSIZ.
    pub fn default_full() -> Self {
        Self::new(BufMode::Full, BUFSIZ)
    }

    /// Line-buffered with default BUFSIZ.
    pub fn default_line() -> Self {
        Self::new(BufMode::Line, BUFSIZ)
    }

    /// Unbuffered (zero-capacity).
    pub fn unbuffered() -> Self {
        Self::new(BufMode::None, 0)
    }

    /// Current buffering mode.
    pub fn mode(&self) -> BufMode {
        self.mode
    }

    /// Configured capacity.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Change buffering mode and capacity.
    ///
    /// Returns `false` if I/O has already occurred (POSIX disallows this).
    pub fn set_mode(&mut self, mode: BufMode, size: usize) -> bool {
        if self.io_started {
            return false;
        }
        self.mode = mode;
        self.cap = if matches!(mode, BufMode::None) {
            0
        } else {
            size.max(1)
        };
        self.buf = Vec::with_capacity(self.cap);
        true
    }

    /// Accept bytes. Returns everything the caller must flush to the
    /// descriptor now; an empty return means the buffer absorbed the write.
    pub fn write(&mut self, data: &[u8]) -> Vec<u8> {
        self.io_started = true;
        match self.mode {
            BufMode::None => data.to_vec(),
            BufMode::Full => self.write_full(data),
            BufMode::Line => self.write_line(data),
        }
    }

    /// Bytes accepted but not yet flushed.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    /// Drain and return all pending bytes (explicit flush).
    pub fn take_pending(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }

    fn write_full(&mut self, data: &[u8]) -> Vec<u8> {
        if self.buf.len() + data.len() <= self.cap {
            self.buf.extend_from_slice(data);
            return Vec::new();
        }
        // Overflow: hand back everything pending plus the new bytes.
        let mut flush = std::mem::take(&mut self.buf);
        flush.extend_from_slice(data);
        self.buf.reserve(self.cap);
        flush
    }

    fn write_line(&mut self, data: &[u8]) -> Vec<u8> {
        let Some(nl_pos) = data.iter().rposition(|&b| b == b'\n') else {
            // No newline: behave like the full-buffer path.
            return self.write_full(data);
        };

        // Flush pending bytes plus everything through the last newline.
        let mut flush = std::mem::take(&mut self.buf);
        flush.extend_from_slice(&data[..=nl_pos]);

        // Retain the tail after the newline; if it alone exceeds capacity
        // it goes straight into the flush as well.
        let tail = &data[nl_pos + 1..];
        if tail.len() <= self.cap {
            self.buf.reserve(self.cap);
            self.buf.extend_from_slice(tail);
        } else {
            flush.extend_from_slice(tail);
        }
        flush
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Diagonal line drawing.
//!
//! Clean-room implementation of the classic `print_diagonal` routine: `n`
//! rows, row `i` (1-indexed) carrying `i - 1` spaces, one backslash, and a
//! newline. Non-positive `n` degenerates to a single newline.
//!
//! The routine draws byte-by-byte through [`CharSink`]; the emission order is
//! the entire contract, so no row is assembled ahead of time.

use crate::sink::{CaptureSink, CharSink};

/// Draw a diagonal of `n` backslash rows into `sink`.
///
/// For `n <= 0` emits exactly one newline. Deterministic for every `i32`;
/// output grows as O(n²) bytes and the caller owns any size concerns.
pub fn draw_diagonal<S: CharSink>(sink: &mut S, n: i32) {
    if n <= 0 {
        sink.put(b'\n');
        return;
    }
    for col in 1..=n {
        for _ in 1..col {
            sink.put(b' ');
        }
        sink.put(b'\\');
        sink.put(b'\n');
    }
}

/// Exact number of bytes `draw_diagonal` emits for `n`.
///
/// Row `i` carries `i` content bytes plus its newline, so positive `n`
/// totals `n * (n + 1) / 2 + n`; the degenerate branch emits one byte.
#[inline]
pub fn diagonal_len(n: i32) -> usize {
    if n <= 0 {
        return 1;
    }
    let n = n as usize;
    n * (n + 1) / 2 + n
}

/// Render the diagonal for `n` into a fresh byte vector.
pub fn render_diagonal(n: i32) -> Vec<u8> {
    let mut sink = CaptureSink::with_capacity(diagonal_len(n));
    draw_diagonal(&mut sink, n);
    sink.into_bytes()
}

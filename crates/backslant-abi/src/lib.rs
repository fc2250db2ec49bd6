//! # backslant-abi
//!
//! ABI-compatible extern "C" boundary for the diagonal drawing surface.
//!
//! This crate produces a `cdylib` exposing the original exercise's two C
//! symbols, backed by the safe implementations in `backslant-core`:
//!
//! ```text
//! C caller -> ABI entry (this crate) -> locked stdout stream -> core draw
//! ```
//!
//! - `int _putchar(char c)` — single-character output primitive. Returns the
//!   number of bytes written (1) on success, -1 once the stream has failed.
//! - `void print_diagonal(int n)` — draws `n` backslash rows; a single
//!   newline for `n <= 0`.

pub mod config;
pub mod stdout;

use std::ffi::{c_char, c_int};

use backslant_core::draw_diagonal;

use crate::stdout::stdout;

/// The `_putchar` output primitive.
///
/// Writes one character to stdout through the global buffered stream.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _putchar(c: c_char) -> c_int {
    let mut stream = stdout().lock();
    if stream.write_byte(c as u8) { 1 } else { -1 }
}

/// Draws a diagonal line of backslashes on the terminal.
///
/// Emits `n` rows, each one column further right; `n <= 0` produces a single
/// newline. Every row ends in a newline, so under the default line-buffered
/// mode the full output has reached the descriptor when this returns.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn print_diagonal(n: c_int) {
    let mut stream = stdout().lock();
    draw_diagonal(&mut *stream, n);
}

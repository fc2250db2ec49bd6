//! # backslant-core
//!
//! Safe Rust implementation of the classic `print_diagonal` drawing routine.
//!
//! This crate holds the pure logic: the character sink seam the routine draws
//! through, the write-side stream buffer used by the ABI layer, and the
//! diagonal renderer itself. No `unsafe` code is permitted at the crate level;
//! descriptor I/O lives in `backslant-abi`.

#![deny(unsafe_code)]

pub mod draw;
pub mod sink;
pub mod stream;

pub use draw::{diagonal_len, draw_diagonal, render_diagonal};
pub use sink::{CaptureSink, CharSink};

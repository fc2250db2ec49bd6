//! Integration test: diagonal drawing contract.
//!
//! Validates the renderer against the documented output contract and checks
//! that the line-buffered stream path reproduces the rendered bytes exactly.
//!
//! Run: cargo test -p backslant-core --test diagonal_contract_test

use backslant_core::stream::{BufMode, StreamBuffer};
use backslant_core::{CaptureSink, CharSink, diagonal_len, draw_diagonal, render_diagonal};

// ---------------------------------------------------------------------------
// 1. Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn concrete_scenarios() {
    let cases: [(i32, &[u8]); 5] = [
        (0, b"\n"),
        (-5, b"\n"),
        (1, b"\\\n"),
        (3, b"\\\n \\\n  \\\n"),
        (4, b"\\\n \\\n  \\\n   \\\n"),
    ];
    for (n, expected) in cases {
        assert_eq!(render_diagonal(n), expected, "wrong output for n = {n}");
    }
}

// ---------------------------------------------------------------------------
// 2. Structural invariants over a range
// ---------------------------------------------------------------------------

#[test]
fn row_structure_holds_up_to_64() {
    for n in 1..=64i32 {
        let out = render_diagonal(n);
        let lines: Vec<&[u8]> = out.split_inclusive(|&b| b == b'\n').collect();
        assert_eq!(lines.len(), n as usize, "line count for n = {n}");
        for (i, line) in lines.iter().enumerate() {
            assert!(
                line[..i].iter().all(|&b| b == b' '),
                "row {} of n = {n} has a non-space in its indent",
                i + 1
            );
            assert_eq!(line[i], b'\\', "row {} of n = {n}", i + 1);
            assert_eq!(line.len(), i + 2, "row {} of n = {n}", i + 1);
        }
        assert_eq!(out.len(), diagonal_len(n));
    }
}

#[test]
fn degenerate_inputs_all_collapse() {
    for n in [0, -1, -100, i32::MIN] {
        assert_eq!(render_diagonal(n), b"\n", "degenerate branch for n = {n}");
        assert_eq!(diagonal_len(n), 1);
    }
}

// ---------------------------------------------------------------------------
// 3. Stream integration: byte-at-a-time through a line-buffered stream
// ---------------------------------------------------------------------------

/// Sink that pushes every byte through a line-buffered StreamBuffer and
/// collects what the buffer says must be flushed, mimicking the ABI stdout
/// path without a descriptor.
struct BufferedSink {
    buffer: StreamBuffer,
    flushed: Vec<u8>,
}

impl BufferedSink {
    fn new(mode: BufMode) -> Self {
        Self {
            buffer: StreamBuffer::new(mode, 64),
            flushed: Vec::new(),
        }
    }
}

impl CharSink for BufferedSink {
    fn put(&mut self, byte: u8) {
        let flush = self.buffer.write(&[byte]);
        self.flushed.extend_from_slice(&flush);
    }
}

#[test]
fn line_buffered_stream_emits_complete_output() {
    for n in [-2, 0, 1, 5, 20] {
        let mut sink = BufferedSink::new(BufMode::Line);
        draw_diagonal(&mut sink, n);
        // Every row ends in a newline, so nothing may remain buffered.
        assert!(
            sink.buffer.pending().is_empty(),
            "pending bytes left for n = {n}"
        );
        assert_eq!(sink.flushed, render_diagonal(n), "flush stream for n = {n}");
    }
}

#[test]
fn unbuffered_stream_emits_identical_bytes() {
    for n in [0, 3, 9] {
        let mut sink = BufferedSink::new(BufMode::None);
        draw_diagonal(&mut sink, n);
        assert_eq!(sink.flushed, render_diagonal(n));
    }
}

// ---------------------------------------------------------------------------
// 4. Idempotence on a shared sink
// ---------------------------------------------------------------------------

#[test]
fn consecutive_draws_concatenate() {
    let mut sink = CaptureSink::new();
    draw_diagonal(&mut sink, 3);
    draw_diagonal(&mut sink, 3);
    let single = render_diagonal(3);
    let mut doubled = single.clone();
    doubled.extend_from_slice(&single);
    assert_eq!(sink.into_bytes(), doubled);
}

//! # backslant-conformance
//!
//! Golden-output conformance tooling for the diagonal drawing surface.
//!
//! Provides:
//! - [`fixtures`]: serialized golden cases (input `n`, expected bytes,
//!   SHA-256 integrity digest) with a built-in set.
//! - [`runner`]: executes cases against the safe renderer and reports
//!   per-case outcomes and a run summary.
//! - [`structured_log`]: deterministic JSONL records for conformance runs.

pub mod fixtures;
pub mod runner;
pub mod structured_log;

pub use fixtures::{FixtureCase, FixtureError, FixtureSet, builtin_set, sha256_hex};
pub use runner::{CaseReport, RunSummary, execute_case, execute_set, to_log_entry};
pub use structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, validate_log_line};

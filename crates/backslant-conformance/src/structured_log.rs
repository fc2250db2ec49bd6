//! Structured logging for conformance runs.
//!
//! One JSONL record per executed case. Records are deterministic — no
//! timestamps, no host identity — so two runs over the same fixtures emit
//! byte-identical logs and diffs stay meaningful.
//!
//! Provides:
//! - [`LogEntry`]: the canonical record.
//! - [`LogEmitter`]: writes JSONL lines to any `io::Write`.
//! - [`validate_log_line`]: parses one line back against the schema.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Case verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

/// Canonical JSONL record for one conformance case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Function under test.
    pub function: String,
    /// Fixture case name.
    pub case: String,
    pub outcome: Outcome,
    /// SHA-256 of the rendered output.
    pub digest: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detail: Option<String>,
}

impl LogEntry {
    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Writes log entries as JSONL to an underlying writer.
pub struct LogEmitter<W: Write> {
    out: W,
}

impl<W: Write> LogEmitter<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Emit one entry as a line.
    pub fn emit(&mut self, entry: &LogEntry) -> io::Result<()> {
        let line = entry.to_jsonl().map_err(io::Error::other)?;
        writeln!(self.out, "{line}")
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Parse a single JSONL line back into a [`LogEntry`].
pub fn validate_log_line(line: &str) -> Result<LogEntry, serde_json::Error> {
    serde_json::from_str(line)
}

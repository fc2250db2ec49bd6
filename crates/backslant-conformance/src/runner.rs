//! Conformance runner.
//!
//! Executes fixture cases against the safe renderer through a capture sink,
//! comparing bytes and SHA-256 digests. Outcomes are data, not errors: a
//! failing case produces a `Fail` report, never an `Err`.

use backslant_core::render_diagonal;

use crate::fixtures::{FixtureCase, FixtureSet, sha256_hex};
use crate::structured_log::{LogEntry, LogLevel, Outcome};

/// Result of executing a single fixture case.
#[derive(Debug, Clone)]
pub struct CaseReport {
    /// Case identifier, copied from the fixture.
    pub name: String,
    /// Pass/fail verdict.
    pub outcome: Outcome,
    /// SHA-256 of the bytes actually rendered.
    pub digest: String,
    /// Human-readable mismatch description for failures.
    pub detail: Option<String>,
}

/// Totals for a fixture-set run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Whether every case passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.passed == self.total
    }
}

/// Execute one case: render, then compare bytes and digest.
pub fn execute_case(case: &FixtureCase) -> CaseReport {
    let rendered = render_diagonal(case.n);
    let digest = sha256_hex(&rendered);

    let expected = case.expected_output.as_bytes();
    if rendered != expected {
        let detail = match rendered
            .iter()
            .zip(expected)
            .position(|(got, want)| got != want)
        {
            Some(offset) => format!("output mismatch at byte {offset}"),
            None => format!(
                "output length mismatch: rendered {} bytes, expected {}",
                rendered.len(),
                expected.len()
            ),
        };
        return CaseReport {
            name: case.name.clone(),
            outcome: Outcome::Fail,
            digest,
            detail: Some(detail),
        };
    }
    if digest != case.expected_sha256 {
        return CaseReport {
            name: case.name.clone(),
            outcome: Outcome::Fail,
            digest,
            detail: Some("digest mismatch against stored fixture digest".to_string()),
        };
    }
    CaseReport {
        name: case.name.clone(),
        outcome: Outcome::Pass,
        digest,
        detail: None,
    }
}

/// Execute every case in the set.
pub fn execute_set(set: &FixtureSet) -> (Vec<CaseReport>, RunSummary) {
    let reports: Vec<CaseReport> = set.cases.iter().map(execute_case).collect();
    let passed = reports
        .iter()
        .filter(|r| r.outcome == Outcome::Pass)
        .count();
    let summary = RunSummary {
        total: reports.len(),
        passed,
        failed: reports.len() - passed,
    };
    (reports, summary)
}

/// Build the JSONL record for a case report.
pub fn to_log_entry(report: &CaseReport, function: &str) -> LogEntry {
    LogEntry {
        level: match report.outcome {
            Outcome::Pass => LogLevel::Info,
            Outcome::Fail => LogLevel::Error,
        },
        function: function.to_string(),
        case: report.name.clone(),
        outcome: report.outcome,
        digest: report.digest.clone(),
        detail: report.detail.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::builtin_set;

    #[test]
    fn test_builtin_cases_all_pass() {
        let (reports, summary) = execute_set(&builtin_set());
        assert!(summary.all_passed(), "failures: {reports:?}");
        assert_eq!(summary.total, builtin_set().cases.len());
    }

    #[test]
    fn test_mismatched_expectation_fails() {
        let mut case = builtin_set().cases[3].clone(); // single_row
        case.expected_output = "/\n".to_string();
        let report = execute_case(&case);
        assert_eq!(report.outcome, Outcome::Fail);
        assert!(report.detail.is_some());
    }

    #[test]
    fn test_report_digest_is_rendered_digest() {
        let case = &builtin_set().cases[0];
        let report = execute_case(case);
        // The report carries the digest of what was rendered, which for a
        // passing case equals the fixture's stored digest.
        assert_eq!(report.digest, case.expected_sha256);
    }

    #[test]
    fn test_log_entry_levels_track_outcome() {
        let case = &builtin_set().cases[0];
        let report = execute_case(case);
        let entry = to_log_entry(&report, "print_diagonal");
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.case, report.name);
    }
}

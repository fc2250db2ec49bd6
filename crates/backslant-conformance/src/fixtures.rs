//! Fixture loading and management.
//!
//! A fixture is a golden input/output pair for the drawing routine, stored
//! with a SHA-256 digest of the expected bytes so corrupted or hand-edited
//! fixtures are caught before they vouch for anything. The built-in set
//! states its outputs literally; nothing in it is derived from the code
//! under test.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors raised while loading or validating fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture io: {0}")]
    Io(#[from] std::io::Error),
    #[error("fixture parse: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("case `{name}`: stored digest does not match stored output")]
    DigestMismatch { name: String },
}

/// A single golden test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Input row count.
    pub n: i32,
    /// Expected output bytes, stored as a string.
    pub expected_output: String,
    /// SHA-256 hex digest of `expected_output`.
    pub expected_sha256: String,
}

/// A versioned collection of cases for one function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function the cases exercise.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the set to pretty JSON.
    pub fn to_json(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check every case's stored digest against its stored output.
    pub fn verify_integrity(&self) -> Result<(), FixtureError> {
        for case in &self.cases {
            if sha256_hex(case.expected_output.as_bytes()) != case.expected_sha256 {
                return Err(FixtureError::DigestMismatch {
                    name: case.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut out = String::with_capacity(64);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// The built-in golden set: the documented scenarios plus boundary cases.
pub fn builtin_set() -> FixtureSet {
    let case = |name: &str, n: i32, expected: &str, sha: &str| FixtureCase {
        name: name.to_string(),
        n,
        expected_output: expected.to_string(),
        expected_sha256: sha.to_string(),
    };
    FixtureSet {
        version: "1".to_string(),
        family: "print_diagonal".to_string(),
        cases: vec![
            case(
                "degenerate_zero",
                0,
                "\n",
                "01ba4719c80b6fe911b091a7c05124b64eeece964e09c058ef8f9805daca546b",
            ),
            case(
                "degenerate_negative",
                -5,
                "\n",
                "01ba4719c80b6fe911b091a7c05124b64eeece964e09c058ef8f9805daca546b",
            ),
            case(
                "degenerate_int_min",
                i32::MIN,
                "\n",
                "01ba4719c80b6fe911b091a7c05124b64eeece964e09c058ef8f9805daca546b",
            ),
            case(
                "single_row",
                1,
                "\\\n",
                "c666fab7ccb62a6387b7ee0ff91697f46488af0b56507a025f8fd915638a26c3",
            ),
            case(
                "two_rows",
                2,
                "\\\n \\\n",
                "f914a9bb88f331c51f90a910923709dfa8b5f84d66f78a069a1705084c6e92c7",
            ),
            case(
                "three_rows",
                3,
                "\\\n \\\n  \\\n",
                "3f4c93ff97404a8e8e0ec9c473e0a254fe28c8a8390c61e28c0515d93bbb7758",
            ),
            case(
                "four_rows",
                4,
                "\\\n \\\n  \\\n   \\\n",
                "b00ec362eef93250ca5929305a11466e003111191140df2b293b4564c8e9ebab",
            ),
            case(
                "eight_rows",
                8,
                concat!(
                    "\\\n",
                    " \\\n",
                    "  \\\n",
                    "   \\\n",
                    "    \\\n",
                    "     \\\n",
                    "      \\\n",
                    "       \\\n",
                ),
                "35ed0b21ef67a83de61b7fd9ba9b2984bac8789c1331ba0bb575f5e9710a56bb",
            ),
        ],
    }
}

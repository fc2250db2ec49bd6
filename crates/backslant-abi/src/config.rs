//! Stdout buffering configuration.
//!
//! The stdout buffering mode is set via the `BACKSLANT_STDOUT_MODE`
//! environment variable:
//! - `line` (default): line-buffered, the POSIX default for a terminal
//!   stream. Indistinguishable from unbuffered for `print_diagonal`, whose
//!   every row ends in a newline.
//! - `full`: fully buffered with BUFSIZ capacity.
//! - `none`: unbuffered; one descriptor write per character, matching the
//!   original `_putchar` primitive byte-for-byte at the descriptor level.

use std::sync::atomic::{AtomicU8, Ordering};

use backslant_core::stream::BufMode;

// Atomic cache: 0 = unresolved, then one value per mode. The cdylib can be
// loaded into foreign processes, where blocking inside lazy-init during
// early startup is not acceptable; a plain atomic store races benignly
// (both racers compute the same value).
static CACHED_MODE: AtomicU8 = AtomicU8::new(MODE_UNRESOLVED);

const MODE_UNRESOLVED: u8 = 0;
const MODE_LINE: u8 = 1;
const MODE_FULL: u8 = 2;
const MODE_NONE: u8 = 3;

/// Parse an environment value (case-insensitive). Unknown values fall back
/// to the line-buffered default rather than erroring.
pub fn mode_from_env_value(raw: &str) -> BufMode {
    match raw.to_ascii_lowercase().as_str() {
        "full" | "block" => BufMode::Full,
        "none" | "unbuffered" | "raw" => BufMode::None,
        _ => BufMode::Line,
    }
}

fn mode_to_u8(mode: BufMode) -> u8 {
    match mode {
        BufMode::Line => MODE_LINE,
        BufMode::Full => MODE_FULL,
        BufMode::None => MODE_NONE,
    }
}

/// Resolve the configured stdout buffering mode, reading the environment
/// once and caching the answer.
pub fn stdout_mode() -> BufMode {
    match CACHED_MODE.load(Ordering::Acquire) {
        MODE_LINE => return BufMode::Line,
        MODE_FULL => return BufMode::Full,
        MODE_NONE => return BufMode::None,
        _ => {}
    }
    let mode = match std::env::var("BACKSLANT_STDOUT_MODE") {
        Ok(raw) => mode_from_env_value(&raw),
        Err(_) => BufMode::Line,
    };
    CACHED_MODE.store(mode_to_u8(mode), Ordering::Release);
    mode
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(mode_from_env_value("line"), BufMode::Line);
        assert_eq!(mode_from_env_value("FULL"), BufMode::Full);
        assert_eq!(mode_from_env_value("block"), BufMode::Full);
        assert_eq!(mode_from_env_value("none"), BufMode::None);
        assert_eq!(mode_from_env_value("Unbuffered"), BufMode::None);
        assert_eq!(mode_from_env_value("raw"), BufMode::None);
    }

    #[test]
    fn test_unknown_values_default_to_line() {
        assert_eq!(mode_from_env_value(""), BufMode::Line);
        assert_eq!(mode_from_env_value("garbage"), BufMode::Line);
    }
}

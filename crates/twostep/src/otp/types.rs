//! Core types for the one-time password engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Engine constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Number of decimal digits in a generated code.
pub const CODE_DIGITS: usize = 6;

/// Length of a code period in seconds.
pub const PERIOD_SECONDS: i64 = 30;

/// Default validation tolerance on either side of the instant, in seconds.
pub const DEFAULT_TOLERANCE_SECONDS: i64 = 60;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Error type
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Crate-level error. Every failure is a precondition violation surfaced
/// to the immediate caller; operations never retry and never return
/// partial results. A candidate code that simply does not match is
/// `Ok(false)` from validation, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    /// A required string input was blank or otherwise unusable. `name` is
    /// the literal parameter name at the failing entry point.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// No code counter exists for the instant: it sits at or before the
    /// Unix epoch, or tolerance arithmetic left the representable range.
    #[error("no code counter exists for instant {0}")]
    OutOfRange(DateTime<Utc>),

    /// Base32 text contained a character outside the RFC 4648 alphabet.
    #[error("invalid base32 character '{0}'")]
    InvalidEncoding(char),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Generated code result
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A generated code with associated timing info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// The code string (e.g. "316647"), zero-padded to six digits.
    pub code: String,
    /// Seconds remaining until the code expires.
    pub remaining_seconds: u32,
    /// The time-step counter the code was derived from.
    pub counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Error display ────────────────────────────────────────────

    #[test]
    fn invalid_argument_display() {
        let err = OtpError::InvalidArgument {
            name: "secret_key",
            reason: "must not be empty or whitespace-only",
        };
        let s = err.to_string();
        assert!(s.contains("secret_key"));
        assert!(s.contains("whitespace"));
    }

    #[test]
    fn out_of_range_display() {
        let err = OtpError::OutOfRange(DateTime::UNIX_EPOCH);
        assert!(err.to_string().contains("1970-01-01"));
    }

    #[test]
    fn invalid_encoding_display() {
        let err = OtpError::InvalidEncoding('1');
        assert!(err.to_string().contains('1'));
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(OtpError::InvalidEncoding('='), OtpError::InvalidEncoding('='));
        assert_ne!(OtpError::InvalidEncoding('='), OtpError::InvalidEncoding('1'));
    }

    // ── GeneratedCode ────────────────────────────────────────────

    #[test]
    fn generated_code_serde_roundtrip() {
        let code = GeneratedCode {
            code: "316647".into(),
            remaining_seconds: 15,
            counter: 52288041,
        };
        let json = serde_json::to_string(&code).unwrap();
        let back: GeneratedCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}

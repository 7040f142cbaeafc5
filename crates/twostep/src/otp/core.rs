//! Code generation and validation — RFC 4226 (HOTP) and RFC 6238 (TOTP).
//!
//! HMAC-SHA1 over the big-endian time-step counter, dynamic truncation to
//! six decimal digits, and validation across an inclusive past/future
//! tolerance window.

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use log::debug;
use sha1::Sha1;

use crate::otp::guard;
use crate::otp::types::*;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Raw HMAC-OTP (RFC 4226 §5.3)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Compute an HOTP code for the given raw key bytes and counter.
///
/// Any key bytes are legal; a fresh HMAC state is built per call so the
/// result depends on nothing but the inputs.
pub fn hotp(key: &[u8], counter: u64) -> String {
    let mut mac = Hmac::<Sha1>::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(&counter.to_be_bytes());
    truncate(&mac.finalize().into_bytes())
}

/// Dynamic truncation per RFC 4226 §5.3.
fn truncate(hmac_result: &[u8]) -> String {
    let offset = (hmac_result[hmac_result.len() - 1] & 0x0f) as usize;
    // The 0x7f mask keeps the 31-bit value independent of signedness.
    let binary = ((hmac_result[offset] as u32 & 0x7f) << 24)
        | ((hmac_result[offset + 1] as u32) << 16)
        | ((hmac_result[offset + 2] as u32) << 8)
        | (hmac_result[offset + 3] as u32);
    let code = binary % 10u32.pow(CODE_DIGITS as u32);
    format!("{:0>width$}", code, width = CODE_DIGITS)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Time steps (RFC 6238)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Whole seconds elapsed since the Unix epoch. The instant must fall
/// strictly after the epoch for a counter to exist.
fn elapsed_seconds(instant: DateTime<Utc>) -> Result<i64, OtpError> {
    if instant <= DateTime::UNIX_EPOCH {
        return Err(OtpError::OutOfRange(instant));
    }
    Ok(instant.timestamp())
}

/// Compute the time-step counter for an instant.
pub fn counter_at(instant: DateTime<Utc>) -> Result<u64, OtpError> {
    Ok((elapsed_seconds(instant)? / PERIOD_SECONDS) as u64)
}

/// Seconds remaining until the code for an instant expires.
pub fn remaining_seconds_at(instant: DateTime<Utc>) -> Result<u32, OtpError> {
    Ok((PERIOD_SECONDS - elapsed_seconds(instant)? % PERIOD_SECONDS) as u32)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Code generation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Generate the code for a secret key at the current time.
pub fn generate_code(secret_key: &str) -> Result<GeneratedCode, OtpError> {
    generate_code_at(secret_key, Utc::now())
}

/// Generate the code for a secret key at an explicit instant.
///
/// The secret's UTF-8 bytes are the HMAC key directly; base32 only comes
/// into play when presenting secrets to authenticator apps.
pub fn generate_code_at(
    secret_key: &str,
    instant: DateTime<Utc>,
) -> Result<GeneratedCode, OtpError> {
    guard::not_blank(secret_key, "secret_key")?;
    let counter = counter_at(instant)?;
    Ok(GeneratedCode {
        code: hotp(secret_key.as_bytes(), counter),
        remaining_seconds: remaining_seconds_at(instant)?,
        counter,
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Validate a candidate code at the current time with the default
/// tolerance on either side.
pub fn validate_code(secret_key: &str, candidate: &str) -> Result<bool, OtpError> {
    validate_code_at(secret_key, candidate, Utc::now())
}

/// Validate at an explicit instant with the default tolerances.
pub fn validate_code_at(
    secret_key: &str,
    candidate: &str,
    instant: DateTime<Utc>,
) -> Result<bool, OtpError> {
    let tolerance = Duration::seconds(DEFAULT_TOLERANCE_SECONDS);
    validate_code_in_window(secret_key, candidate, instant, tolerance, tolerance)
}

/// Validate with the same tolerance applied to both sides of the instant.
pub fn validate_code_with_tolerance(
    secret_key: &str,
    candidate: &str,
    instant: DateTime<Utc>,
    tolerance: Duration,
) -> Result<bool, OtpError> {
    validate_code_in_window(secret_key, candidate, instant, tolerance, tolerance)
}

/// Validate a candidate against every counter whose period overlaps
/// `[instant - past_tolerance, instant + future_tolerance]`.
///
/// Counters are checked in ascending order with a constant-time,
/// case-insensitive comparison per counter. A candidate that matches
/// nothing is `Ok(false)`; errors are reserved for blank arguments and
/// windows whose start has no counter.
pub fn validate_code_in_window(
    secret_key: &str,
    candidate: &str,
    instant: DateTime<Utc>,
    past_tolerance: Duration,
    future_tolerance: Duration,
) -> Result<bool, OtpError> {
    guard::not_blank(secret_key, "secret_key")?;
    guard::not_blank(candidate, "candidate")?;

    let earliest = instant
        .checked_sub_signed(past_tolerance)
        .ok_or(OtpError::OutOfRange(instant))?;
    let latest = instant
        .checked_add_signed(future_tolerance)
        .ok_or(OtpError::OutOfRange(instant))?;
    let first = counter_at(earliest)?;
    let last = counter_at(latest)?;
    debug!("validating candidate over counters {}..={}", first, last);

    let key = secret_key.as_bytes();
    let expected = candidate.to_ascii_uppercase();
    for counter in first..=last {
        if constant_time_eq(hotp(key, counter).as_bytes(), expected.as_bytes()) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Constant-time comparison (to prevent timing attacks on code validation).
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

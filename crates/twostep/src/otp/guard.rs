//! Argument guards shared by the engine entry points.

use crate::otp::types::OtpError;

/// Reject empty or whitespace-only string arguments.
///
/// `name` is the literal parameter name carried into the error.
pub fn not_blank<'a>(value: &'a str, name: &'static str) -> Result<&'a str, OtpError> {
    if value.trim().is_empty() {
        return Err(OtpError::InvalidArgument {
            name,
            reason: "must not be empty or whitespace-only",
        });
    }
    Ok(value)
}

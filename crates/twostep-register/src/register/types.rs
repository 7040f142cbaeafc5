//! Core types for key registration.

use serde::{Deserialize, Serialize};

/// A completed key registration, ready to hand to the account holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRegistration {
    /// The shared secret key, exactly as the engine consumes it.
    pub secret: String,
    /// Issuer shown by authenticator apps (e.g. "GitHub").
    pub issuer: String,
    /// Account label shown by authenticator apps (e.g. "user@example.com").
    pub account_name: String,
    /// `otpauth://` enrolment URI carrying all of the above.
    pub uri: String,
}

//! Secret provisioning.

use rand::RngCore;

use twostep::otp::base32;

/// Byte length of generated secrets (160 bits, the RFC 4226 recommendation).
pub const DEFAULT_SECRET_BYTES: usize = 20;

/// Generate a cryptographically-random secret, rendered as unpadded base32
/// so it can be typed into any authenticator app.
pub fn generate_secret() -> String {
    let mut buf = [0u8; DEFAULT_SECRET_BYTES];
    rand::thread_rng().fill_bytes(&mut buf);
    base32::encode(&buf, false)
}

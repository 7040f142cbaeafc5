//! `otpauth://` URI assembly per the Google Authenticator key-URI format:
//! <https://github.com/google/google-authenticator/wiki/Key-Uri-Format>
//!
//! Format: `otpauth://totp/ISSUER:ACCOUNT?secret=BASE32&issuer=ISSUER`

use twostep::otp::base32;

/// Assemble the enrolment URI for a registration.
///
/// The secret is rendered as unpadded base32 of its UTF-8 bytes, so the
/// parameter never needs escaping. With `prefix_account_with_issuer` (the
/// convention authenticator apps expect) the path segment is
/// `ISSUER:ACCOUNT`; otherwise it is the account alone.
pub fn build_uri(
    secret: &str,
    issuer: &str,
    account_name: &str,
    prefix_account_with_issuer: bool,
) -> String {
    let issuer_escaped = percent_encode(issuer);
    let segment = if prefix_account_with_issuer {
        format!("{}:{}", issuer_escaped, percent_encode(account_name))
    } else {
        percent_encode(account_name)
    };
    format!(
        "otpauth://totp/{}?secret={}&issuer={}",
        segment,
        base32::encode(secret.as_bytes(), false),
        issuer_escaped,
    )
}

/// Percent-encode a URI component, passing RFC 3986 unreserved bytes through.
fn percent_encode(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                output.push(byte as char);
            }
            b' ' => output.push_str("%20"),
            b'@' => output.push_str("%40"),
            _ => output.push_str(&format!("%{:02X}", byte)),
        }
    }
    output
}

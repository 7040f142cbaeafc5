//! RFC 4648 base32 codec for presenting secrets to authenticator apps.
//!
//! Strict by contract: encoding emits uppercase with optional `=` padding,
//! decoding accepts uppercase alphabet characters plus trailing padding and
//! nothing else. Absent values stay absent at call sites via `Option::map`;
//! the codec itself only deals in concrete bytes and text.

use crate::otp::types::OtpError;

/// The RFC 4648 base32 alphabet.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Encode
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Encode bytes as base32, most significant bit first.
///
/// With `pad` set the output is `=`-padded to a multiple of 8 characters
/// per the RFC; without it the padding is simply omitted. Empty input
/// encodes to an empty string either way.
pub fn encode(data: &[u8], pad: bool) -> String {
    let mut output = String::with_capacity(data.len().div_ceil(5) * 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            output.push(ALPHABET[(buffer >> bits) as usize & 0x1f] as char);
        }
    }

    // Final group: left over bits padded with zeros on the right.
    if bits > 0 {
        output.push(ALPHABET[(buffer << (5 - bits)) as usize & 0x1f] as char);
    }

    if pad {
        while output.len() % 8 != 0 {
            output.push('=');
        }
    }

    output
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Decode
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Decode base32 text into bytes.
///
/// Trailing `=` padding is ignored and blank input decodes to no bytes.
/// Everything else must be an uppercase alphabet character; the first
/// offender is reported in `OtpError::InvalidEncoding`. Left-over bits
/// from the final group (the encoder's zero padding) are discarded.
pub fn decode(text: &str) -> Result<Vec<u8>, OtpError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let body = text.trim_end_matches('=');
    let mut output = Vec::with_capacity(body.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;

    for ch in body.chars() {
        let index = ALPHABET
            .iter()
            .position(|&symbol| char::from(symbol) == ch)
            .ok_or(OtpError::InvalidEncoding(ch))?;
        buffer = (buffer << 5) | index as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            output.push((buffer >> bits) as u8);
        }
    }

    Ok(output)
}

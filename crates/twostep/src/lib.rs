//! # Twostep – One-Time Password Engine
//!
//! Time-based one-time password crate:
//!
//! - **RFC 4226 / 6238** – HOTP & TOTP code generation with HMAC-SHA1
//! - **Window validation** – constant-time candidate checks across an
//!   inclusive past/future tolerance window
//! - **RFC 4648 base32** – strict codec for presenting secrets to
//!   authenticator apps

pub mod otp;

//! # Twostep – Key Registration
//!
//! Registration collaborator for the one-time password engine:
//!
//! - **Secret provisioning** – caller-supplied or generated shared secrets
//! - **otpauth:// URIs** – enrolment URIs per the Google Authenticator
//!   key-URI format
//! - **Registration records** – serialisable issuer/account/secret/URI bundles

pub mod register;

//! Registration orchestration — validates the participants, provisions the
//! secret, and assembles the enrolment URI.

use log::info;

use twostep::otp::guard;
use twostep::otp::types::OtpError;

use crate::register::secret;
use crate::register::types::KeyRegistration;
use crate::register::uri;

/// Register an account with a generated secret and the issuer-prefixed
/// account segment.
pub fn create_registration_with_defaults(
    issuer: &str,
    account_name: &str,
) -> Result<KeyRegistration, OtpError> {
    create_registration(issuer, account_name, None, true)
}

/// Register an account for two-step verification.
///
/// `secret_key` may be omitted to have one generated. Issuer and account
/// name must be non-blank and free of `:`, which the URI path reserves as
/// the segment separator.
pub fn create_registration(
    issuer: &str,
    account_name: &str,
    secret_key: Option<&str>,
    prefix_account_with_issuer: bool,
) -> Result<KeyRegistration, OtpError> {
    participant(issuer, "issuer")?;
    participant(account_name, "account_name")?;

    let secret = match secret_key {
        Some(provided) => guard::not_blank(provided, "secret_key")?.to_string(),
        None => secret::generate_secret(),
    };
    let uri = uri::build_uri(&secret, issuer, account_name, prefix_account_with_issuer);
    info!("registered two-step verification for issuer '{}'", issuer);

    Ok(KeyRegistration {
        secret,
        issuer: issuer.to_string(),
        account_name: account_name.to_string(),
        uri,
    })
}

/// A participant label must be non-blank and colon-free.
fn participant<'a>(value: &'a str, name: &'static str) -> Result<&'a str, OtpError> {
    guard::not_blank(value, name)?;
    if value.contains(':') {
        return Err(OtpError::InvalidArgument {
            name,
            reason: "must not contain ':'",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use twostep::otp::base32;
    use twostep::otp::core;

    // ── Happy path ───────────────────────────────────────────────

    #[test]
    fn registration_with_provided_secret() {
        let reg =
            create_registration("Acme Co", "john.doe@example.org", Some("123456"), true).unwrap();
        assert_eq!(reg.secret, "123456");
        assert_eq!(reg.issuer, "Acme Co");
        assert_eq!(reg.account_name, "john.doe@example.org");
        assert_eq!(
            reg.uri,
            "otpauth://totp/Acme%20Co:john.doe%40example.org?secret=GEZDGNBVGY&issuer=Acme%20Co"
        );
    }

    #[test]
    fn registration_without_issuer_prefix() {
        let reg =
            create_registration("Acme Co", "john.doe@example.org", Some("123456"), false).unwrap();
        assert_eq!(
            reg.uri,
            "otpauth://totp/john.doe%40example.org?secret=GEZDGNBVGY&issuer=Acme%20Co"
        );
    }

    #[test]
    fn registration_with_generated_secret() {
        let reg = create_registration_with_defaults("Acme", "user@example.org").unwrap();
        assert_eq!(reg.secret.len(), 32);
        assert_eq!(base32::decode(&reg.secret).unwrap().len(), 20);
        assert!(reg.uri.starts_with("otpauth://totp/Acme:user%40example.org?secret="));
    }

    // ── Guards ───────────────────────────────────────────────────

    #[test]
    fn registration_rejects_blank_fields() {
        assert!(matches!(
            create_registration("", "user", None, true),
            Err(OtpError::InvalidArgument { name: "issuer", .. })
        ));
        assert!(matches!(
            create_registration("Acme", "  ", None, true),
            Err(OtpError::InvalidArgument {
                name: "account_name",
                ..
            })
        ));
        assert!(matches!(
            create_registration("Acme", "user", Some("   "), true),
            Err(OtpError::InvalidArgument {
                name: "secret_key",
                ..
            })
        ));
    }

    #[test]
    fn registration_rejects_colons() {
        assert!(matches!(
            create_registration("Acme:Inc", "user", None, true),
            Err(OtpError::InvalidArgument { name: "issuer", .. })
        ));
        assert!(matches!(
            create_registration("Acme", "us:er", None, true),
            Err(OtpError::InvalidArgument {
                name: "account_name",
                ..
            })
        ));
    }

    // ── Engine interop ───────────────────────────────────────────

    #[test]
    fn registration_secret_drives_the_engine() {
        let reg = create_registration("Acme", "user@example.org", None, true).unwrap();

        // The URI's secret parameter decodes back to the engine's key bytes.
        let param = reg
            .uri
            .split("secret=")
            .nth(1)
            .unwrap()
            .split('&')
            .next()
            .unwrap();
        assert_eq!(base32::decode(param).unwrap(), reg.secret.as_bytes());

        let generated = core::generate_code(&reg.secret).unwrap();
        assert!(core::validate_code(&reg.secret, &generated.code).unwrap());
    }
}

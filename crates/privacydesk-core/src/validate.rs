//! Creation- and close-time input validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ValidationError;
use crate::request::Requester;

/// Loose shape check only: something @ something . tld. Full RFC 5322
/// validation is out of scope for a contact field.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r".+@.+\..+").expect("email regex"));

pub fn email_looks_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Validate requester contact data at creation time.
pub fn validate_requester(requester: &Requester) -> Result<(), ValidationError> {
    if requester.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !email_looks_valid(&requester.email) {
        return Err(ValidationError::BadEmail {
            email: requester.email.clone(),
        });
    }
    Ok(())
}

/// Validate the rationale supplied when closing or rejecting a case.
pub fn validate_rationale(rationale: &str) -> Result<(), ValidationError> {
    if rationale.trim().is_empty() {
        return Err(ValidationError::EmptyRationale);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requester(name: &str, email: &str) -> Requester {
        Requester {
            name: name.to_string(),
            email: email.to_string(),
            country: None,
        }
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_requester(&requester("Mina Kim", "mina@example.com")).is_ok());
        assert!(validate_requester(&requester("Lee", "lee@sub.example.co.uk")).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let err = validate_requester(&requester("   ", "mina@example.com")).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyName));
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["mina", "mina@", "@example.com", "mina@example"] {
            let err = validate_requester(&requester("Mina", bad)).unwrap_err();
            assert!(matches!(err, ValidationError::BadEmail { .. }), "{bad}");
        }
    }

    #[test]
    fn rejects_blank_rationale() {
        assert!(validate_rationale("  ").is_err());
        assert!(validate_rationale("incomplete identity proof").is_ok());
    }
}

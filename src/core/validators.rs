//! Reusable field validators
//!
//! Plugged into `#[validate(custom(function = ...))]` on record fields.

use crate::core::field::parse_currency;
use regex::Regex;
use std::sync::OnceLock;
use validator::ValidationError;

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^\+?[0-9 ().-]{7,20}$").expect("valid phone regex"))
}

/// Value must not be empty or whitespace
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Value must read as an amount, e.g. `$1,250.00`
pub fn currency(value: &str) -> Result<(), ValidationError> {
    match parse_currency(value) {
        Some(amount) if amount >= 0.0 => Ok(()),
        Some(_) => Err(ValidationError::new("negative_amount").with_message("amount must not be negative".into())),
        None => Err(ValidationError::new("currency").with_message(format!("'{value}' is not an amount").into())),
    }
}

/// Digits with the usual separators, optional leading `+`
pub fn phone(value: &str) -> Result<(), ValidationError> {
    if phone_regex().is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message(format!("'{value}' is not a phone number").into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Dr. Patel").is_ok());
        assert!(not_blank("   ").is_err());
    }

    #[test]
    fn test_currency() {
        assert!(currency("$1,250.00").is_ok());
        assert!(currency("980").is_ok());
        assert_eq!(currency("-$5").unwrap_err().code, "negative_amount");
        assert_eq!(currency("twelve").unwrap_err().code, "currency");
    }

    #[test]
    fn test_phone() {
        assert!(phone("(555) 123-4567").is_ok());
        assert!(phone("+1 555 123 4567").is_ok());
        assert!(phone("call me").is_err());
    }
}

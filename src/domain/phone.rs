//! Phone number value object and normalization
//!
//! Converts user-formatted phone handles (free-format, locale-dependent)
//! into canonical E.164 form. Parsing is deterministic: a given input and
//! default country code always produce the same result.

use crate::domain::shared::value_objects::RecipientId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// E.164 caps the number at 15 digits, country code included.
const E164_MAX_DIGITS: usize = 15;
/// Shorter inputs are not dialable numbers.
const E164_MIN_DIGITS: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneParseError {
    #[error("phone number is empty")]
    Empty,

    #[error("phone number contains invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("phone number has too few digits ({0})")]
    TooShort(usize),

    #[error("phone number has too many digits ({0})")]
    TooLong(usize),
}

/// Validated phone number with country code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// Country calling code with leading `+`, e.g. `+1`
    country_code: String,
    /// National number, digits only
    national: String,
}

impl PhoneNumber {
    /// Parse a user-formatted handle, e.g. from a system contacts entry.
    ///
    /// Common formatting characters (spaces, parentheses, dashes, dots,
    /// slashes) are stripped. `+`- and `00`-prefixed input is treated as
    /// internationally formatted; anything else is a national number
    /// completed with `default_country_code`, dropping a single leading
    /// trunk `0` if present.
    pub fn from_user_text(
        text: &str,
        default_country_code: &str,
    ) -> Result<Self, PhoneParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PhoneParseError::Empty);
        }

        let (mut international, rest) = match trimmed.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut digits = String::new();
        for c in rest.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if matches!(c, ' ' | '(' | ')' | '-' | '.' | '/') {
                // formatting characters humans type around numbers
            } else {
                return Err(PhoneParseError::InvalidCharacter(c));
            }
        }

        // "00" is the common international dialing prefix
        if !international {
            if let Some(rest) = digits.strip_prefix("00") {
                international = true;
                digits = rest.to_string();
            }
        }

        if digits.is_empty() {
            return Err(PhoneParseError::TooShort(0));
        }

        let (country_code, national) = if international {
            split_country_code(&digits)
        } else {
            let national = digits.strip_prefix('0').unwrap_or(&digits);
            (
                normalize_country_code(default_country_code),
                national.to_string(),
            )
        };

        let total = digit_count(&country_code) + national.len();
        if total < E164_MIN_DIGITS {
            return Err(PhoneParseError::TooShort(total));
        }
        if total > E164_MAX_DIGITS {
            return Err(PhoneParseError::TooLong(total));
        }

        Ok(Self {
            country_code,
            national,
        })
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn national(&self) -> &str {
        &self.national
    }

    /// Format as E.164, e.g. `+15551234567`
    pub fn to_e164(&self) -> String {
        format!("{}{}", self.country_code, self.national)
    }

    /// The canonical identifier used to address a call recipient
    pub fn recipient_id(&self) -> RecipientId {
        RecipientId::new(self.to_e164())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.country_code, self.national)
    }
}

/// Split the country code off an internationally formatted digit string.
///
/// NANP numbers carry a one-digit code; everything else is treated as a
/// two-digit code. The split is heuristic, but `to_e164` concatenates both
/// parts again, so the canonical form does not depend on it.
fn split_country_code(digits: &str) -> (String, String) {
    if let Some(rest) = digits.strip_prefix('1') {
        ("+1".to_string(), rest.to_string())
    } else if digits.len() >= 2 {
        (format!("+{}", &digits[..2]), digits[2..].to_string())
    } else {
        (format!("+{}", digits), String::new())
    }
}

/// Accept country codes with or without the leading `+`
fn normalize_country_code(code: &str) -> String {
    let code = code.trim();
    if code.starts_with('+') {
        code.to_string()
    } else {
        format!("+{}", code)
    }
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_handle_is_normalized() {
        let number = PhoneNumber::from_user_text("(555) 123-4567", "+1").unwrap();
        assert_eq!(number.country_code(), "+1");
        assert_eq!(number.national(), "5551234567");
        assert_eq!(number.to_e164(), "+15551234567");
    }

    #[test]
    fn test_international_handle_keeps_its_country_code() {
        let number = PhoneNumber::from_user_text("+44 20 7946 0958", "+1").unwrap();
        assert_eq!(number.country_code(), "+44");
        assert_eq!(number.to_e164(), "+442079460958");
    }

    #[test]
    fn test_double_zero_prefix_is_international() {
        let number = PhoneNumber::from_user_text("0044 20 7946 0958", "+1").unwrap();
        assert_eq!(number.to_e164(), "+442079460958");
    }

    #[test]
    fn test_trunk_zero_is_dropped_for_national_numbers() {
        let number = PhoneNumber::from_user_text("07123 456789", "+44").unwrap();
        assert_eq!(number.to_e164(), "+447123456789");
    }

    #[test]
    fn test_default_country_code_without_plus_is_accepted() {
        let number = PhoneNumber::from_user_text("555-123-4567", "1").unwrap();
        assert_eq!(number.to_e164(), "+15551234567");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(
            PhoneNumber::from_user_text("", "+1"),
            Err(PhoneParseError::Empty)
        );
        assert_eq!(
            PhoneNumber::from_user_text("   ", "+1"),
            Err(PhoneParseError::Empty)
        );
        assert_eq!(
            PhoneNumber::from_user_text("()-", "+1"),
            Err(PhoneParseError::TooShort(0))
        );
    }

    #[test]
    fn test_letters_are_rejected() {
        assert_eq!(
            PhoneNumber::from_user_text("not a number", "+1"),
            Err(PhoneParseError::InvalidCharacter('n'))
        );
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(
            PhoneNumber::from_user_text("123", "+1"),
            Err(PhoneParseError::TooShort(4))
        );
        assert_eq!(
            PhoneNumber::from_user_text("+449999999999999999", "+1"),
            Err(PhoneParseError::TooLong(18))
        );
    }

    #[test]
    fn test_parsing_is_deterministic() {
        let first = PhoneNumber::from_user_text("+1 (555) 123-4567", "+1").unwrap();
        let second = PhoneNumber::from_user_text("+1 (555) 123-4567", "+1").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_recipient_id_matches_e164() {
        let number = PhoneNumber::from_user_text("(555) 123-4567", "+1").unwrap();
        assert_eq!(number.recipient_id(), RecipientId::new("+15551234567"));
    }
}

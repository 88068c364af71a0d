//! Phone numbers.
//!
//! The `phone` attribute is a DynamoDB number, which may be signed, have a
//! fraction or an exponent, and carry up to 38 significant digits. The text
//! is kept as written so no value is narrowed or rounded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UserKeyError;

/// A phone number as stored in the Users table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Parses the text of a DynamoDB number.
    pub fn parse(text: &str) -> Result<Self, UserKeyError> {
        let text = text.trim();
        if is_number(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(UserKeyError::InvalidPhone(text.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `[+-]digits[.digits][(e|E)[+-]digits]`, with digits on at least one side
/// of the point.
fn is_number(text: &str) -> bool {
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if integer.is_empty() && fraction.is_empty() {
        return false;
    }
    if !digits(integer) || !digits(fraction) {
        return false;
    }

    match exponent {
        None => true,
        Some(exponent) => {
            let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !exponent.is_empty() && digits(exponent)
        }
    }
}

impl From<u64> for Phone {
    fn from(number: u64) -> Self {
        Self(number.to_string())
    }
}

impl FromStr for Phone {
    type Err = UserKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = UserKeyError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_number_form() {
        for text in [
            "5551234",
            "-5",
            "+5",
            "1.5",
            "-1.5",
            ".5",
            "5.",
            "1e10",
            "2.5E-3",
            "18446744073709551616",
            "99999999999999999999999999999999999999",
        ] {
            assert_eq!(Phone::parse(text).unwrap().as_str(), text);
        }
    }

    #[test]
    fn test_rejects_non_numbers() {
        for text in ["", "-", ".", "12a", "1.2.3", "1e", "e5", "--1", "555 1234"] {
            assert_eq!(
                Phone::parse(text),
                Err(UserKeyError::InvalidPhone(text.to_string()))
            );
        }
    }

    #[test]
    fn test_from_integer() {
        assert_eq!(Phone::from(5_551_234_u64).as_str(), "5551234");
    }

    #[test]
    fn test_json_is_a_string_and_is_validated() {
        let phone: Phone = serde_json::from_str(r#""-1.5""#).unwrap();

        assert_eq!(serde_json::to_string(&phone).unwrap(), r#""-1.5""#);
        assert!(serde_json::from_str::<Phone>(r#""abc""#).is_err());
    }
}

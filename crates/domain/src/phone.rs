//! E.164 phone number value object.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

// Same pattern the API enforces server-side.
static E164: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a compile-time constant
    Regex::new(r"^\+[1-9]\d{1,14}$").unwrap()
});

/// A phone number in E.164 format (`+` followed by up to 15 digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if E164.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(DomainError::Parse(format!(
                "not an E.164 phone number: {trimmed}"
            )))
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_e164_numbers() {
        assert!("+919876543210".parse::<PhoneNumber>().is_ok());
        assert!("+14155552671".parse::<PhoneNumber>().is_ok());
    }

    #[test]
    fn rejects_local_formats() {
        assert!("9876543210".parse::<PhoneNumber>().is_err());
        assert!("+0123".parse::<PhoneNumber>().is_err());
        assert!("".parse::<PhoneNumber>().is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let phone: PhoneNumber = " +919876543210 ".parse().expect("trimmed parse");
        assert_eq!(phone.as_str(), "+919876543210");
    }
}

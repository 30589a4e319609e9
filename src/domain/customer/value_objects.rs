use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

// [0-9] rather than \d: the regex crate's \d also matches non-ASCII digits.
static ZIP_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("zip code pattern is valid"));

/// Customer name, trimmed on construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    /// Create a validated name. The stored value is trimmed; internal
    /// spacing is preserved.
    pub fn new(raw: impl Into<String>) -> Result<Self, CustomerError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.chars().count() < 2 {
            return Err(CustomerError::InvalidName(raw));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Zip code in `NNNNN-NNN` format, stored verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn new(raw: impl Into<String>) -> Result<Self, CustomerError> {
        let raw = raw.into();
        if !ZIP_CODE_PATTERN.is_match(&raw) {
            return Err(CustomerError::InvalidZipCode(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Customer address. Currently zip-code-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    zip_code: ZipCode,
}

impl Address {
    pub fn new(zip_code: ZipCode) -> Self {
        Self { zip_code }
    }

    pub fn zip_code(&self) -> &str {
        self.zip_code.as_str()
    }
}

/// Customer lifecycle status.
///
/// Moves forward only: Draft → Pending → Finished, with Finished absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerStatus {
    Draft,
    Pending,
    Finished,
}

impl CustomerStatus {
    /// Transition function. Calling on Finished is a no-op, not an error.
    pub fn next(self) -> Self {
        match self {
            CustomerStatus::Draft => CustomerStatus::Pending,
            CustomerStatus::Pending => CustomerStatus::Finished,
            CustomerStatus::Finished => CustomerStatus::Finished,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let name = Name::new("John Doe").unwrap();
        assert_eq!(name.as_str(), "John Doe");
    }

    #[test]
    fn test_name_trims_whitespace() {
        let name = Name::new("  John Doe  ").unwrap();
        assert_eq!(name.as_str(), "John Doe");
    }

    #[test]
    fn test_empty_name_fails() {
        let result = Name::new("");
        assert!(matches!(result.unwrap_err(), CustomerError::InvalidName(_)));
    }

    #[test]
    fn test_whitespace_only_name_fails() {
        let result = Name::new("   ");
        assert!(matches!(result.unwrap_err(), CustomerError::InvalidName(_)));
    }

    #[test]
    fn test_single_character_name_fails() {
        let result = Name::new("A");
        assert!(matches!(result.unwrap_err(), CustomerError::InvalidName(_)));
    }

    #[test]
    fn test_two_character_name_after_trimming() {
        let name = Name::new(" Jo ").unwrap();
        assert_eq!(name.as_str(), "Jo");
    }

    #[test]
    fn test_valid_zip_code() {
        let zip = ZipCode::new("12345-678").unwrap();
        assert_eq!(zip.as_str(), "12345-678");
    }

    #[test]
    fn test_invalid_zip_code_formats() {
        let invalid_zips = vec![
            "123-456",
            "123456789",
            "abcde-xyz",
            "12345-12",
            "1234-1234",
            "12345-6789",
            " 12345-678",
            "12345-678 ",
            "",
        ];

        for invalid_zip in invalid_zips {
            let result = ZipCode::new(invalid_zip);
            assert!(
                matches!(result, Err(CustomerError::InvalidZipCode(_))),
                "Zip code '{}' should be invalid",
                invalid_zip
            );
        }
    }

    #[test]
    fn test_address_exposes_zip_code_value() {
        let address = Address::new(ZipCode::new("12345-678").unwrap());
        assert_eq!(address.zip_code(), "12345-678");
    }

    #[test]
    fn test_status_advances_forward_only() {
        assert_eq!(CustomerStatus::Draft.next(), CustomerStatus::Pending);
        assert_eq!(CustomerStatus::Pending.next(), CustomerStatus::Finished);
        assert_eq!(CustomerStatus::Finished.next(), CustomerStatus::Finished);
    }

    #[test]
    fn test_status_serializes_as_uppercase_tag() {
        let json = serde_json::to_value(CustomerStatus::Draft).unwrap();
        assert_eq!(json, serde_json::json!("DRAFT"));
    }
}

use crate::error::DirectoryError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The primary key of a zip code record.
///
/// Zip codes must be non-empty. No further format is enforced; the directory
/// stores whatever identifier the caller registers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZipCode(String);

impl ZipCode {
    /// Creates a new `ZipCode` after validating the input.
    pub fn new(code: impl Into<String>) -> Result<Self, DirectoryError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DirectoryError::InvalidZipCode(
                "zip must not be empty".to_string(),
            ));
        }
        Ok(Self(code))
    }

    /// Creates a `ZipCode` without validation.
    ///
    /// Use this only for keys read back from the store, which were validated
    /// on the way in.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the zip code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ZipCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ZipCode {
    type Error = DirectoryError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<ZipCode> for String {
    fn from(code: ZipCode) -> Self {
        code.0
    }
}

impl AsRef<str> for ZipCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ZipCode::new("10001").is_ok());
        assert!(ZipCode::new("00000").is_ok());
        assert!(ZipCode::new("SW1A-1AA").is_ok());
    }

    #[test]
    fn empty_code_is_rejected() {
        assert!(matches!(
            ZipCode::new(""),
            Err(DirectoryError::InvalidZipCode(_))
        ));
        assert!(ZipCode::new("   ").is_err());
    }

    #[test]
    fn display_is_the_raw_code() {
        let code = ZipCode::new("90210").unwrap();
        assert_eq!(code.to_string(), "90210");
        assert_eq!(code.as_str(), "90210");
    }

    #[test]
    fn deserialize_validates() {
        let code: ZipCode = serde_json::from_str(r#""10001""#).unwrap();
        assert_eq!(code.as_str(), "10001");
        assert!(serde_json::from_str::<ZipCode>(r#""""#).is_err());
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""10001""#);
    }
}

use std::fmt;
use std::str::FromStr;

use crate::operation::ValidationError;

/// Session id issued by the login endpoint
///
/// Sixteen hex digits. The all-zero value means "no session" and is what a
/// fresh session starts with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sid(String);

const INVALID_SID: &str = "0000000000000000";
const SID_LENGTH: usize = 16;

impl Sid {
    pub fn invalid() -> Self {
        Self(INVALID_SID.to_string())
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.len() == SID_LENGTH && trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError::InvalidSid(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid_session(&self) -> bool {
        self.0 != INVALID_SID
    }
}

impl Default for Sid {
    fn default() -> Self {
        Self::invalid()
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Sid {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sid::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sentinel() {
        let sid = Sid::invalid();
        assert_eq!(sid.as_str(), "0000000000000000");
        assert!(!sid.is_valid_session());
        assert_eq!(Sid::default(), sid);
    }

    #[test]
    fn test_parse_valid() {
        let sid = Sid::parse("ff88e4d39354992f").unwrap();
        assert!(sid.is_valid_session());
        assert_eq!(sid.to_string(), "ff88e4d39354992f");
    }

    #[test]
    fn test_parsed_zero_is_invalid_session() {
        let sid: Sid = "0000000000000000".parse().unwrap();
        assert!(!sid.is_valid_session());
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(Sid::parse("").is_err());
        assert!(Sid::parse("ff88e4d39354992").is_err());
        assert!(Sid::parse("ff88e4d39354992f0").is_err());
        assert!(Sid::parse("gg88e4d39354992f").is_err());
    }
}

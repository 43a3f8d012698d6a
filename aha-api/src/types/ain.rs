//! Actor identification numbers

use std::fmt;
use std::str::FromStr;

use crate::operation::ValidationError;

/// Address of a device, a device unit, a Zigbee device or a template
///
/// Four shapes are accepted, after all whitespace has been removed:
///
/// | Shape | Example |
/// |---|---|
/// | 12 digits | `087610000434` |
/// | 12 digits, `-`, digits | `087610000434-1` |
/// | `Z`, 16 hex digits, optional `-` digits | `Z0123456789ABCDEF-1` |
/// | `tmp`, 6 hex digits, `-`, 3 to 9 digits | `tmp6F0093-391363146` |
///
/// Hex digits may be upper or lower case; the `Z` and `tmp` prefixes may not.
///
/// The gateway prints AINs with a space after the fifth digit
/// (`08761 0000434`); both spellings parse to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ain(String);

const DEVICE_DIGITS: usize = 12;
const ZIGBEE_HEX_DIGITS: usize = 16;
const TEMPLATE_PREFIX: &str = "tmp";
const TEMPLATE_HEX_DIGITS: usize = 6;
const TEMPLATE_SUFFIX_DIGITS: std::ops::RangeInclusive<usize> = 3..=9;

impl Ain {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let normalized: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if is_valid(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(ValidationError::InvalidAin(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_template(&self) -> bool {
        self.0.starts_with(TEMPLATE_PREFIX)
    }

    pub fn is_zigbee(&self) -> bool {
        self.0.starts_with('Z')
    }

    /// True for a sub-unit (`-N` suffix) of a device
    pub fn is_unit(&self) -> bool {
        !self.is_template() && self.0.contains('-')
    }

    /// The owning device's AIN for a unit, or `self` for anything else
    pub fn device_part(&self) -> Ain {
        if !self.is_unit() {
            return self.clone();
        }
        match self.0.split_once('-') {
            Some((device, _)) => Ain(device.to_string()),
            None => self.clone(),
        }
    }
}

fn is_valid(ain: &str) -> bool {
    if let Some(rest) = ain.strip_prefix(TEMPLATE_PREFIX) {
        return match rest.split_once('-') {
            Some((id, suffix)) => {
                id.len() == TEMPLATE_HEX_DIGITS
                    && all_hex(id)
                    && TEMPLATE_SUFFIX_DIGITS.contains(&suffix.len())
                    && all_digits(suffix)
            }
            None => false,
        };
    }

    if let Some(rest) = ain.strip_prefix('Z') {
        let (id, unit) = split_unit(rest);
        return id.len() == ZIGBEE_HEX_DIGITS && all_hex(id) && valid_unit(unit);
    }

    let (id, unit) = split_unit(ain);
    id.len() == DEVICE_DIGITS && all_digits(id) && valid_unit(unit)
}

fn split_unit(ain: &str) -> (&str, Option<&str>) {
    match ain.split_once('-') {
        Some((id, unit)) => (id, Some(unit)),
        None => (ain, None),
    }
}

fn valid_unit(unit: Option<&str>) -> bool {
    match unit {
        Some(unit) => !unit.is_empty() && all_digits(unit),
        None => true,
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn all_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

impl fmt::Display for Ain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ain {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ain::parse(s)
    }
}

impl TryFrom<&str> for Ain {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ain::parse(value)
    }
}

impl AsRef<str> for Ain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("000000000000")]
    #[case("087610000434")]
    #[case("000000000000-0")]
    #[case("087610000434-12")]
    #[case("Z0123456789ABCDEF")]
    #[case("Z0123456789abcdef")]
    #[case("Z0123456789ABCDEF-1")]
    #[case("tmp000000-123")]
    #[case("tmp123456-123456789")]
    #[case("tmp6F0093-391363146")]
    fn test_valid_shapes_round_trip(#[case] raw: &str) {
        let ain = Ain::parse(raw).unwrap();
        assert_eq!(ain.as_str(), raw);
        assert_eq!(ain.to_string(), raw);
    }

    #[rstest]
    #[case("")]
    #[case("00000000000")]
    #[case("0000000000000")]
    #[case("00000000000a")]
    #[case("000000000000-")]
    #[case("000000000000+0")]
    #[case("000000000000-0a")]
    #[case("000000000000-0-1")]
    #[case("Z0123456789ABCDE")]
    #[case("Z0123456789ABCDEF0")]
    #[case("Z0123456789ABCDEG")]
    #[case("z0123456789ABCDEF")]
    #[case("Z0123456789ABCDEF+1")]
    #[case("tmp00000-123")]
    #[case("tmp0000000-123")]
    #[case("tmp000000-12")]
    #[case("tmp000000-1234567890")]
    #[case("tmp000000+123")]
    #[case("tmp000000")]
    #[case("TMP000000-123")]
    fn test_invalid_shapes_rejected(#[case] raw: &str) {
        assert!(
            matches!(Ain::parse(raw), Err(ValidationError::InvalidAin(_))),
            "{:?} should be rejected",
            raw
        );
    }

    // Hex blocks accept either case; the case is kept as written
    #[rstest]
    #[case("Z0123456789abcdef-1")]
    #[case("Z001788011d4B55D3")]
    #[case("tmpabcdef-123")]
    #[case("tmp6f0093-391363146")]
    #[case("tmpAbCdEf-123456")]
    fn test_hex_blocks_accept_lower_case(#[case] raw: &str) {
        let ain = Ain::parse(raw).unwrap();
        assert_eq!(ain.as_str(), raw);
    }

    // Only the hex blocks are case-insensitive: prefixes are fixed and
    // non-hex letters never pass
    #[rstest]
    #[case("Z0123456789abcdeg")]
    #[case("tmpabcdeg-123")]
    #[case("Tmpabcdef-123")]
    #[case("tmpabcdef-12a")]
    #[case("08761000043a")]
    #[case("087610000434-a")]
    fn test_case_insensitivity_stops_at_hex_blocks(#[case] raw: &str) {
        assert!(
            matches!(Ain::parse(raw), Err(ValidationError::InvalidAin(_))),
            "{:?} should be rejected",
            raw
        );
    }

    #[test]
    fn test_whitespace_is_stripped() {
        let ain = Ain::parse("08761 0000434").unwrap();
        assert_eq!(ain.as_str(), "087610000434");

        let ain = Ain::parse(" 08761 0000434-1\n").unwrap();
        assert_eq!(ain.as_str(), "087610000434-1");
    }

    #[test]
    fn test_predicates() {
        let device = Ain::parse("087610000434").unwrap();
        assert!(!device.is_unit());
        assert!(!device.is_zigbee());
        assert!(!device.is_template());

        let unit = Ain::parse("087610000434-1").unwrap();
        assert!(unit.is_unit());
        assert!(!unit.is_template());

        let zigbee = Ain::parse("Z0123456789ABCDEF-1").unwrap();
        assert!(zigbee.is_zigbee());
        assert!(zigbee.is_unit());

        let template = Ain::parse("tmp123456-123456").unwrap();
        assert!(template.is_template());
        assert!(!template.is_unit());
        assert!(!template.is_zigbee());
    }

    #[test]
    fn test_device_part() {
        let unit = Ain::parse("087610000434-1").unwrap();
        assert_eq!(unit.device_part().as_str(), "087610000434");

        let template = Ain::parse("tmp123456-123456").unwrap();
        assert_eq!(template.device_part(), template);
    }

    #[test]
    fn test_equality_by_canonical_string() {
        assert_eq!(
            Ain::parse("08761 0000434").unwrap(),
            "087610000434".parse::<Ain>().unwrap()
        );
    }

    proptest! {
        #[test]
        fn prop_whitespace_never_changes_canonical_form(digits in "[0-9]{12}", split in 0usize..12) {
            let spaced = format!("{} {}", &digits[..split], &digits[split..]);
            let ain = Ain::parse(&spaced).unwrap();
            prop_assert_eq!(ain.as_str(), digits.as_str());
        }

        #[test]
        fn prop_unit_suffix_accepted(digits in "[0-9]{12}", unit in "[0-9]{1,4}") {
            let raw = format!("{}-{}", digits, unit);
            let ain = Ain::parse(&raw).unwrap();
            prop_assert!(ain.is_unit());
            prop_assert_eq!(ain.as_str(), raw.as_str());
        }
    }
}

//! Plain-text response decoding
//!
//! Each function looks up the command's [`ResponsePolicy`] and applies it.
//! Calling a decoder with a command whose policy does not produce that
//! type is a programming error and reported as a parse error rather than
//! silently decoded with the wrong rules.

use super::{Command, ResponsePolicy};
use crate::error::{ApiError, Result};
use crate::types::{decode_hkr, Ain, TemperatureCelsius};

/// Body the gateway sends when a device has no provider for a function
pub const UNSUPPORTED: &str = "inval";

fn value(body: &str) -> &str {
    body.trim()
}

fn wrong_policy(command: Command, expected: &str) -> ApiError {
    ApiError::ParseError(format!(
        "{} uses the {:?} policy and cannot be decoded as {}",
        command,
        command.policy(),
        expected
    ))
}

fn check_unsupported(command: Command, policy: ResponsePolicy, value: &str) -> Result<()> {
    if policy.intercepts_unsupported() && value == UNSUPPORTED {
        return Err(ApiError::ProviderNotFound(command.switchcmd().to_string()));
    }
    Ok(())
}

/// Decode a `0`/`1` answer
pub fn flag(command: Command, body: &str) -> Result<bool> {
    let policy = command.policy();
    if !matches!(policy, ResponsePolicy::Flag | ResponsePolicy::SentinelFlag) {
        return Err(wrong_policy(command, "a flag"));
    }

    let value = value(body);
    check_unsupported(command, policy, value)?;

    match value {
        "1" => Ok(true),
        "0" => Ok(false),
        "" if policy.empty_is_false() => Ok(false),
        other => Err(ApiError::NumberFormat(format!(
            "{}: '{}' is not a 0/1 flag",
            command, other
        ))),
    }
}

/// Decode an integer answer
pub fn number(command: Command, body: &str) -> Result<i64> {
    let policy = command.policy();
    if !matches!(
        policy,
        ResponsePolicy::SentinelNumber | ResponsePolicy::Number | ResponsePolicy::HkrTemperature
    ) {
        return Err(wrong_policy(command, "a number"));
    }

    let value = value(body);
    check_unsupported(command, policy, value)?;

    value.parse::<i64>().map_err(|e| {
        ApiError::NumberFormat(format!("{}: cannot parse '{}' as integer: {}", command, value, e))
    })
}

/// Decode a deci-Celsius reading (`gettemperature`)
pub fn celsius(command: Command, body: &str) -> Result<TemperatureCelsius> {
    if command.policy() != ResponsePolicy::Number {
        return Err(wrong_policy(command, "a deci-Celsius reading"));
    }
    let deci = number(command, body)?;
    let deci = i32::try_from(deci).map_err(|_| {
        ApiError::NumberFormat(format!("{}: '{}' does not fit a temperature", command, deci))
    })?;
    Ok(TemperatureCelsius::new(deci)?)
}

/// Decode a half-degree thermostat value
pub fn hkr_temperature(command: Command, body: &str) -> Result<TemperatureCelsius> {
    if command.policy() != ResponsePolicy::HkrTemperature {
        return Err(wrong_policy(command, "a thermostat temperature"));
    }
    let wire = number(command, body)?;
    Ok(decode_hkr(wire)?)
}

/// Text answer without its trailing line break
pub fn text(command: Command, body: &str) -> Result<String> {
    if command.policy() != ResponsePolicy::Text {
        return Err(wrong_policy(command, "text"));
    }
    Ok(body.trim_end_matches(['\r', '\n']).to_string())
}

/// Comma separated AIN list; an empty body is an empty list
pub fn ain_list(command: Command, body: &str) -> Result<Vec<Ain>> {
    if command.policy() != ResponsePolicy::AinList {
        return Err(wrong_policy(command, "an AIN list"));
    }

    let value = value(body);
    if value.is_empty() {
        return Ok(Vec::new());
    }

    value
        .split(',')
        .map(|entry| Ain::parse(entry).map_err(ApiError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Command::SetSwitchOn, "1\n", true)]
    #[case(Command::SetSwitchOn, "0\n", false)]
    #[case(Command::SetSwitchOn, "\n", false)]
    #[case(Command::SetSwitchOn, "", false)]
    #[case(Command::SetSwitchOff, "0\n", false)]
    #[case(Command::SetSwitchToggle, "1\n", true)]
    #[case(Command::GetSwitchPresent, "\n", false)]
    #[case(Command::GetSwitchState, "1\n", true)]
    #[case(Command::GetSwitchState, "\n", false)]
    fn test_flag_table(#[case] command: Command, #[case] body: &str, #[case] expected: bool) {
        assert_eq!(flag(command, body).unwrap(), expected);
    }

    #[test]
    fn test_switch_state_inval_is_provider_not_found() {
        assert!(matches!(
            flag(Command::GetSwitchState, "inval\n"),
            Err(ApiError::ProviderNotFound(ref cmd)) if cmd == "getswitchstate"
        ));
    }

    #[test]
    fn test_plain_flag_inval_is_format_error() {
        assert!(matches!(
            flag(Command::SetSwitchOn, "inval\n"),
            Err(ApiError::NumberFormat(_))
        ));
    }

    #[test]
    fn test_power_and_energy() {
        assert_eq!(number(Command::GetSwitchPower, "12340\n").unwrap(), 12340);
        assert_eq!(number(Command::GetSwitchEnergy, "707\n").unwrap(), 707);
    }

    #[test]
    fn test_power_inval_is_provider_not_found() {
        assert!(matches!(
            number(Command::GetSwitchPower, "inval\n"),
            Err(ApiError::ProviderNotFound(_))
        ));
        assert!(matches!(
            number(Command::GetSwitchEnergy, "inval"),
            Err(ApiError::ProviderNotFound(_))
        ));
    }

    #[test]
    fn test_temperature_empty_is_format_error() {
        assert!(matches!(
            celsius(Command::GetTemperature, "\n"),
            Err(ApiError::NumberFormat(_))
        ));
    }

    #[test]
    fn test_temperature_inval_is_not_intercepted() {
        assert!(matches!(
            celsius(Command::GetTemperature, "inval\n"),
            Err(ApiError::NumberFormat(_))
        ));
        assert!(matches!(
            hkr_temperature(Command::GetHkrTsoll, "inval\n"),
            Err(ApiError::NumberFormat(_))
        ));
    }

    #[test]
    fn test_temperature_reading() {
        assert_eq!(celsius(Command::GetTemperature, "225\n").unwrap().value(), 225);
        assert_eq!(celsius(Command::GetTemperature, "-15\n").unwrap().value(), -15);
    }

    #[rstest]
    #[case(Command::GetHkrTsoll, "42\n", 210)]
    #[case(Command::GetHkrKomfort, "253\n", 0)]
    #[case(Command::GetHkrAbsenk, "254\n", 300)]
    #[case(Command::SetHkrTsoll, "40\n", 200)]
    fn test_hkr_values(#[case] command: Command, #[case] body: &str, #[case] deci: i32) {
        assert_eq!(hkr_temperature(command, body).unwrap().value(), deci);
    }

    #[test]
    fn test_hkr_empty_is_format_error() {
        assert!(matches!(
            hkr_temperature(Command::GetHkrKomfort, ""),
            Err(ApiError::NumberFormat(_))
        ));
    }

    #[test]
    fn test_timestamp_echo() {
        assert_eq!(number(Command::SetHkrBoost, "1700003600\n").unwrap(), 1_700_003_600);
        assert_eq!(number(Command::SetHkrWindowOpen, "0\n").unwrap(), 0);
    }

    #[test]
    fn test_text_strips_line_break_only() {
        assert_eq!(text(Command::GetSwitchName, "Living room \n").unwrap(), "Living room ");
        assert_eq!(text(Command::SetName, "Kitchen\r\n").unwrap(), "Kitchen");
    }

    #[test]
    fn test_ain_list() {
        let ains = ain_list(
            Command::GetSwitchList,
            "000000000001,000000000002,000000000003\n",
        )
        .unwrap();
        let strings: Vec<_> = ains.iter().map(|a| a.as_str()).collect();
        assert_eq!(strings, vec!["000000000001", "000000000002", "000000000003"]);
    }

    #[test]
    fn test_ain_list_single_and_empty() {
        assert_eq!(ain_list(Command::GetSwitchList, "000000000001\n").unwrap().len(), 1);
        assert!(ain_list(Command::GetSwitchList, "").unwrap().is_empty());
        assert!(ain_list(Command::GetSwitchList, "\n").unwrap().is_empty());
    }

    #[test]
    fn test_ain_list_rejects_bad_entry() {
        assert!(matches!(
            ain_list(Command::GetSwitchList, "000000000001,12345\n"),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_wrong_policy_is_reported() {
        assert!(matches!(
            flag(Command::GetTemperature, "1"),
            Err(ApiError::ParseError(_))
        ));
        assert!(matches!(
            number(Command::SetSwitchOn, "1"),
            Err(ApiError::ParseError(_))
        ));
        assert!(matches!(
            hkr_temperature(Command::GetTemperature, "42"),
            Err(ApiError::ParseError(_))
        ));
    }
}

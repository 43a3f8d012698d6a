//! Socket operations
//!
//! # Operations
//! - `getswitchlist` - AINs of all sockets
//! - `setswitchon` / `setswitchoff` / `setswitchtoggle` - change the relay
//! - `getswitchstate` / `getswitchpresent` - relay and connection state
//! - `getswitchpower` / `getswitchenergy` - power meter readings
//! - `getswitchname` - display name
//! - `setsimpleonoff` - generic on/off/toggle for any switchable unit

use super::AinRequest;
use crate::aha_operation;
use crate::operation::{decode, CommandRequest, Validate};
use crate::types::{Ain, SimpleOnOff};

// =============================================================================
// LISTING
// =============================================================================

aha_operation! {
    /// AINs of all sockets known to the gateway
    GetSwitchListOperation: GetSwitchList, () => Vec<Ain>,
    build: |req| CommandRequest::new(Self::COMMAND),
    parse: |body| decode::ain_list(Self::COMMAND, body),
}

// =============================================================================
// RELAY
// =============================================================================

aha_operation! {
    /// Switch a socket on; answers the new relay state
    SetSwitchOnOperation: SetSwitchOn, AinRequest => bool,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::flag(Self::COMMAND, body),
}

aha_operation! {
    /// Switch a socket off; answers the new relay state
    SetSwitchOffOperation: SetSwitchOff, AinRequest => bool,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::flag(Self::COMMAND, body),
}

aha_operation! {
    /// Toggle a socket; answers the new relay state
    SetSwitchToggleOperation: SetSwitchToggle, AinRequest => bool,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::flag(Self::COMMAND, body),
}

aha_operation! {
    /// Current relay state; `inval` if the device has no relay
    GetSwitchStateOperation: GetSwitchState, AinRequest => bool,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::flag(Self::COMMAND, body),
}

aha_operation! {
    /// Whether the device is connected to the gateway
    GetSwitchPresentOperation: GetSwitchPresent, AinRequest => bool,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::flag(Self::COMMAND, body),
}

// =============================================================================
// POWER METER
// =============================================================================

aha_operation! {
    /// Current power draw in mW
    GetSwitchPowerOperation: GetSwitchPower, AinRequest => i64,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::number(Self::COMMAND, body),
}

aha_operation! {
    /// Energy consumed since the last reset, in Wh
    GetSwitchEnergyOperation: GetSwitchEnergy, AinRequest => i64,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::number(Self::COMMAND, body),
}

aha_operation! {
    GetSwitchNameOperation: GetSwitchName, AinRequest => String,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::text(Self::COMMAND, body),
}

// =============================================================================
// SIMPLE ON/OFF
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSimpleOnOffRequest {
    pub ain: Ain,
    pub onoff: SimpleOnOff,
}

impl Validate for SetSimpleOnOffRequest {}

aha_operation! {
    /// Switch any unit with the on/off interface
    SetSimpleOnOffOperation: SetSimpleOnOff, SetSimpleOnOffRequest => (),
    build: |req| CommandRequest::new(Self::COMMAND)
        .with_ain(&req.ain)
        .param("onoff", req.onoff.ordinal()),
    parse: |body| Ok(()),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::operation::AhaOperation;
    use crate::types::Sid;

    fn ain() -> Ain {
        Ain::parse("087610000434").unwrap()
    }

    #[test]
    fn test_switch_on_request() {
        let request = SetSwitchOnOperation::build_request(&AinRequest::new(&ain())).unwrap();
        let sid = Sid::invalid();
        assert_eq!(
            request.query(&sid),
            vec![
                ("switchcmd", "setswitchon"),
                ("sid", "0000000000000000"),
                ("ain", "087610000434"),
            ]
        );
    }

    #[test]
    fn test_switch_list_has_no_ain() {
        let request = GetSwitchListOperation::build_request(&()).unwrap();
        assert_eq!(request.ain(), None);
        assert!(request.params().is_empty());
    }

    #[test]
    fn test_relay_responses() {
        assert!(SetSwitchOnOperation::parse_response("1\n").unwrap());
        assert!(!SetSwitchOffOperation::parse_response("0\n").unwrap());
        assert!(!SetSwitchToggleOperation::parse_response("\n").unwrap());
        assert!(!GetSwitchPresentOperation::parse_response("").unwrap());
    }

    #[test]
    fn test_power_meter_unsupported() {
        assert!(matches!(
            GetSwitchPowerOperation::parse_response("inval\n"),
            Err(ApiError::ProviderNotFound(_))
        ));
        assert_eq!(GetSwitchEnergyOperation::parse_response("3456\n").unwrap(), 3456);
    }

    #[test]
    fn test_simple_on_off_sends_ordinal() {
        for (onoff, expected) in [
            (SimpleOnOff::Off, "0"),
            (SimpleOnOff::On, "1"),
            (SimpleOnOff::Toggle, "2"),
        ] {
            let request = SetSimpleOnOffOperation::build_request(&SetSimpleOnOffRequest {
                ain: ain(),
                onoff,
            })
            .unwrap();
            assert_eq!(request.get("onoff"), Some(expected));
        }
    }

    #[test]
    fn test_simple_on_off_ignores_body() {
        assert!(SetSimpleOnOffOperation::parse_response("garbage").is_ok());
    }
}

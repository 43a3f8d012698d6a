//! Thermostat (HKR) and temperature sensor operations
//!
//! # Operations
//! - `gettemperature` - sensor reading in deci-Celsius
//! - `gethkrtsoll` / `gethkrkomfort` / `gethkrabsenk` - setpoints
//! - `sethkrtsoll` - change the setpoint
//! - `sethkrboost` / `sethkrwindowopen` - timed overrides

use super::AinRequest;
use crate::aha_operation;
use crate::error::ApiError;
use crate::operation::{decode, AhaOperation, Command, CommandRequest, Validate, ValidationError};
use crate::types::{encode_hkr, Ain, EndTimestamp, TemperatureCelsius};

// =============================================================================
// READINGS
// =============================================================================

aha_operation! {
    /// Sensor temperature including the configured offset
    GetTemperatureOperation: GetTemperature, AinRequest => TemperatureCelsius,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::celsius(Self::COMMAND, body),
}

aha_operation! {
    /// Current target temperature
    GetHkrTsollOperation: GetHkrTsoll, AinRequest => TemperatureCelsius,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::hkr_temperature(Self::COMMAND, body),
}

aha_operation! {
    /// Comfort temperature from the thermostat's schedule
    GetHkrKomfortOperation: GetHkrKomfort, AinRequest => TemperatureCelsius,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::hkr_temperature(Self::COMMAND, body),
}

aha_operation! {
    /// Economy temperature from the thermostat's schedule
    GetHkrAbsenkOperation: GetHkrAbsenk, AinRequest => TemperatureCelsius,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::hkr_temperature(Self::COMMAND, body),
}

// =============================================================================
// SET TARGET TEMPERATURE (manual implementation, encoding can fail)
// =============================================================================

/// Request to change a thermostat setpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetHkrTsollRequest {
    pub ain: Ain,
    /// Deci-Celsius; `0` turns the radiator off, `300` fully on
    pub temperature: i32,
}

impl SetHkrTsollRequest {
    fn wire_value(&self) -> Result<i64, ValidationError> {
        encode_hkr(TemperatureCelsius::new(self.temperature)?)
    }
}

impl Validate for SetHkrTsollRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        self.wire_value().map(|_| ())
    }
}

/// Change the target temperature; answers the accepted setpoint
#[derive(Debug, Clone, Copy)]
pub struct SetHkrTsollOperation;

impl AhaOperation for SetHkrTsollOperation {
    type Request = SetHkrTsollRequest;
    type Response = TemperatureCelsius;

    const COMMAND: Command = Command::SetHkrTsoll;

    fn build_request(request: &Self::Request) -> Result<CommandRequest, ValidationError> {
        let wire = request.wire_value()?;
        Ok(CommandRequest::new(Self::COMMAND)
            .with_ain(&request.ain)
            .param("param", wire))
    }

    fn parse_response(body: &str) -> Result<Self::Response, ApiError> {
        decode::hkr_temperature(Self::COMMAND, body)
    }
}

// =============================================================================
// TIMED OVERRIDES
// =============================================================================

/// Request for boost or window-open mode
///
/// The end time is validated against the session clock when the
/// [`EndTimestamp`] is created, so the request itself is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetTimedHkrRequest {
    pub ain: Ain,
    pub end: EndTimestamp,
}

impl Validate for SetTimedHkrRequest {}

aha_operation! {
    /// Boost mode until `end`; answers the accepted end time
    SetHkrBoostOperation: SetHkrBoost, SetTimedHkrRequest => i64,
    build: |req| CommandRequest::new(Self::COMMAND)
        .with_ain(&req.ain)
        .param("endtimestamp", req.end.value()),
    parse: |body| decode::number(Self::COMMAND, body),
}

aha_operation! {
    /// Window-open mode until `end`; answers the accepted end time
    SetHkrWindowOpenOperation: SetHkrWindowOpen, SetTimedHkrRequest => i64,
    build: |req| CommandRequest::new(Self::COMMAND)
        .with_ain(&req.ain)
        .param("endtimestamp", req.end.value()),
    parse: |body| decode::number(Self::COMMAND, body),
}

//! Device listings, statistics and device-wide settings
//!
//! # Operations
//! - `getdevicelistinfos` - every device and group with its state
//! - `getdeviceinfos` - the same for a single device
//! - `getbasicdevicestats` - sensor history
//! - `setblind` - drive a blind
//! - `setname` - rename a device
//! - `startulesubscription` / `getsubscriptionstate` - ULE device pairing

use super::AinRequest;
use crate::aha_operation;
use crate::model::{Device, DeviceList, DeviceStats, SubscriptionState};
use crate::operation::{decode, CommandRequest, Validate, ValidationError};
use crate::types::{Ain, BlindTarget};
use crate::xml;

/// Longest name the gateway stores
pub const MAX_NAME_LENGTH: usize = 40;

// =============================================================================
// LISTINGS
// =============================================================================

aha_operation! {
    GetDeviceListInfosOperation: GetDeviceListInfos, () => DeviceList,
    build: |req| CommandRequest::new(Self::COMMAND),
    parse: |body| xml::device_list(body),
}

aha_operation! {
    GetDeviceInfosOperation: GetDeviceInfos, AinRequest => Device,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| xml::device(body),
}

aha_operation! {
    /// Temperature, voltage, power, energy and humidity history
    GetBasicDeviceStatsOperation: GetBasicDeviceStats, AinRequest => DeviceStats,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| xml::device_stats(body),
}

// =============================================================================
// BLIND
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBlindRequest {
    pub ain: Ain,
    pub target: BlindTarget,
}

impl Validate for SetBlindRequest {}

aha_operation! {
    SetBlindOperation: SetBlind, SetBlindRequest => (),
    build: |req| CommandRequest::new(Self::COMMAND)
        .with_ain(&req.ain)
        .param("target", req.target.as_param()),
    parse: |body| Ok(()),
}

// =============================================================================
// NAME
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNameRequest {
    pub ain: Ain,
    pub name: String,
}

impl Validate for SetNameRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::invalid_value("name", &self.name, "must not be empty"));
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::invalid_value(
                "name",
                &self.name,
                format!("must be at most {} characters", MAX_NAME_LENGTH),
            ));
        }
        Ok(())
    }
}

aha_operation! {
    /// Rename a device; answers the stored name
    SetNameOperation: SetName, SetNameRequest => String,
    build: |req| CommandRequest::new(Self::COMMAND)
        .with_ain(&req.ain)
        .param("name", &req.name),
    parse: |body| decode::text(Self::COMMAND, body),
}

// =============================================================================
// ULE SUBSCRIPTION
// =============================================================================

aha_operation! {
    /// Put the gateway into pairing mode for a new DECT-ULE device
    StartUleSubscriptionOperation: StartUleSubscription, () => (),
    build: |req| CommandRequest::new(Self::COMMAND),
    parse: |body| Ok(()),
}

aha_operation! {
    GetSubscriptionStateOperation: GetSubscriptionState, () => SubscriptionState,
    build: |req| CommandRequest::new(Self::COMMAND),
    parse: |body| xml::subscription_state(body),
}

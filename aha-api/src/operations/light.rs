//! Dimmer and color bulb operations
//!
//! # Operations
//! - `setlevel` / `setlevelpercentage` - brightness
//! - `setcolor` - hue and saturation
//! - `setcolortemperature` - white color temperature
//! - `getcolordefaults` - the color presets the bulbs accept

use crate::aha_operation;
use crate::model::ColorDefaults;
use crate::operation::{CommandRequest, Validate, ValidationError};
use crate::types::{
    Ain, DurationMs100, Hue, Level, LevelPercentage, Saturation, TemperatureKelvin,
};
use crate::xml;

// =============================================================================
// LEVEL
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetLevelRequest {
    pub ain: Ain,
    /// 0 to 255
    pub level: i32,
}

impl Validate for SetLevelRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Level::new(self.level)?;
        Ok(())
    }
}

aha_operation! {
    SetLevelOperation: SetLevel, SetLevelRequest => (),
    build: |req| CommandRequest::new(Self::COMMAND)
        .with_ain(&req.ain)
        .param("level", req.level),
    parse: |body| Ok(()),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetLevelPercentageRequest {
    pub ain: Ain,
    /// 0 to 100
    pub level: i32,
}

impl Validate for SetLevelPercentageRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        LevelPercentage::new(self.level)?;
        Ok(())
    }
}

aha_operation! {
    SetLevelPercentageOperation: SetLevelPercentage, SetLevelPercentageRequest => (),
    build: |req| CommandRequest::new(Self::COMMAND)
        .with_ain(&req.ain)
        .param("level", req.level),
    parse: |body| Ok(()),
}

// =============================================================================
// COLOR
// =============================================================================

/// Request to set hue and saturation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetColorRequest {
    pub ain: Ain,
    /// Degrees, 0 to 359
    pub hue: i32,
    /// 0 to 255
    pub saturation: i32,
    /// Transition time in 100 ms units
    pub duration: i64,
}

impl Validate for SetColorRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Hue::new(self.hue)?;
        Saturation::new(self.saturation)?;
        DurationMs100::new(self.duration)?;
        Ok(())
    }
}

aha_operation! {
    SetColorOperation: SetColor, SetColorRequest => (),
    build: |req| CommandRequest::new(Self::COMMAND)
        .with_ain(&req.ain)
        .param("hue", req.hue)
        .param("saturation", req.saturation)
        .param("duration", req.duration),
    parse: |body| Ok(()),
}

/// Request to set a white color temperature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetColorTemperatureRequest {
    pub ain: Ain,
    /// Kelvin, 2700 to 6500
    pub temperature: i32,
    /// Transition time in 100 ms units
    pub duration: i64,
}

impl Validate for SetColorTemperatureRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        TemperatureKelvin::new(self.temperature)?;
        DurationMs100::new(self.duration)?;
        Ok(())
    }
}

aha_operation! {
    SetColorTemperatureOperation: SetColorTemperature, SetColorTemperatureRequest => (),
    build: |req| CommandRequest::new(Self::COMMAND)
        .with_ain(&req.ain)
        .param("temperature", req.temperature)
        .param("duration", req.duration),
    parse: |body| Ok(()),
}

aha_operation! {
    /// Hue/saturation presets and color temperatures the bulbs accept
    GetColorDefaultsOperation: GetColorDefaults, () => ColorDefaults,
    build: |req| CommandRequest::new(Self::COMMAND),
    parse: |body| xml::color_defaults(body),
}

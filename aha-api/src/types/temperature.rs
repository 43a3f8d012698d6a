//! Thermostat (HKR) half-degree wire encoding
//!
//! Thermostat temperatures travel as integers in half-degree steps
//! (`42` is 21.0 °C) with two reserved values: `253` switches the radiator
//! off and `254` opens it fully. Internally they are deci-Celsius, with the
//! sentinels mapped onto `0` and `300`.

use super::TemperatureCelsius;
use crate::operation::ValidationError;

/// Wire value for "radiator off"
pub const HKR_OFF: i64 = 253;
/// Wire value for "radiator fully on"
pub const HKR_ON: i64 = 254;

/// Deci-Celsius value standing in for [`HKR_OFF`]
pub const HKR_OFF_CELSIUS: i32 = 0;
/// Deci-Celsius value standing in for [`HKR_ON`]
pub const HKR_ON_CELSIUS: i32 = 300;

/// Lowest settable setpoint (8.0 °C)
pub const HKR_SETPOINT_MIN: i32 = 80;
/// Highest settable setpoint (28.0 °C)
pub const HKR_SETPOINT_MAX: i32 = 280;

/// Decode a wire value into deci-Celsius
pub fn decode_hkr(wire: i64) -> Result<TemperatureCelsius, ValidationError> {
    let deci = match wire {
        HKR_OFF => i64::from(HKR_OFF_CELSIUS),
        HKR_ON => i64::from(HKR_ON_CELSIUS),
        v => v.saturating_mul(10) / 2,
    };
    let deci = i32::try_from(deci).map_err(|_| {
        ValidationError::range_error(
            "temperature",
            TemperatureCelsius::MIN,
            TemperatureCelsius::MAX,
            deci,
        )
    })?;
    TemperatureCelsius::new(deci)
}

/// Encode a setpoint for `sethkrtsoll`
///
/// Besides the two sentinels only 8.0 to 28.0 °C are accepted.
pub fn encode_hkr(temperature: TemperatureCelsius) -> Result<i64, ValidationError> {
    match temperature.value() {
        HKR_OFF_CELSIUS => Ok(HKR_OFF),
        HKR_ON_CELSIUS => Ok(HKR_ON),
        t if (HKR_SETPOINT_MIN..=HKR_SETPOINT_MAX).contains(&t) => Ok(i64::from(t) * 2 / 10),
        t => Err(ValidationError::range_error(
            "temperature",
            HKR_SETPOINT_MIN,
            HKR_SETPOINT_MAX,
            t,
        )),
    }
}

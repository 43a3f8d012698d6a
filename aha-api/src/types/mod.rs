//! Identifiers and validated scalar values

mod ain;
mod codes;
mod scalar;
mod sid;
mod temperature;
mod time;

pub use ain::Ain;
pub use codes::{ApplyMask, BlindTarget, Function, SimpleOnOff, SubscriptionCode};
pub use scalar::{
    DurationMs100, Hue, Level, LevelPercentage, Saturation, TemperatureCelsius, TemperatureKelvin,
};
pub use sid::Sid;
pub use temperature::{decode_hkr, encode_hkr, HKR_OFF, HKR_ON};
pub use time::{Clock, EndTimestamp, FixedClock, SystemClock};

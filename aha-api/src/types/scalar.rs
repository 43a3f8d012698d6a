//! Range-validated command parameters

use std::fmt;

use crate::operation::ValidationError;

/// Generate a newtype around a primitive that only admits `MIN..=MAX`
macro_rules! ranged_scalar {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty), $parameter:literal, $min:expr, $max:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name($inner);

        impl $name {
            pub const MIN: $inner = $min;
            pub const MAX: $inner = $max;

            pub fn new(value: $inner) -> Result<Self, ValidationError> {
                if (Self::MIN..=Self::MAX).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err(ValidationError::range_error($parameter, Self::MIN, Self::MAX, value))
                }
            }

            pub fn value(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<$inner> for $name {
            type Error = ValidationError;

            fn try_from(value: $inner) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

ranged_scalar!(
    /// Temperature in tenths of a degree Celsius
    ///
    /// The bound is physical (absolute zero up to 1000 °C). Thermostat
    /// setpoints have a much narrower domain that is checked only when a
    /// setpoint is encoded, see [`crate::types::encode_hkr`].
    TemperatureCelsius(i32), "temperature", -2731, 10_000
);

ranged_scalar!(
    /// Color hue in degrees
    Hue(i32), "hue", 0, 359
);

ranged_scalar!(
    /// Color saturation
    Saturation(i32), "saturation", 0, 255
);

ranged_scalar!(
    /// White color temperature in Kelvin
    TemperatureKelvin(i32), "temperature", 2700, 6500
);

ranged_scalar!(
    /// Dimming level on the gateway's 0-255 scale
    Level(i32), "level", 0, 255
);

ranged_scalar!(
    /// Dimming level in percent
    LevelPercentage(i32), "level", 0, 100
);

ranged_scalar!(
    /// Transition time in units of 100 ms
    DurationMs100(i64), "duration", 0, u32::MAX as i64
);

impl TemperatureCelsius {
    /// Whole and fractional degrees, e.g. `215` is 21.5 °C
    pub fn as_celsius(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

//! Typed AHA operations, one per `switchcmd`
//!
//! Operations are grouped by the device family they address:
//! - [`switch`]: sockets and simple on/off actors
//! - [`hkr`]: thermostats and temperature sensors
//! - [`light`]: dimmers and color bulbs
//! - [`device`]: listings, statistics, blinds, naming and ULE pairing
//! - [`template`]: templates and triggers

pub mod device;
pub mod hkr;
pub mod light;
pub mod switch;
pub mod template;

pub use device::*;
pub use hkr::*;
pub use light::*;
pub use switch::*;
pub use template::*;

use crate::operation::Validate;
use crate::types::Ain;

/// Request addressing one device, unit or group
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AinRequest {
    pub ain: Ain,
}

impl AinRequest {
    pub fn new(ain: &Ain) -> Self {
        Self { ain: ain.clone() }
    }
}

impl Validate for AinRequest {}

impl From<Ain> for AinRequest {
    fn from(ain: Ain) -> Self {
        Self { ain }
    }
}

//! Typed client for the AHA home-automation HTTP interface
//!
//! The gateway exposes its smart-home devices (sockets, thermostats,
//! dimmers, color bulbs, blinds) through a plain HTTP command endpoint. This
//! crate logs in with the challenge-response handshake, sends one GET per
//! command and decodes the gateway's plain-text and XML answers into typed
//! values. HTTP itself is handled by the `aha-http` crate.
//!
//! ```rust,ignore
//! use aha_api::{AhaSession, Ain, SessionConfig};
//!
//! let mut session = AhaSession::new(SessionConfig::from_env()?);
//! if !session.logon()? {
//!     return Err("login rejected".into());
//! }
//!
//! let socket = Ain::parse("08761 0000434")?;
//! session.set_switch_on(&socket)?;
//! println!("{} mW", session.get_switch_power(&socket)?);
//!
//! let devices = session.get_device_list_infos()?;
//! for device in &devices.devices {
//!     println!("{} {:?}", device.identifier, device.name);
//! }
//! session.logoff()?;
//! ```
//!
//! Every operation is also available as a type implementing
//! [`AhaOperation`], executed with [`AhaSession::execute`].

pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod operation;
pub mod operations;
pub mod session;
pub mod types;
pub mod xml;

pub use config::SessionConfig;
pub use error::{ApiError, Result};
pub use operation::{AhaOperation, Command, CommandRequest, ResponsePolicy, Validate, ValidationError};
pub use session::AhaSession;
pub use types::{
    Ain, BlindTarget, Clock, EndTimestamp, FixedClock, Function, SimpleOnOff, Sid, SystemClock,
    TemperatureCelsius,
};

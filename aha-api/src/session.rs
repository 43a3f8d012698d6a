use std::fmt;

use aha_http::{AhaHttpClient, HttpTransport};
use chrono::{DateTime, Utc};

use crate::auth;
use crate::config::SessionConfig;
use crate::error::{ApiError, Result};
use crate::model::{ColorDefaults, Device, DeviceList, DeviceStats, SubscriptionState, Template, Trigger};
use crate::operation::{AhaOperation, CommandRequest, ValidationError};
use crate::operations::*;
use crate::types::{
    Ain, BlindTarget, Clock, EndTimestamp, SimpleOnOff, Sid, SystemClock, TemperatureCelsius,
};

/// A logged-in connection to one gateway
///
/// The session owns the session id and hands it to every command. It is a
/// single-owner object: every call that talks to the gateway takes
/// `&mut self`, and nothing is shared between sessions. A session over a
/// `Send` transport can be moved to another thread.
///
/// # Example
///
/// ```rust,ignore
/// use aha_api::{AhaSession, SessionConfig};
///
/// let config = SessionConfig::new("fritz.box", 80).with_credentials(Some("smarthome"), "secret");
/// let mut session = AhaSession::new(config);
/// if session.logon()? {
///     for ain in session.get_switch_list()? {
///         println!("{}: {} mW", ain, session.get_switch_power(&ain)?);
///     }
///     session.logoff()?;
/// }
/// ```
pub struct AhaSession<T: HttpTransport = AhaHttpClient> {
    config: SessionConfig,
    transport: T,
    sid: Sid,
    clock: Box<dyn Clock>,
    last_access: Option<DateTime<Utc>>,
}

impl AhaSession<AhaHttpClient> {
    /// Session over the default `ureq` transport, using the configured timeouts
    pub fn new(config: SessionConfig) -> Self {
        let transport = AhaHttpClient::with_timeouts(config.connect_timeout, config.read_timeout);
        Self::with_transport(config, transport)
    }

    /// Session configured from `AHA_*` environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(SessionConfig::from_env()?))
    }
}

impl<T: HttpTransport> AhaSession<T> {
    pub fn with_transport(config: SessionConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            sid: Sid::invalid(),
            clock: Box::new(SystemClock),
            last_access: None,
        }
    }

    /// Replace the clock used for end-time validation and access tracking
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // SESSION
    // =========================================================================

    /// Log in; `Ok(false)` when the gateway rejected the credentials
    pub fn logon(&mut self) -> Result<bool> {
        self.sid = Sid::invalid();
        let sid = auth::login(&self.transport, &self.config)?;
        self.sid = sid;
        if self.sid.is_valid_session() {
            self.last_access = Some(self.clock.now());
        }
        Ok(self.sid.is_valid_session())
    }

    /// Log out; the local session id is dropped even if the request fails
    pub fn logoff(&mut self) -> Result<()> {
        let sid = std::mem::replace(&mut self.sid, Sid::invalid());
        auth::logout(&self.transport, &self.config, &sid)
    }

    pub fn has_valid_session(&self) -> bool {
        self.sid.is_valid_session()
    }

    pub fn sid(&self) -> &Sid {
        &self.sid
    }

    /// Time of the last successful exchange with the gateway
    pub fn last_access(&self) -> Option<DateTime<Utc>> {
        self.last_access
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Send one command and return the raw body
    ///
    /// Commands that address a single device are rejected without a round
    /// trip when the request carries no `ain`.
    pub fn dispatch(&mut self, request: &CommandRequest) -> Result<String> {
        let command = request.command();
        if command.requires_ain() && request.ain().is_none() {
            return Err(ValidationError::invalid_value(
                "ain",
                "",
                format!("{} addresses a single device", command),
            )
            .into());
        }

        tracing::debug!(
            switchcmd = command.switchcmd(),
            ain = request.ain().unwrap_or(""),
            "dispatching command"
        );

        let url = self.config.command_url();
        let response = self.transport.get(&url, &request.query(&self.sid))?;
        if !response.is_success() {
            tracing::debug!(
                switchcmd = command.switchcmd(),
                status = response.status,
                "command failed"
            );
            return Err(ApiError::HttpStatus(response.status));
        }

        self.last_access = Some(self.clock.now());
        Ok(response.body)
    }

    /// Validate, send and decode one operation
    pub fn execute<Op: AhaOperation>(&mut self, request: &Op::Request) -> Result<Op::Response> {
        let command_request = Op::build_request(request)?;
        let body = self.dispatch(&command_request)?;
        Op::parse_response(&body)
    }

    fn end_timestamp(&self, value: i64) -> Result<EndTimestamp> {
        Ok(EndTimestamp::new(value, self.clock.as_ref())?)
    }

    // =========================================================================
    // SWITCH
    // =========================================================================

    pub fn get_switch_list(&mut self) -> Result<Vec<Ain>> {
        self.execute::<GetSwitchListOperation>(&())
    }

    pub fn set_switch_on(&mut self, ain: &Ain) -> Result<bool> {
        self.execute::<SetSwitchOnOperation>(&AinRequest::new(ain))
    }

    pub fn set_switch_off(&mut self, ain: &Ain) -> Result<bool> {
        self.execute::<SetSwitchOffOperation>(&AinRequest::new(ain))
    }

    pub fn set_switch_toggle(&mut self, ain: &Ain) -> Result<bool> {
        self.execute::<SetSwitchToggleOperation>(&AinRequest::new(ain))
    }

    /// Relay state; [`ApiError::ProviderNotFound`] if the device has no relay
    pub fn get_switch_state(&mut self, ain: &Ain) -> Result<bool> {
        self.execute::<GetSwitchStateOperation>(&AinRequest::new(ain))
    }

    pub fn is_switch_present(&mut self, ain: &Ain) -> Result<bool> {
        self.execute::<GetSwitchPresentOperation>(&AinRequest::new(ain))
    }

    /// Power in mW
    pub fn get_switch_power(&mut self, ain: &Ain) -> Result<i64> {
        self.execute::<GetSwitchPowerOperation>(&AinRequest::new(ain))
    }

    /// Energy in Wh
    pub fn get_switch_energy(&mut self, ain: &Ain) -> Result<i64> {
        self.execute::<GetSwitchEnergyOperation>(&AinRequest::new(ain))
    }

    pub fn get_switch_name(&mut self, ain: &Ain) -> Result<String> {
        self.execute::<GetSwitchNameOperation>(&AinRequest::new(ain))
    }

    pub fn set_simple_on_off(&mut self, ain: &Ain, onoff: SimpleOnOff) -> Result<()> {
        self.execute::<SetSimpleOnOffOperation>(&SetSimpleOnOffRequest {
            ain: ain.clone(),
            onoff,
        })
    }

    // =========================================================================
    // DEVICES
    // =========================================================================

    pub fn get_device_list_infos(&mut self) -> Result<DeviceList> {
        self.execute::<GetDeviceListInfosOperation>(&())
    }

    pub fn get_device_infos(&mut self, ain: &Ain) -> Result<Device> {
        self.execute::<GetDeviceInfosOperation>(&AinRequest::new(ain))
    }

    pub fn get_basic_device_stats(&mut self, ain: &Ain) -> Result<DeviceStats> {
        self.execute::<GetBasicDeviceStatsOperation>(&AinRequest::new(ain))
    }

    pub fn set_blind(&mut self, ain: &Ain, target: BlindTarget) -> Result<()> {
        self.execute::<SetBlindOperation>(&SetBlindRequest {
            ain: ain.clone(),
            target,
        })
    }

    /// Rename a device; returns the name the gateway stored
    pub fn set_name(&mut self, ain: &Ain, name: &str) -> Result<String> {
        self.execute::<SetNameOperation>(&SetNameRequest {
            ain: ain.clone(),
            name: name.to_string(),
        })
    }

    pub fn start_ule_subscription(&mut self) -> Result<()> {
        self.execute::<StartUleSubscriptionOperation>(&())
    }

    pub fn get_subscription_state(&mut self) -> Result<SubscriptionState> {
        self.execute::<GetSubscriptionStateOperation>(&())
    }

    // =========================================================================
    // THERMOSTAT
    // =========================================================================

    pub fn get_temperature(&mut self, ain: &Ain) -> Result<TemperatureCelsius> {
        self.execute::<GetTemperatureOperation>(&AinRequest::new(ain))
    }

    pub fn get_hkrt_soll(&mut self, ain: &Ain) -> Result<TemperatureCelsius> {
        self.execute::<GetHkrTsollOperation>(&AinRequest::new(ain))
    }

    pub fn get_hkr_komfort(&mut self, ain: &Ain) -> Result<TemperatureCelsius> {
        self.execute::<GetHkrKomfortOperation>(&AinRequest::new(ain))
    }

    pub fn get_hkr_absenk(&mut self, ain: &Ain) -> Result<TemperatureCelsius> {
        self.execute::<GetHkrAbsenkOperation>(&AinRequest::new(ain))
    }

    /// Set the target temperature in deci-Celsius
    ///
    /// `0` turns the radiator off and `300` fully on; anything else must lie
    /// between 80 and 280.
    pub fn set_hkrt_soll(&mut self, ain: &Ain, temperature: i32) -> Result<TemperatureCelsius> {
        self.execute::<SetHkrTsollOperation>(&SetHkrTsollRequest {
            ain: ain.clone(),
            temperature,
        })
    }

    /// Boost until `end_timestamp` (Unix time, at most 24 h ahead; `0` ends it)
    pub fn set_hkr_boost(&mut self, ain: &Ain, end_timestamp: i64) -> Result<i64> {
        let end = self.end_timestamp(end_timestamp)?;
        self.execute::<SetHkrBoostOperation>(&SetTimedHkrRequest {
            ain: ain.clone(),
            end,
        })
    }

    /// Window-open mode until `end_timestamp` (Unix time, at most 24 h ahead;
    /// `0` ends it)
    pub fn set_hkr_window_open(&mut self, ain: &Ain, end_timestamp: i64) -> Result<i64> {
        let end = self.end_timestamp(end_timestamp)?;
        self.execute::<SetHkrWindowOpenOperation>(&SetTimedHkrRequest {
            ain: ain.clone(),
            end,
        })
    }

    // =========================================================================
    // LIGHT
    // =========================================================================

    pub fn set_level(&mut self, ain: &Ain, level: i32) -> Result<()> {
        self.execute::<SetLevelOperation>(&SetLevelRequest {
            ain: ain.clone(),
            level,
        })
    }

    pub fn set_level_percentage(&mut self, ain: &Ain, level: i32) -> Result<()> {
        self.execute::<SetLevelPercentageOperation>(&SetLevelPercentageRequest {
            ain: ain.clone(),
            level,
        })
    }

    /// `duration` is in 100 ms units
    pub fn set_color(&mut self, ain: &Ain, hue: i32, saturation: i32, duration: i64) -> Result<()> {
        self.execute::<SetColorOperation>(&SetColorRequest {
            ain: ain.clone(),
            hue,
            saturation,
            duration,
        })
    }

    /// `temperature` in Kelvin, `duration` in 100 ms units
    pub fn set_color_temperature(&mut self, ain: &Ain, temperature: i32, duration: i64) -> Result<()> {
        self.execute::<SetColorTemperatureOperation>(&SetColorTemperatureRequest {
            ain: ain.clone(),
            temperature,
            duration,
        })
    }

    pub fn get_color_defaults(&mut self) -> Result<ColorDefaults> {
        self.execute::<GetColorDefaultsOperation>(&())
    }

    // =========================================================================
    // TEMPLATES AND TRIGGERS
    // =========================================================================

    pub fn get_template_list_infos(&mut self) -> Result<Vec<Template>> {
        self.execute::<GetTemplateListInfosOperation>(&())
    }

    pub fn apply_template(&mut self, ain: &Ain) -> Result<bool> {
        self.execute::<ApplyTemplateOperation>(&ApplyTemplateRequest { ain: ain.clone() })
    }

    pub fn get_trigger_list_infos(&mut self) -> Result<Vec<Trigger>> {
        self.execute::<GetTriggerListInfosOperation>(&())
    }

    pub fn set_trigger_active(&mut self, identifier: &str, active: bool) -> Result<()> {
        self.execute::<SetTriggerActiveOperation>(&SetTriggerActiveRequest {
            identifier: identifier.to_string(),
            active,
        })
    }
}

impl<T: HttpTransport> fmt::Debug for AhaSession<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AhaSession")
            .field("config", &self.config)
            .field("has_valid_session", &self.sid.is_valid_session())
            .field("last_access", &self.last_access)
            .finish_non_exhaustive()
    }
}

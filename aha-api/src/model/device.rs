use crate::types::{Ain, Function, TemperatureCelsius};

/// Relay of a socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    pub state: Option<bool>,
    /// `auto` when driven by a schedule, `manuell` otherwise
    pub mode: Option<String>,
    /// Switching locked through the gateway UI or API
    pub lock: Option<bool>,
    /// Switching locked on the device's own button
    pub device_lock: Option<bool>,
}

/// Generic on/off interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnOffState {
    pub state: Option<bool>,
}

/// Power meter readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Powermeter {
    /// mV
    pub voltage: Option<i64>,
    /// mW
    pub power: Option<i64>,
    /// Wh
    pub energy: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Temperature {
    /// Reading including the offset
    pub celsius: Option<TemperatureCelsius>,
    pub offset: Option<TemperatureCelsius>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Humidity {
    /// Percent
    pub rel_humidity: Option<i64>,
}

/// Next scheduled setpoint change of a thermostat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextChange {
    /// Unix time of the change
    pub end_period: Option<i64>,
    pub tchange: Option<TemperatureCelsius>,
}

/// Thermostat state
///
/// Temperatures are decoded from the half-degree wire scale, so an "off"
/// setpoint reads as 0 and a "fully on" setpoint as 300.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hkr {
    pub tist: Option<TemperatureCelsius>,
    pub tsoll: Option<TemperatureCelsius>,
    pub absenk: Option<TemperatureCelsius>,
    pub komfort: Option<TemperatureCelsius>,
    pub lock: Option<bool>,
    pub device_lock: Option<bool>,
    pub error_code: Option<i64>,
    pub window_open_active: Option<bool>,
    pub window_open_active_end_time: Option<i64>,
    pub boost_active: Option<bool>,
    pub boost_active_end_time: Option<i64>,
    pub battery_low: Option<bool>,
    pub battery: Option<i64>,
    pub next_change: Option<NextChange>,
    pub summer_active: Option<bool>,
    pub holiday_active: Option<bool>,
    pub adaptive_heating_active: Option<bool>,
    pub adaptive_heating_running: Option<bool>,
}

/// A button of a wall switch or remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub identifier: Ain,
    pub id: i64,
    pub name: Option<String>,
    pub last_pressed_timestamp: Option<i64>,
}

/// Dimmer level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelControl {
    /// 0 to 255
    pub level: Option<i64>,
    pub level_percentage: Option<i64>,
}

/// Color bulb state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorControl {
    pub supported_modes: Option<u32>,
    pub current_mode: Option<u32>,
    pub full_color_support: Option<bool>,
    pub mapped: Option<bool>,
    pub hue: Option<i64>,
    pub saturation: Option<i64>,
    pub unmapped_hue: Option<i64>,
    pub unmapped_saturation: Option<i64>,
    /// Kelvin
    pub temperature: Option<i64>,
}

/// HAN-FUN unit description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtsiUnitInfo {
    pub etsi_device_id: Option<i64>,
    pub unit_type: Option<i64>,
    pub interfaces: Vec<i64>,
}

/// Alarm sensor state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub state: Option<i64>,
    pub last_alert_change_timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blind {
    pub end_positions_set: Option<bool>,
    pub mode: Option<String>,
}

/// Members of a device group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    pub master_device_id: Option<i64>,
    /// Internal `id`s of the member devices
    pub members: Vec<i64>,
}

/// One `<device>` entry
///
/// Sub-structures are `None` when the device does not report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub identifier: Ain,
    pub id: i64,
    pub function_bitmask: u32,
    pub fw_version: String,
    pub manufacturer: Option<String>,
    pub product_name: Option<String>,
    pub present: Option<bool>,
    pub tx_busy: Option<bool>,
    pub name: Option<String>,
    pub battery: Option<i64>,
    pub battery_low: Option<bool>,
    pub switch: Option<Switch>,
    pub simple_on_off: Option<OnOffState>,
    pub powermeter: Option<Powermeter>,
    pub temperature: Option<Temperature>,
    pub humidity: Option<Humidity>,
    pub hkr: Option<Hkr>,
    pub buttons: Vec<Button>,
    pub level_control: Option<LevelControl>,
    pub color_control: Option<ColorControl>,
    pub etsi_unit_info: Option<EtsiUnitInfo>,
    pub alert: Option<Alert>,
    pub blind: Option<Blind>,
}

impl Device {
    pub fn has_function(&self, function: Function) -> bool {
        function.is_set(self.function_bitmask)
    }
}

/// One `<group>` entry
///
/// Group identifiers (`65:3A:18-900`, `grp303E4F-3F7D3A48D`) do not follow
/// the AIN grammar and are kept as whitespace-free strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub identifier: String,
    pub id: i64,
    pub function_bitmask: u32,
    pub fw_version: String,
    pub manufacturer: Option<String>,
    pub product_name: Option<String>,
    pub present: Option<bool>,
    pub tx_busy: Option<bool>,
    pub name: Option<String>,
    pub switch: Option<Switch>,
    pub simple_on_off: Option<OnOffState>,
    pub powermeter: Option<Powermeter>,
    pub hkr: Option<Hkr>,
    pub level_control: Option<LevelControl>,
    pub color_control: Option<ColorControl>,
    pub blind: Option<Blind>,
    pub group_info: Option<GroupInfo>,
}

impl Group {
    pub fn has_function(&self, function: Function) -> bool {
        function.is_set(self.function_bitmask)
    }
}

/// Result of `getdevicelistinfos`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceList {
    pub version: Option<String>,
    pub firmware_version: Option<String>,
    pub devices: Vec<Device>,
    pub groups: Vec<Group>,
}

impl DeviceList {
    pub fn device(&self, ain: &Ain) -> Option<&Device> {
        self.devices.iter().find(|d| &d.identifier == ain)
    }

    /// Devices reporting `function` in their bitmask
    pub fn with_function(&self, function: Function) -> impl Iterator<Item = &Device> {
        self.devices.iter().filter(move |d| d.has_function(function))
    }
}

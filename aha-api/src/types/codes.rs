//! Small code tables used by commands and the XML mapper

use std::fmt;

/// Target of `setblind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlindTarget {
    Close,
    Open,
    Stop,
}

impl BlindTarget {
    pub fn as_param(self) -> &'static str {
        match self {
            BlindTarget::Close => "close",
            BlindTarget::Open => "open",
            BlindTarget::Stop => "stop",
        }
    }
}

impl fmt::Display for BlindTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Target of `setsimpleonoff`, sent as its ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleOnOff {
    Off = 0,
    On = 1,
    Toggle = 2,
}

impl SimpleOnOff {
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// State reported by `getsubscriptionstate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionCode {
    /// No registration running
    Idle,
    /// A registration is in progress
    Running,
    /// The last registration timed out
    Timeout,
    /// The last registration failed
    Error,
}

impl SubscriptionCode {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(SubscriptionCode::Idle),
            1 => Some(SubscriptionCode::Running),
            2 => Some(SubscriptionCode::Timeout),
            3 => Some(SubscriptionCode::Error),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            SubscriptionCode::Idle => 0,
            SubscriptionCode::Running => 1,
            SubscriptionCode::Timeout => 2,
            SubscriptionCode::Error => 3,
        }
    }
}

/// Bits of a device's `functionbitmask`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    HanFunDevice,
    Light,
    Alarm,
    Button,
    Thermostat,
    EnergyMeter,
    TemperatureSensor,
    SwitchSocket,
    DectRepeater,
    Microphone,
    HanFunUnit,
    SwitchableDevice,
    DimmableDevice,
    ColorDevice,
    Blind,
    HumiditySensor,
}

impl Function {
    pub fn bit(self) -> u32 {
        let position = match self {
            Function::HanFunDevice => 0,
            Function::Light => 2,
            Function::Alarm => 4,
            Function::Button => 5,
            Function::Thermostat => 6,
            Function::EnergyMeter => 7,
            Function::TemperatureSensor => 8,
            Function::SwitchSocket => 9,
            Function::DectRepeater => 10,
            Function::Microphone => 11,
            Function::HanFunUnit => 13,
            Function::SwitchableDevice => 15,
            Function::DimmableDevice => 16,
            Function::ColorDevice => 17,
            Function::Blind => 18,
            Function::HumiditySensor => 20,
        };
        1 << position
    }

    pub fn is_set(self, mask: u32) -> bool {
        mask & self.bit() != 0
    }
}

/// Which settings a template applies
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApplyMask {
    HkrSummer,
    HkrTemperature,
    HkrHolidays,
    HkrTimeTable,
    RelayManual,
    RelayAutomatic,
    Level,
    Color,
    DialHelper,
    SunSimulation,
    SubTemplates,
    MainWifi,
    GuestWifi,
    Other(String),
}

impl ApplyMask {
    /// Map an element name from `<applymask>` onto a mask entry
    pub fn from_element_name(name: &str) -> Self {
        match name {
            "hkr_summer" => ApplyMask::HkrSummer,
            "hkr_temperature" => ApplyMask::HkrTemperature,
            "hkr_holidays" => ApplyMask::HkrHolidays,
            "hkr_time_table" => ApplyMask::HkrTimeTable,
            "relay_manual" => ApplyMask::RelayManual,
            "relay_automatic" => ApplyMask::RelayAutomatic,
            "level" => ApplyMask::Level,
            "color" => ApplyMask::Color,
            "dialhelper" => ApplyMask::DialHelper,
            "sun_simulation" => ApplyMask::SunSimulation,
            "sub_templates" => ApplyMask::SubTemplates,
            "main_wifi" => ApplyMask::MainWifi,
            "guest_wifi" => ApplyMask::GuestWifi,
            other => ApplyMask::Other(other.to_string()),
        }
    }
}

use std::fmt;

/// Every `switchcmd` understood by the home-automation command endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    GetSwitchList,
    SetSwitchOn,
    SetSwitchOff,
    SetSwitchToggle,
    GetSwitchState,
    GetSwitchPresent,
    GetSwitchPower,
    GetSwitchEnergy,
    GetSwitchName,
    GetDeviceListInfos,
    GetDeviceInfos,
    GetTemperature,
    GetHkrTsoll,
    GetHkrKomfort,
    GetHkrAbsenk,
    SetHkrTsoll,
    GetBasicDeviceStats,
    GetTemplateListInfos,
    ApplyTemplate,
    GetTriggerListInfos,
    SetTriggerActive,
    SetSimpleOnOff,
    SetLevel,
    SetLevelPercentage,
    SetColor,
    SetColorTemperature,
    GetColorDefaults,
    SetHkrBoost,
    SetHkrWindowOpen,
    SetBlind,
    SetName,
    StartUleSubscription,
    GetSubscriptionState,
}

/// How a command's response body is decoded
///
/// The gateway is not consistent across command families. Boolean switch
/// commands answer an empty body for "off", telemetry commands answer
/// `inval` when the device has no such function, and temperature commands
/// do neither. The policy names make those differences explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponsePolicy {
    /// `1` is true; `0` and an empty body are false
    Flag,
    /// Like `Flag`, but `inval` means the function is not supported
    SentinelFlag,
    /// Integer; `inval` means the function is not supported
    SentinelNumber,
    /// Integer with no sentinel handling
    Number,
    /// Integer in half-degree wire units with the 253/254 sentinels
    HkrTemperature,
    /// Body returned as text without its trailing newline
    Text,
    /// Comma separated AINs; an empty body is an empty list
    AinList,
    /// XML document handed to the mapper
    Xml,
    /// Body is not inspected
    Ignore,
}

impl ResponsePolicy {
    /// Whether the `inval` body is turned into `ProviderNotFound`
    pub fn intercepts_unsupported(self) -> bool {
        matches!(self, ResponsePolicy::SentinelFlag | ResponsePolicy::SentinelNumber)
    }

    /// Whether an empty body decodes to `false` instead of failing
    pub fn empty_is_false(self) -> bool {
        matches!(self, ResponsePolicy::Flag | ResponsePolicy::SentinelFlag)
    }
}

impl Command {
    pub const ALL: [Command; 33] = [
        Command::GetSwitchList,
        Command::SetSwitchOn,
        Command::SetSwitchOff,
        Command::SetSwitchToggle,
        Command::GetSwitchState,
        Command::GetSwitchPresent,
        Command::GetSwitchPower,
        Command::GetSwitchEnergy,
        Command::GetSwitchName,
        Command::GetDeviceListInfos,
        Command::GetDeviceInfos,
        Command::GetTemperature,
        Command::GetHkrTsoll,
        Command::GetHkrKomfort,
        Command::GetHkrAbsenk,
        Command::SetHkrTsoll,
        Command::GetBasicDeviceStats,
        Command::GetTemplateListInfos,
        Command::ApplyTemplate,
        Command::GetTriggerListInfos,
        Command::SetTriggerActive,
        Command::SetSimpleOnOff,
        Command::SetLevel,
        Command::SetLevelPercentage,
        Command::SetColor,
        Command::SetColorTemperature,
        Command::GetColorDefaults,
        Command::SetHkrBoost,
        Command::SetHkrWindowOpen,
        Command::SetBlind,
        Command::SetName,
        Command::StartUleSubscription,
        Command::GetSubscriptionState,
    ];

    /// The value sent as the `switchcmd` query parameter
    pub fn switchcmd(self) -> &'static str {
        match self {
            Command::GetSwitchList => "getswitchlist",
            Command::SetSwitchOn => "setswitchon",
            Command::SetSwitchOff => "setswitchoff",
            Command::SetSwitchToggle => "setswitchtoggle",
            Command::GetSwitchState => "getswitchstate",
            Command::GetSwitchPresent => "getswitchpresent",
            Command::GetSwitchPower => "getswitchpower",
            Command::GetSwitchEnergy => "getswitchenergy",
            Command::GetSwitchName => "getswitchname",
            Command::GetDeviceListInfos => "getdevicelistinfos",
            Command::GetDeviceInfos => "getdeviceinfos",
            Command::GetTemperature => "gettemperature",
            Command::GetHkrTsoll => "gethkrtsoll",
            Command::GetHkrKomfort => "gethkrkomfort",
            Command::GetHkrAbsenk => "gethkrabsenk",
            Command::SetHkrTsoll => "sethkrtsoll",
            Command::GetBasicDeviceStats => "getbasicdevicestats",
            Command::GetTemplateListInfos => "gettemplatelistinfos",
            Command::ApplyTemplate => "applytemplate",
            Command::GetTriggerListInfos => "gettriggerlistinfos",
            Command::SetTriggerActive => "settriggeractive",
            Command::SetSimpleOnOff => "setsimpleonoff",
            Command::SetLevel => "setlevel",
            Command::SetLevelPercentage => "setlevelpercentage",
            Command::SetColor => "setcolor",
            Command::SetColorTemperature => "setcolortemperature",
            Command::GetColorDefaults => "getcolordefaults",
            Command::SetHkrBoost => "sethkrboost",
            Command::SetHkrWindowOpen => "sethkrwindowopen",
            Command::SetBlind => "setblind",
            Command::SetName => "setname",
            Command::StartUleSubscription => "startulesubscription",
            Command::GetSubscriptionState => "getsubscriptionstate",
        }
    }

    /// The decoding policy for this command's response body
    pub fn policy(self) -> ResponsePolicy {
        match self {
            Command::SetSwitchOn
            | Command::SetSwitchOff
            | Command::SetSwitchToggle
            | Command::GetSwitchPresent
            | Command::ApplyTemplate => ResponsePolicy::Flag,

            Command::GetSwitchState => ResponsePolicy::SentinelFlag,

            Command::GetSwitchPower | Command::GetSwitchEnergy => ResponsePolicy::SentinelNumber,

            Command::GetTemperature | Command::SetHkrBoost | Command::SetHkrWindowOpen => {
                ResponsePolicy::Number
            }

            Command::GetHkrTsoll
            | Command::GetHkrKomfort
            | Command::GetHkrAbsenk
            | Command::SetHkrTsoll => ResponsePolicy::HkrTemperature,

            Command::GetSwitchName | Command::SetName => ResponsePolicy::Text,

            Command::GetSwitchList => ResponsePolicy::AinList,

            Command::GetDeviceListInfos
            | Command::GetDeviceInfos
            | Command::GetBasicDeviceStats
            | Command::GetTemplateListInfos
            | Command::GetTriggerListInfos
            | Command::GetColorDefaults
            | Command::GetSubscriptionState => ResponsePolicy::Xml,

            Command::SetTriggerActive
            | Command::SetSimpleOnOff
            | Command::SetLevel
            | Command::SetLevelPercentage
            | Command::SetColor
            | Command::SetColorTemperature
            | Command::SetBlind
            | Command::StartUleSubscription => ResponsePolicy::Ignore,
        }
    }

    /// Whether the command addresses a single device or unit
    pub fn requires_ain(self) -> bool {
        !matches!(
            self,
            Command::GetSwitchList
                | Command::GetDeviceListInfos
                | Command::GetTemplateListInfos
                | Command::GetTriggerListInfos
                | Command::GetColorDefaults
                | Command::StartUleSubscription
                | Command::GetSubscriptionState
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.switchcmd())
    }
}

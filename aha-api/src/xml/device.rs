use xmltree::Element;

use super::{
    attr, attr_parse, child_celsius, child_flag, child_hkr, child_number, child_number_list,
    child_text, children, parse_document, required_ain, required_attr, required_attr_parse,
};
use crate::error::{ApiError, Result};
use crate::model::{
    Alert, Blind, Button, ColorControl, Device, DeviceList, EtsiUnitInfo, Group, GroupInfo, Hkr,
    Humidity, LevelControl, NextChange, OnOffState, Powermeter, SubscriptionState, Switch,
    Temperature,
};
use crate::types::{Ain, SubscriptionCode};

/// Map a `<devicelist>` document
pub fn device_list(xml: &str) -> Result<DeviceList> {
    let root = parse_document(xml, "devicelist")?;

    let devices = children(&root, "device")
        .map(map_device)
        .collect::<Result<Vec<_>>>()?;
    let groups = children(&root, "group")
        .map(map_group)
        .collect::<Result<Vec<_>>>()?;

    Ok(DeviceList {
        version: attr(&root, "version").map(str::to_string),
        firmware_version: attr(&root, "fwversion").map(str::to_string),
        devices,
        groups,
    })
}

/// Map the single `<device>` document returned by `getdeviceinfos`
pub fn device(xml: &str) -> Result<Device> {
    let root = parse_document(xml, "device")?;
    map_device(&root)
}

/// Map the `<state>` document returned by `getsubscriptionstate`
pub fn subscription_state(xml: &str) -> Result<SubscriptionState> {
    let root = parse_document(xml, "state")?;

    let raw: u8 = required_attr_parse(&root, "code")?;
    let code = SubscriptionCode::from_code(raw)
        .ok_or_else(|| ApiError::ParseError(format!("Unknown subscription state code {}", raw)))?;
    let latest_ain = child_text(&root, "latestain")
        .map(|raw| Ain::parse(&raw))
        .transpose()
        .map_err(|e| ApiError::ParseError(format!("<latestain>: {}", e)))?;

    Ok(SubscriptionState { code, latest_ain })
}

fn map_device(element: &Element) -> Result<Device> {
    Ok(Device {
        identifier: required_ain(element)?,
        id: required_attr_parse(element, "id")?,
        function_bitmask: required_attr_parse(element, "functionbitmask")?,
        fw_version: required_attr(element, "fwversion")?.to_string(),
        manufacturer: attr(element, "manufacturer").map(str::to_string),
        product_name: attr(element, "productname").map(str::to_string),
        present: child_flag(element, "present")?,
        tx_busy: child_flag(element, "txbusy")?,
        name: child_text(element, "name"),
        battery: child_number(element, "battery")?,
        battery_low: child_flag(element, "batterylow")?,
        switch: element.get_child("switch").map(map_switch).transpose()?,
        simple_on_off: element.get_child("simpleonoff").map(map_on_off).transpose()?,
        powermeter: element.get_child("powermeter").map(map_powermeter).transpose()?,
        temperature: element.get_child("temperature").map(map_temperature).transpose()?,
        humidity: element.get_child("humidity").map(map_humidity).transpose()?,
        hkr: element.get_child("hkr").map(map_hkr).transpose()?,
        buttons: children(element, "button")
            .map(map_button)
            .collect::<Result<Vec<_>>>()?,
        level_control: element.get_child("levelcontrol").map(map_level).transpose()?,
        color_control: element.get_child("colorcontrol").map(map_color).transpose()?,
        etsi_unit_info: element.get_child("etsiunitinfo").map(map_etsi).transpose()?,
        alert: element.get_child("alert").map(map_alert).transpose()?,
        blind: element.get_child("blind").map(map_blind).transpose()?,
    })
}

fn map_group(element: &Element) -> Result<Group> {
    let identifier: String = required_attr(element, "identifier")?
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    Ok(Group {
        identifier,
        id: required_attr_parse(element, "id")?,
        function_bitmask: required_attr_parse(element, "functionbitmask")?,
        fw_version: required_attr(element, "fwversion")?.to_string(),
        manufacturer: attr(element, "manufacturer").map(str::to_string),
        product_name: attr(element, "productname").map(str::to_string),
        present: child_flag(element, "present")?,
        tx_busy: child_flag(element, "txbusy")?,
        name: child_text(element, "name"),
        switch: element.get_child("switch").map(map_switch).transpose()?,
        simple_on_off: element.get_child("simpleonoff").map(map_on_off).transpose()?,
        powermeter: element.get_child("powermeter").map(map_powermeter).transpose()?,
        hkr: element.get_child("hkr").map(map_hkr).transpose()?,
        level_control: element.get_child("levelcontrol").map(map_level).transpose()?,
        color_control: element.get_child("colorcontrol").map(map_color).transpose()?,
        blind: element.get_child("blind").map(map_blind).transpose()?,
        group_info: element.get_child("groupinfo").map(map_group_info).transpose()?,
    })
}

fn map_switch(element: &Element) -> Result<Switch> {
    Ok(Switch {
        state: child_flag(element, "state")?,
        mode: child_text(element, "mode"),
        lock: child_flag(element, "lock")?,
        device_lock: child_flag(element, "devicelock")?,
    })
}

fn map_on_off(element: &Element) -> Result<OnOffState> {
    Ok(OnOffState {
        state: child_flag(element, "state")?,
    })
}

fn map_powermeter(element: &Element) -> Result<Powermeter> {
    Ok(Powermeter {
        voltage: child_number(element, "voltage")?,
        power: child_number(element, "power")?,
        energy: child_number(element, "energy")?,
    })
}

fn map_temperature(element: &Element) -> Result<Temperature> {
    Ok(Temperature {
        celsius: child_celsius(element, "celsius")?,
        offset: child_celsius(element, "offset")?,
    })
}

fn map_humidity(element: &Element) -> Result<Humidity> {
    Ok(Humidity {
        rel_humidity: child_number(element, "rel_humidity")?,
    })
}

fn map_hkr(element: &Element) -> Result<Hkr> {
    let next_change = element
        .get_child("nextchange")
        .map(|next| -> Result<NextChange> {
            Ok(NextChange {
                end_period: child_number(next, "endperiod")?,
                tchange: child_hkr(next, "tchange")?,
            })
        })
        .transpose()?;

    Ok(Hkr {
        tist: child_hkr(element, "tist")?,
        tsoll: child_hkr(element, "tsoll")?,
        absenk: child_hkr(element, "absenk")?,
        komfort: child_hkr(element, "komfort")?,
        lock: child_flag(element, "lock")?,
        device_lock: child_flag(element, "devicelock")?,
        error_code: child_number(element, "errorcode")?,
        window_open_active: child_flag(element, "windowopenactiv")?,
        window_open_active_end_time: child_number(element, "windowopenactiveendtime")?,
        boost_active: child_flag(element, "boostactive")?,
        boost_active_end_time: child_number(element, "boostactiveendtime")?,
        battery_low: child_flag(element, "batterylow")?,
        battery: child_number(element, "battery")?,
        next_change,
        summer_active: child_flag(element, "summeractive")?,
        holiday_active: child_flag(element, "holidayactive")?,
        adaptive_heating_active: child_flag(element, "adaptiveHeatingActive")?,
        adaptive_heating_running: child_flag(element, "adaptiveHeatingRunning")?,
    })
}

fn map_button(element: &Element) -> Result<Button> {
    Ok(Button {
        identifier: required_ain(element)?,
        id: required_attr_parse(element, "id")?,
        name: child_text(element, "name"),
        last_pressed_timestamp: child_number(element, "lastpressedtimestamp")?,
    })
}

fn map_level(element: &Element) -> Result<LevelControl> {
    Ok(LevelControl {
        level: child_number(element, "level")?,
        level_percentage: child_number(element, "levelpercentage")?,
    })
}

fn map_color(element: &Element) -> Result<ColorControl> {
    Ok(ColorControl {
        supported_modes: attr_parse(element, "supported_modes")?,
        current_mode: attr_parse(element, "current_mode")?,
        full_color_support: attr_parse::<u8>(element, "fullcolorsupport")?.map(|v| v == 1),
        mapped: attr_parse::<u8>(element, "mapped")?.map(|v| v == 1),
        hue: child_number(element, "hue")?,
        saturation: child_number(element, "saturation")?,
        unmapped_hue: child_number(element, "unmapped_hue")?,
        unmapped_saturation: child_number(element, "unmapped_saturation")?,
        temperature: child_number(element, "temperature")?,
    })
}

fn map_etsi(element: &Element) -> Result<EtsiUnitInfo> {
    Ok(EtsiUnitInfo {
        etsi_device_id: child_number(element, "etsideviceid")?,
        unit_type: child_number(element, "unittype")?,
        interfaces: child_number_list(element, "interfaces")?,
    })
}

fn map_alert(element: &Element) -> Result<Alert> {
    Ok(Alert {
        state: child_number(element, "state")?,
        last_alert_change_timestamp: child_number(element, "lastalertchgtimestamp")?,
    })
}

fn map_blind(element: &Element) -> Result<Blind> {
    Ok(Blind {
        end_positions_set: child_flag(element, "endpositionsset")?,
        mode: child_text(element, "mode"),
    })
}

fn map_group_info(element: &Element) -> Result<GroupInfo> {
    Ok(GroupInfo {
        master_device_id: child_number(element, "masterdeviceid")?,
        members: child_number_list(element, "members")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Function;

    const SOCKET: &str = r#"<device identifier="08761 0000434" id="17" functionbitmask="35712" fwversion="04.27" manufacturer="AVM" productname="FRITZ!DECT 200">
        <present>1</present>
        <txbusy>0</txbusy>
        <name>Kaffeemaschine</name>
        <switch><state>1</state><mode>manuell</mode><lock>0</lock><devicelock>0</devicelock></switch>
        <simpleonoff><state>1</state></simpleonoff>
        <powermeter><voltage>229540</voltage><power>12340</power><energy>707</energy></powermeter>
        <temperature><celsius>225</celsius><offset>-10</offset></temperature>
    </device>"#;

    #[test]
    fn test_single_device() {
        let device = device(SOCKET).unwrap();
        assert_eq!(device.identifier.as_str(), "087610000434");
        assert_eq!(device.id, 17);
        assert_eq!(device.fw_version, "04.27");
        assert_eq!(device.product_name.as_deref(), Some("FRITZ!DECT 200"));
        assert_eq!(device.present, Some(true));
        assert_eq!(device.name.as_deref(), Some("Kaffeemaschine"));
        assert!(device.has_function(Function::SwitchSocket));
        assert!(!device.has_function(Function::Thermostat));

        let switch = device.switch.unwrap();
        assert_eq!(switch.state, Some(true));
        assert_eq!(switch.mode.as_deref(), Some("manuell"));

        let meter = device.powermeter.unwrap();
        assert_eq!(meter.power, Some(12340));
        assert_eq!(meter.energy, Some(707));
        assert_eq!(meter.voltage, Some(229540));

        let temperature = device.temperature.unwrap();
        assert_eq!(temperature.celsius.map(|t| t.value()), Some(225));
        assert_eq!(temperature.offset.map(|t| t.value()), Some(-10));
    }

    #[test]
    fn test_absent_capabilities_are_none() {
        let device = device(SOCKET).unwrap();
        assert!(device.hkr.is_none());
        assert!(device.humidity.is_none());
        assert!(device.level_control.is_none());
        assert!(device.color_control.is_none());
        assert!(device.blind.is_none());
        assert!(device.alert.is_none());
        assert!(device.buttons.is_empty());
        assert_eq!(device.battery, None);
    }

    #[test]
    fn test_missing_fwversion_fails_document() {
        let xml = r#"<devicelist version="1">
            <device identifier="087610000434" id="17" functionbitmask="35712" fwversion="04.27"/>
            <device identifier="087610000435" id="18" functionbitmask="35712"/>
        </devicelist>"#;
        assert!(matches!(device_list(xml), Err(ApiError::ParseError(_))));
    }

    #[test]
    fn test_bad_identifier_fails_document() {
        let xml = r#"<device identifier="12345" id="17" functionbitmask="1" fwversion="1"/>"#;
        assert!(matches!(device(xml), Err(ApiError::ParseError(_))));
    }

    #[test]
    fn test_group_identifier_outside_ain_grammar() {
        let xml = r#"<devicelist version="1">
            <group identifier="65:3A:18-900" id="900" functionbitmask="6784" fwversion="1.0" manufacturer="AVM" productname="">
                <present>1</present>
                <name>Alle Steckdosen</name>
                <switch><state>0</state><mode>auto</mode><lock></lock><devicelock></devicelock></switch>
                <groupinfo><masterdeviceid>0</masterdeviceid><members>17,18</members></groupinfo>
            </group>
        </devicelist>"#;
        let list = device_list(xml).unwrap();
        assert!(list.devices.is_empty());

        let group = &list.groups[0];
        assert_eq!(group.identifier, "65:3A:18-900");
        assert_eq!(group.product_name, None);
        assert_eq!(group.switch.as_ref().unwrap().lock, Some(false));
        let info = group.group_info.as_ref().unwrap();
        assert_eq!(info.master_device_id, Some(0));
        assert_eq!(info.members, vec![17, 18]);
    }

    #[test]
    fn test_subscription_state() {
        let state = subscription_state(r#"<state code="0"><latestain></latestain></state>"#).unwrap();
        assert_eq!(state.code, SubscriptionCode::Idle);
        assert_eq!(state.latest_ain, None);

        assert!(matches!(
            subscription_state(r#"<state code="9"/>"#),
            Err(ApiError::ParseError(_))
        ));
    }
}

//! Mapping of a full device listing as returned by `getdevicelistinfos`

use aha_api::model::DeviceList;
use aha_api::types::Function;
use aha_api::{xml, Ain};

const DEVICE_LIST: &str = include_str!("fixtures/devicelist.xml");

fn device_list() -> DeviceList {
    xml::device_list(DEVICE_LIST).expect("fixture maps")
}

fn ain(raw: &str) -> Ain {
    Ain::parse(raw).unwrap()
}

#[test]
fn test_listing_header_and_counts() {
    let list = device_list();
    assert_eq!(list.version.as_deref(), Some("1"));
    assert_eq!(list.firmware_version.as_deref(), Some("7.57"));
    assert_eq!(list.devices.len(), 5);
    assert_eq!(list.groups.len(), 1);

    let ids: Vec<_> = list.devices.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![17, 16, 20, 2000, 2001]);
}

#[test]
fn test_socket() {
    let list = device_list();
    let socket = list.device(&ain("087610000434")).unwrap();

    assert_eq!(socket.name.as_deref(), Some("Kaffeemaschine"));
    assert_eq!(socket.product_name.as_deref(), Some("FRITZ!DECT 200"));
    assert_eq!(socket.fw_version, "04.27");
    assert_eq!(socket.present, Some(true));
    assert!(socket.has_function(Function::SwitchSocket));
    assert!(socket.has_function(Function::EnergyMeter));
    assert!(!socket.has_function(Function::Thermostat));

    let switch = socket.switch.as_ref().unwrap();
    assert_eq!(switch.state, Some(true));
    assert_eq!(switch.mode.as_deref(), Some("manuell"));
    assert_eq!(switch.lock, Some(false));

    let meter = socket.powermeter.unwrap();
    assert_eq!(meter.voltage, Some(229_540));
    assert_eq!(meter.energy, Some(707));

    let temperature = socket.temperature.unwrap();
    assert_eq!(temperature.celsius.map(|t| t.value()), Some(225));
    assert_eq!(temperature.offset.map(|t| t.value()), Some(0));
}

#[test]
fn test_thermostat() {
    let list = device_list();
    let thermostat = list.device(&ain("099950196524")).unwrap();

    assert!(thermostat.has_function(Function::Thermostat));
    assert_eq!(thermostat.name.as_deref(), Some("Heizkörper Bad"));
    assert_eq!(thermostat.battery, Some(70));
    assert_eq!(
        thermostat.temperature.unwrap().offset.map(|t| t.value()),
        Some(-5)
    );

    let hkr = thermostat.hkr.as_ref().unwrap();
    assert_eq!(hkr.tist.map(|t| t.value()), Some(210));
    // 253 is the "off" sentinel
    assert_eq!(hkr.tsoll.map(|t| t.value()), Some(0));
    assert_eq!(hkr.absenk.map(|t| t.value()), Some(160));
    assert_eq!(hkr.komfort.map(|t| t.value()), Some(220));
    assert_eq!(hkr.boost_active, Some(true));
    assert_eq!(hkr.boost_active_end_time, Some(1_700_003_600));
    assert_eq!(hkr.window_open_active, Some(false));
    assert_eq!(hkr.holiday_active, Some(false));
    assert_eq!(hkr.adaptive_heating_active, Some(true));
    assert_eq!(hkr.adaptive_heating_running, Some(false));

    let next = hkr.next_change.as_ref().unwrap();
    assert_eq!(next.end_period, Some(1_700_010_000));
    assert_eq!(next.tchange.map(|t| t.value()), Some(300));
}

#[test]
fn test_button_device() {
    let list = device_list();
    let buttons = list.device(&ain("130960007307")).unwrap();

    assert!(buttons.has_function(Function::Button));
    assert!(buttons.has_function(Function::HumiditySensor));
    assert_eq!(buttons.humidity.unwrap().rel_humidity, Some(48));

    assert_eq!(buttons.buttons.len(), 2);
    assert_eq!(buttons.buttons[0].identifier.as_str(), "130960007307-1");
    assert_eq!(buttons.buttons[0].last_pressed_timestamp, None);
    assert_eq!(buttons.buttons[1].id, 5002);
    assert_eq!(buttons.buttons[1].last_pressed_timestamp, Some(1_699_990_000));
    assert!(buttons.buttons[1].identifier.is_unit());
}

#[test]
fn test_zigbee_light() {
    let list = device_list();
    let light = list.device(&ain("Z001788011D4B55D3")).unwrap();

    assert!(light.identifier.is_zigbee());
    assert!(light.has_function(Function::Light));
    assert!(light.has_function(Function::DimmableDevice));
    assert!(light.has_function(Function::ColorDevice));
    assert_eq!(light.simple_on_off.unwrap().state, Some(false));

    let level = light.level_control.unwrap();
    assert_eq!(level.level, Some(26));
    assert_eq!(level.level_percentage, Some(10));

    let color = light.color_control.as_ref().unwrap();
    assert_eq!(color.supported_modes, Some(5));
    assert_eq!(color.current_mode, Some(4));
    assert_eq!(color.full_color_support, Some(true));
    assert_eq!(color.hue, None);
    assert_eq!(color.temperature, Some(2700));

    let etsi = light.etsi_unit_info.as_ref().unwrap();
    assert_eq!(etsi.unit_type, Some(278));
    assert_eq!(etsi.interfaces, vec![512, 514, 513]);
}

#[test]
fn test_blind_unit() {
    let list = device_list();
    let blind = list.device(&ain("142760236734-1")).unwrap();

    assert!(blind.has_function(Function::Blind));
    assert_eq!(blind.present, Some(false));
    assert_eq!(blind.identifier.device_part().as_str(), "142760236734");
    assert_eq!(blind.alert.unwrap().last_alert_change_timestamp, Some(1_699_900_000));
    assert_eq!(blind.blind.as_ref().unwrap().end_positions_set, Some(true));
}

#[test]
fn test_group() {
    let list = device_list();
    let group = &list.groups[0];

    assert_eq!(group.identifier, "65:3A:18-900");
    assert_eq!(group.id, 900);
    assert_eq!(group.product_name, None);
    assert_eq!(group.name.as_deref(), Some("Alle Steckdosen"));
    // <lock></lock> is present but empty
    assert_eq!(group.switch.as_ref().unwrap().lock, Some(false));

    let info = group.group_info.as_ref().unwrap();
    assert_eq!(info.master_device_id, Some(0));
    assert_eq!(info.members, vec![17]);
}

#[test]
fn test_filter_by_function() {
    let list = device_list();
    let sensors: Vec<_> = list
        .with_function(Function::TemperatureSensor)
        .map(|d| d.id)
        .collect();
    assert_eq!(sensors, vec![17, 16, 20]);
}

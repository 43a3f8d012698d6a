//! Read-only aggregates built from the gateway's XML listings

mod device;

pub use device::{
    Alert, Blind, Button, ColorControl, Device, DeviceList, EtsiUnitInfo, Group, GroupInfo, Hkr,
    Humidity, LevelControl, NextChange, OnOffState, Powermeter, Switch, Temperature,
};

use crate::types::{Ain, ApplyMask, Hue, Saturation, SubscriptionCode, TemperatureKelvin};

/// One `<template>` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub identifier: Ain,
    pub id: i64,
    pub function_bitmask: u32,
    pub name: Option<String>,
    pub apply_mask: Vec<ApplyMask>,
    /// Identifiers of member devices and groups
    pub devices: Vec<String>,
    pub triggers: Vec<String>,
    pub sub_templates: Vec<Ain>,
}

/// One `<trigger>` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub identifier: String,
    pub active: bool,
    pub name: Option<String>,
}

/// One `<stats>` series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub count: u32,
    /// Seconds between two values
    pub grid: u32,
    /// Unix time of the newest value
    pub datatime: Option<i64>,
    /// Newest first; `None` where the gateway has no value
    pub values: Vec<Option<i64>>,
}

/// Result of `getbasicdevicestats`
///
/// Units follow the category: deci-Celsius, mV, cW (power in 0.01 W), Wh
/// and percent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceStats {
    pub temperature: Vec<Stats>,
    pub voltage: Vec<Stats>,
    pub power: Vec<Stats>,
    pub energy: Vec<Stats>,
    pub humidity: Vec<Stats>,
}

/// One saturation step of a default color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDefault {
    pub sat_index: u32,
    pub hue: Hue,
    pub saturation: Saturation,
    pub value: i32,
}

/// A named default color with its saturation steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsColor {
    pub hue_index: u32,
    pub name: String,
    pub colors: Vec<ColorDefault>,
}

/// Result of `getcolordefaults`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorDefaults {
    pub hs_defaults: Vec<HsColor>,
    pub temperature_defaults: Vec<TemperatureKelvin>,
}

/// Result of `getsubscriptionstate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionState {
    pub code: SubscriptionCode,
    /// Device registered by the last successful subscription
    pub latest_ain: Option<Ain>,
}

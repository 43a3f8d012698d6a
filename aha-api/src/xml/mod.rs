//! XML to model mapping
//!
//! Documents are parsed into an [`xmltree::Element`] tree and walked by
//! hand. Sub-structures are only built when their element is present, so an
//! absent capability is `None` rather than a zero-valued struct.
//!
//! Value rules:
//! - missing required attributes or malformed AINs fail the whole document
//!   with [`ApiError::ParseError`]
//! - empty numeric elements are `None`, unparseable ones are
//!   [`ApiError::NumberFormat`]
//! - flags accept `1`, `0` and the empty string (false)

mod color;
mod device;
mod stats;
mod template;

pub use color::color_defaults;
pub use device::{device, device_list, subscription_state};
pub use stats::device_stats;
pub use template::{template_list, trigger_list};

use std::fmt::Display;
use std::str::FromStr;

use xmltree::Element;

use crate::error::{ApiError, Result};
use crate::types::{decode_hkr, Ain, TemperatureCelsius};

/// Refuse documents with a DTD
///
/// Responses never carry one; a DOCTYPE could only smuggle in entity
/// definitions.
pub(crate) fn reject_doctype(xml: &str) -> Result<()> {
    let has_doctype = xml
        .match_indices("<!")
        .any(|(i, _)| xml[i + 2..].get(..7).is_some_and(|s| s.eq_ignore_ascii_case("DOCTYPE")));
    if has_doctype {
        return Err(ApiError::ParseError(
            "Documents with a DOCTYPE declaration are not accepted".to_string(),
        ));
    }
    Ok(())
}

/// Parse `xml` and check the root element's name
pub(crate) fn parse_document(xml: &str, root: &str) -> Result<Element> {
    reject_doctype(xml)?;
    let element = Element::parse(xml.trim().as_bytes())?;
    if element.name != root {
        return Err(ApiError::ParseError(format!(
            "Expected <{}> document, found <{}>",
            root, element.name
        )));
    }
    Ok(element)
}

/// Child elements named `name`, in document order
pub(crate) fn children<'a>(element: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> {
    element
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(move |child| child.name == name)
}

fn trimmed(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

pub(crate) fn attr<'a>(element: &'a Element, name: &str) -> Option<&'a str> {
    element.attributes.get(name).and_then(|v| trimmed(v))
}

pub(crate) fn required_attr<'a>(element: &'a Element, name: &str) -> Result<&'a str> {
    attr(element, name).ok_or_else(|| {
        ApiError::ParseError(format!("<{}> is missing the '{}' attribute", element.name, name))
    })
}

pub(crate) fn required_attr_parse<T>(element: &Element, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = required_attr(element, name)?;
    raw.parse().map_err(|e| {
        ApiError::ParseError(format!(
            "<{}> attribute '{}' = '{}': {}",
            element.name, name, raw, e
        ))
    })
}

pub(crate) fn attr_parse<T>(element: &Element, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    attr(element, name)
        .map(|raw| parse_number(&element.name, name, raw))
        .transpose()
}

/// Required `identifier` attribute parsed with the AIN grammar
pub(crate) fn required_ain(element: &Element) -> Result<Ain> {
    let raw = required_attr(element, "identifier")?;
    Ain::parse(raw).map_err(|e| ApiError::ParseError(format!("<{}>: {}", element.name, e)))
}

/// Text of the child `name`; `None` when the child is absent or empty
pub(crate) fn child_text(element: &Element, name: &str) -> Option<String> {
    element
        .get_child(name)
        .and_then(|child| child.get_text())
        .and_then(|text| trimmed(&text).map(str::to_string))
}

fn parse_number<T>(parent: &str, name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|e| {
        ApiError::NumberFormat(format!("<{}>/{}: cannot parse '{}': {}", parent, name, raw, e))
    })
}

pub(crate) fn child_number<T>(element: &Element, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    child_text(element, name)
        .map(|raw| parse_number(&element.name, name, &raw))
        .transpose()
}

/// `0`/`1` child; present but empty reads as false
pub(crate) fn child_flag(element: &Element, name: &str) -> Result<Option<bool>> {
    if element.get_child(name).is_none() {
        return Ok(None);
    }
    match child_text(element, name).as_deref() {
        None | Some("0") => Ok(Some(false)),
        Some("1") => Ok(Some(true)),
        Some(other) => Err(ApiError::NumberFormat(format!(
            "<{}>/{}: '{}' is not a 0/1 flag",
            element.name, name, other
        ))),
    }
}

/// Deci-Celsius child
pub(crate) fn child_celsius(element: &Element, name: &str) -> Result<Option<TemperatureCelsius>> {
    child_number::<i32>(element, name)?
        .map(|deci| {
            TemperatureCelsius::new(deci)
                .map_err(|e| ApiError::ParseError(format!("<{}>/{}: {}", element.name, name, e)))
        })
        .transpose()
}

/// Half-degree thermostat child
pub(crate) fn child_hkr(element: &Element, name: &str) -> Result<Option<TemperatureCelsius>> {
    child_number::<i64>(element, name)?
        .map(|wire| {
            decode_hkr(wire)
                .map_err(|e| ApiError::ParseError(format!("<{}>/{}: {}", element.name, name, e)))
        })
        .transpose()
}

/// Comma separated integers, e.g. `<members>16,17</members>`
pub(crate) fn child_number_list(element: &Element, name: &str) -> Result<Vec<i64>> {
    match child_text(element, name) {
        Some(raw) => raw
            .split(',')
            .filter_map(trimmed)
            .map(|value| parse_number(&element.name, name, value))
            .collect(),
        None => Ok(Vec::new()),
    }
}

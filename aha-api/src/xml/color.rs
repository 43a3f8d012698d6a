use xmltree::Element;

use super::{children, parse_document, required_attr_parse};
use crate::error::{ApiError, Result};
use crate::model::{ColorDefault, ColorDefaults, HsColor};
use crate::types::{Hue, Saturation, TemperatureKelvin};

/// Map a `<colordefaults>` document
pub fn color_defaults(xml: &str) -> Result<ColorDefaults> {
    let root = parse_document(xml, "colordefaults")?;

    let hs_defaults = match root.get_child("hsdefaults") {
        Some(list) => children(list, "hs").map(map_hs).collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    let temperature_defaults = match root.get_child("temperaturedefaults") {
        Some(list) => children(list, "temp")
            .map(|temp| -> Result<TemperatureKelvin> {
                let kelvin: i32 = required_attr_parse(temp, "value")?;
                TemperatureKelvin::new(kelvin).map_err(invalid)
            })
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(ColorDefaults {
        hs_defaults,
        temperature_defaults,
    })
}

fn invalid(error: impl std::fmt::Display) -> ApiError {
    ApiError::ParseError(format!("<colordefaults>: {}", error))
}

fn map_hs(element: &Element) -> Result<HsColor> {
    let name = element
        .get_child("name")
        .and_then(|name| name.get_text())
        .map(|text| text.trim().to_string())
        .unwrap_or_default();

    let colors = children(element, "color")
        .map(|color| -> Result<ColorDefault> {
            Ok(ColorDefault {
                sat_index: required_attr_parse(color, "sat_index")?,
                hue: Hue::new(required_attr_parse(color, "hue")?).map_err(invalid)?,
                saturation: Saturation::new(required_attr_parse(color, "sat")?).map_err(invalid)?,
                value: required_attr_parse(color, "val")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HsColor {
        hue_index: required_attr_parse(element, "hue_index")?,
        name,
        colors,
    })
}

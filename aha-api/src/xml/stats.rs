use xmltree::Element;

use super::{attr_parse, children, parse_document, required_attr_parse};
use crate::error::{ApiError, Result};
use crate::model::{DeviceStats, Stats};

/// Placeholder for a missing value inside a series
const NO_VALUE: &str = "-";

/// Map a `<devicestats>` document
pub fn device_stats(xml: &str) -> Result<DeviceStats> {
    let root = parse_document(xml, "devicestats")?;

    Ok(DeviceStats {
        temperature: category(&root, "temperature")?,
        voltage: category(&root, "voltage")?,
        power: category(&root, "power")?,
        energy: category(&root, "energy")?,
        humidity: category(&root, "humidity")?,
    })
}

fn category(root: &Element, name: &str) -> Result<Vec<Stats>> {
    match root.get_child(name) {
        Some(element) => children(element, "stats").map(map_stats).collect(),
        None => Ok(Vec::new()),
    }
}

fn map_stats(element: &Element) -> Result<Stats> {
    let text = element.get_text().unwrap_or_default();
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| match v {
            NO_VALUE => Ok(None),
            v => v.parse::<i64>().map(Some).map_err(|e| {
                ApiError::NumberFormat(format!("<stats>: cannot parse '{}': {}", v, e))
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Stats {
        count: required_attr_parse(element, "count")?,
        grid: required_attr_parse(element, "grid")?,
        datatime: attr_parse(element, "datatime")?,
        values,
    })
}

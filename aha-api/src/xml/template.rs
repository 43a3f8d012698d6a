use xmltree::Element;

use super::{attr, child_text, children, parse_document, required_ain, required_attr, required_attr_parse};
use crate::error::{ApiError, Result};
use crate::model::{Template, Trigger};
use crate::types::{Ain, ApplyMask};

/// Map a `<templatelist>` document
pub fn template_list(xml: &str) -> Result<Vec<Template>> {
    let root = parse_document(xml, "templatelist")?;
    children(&root, "template").map(map_template).collect()
}

/// Map a `<triggerlist>` document
pub fn trigger_list(xml: &str) -> Result<Vec<Trigger>> {
    let root = parse_document(xml, "triggerlist")?;
    children(&root, "trigger").map(map_trigger).collect()
}

fn map_template(element: &Element) -> Result<Template> {
    let identifier = required_ain(element)?;
    if !identifier.is_template() {
        return Err(ApiError::ParseError(format!(
            "<template> identifier '{}' is not a template identifier",
            identifier
        )));
    }

    let apply_mask: Vec<ApplyMask> = element
        .get_child("applymask")
        .map(|mask| {
            mask.children
                .iter()
                .filter_map(|node| node.as_element())
                .map(|entry| ApplyMask::from_element_name(&entry.name))
                .collect()
        })
        .unwrap_or_default();

    let devices = member_identifiers(element, "devices", "device")?;
    let triggers = member_identifiers(element, "triggers", "trigger")?;
    let sub_templates = member_identifiers(element, "sub_templates", "template")?
        .iter()
        .map(|raw| {
            Ain::parse(raw).map_err(|e| ApiError::ParseError(format!("<sub_templates>: {}", e)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Template {
        identifier,
        id: required_attr_parse(element, "id")?,
        function_bitmask: required_attr_parse(element, "functionbitmask")?,
        name: child_text(element, "name"),
        apply_mask,
        devices,
        triggers,
        sub_templates,
    })
}

/// `identifier` attributes of `<list><entry identifier="..."/></list>`
fn member_identifiers(element: &Element, list_name: &str, entry: &str) -> Result<Vec<String>> {
    let Some(list) = element.get_child(list_name) else {
        return Ok(Vec::new());
    };
    children(list, entry)
        .map(|member| {
            required_attr(member, "identifier")
                .map(|raw| raw.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        })
        .collect()
}

fn map_trigger(element: &Element) -> Result<Trigger> {
    let active = match attr(element, "active") {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => {
            return Err(ApiError::NumberFormat(format!(
                "<trigger> attribute 'active' = '{}' is not a 0/1 flag",
                other
            )))
        }
    };

    Ok(Trigger {
        identifier: required_attr(element, "identifier")?.to_string(),
        active,
        name: child_text(element, "name"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATES: &str = r#"<templatelist version="1">
        <template identifier="tmp6F0093-391363146" id="60008" functionbitmask="6784" applymask="0">
            <name>Alles aus</name>
            <devices>
                <device identifier="08761 0000434"/>
                <device identifier="grp303E4F-3F7D3A48D"/>
            </devices>
            <triggers><trigger identifier="trg8C2B2C-3CA9F1E4B"/></triggers>
            <sub_templates><template identifier="tmp6F0093-391363147"/></sub_templates>
            <applymask><relay_manual/><hkr_temperature/><tam_config/></applymask>
        </template>
        <template identifier="tmp6F0093-391363148" id="60009" functionbitmask="320">
            <name></name>
        </template>
    </templatelist>"#;

    #[test]
    fn test_template_list() {
        let templates = template_list(TEMPLATES).unwrap();
        assert_eq!(templates.len(), 2);

        let first = &templates[0];
        assert!(first.identifier.is_template());
        assert_eq!(first.id, 60008);
        assert_eq!(first.name.as_deref(), Some("Alles aus"));
        assert_eq!(
            first.devices,
            vec!["087610000434".to_string(), "grp303E4F-3F7D3A48D".to_string()]
        );
        assert_eq!(first.triggers, vec!["trg8C2B2C-3CA9F1E4B".to_string()]);
        assert_eq!(first.sub_templates[0].as_str(), "tmp6F0093-391363147");
        assert_eq!(
            first.apply_mask,
            vec![
                ApplyMask::RelayManual,
                ApplyMask::HkrTemperature,
                ApplyMask::Other("tam_config".to_string()),
            ]
        );

        let second = &templates[1];
        assert_eq!(second.name, None);
        assert!(second.devices.is_empty());
        assert!(second.apply_mask.is_empty());
    }

    #[test]
    fn test_template_requires_template_identifier() {
        let xml = r#"<templatelist version="1">
            <template identifier="087610000434" id="1" functionbitmask="1"/>
        </templatelist>"#;
        assert!(matches!(template_list(xml), Err(ApiError::ParseError(_))));
    }

    #[test]
    fn test_template_missing_id() {
        let xml = r#"<templatelist><template identifier="tmp6F0093-391363146" functionbitmask="1"/></templatelist>"#;
        assert!(matches!(template_list(xml), Err(ApiError::ParseError(_))));
    }

    #[test]
    fn test_trigger_list() {
        let xml = r#"<triggerlist version="1">
            <trigger identifier="trg8C2B2C-3CA9F1E4B" active="1"><name>Abends</name></trigger>
            <trigger identifier="trg8C2B2C-3CA9F1E4C" active="0"><name>Morgens</name></trigger>
        </triggerlist>"#;
        let triggers = trigger_list(xml).unwrap();
        assert_eq!(
            triggers,
            vec![
                Trigger {
                    identifier: "trg8C2B2C-3CA9F1E4B".to_string(),
                    active: true,
                    name: Some("Abends".to_string()),
                },
                Trigger {
                    identifier: "trg8C2B2C-3CA9F1E4C".to_string(),
                    active: false,
                    name: Some("Morgens".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_empty_lists() {
        assert!(template_list(r#"<templatelist version="1"/>"#).unwrap().is_empty());
        assert!(trigger_list(r#"<triggerlist version="1"></triggerlist>"#).unwrap().is_empty());
    }
}

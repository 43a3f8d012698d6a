//! Templates and triggers
//!
//! # Operations
//! - `gettemplatelistinfos` - configured templates
//! - `applytemplate` - apply one template
//! - `gettriggerlistinfos` - configured triggers
//! - `settriggeractive` - enable or disable a trigger

use crate::aha_operation;
use crate::model::{Template, Trigger};
use crate::operation::{decode, CommandRequest, Validate, ValidationError};
use crate::types::Ain;
use crate::xml;

// =============================================================================
// TEMPLATES
// =============================================================================

aha_operation! {
    GetTemplateListInfosOperation: GetTemplateListInfos, () => Vec<Template>,
    build: |req| CommandRequest::new(Self::COMMAND),
    parse: |body| xml::template_list(body),
}

/// Request addressing a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyTemplateRequest {
    pub ain: Ain,
}

impl Validate for ApplyTemplateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if !self.ain.is_template() {
            return Err(ValidationError::invalid_value(
                "ain",
                &self.ain,
                "not a template identifier",
            ));
        }
        Ok(())
    }
}

aha_operation! {
    ApplyTemplateOperation: ApplyTemplate, ApplyTemplateRequest => bool,
    build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
    parse: |body| decode::flag(Self::COMMAND, body),
}

// =============================================================================
// TRIGGERS
// =============================================================================

aha_operation! {
    GetTriggerListInfosOperation: GetTriggerListInfos, () => Vec<Trigger>,
    build: |req| CommandRequest::new(Self::COMMAND),
    parse: |body| xml::trigger_list(body),
}

/// Request to enable or disable a trigger
///
/// Trigger identifiers do not follow the AIN grammar, they are passed
/// through as reported by `gettriggerlistinfos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetTriggerActiveRequest {
    pub identifier: String,
    pub active: bool,
}

impl Validate for SetTriggerActiveRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.identifier.trim().is_empty() {
            return Err(ValidationError::invalid_value(
                "ain",
                &self.identifier,
                "trigger identifier must not be empty",
            ));
        }
        Ok(())
    }
}

aha_operation! {
    SetTriggerActiveOperation: SetTriggerActive, SetTriggerActiveRequest => (),
    build: |req| CommandRequest::new(Self::COMMAND)
        .with_identifier(req.identifier.trim())
        .param("active", u8::from(req.active)),
    parse: |body| Ok(()),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::AhaOperation;

    #[test]
    fn test_apply_template_requires_template_ain() {
        let template = Ain::parse("tmp6F0093-391363146").unwrap();
        let request =
            ApplyTemplateOperation::build_request(&ApplyTemplateRequest { ain: template }).unwrap();
        assert_eq!(request.ain(), Some("tmp6F0093-391363146"));

        let device = Ain::parse("087610000434").unwrap();
        assert!(matches!(
            ApplyTemplateOperation::build_request(&ApplyTemplateRequest { ain: device }),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_apply_template_response() {
        assert!(ApplyTemplateOperation::parse_response("1\n").unwrap());
        assert!(!ApplyTemplateOperation::parse_response("\n").unwrap());
    }

    #[test]
    fn test_set_trigger_active() {
        let request = SetTriggerActiveOperation::build_request(&SetTriggerActiveRequest {
            identifier: "trg8C2B2C-3CA9F1E4B".to_string(),
            active: true,
        })
        .unwrap();
        assert_eq!(request.ain(), Some("trg8C2B2C-3CA9F1E4B"));
        assert_eq!(request.get("active"), Some("1"));

        let request = SetTriggerActiveOperation::build_request(&SetTriggerActiveRequest {
            identifier: "trg8C2B2C-3CA9F1E4B".to_string(),
            active: false,
        })
        .unwrap();
        assert_eq!(request.get("active"), Some("0"));
    }

    #[test]
    fn test_set_trigger_active_rejects_empty_identifier() {
        assert!(SetTriggerActiveRequest {
            identifier: String::new(),
            active: true,
        }
        .validate()
        .is_err());
    }
}

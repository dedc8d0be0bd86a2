//! Skill configuration

use serde::Deserialize;

use crate::domain::skill::{DirectiveBuilder, DEFAULT_GADGET_NAMESPACE};

use super::error::ValidationError;

/// Skill identity and gadget interface settings
#[derive(Debug, Clone, Deserialize)]
pub struct SkillConfig {
    /// When set, envelopes addressed to other skills are rejected
    pub application_id: Option<String>,

    /// Custom interface namespace the gadget listens on
    #[serde(default = "default_gadget_namespace")]
    pub gadget_namespace: String,

    /// Log every request, response and session attribute map
    #[serde(default = "default_log_payloads")]
    pub log_payloads: bool,
}

impl SkillConfig {
    /// Builds the directive builder for the configured namespace.
    pub fn directive_builder(&self) -> Result<DirectiveBuilder, ValidationError> {
        DirectiveBuilder::new(self.gadget_namespace.clone())
            .map_err(|e| ValidationError::InvalidGadgetNamespace(e.to_string()))
    }

    /// Validate skill configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if matches!(&self.application_id, Some(id) if id.trim().is_empty()) {
            return Err(ValidationError::MissingRequired("skill.application_id"));
        }
        self.directive_builder()?;
        Ok(())
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            application_id: None,
            gadget_namespace: default_gadget_namespace(),
            log_payloads: default_log_payloads(),
        }
    }
}

fn default_gadget_namespace() -> String {
    DEFAULT_GADGET_NAMESPACE.to_string()
}

fn default_log_payloads() -> bool {
    true
}

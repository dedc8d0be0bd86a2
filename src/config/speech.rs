//! Speech configuration

use serde::Deserialize;

use crate::domain::skill::SpeechCatalog;

use super::error::ValidationError;

/// Speech text, overridable per deployment.
///
/// Missing fields fall back to the skill's shipped locale.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub launch: String,
    pub no_gadgets: String,
    pub farewell: String,
    pub apology: String,
    pub command_ack: Option<String>,
}

impl SpeechConfig {
    /// Validate speech configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("launch", &self.launch),
            ("no_gadgets", &self.no_gadgets),
            ("farewell", &self.farewell),
            ("apology", &self.apology),
        ];
        for (name, text) in required {
            if text.trim().is_empty() {
                return Err(ValidationError::EmptySpeech(name));
            }
        }
        Ok(())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        let catalog = SpeechCatalog::default();
        Self {
            launch: catalog.launch,
            no_gadgets: catalog.no_gadgets,
            farewell: catalog.farewell,
            apology: catalog.apology,
            command_ack: catalog.command_ack,
        }
    }
}

impl From<SpeechConfig> for SpeechCatalog {
    fn from(config: SpeechConfig) -> Self {
        Self {
            launch: config.launch,
            no_gadgets: config.no_gadgets,
            farewell: config.farewell,
            apology: config.apology,
            command_ack: config.command_ack.filter(|text| !text.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_catalog() {
        let catalog: SpeechCatalog = SpeechConfig::default().into();
        assert_eq!(catalog, SpeechCatalog::default());
    }

    #[test]
    fn test_rejects_empty_farewell() {
        let config = SpeechConfig {
            farewell: "".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::EmptySpeech("farewell"))));
    }

    #[test]
    fn test_blank_acknowledgement_is_dropped() {
        let config = SpeechConfig {
            command_ack: Some("  ".to_string()),
            ..Default::default()
        };
        let catalog: SpeechCatalog = config.into();
        assert!(catalog.command_ack.is_none());
    }
}

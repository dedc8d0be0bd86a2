//! Endpoint discovery configuration

use serde::Deserialize;
use std::time::Duration;

use crate::adapters::discovery::AlexaDirectoryConfig;

use super::error::ValidationError;
use super::server::Environment;

/// Endpoint discovery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    /// Timeout for one enumeration call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Replaces the API endpoint reported by each request
    pub api_endpoint_override: Option<String>,

    /// Comma-separated endpoint ids served instead of calling the platform
    pub static_endpoints: Option<String>,
}

impl DiscoveryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Static endpoint ids, in order
    pub fn static_endpoint_list(&self) -> Vec<String> {
        self.static_endpoints
            .as_ref()
            .map(|s| {
                s.split(',')
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Settings for the platform-backed directory.
    pub fn directory_config(&self) -> AlexaDirectoryConfig {
        let config = AlexaDirectoryConfig::new().with_timeout(self.timeout());
        match &self.api_endpoint_override {
            Some(url) => config.with_api_endpoint_override(url.clone()),
            None => config,
        }
    }

    /// Validate discovery configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidDiscoveryTimeout);
        }
        if let Some(url) = &self.api_endpoint_override {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidApiEndpoint);
            }
        }
        if *environment == Environment::Production && self.static_endpoints.is_some() {
            return Err(ValidationError::StaticEndpointsInProduction);
        }
        Ok(())
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            api_endpoint_override: None,
            static_endpoints: None,
        }
    }
}

fn default_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_defaults() {
        let config = DiscoveryConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.validate(&Environment::Production).is_ok());
        assert!(config.static_endpoint_list().is_empty());
    }

    #[test]
    fn test_timeout_bounds() {
        for timeout_secs in [0, 61] {
            let config = DiscoveryConfig {
                timeout_secs,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(&Environment::Development),
                Err(ValidationError::InvalidDiscoveryTimeout)
            ));
        }
    }

    #[test]
    fn test_override_must_be_http() {
        let config = DiscoveryConfig {
            api_endpoint_override: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidApiEndpoint)
        ));
    }

    #[test]
    fn test_static_endpoints_parsing() {
        let config = DiscoveryConfig {
            static_endpoints: Some("E1, E2,,".to_string()),
            ..Default::default()
        };
        assert_eq!(config.static_endpoint_list(), vec!["E1", "E2"]);
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::StaticEndpointsInProduction)
        ));
    }

    #[test]
    fn test_directory_config_carries_override() {
        let config = DiscoveryConfig {
            timeout_secs: 2,
            api_endpoint_override: Some("http://127.0.0.1:9000".to_string()),
            ..Default::default()
        };
        let directory = config.directory_config();
        assert_eq!(directory.timeout, Duration::from_secs(2));
        assert_eq!(directory.api_endpoint_override.as_deref(), Some("http://127.0.0.1:9000"));
    }
}

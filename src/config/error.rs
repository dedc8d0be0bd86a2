//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Skill path must start with '/'")]
    InvalidSkillPath,

    #[error("Invalid gadget namespace: {0}")]
    InvalidGadgetNamespace(String),

    #[error("Discovery timeout must be between 1 and 60 seconds")]
    InvalidDiscoveryTimeout,

    #[error("Discovery API endpoint must be an http(s) URL")]
    InvalidApiEndpoint,

    #[error("Static endpoints are not allowed in production")]
    StaticEndpointsInProduction,

    #[error("Speech text for '{0}' cannot be empty")]
    EmptySpeech(&'static str),
}

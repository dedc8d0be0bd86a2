//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the skill to external systems:
//! - `discovery` - Endpoint directories (platform API, in-memory)
//! - `http` - The axum host the voice platform calls
//! - `logging` - Payload dump interceptors

pub mod discovery;
pub mod http;
pub mod logging;

pub use discovery::{AlexaDirectoryConfig, AlexaEndpointDirectory, InMemoryEndpointDirectory};
pub use http::{skill_router, SkillAppState};
pub use logging::PayloadLogInterceptor;

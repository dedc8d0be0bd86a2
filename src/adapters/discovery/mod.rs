//! Endpoint directory adapters.
//!
//! - `AlexaEndpointDirectory` - Production: the platform's enumeration API
//! - `InMemoryEndpointDirectory` - Tests and local development

mod alexa;
mod in_memory;

pub use alexa::{AlexaDirectoryConfig, AlexaEndpointDirectory};
pub use in_memory::InMemoryEndpointDirectory;

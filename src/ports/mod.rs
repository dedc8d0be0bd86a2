//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the skill core and the outside world. Adapters implement these ports.
//!
//! - `EndpointDirectory` - Discovery of the gadgets connected to the user's device
//! - `RequestInterceptor` / `ResponseInterceptor` - Observers around each dispatch

mod endpoint_directory;
mod interceptor;

pub use endpoint_directory::{DiscoveryError, EndpointDirectory};
pub use interceptor::{RequestInterceptor, ResponseInterceptor};

//! Logging adapters.

mod payload;

pub use payload::{render, PayloadLogInterceptor, PAYLOAD_TARGET};

//! Payload log interceptor - Dump requests, responses and session attributes.
//!
//! Emitted at `info` under the `gadget_skill::payload` target so it can be
//! filtered independently, e.g. `RUST_LOG=info,gadget_skill::payload=off`.
//! Access tokens never appear: the request type skips them on serialization.

use serde::Serialize;
use tracing::info;

use crate::domain::skill::{SessionState, SkillRequest, SkillResponse};
use crate::ports::{RequestInterceptor, ResponseInterceptor};

/// Log target for payload dumps.
pub const PAYLOAD_TARGET: &str = "gadget_skill::payload";

/// Logs every inbound request and outbound response.
#[derive(Debug, Default, Clone, Copy)]
pub struct PayloadLogInterceptor;

impl PayloadLogInterceptor {
    pub fn new() -> Self {
        Self
    }
}

impl RequestInterceptor for PayloadLogInterceptor {
    fn before_dispatch(&self, request: &SkillRequest, _state: &SessionState) {
        info!(target: PAYLOAD_TARGET, request_id = %request.request_id, payload = %render(request), "==Request==");
    }
}

impl ResponseInterceptor for PayloadLogInterceptor {
    fn after_dispatch(&self, request: &SkillRequest, response: &SkillResponse, state: &SessionState) {
        info!(target: PAYLOAD_TARGET, request_id = %request.request_id, payload = %render(response), "==Response==");
        info!(target: PAYLOAD_TARGET, request_id = %request.request_id, payload = %render(state), "==Session Attributes==");
    }
}

/// Serializes a payload for logging; serialization failures are logged inline.
pub fn render<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}

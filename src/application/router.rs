//! EventRouter - Dispatch each inbound request to exactly one handler
//!
//! Bindings are evaluated in registration order and the first matching
//! predicate wins. Handler errors and panics are absorbed by the single
//! exception handler, so `dispatch` never fails.

use std::any::Any;
use std::collections::HashSet;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use tracing::{debug, warn};

use crate::domain::skill::{SessionState, SkillEvent, SkillRequest, SkillResponse};
use crate::ports::{RequestInterceptor, ResponseInterceptor};

use super::errors::HandlerError;

/// Predicate deciding whether a binding handles an event.
pub type Predicate = Box<dyn Fn(&SkillEvent) -> bool + Send + Sync>;

/// A handler bound to one kind of event.
///
/// Handlers may mutate the session state of the conversation they serve.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(
        &self,
        request: &SkillRequest,
        state: &mut SessionState,
    ) -> Result<SkillResponse, HandlerError>;
}

/// Produces the response for a failed handler. Must not fail itself.
pub trait ErrorHandler: Send + Sync {
    fn handle(&self, request: &SkillRequest, error: &HandlerError) -> SkillResponse;
}

/// Error type for assembling a router
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterBuildError {
    #[error("No exception handler registered")]
    MissingExceptionHandler,

    #[error("Binding '{0}' registered twice")]
    DuplicateBinding(String),
}

struct Binding {
    name: String,
    predicate: Predicate,
    handler: Arc<dyn RequestHandler>,
}

/// Collects bindings, the exception handler and interceptors at startup.
#[derive(Default)]
pub struct RouterBuilder {
    bindings: Vec<Binding>,
    exception_handler: Option<Arc<dyn ErrorHandler>>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a binding; earlier bindings take precedence.
    pub fn add_request_handler<P>(
        mut self,
        name: impl Into<String>,
        predicate: P,
        handler: Arc<dyn RequestHandler>,
    ) -> Self
    where
        P: Fn(&SkillEvent) -> bool + Send + Sync + 'static,
    {
        self.bindings.push(Binding {
            name: name.into(),
            predicate: Box::new(predicate),
            handler,
        });
        self
    }

    pub fn exception_handler(mut self, handler: Arc<dyn ErrorHandler>) -> Self {
        self.exception_handler = Some(handler);
        self
    }

    pub fn request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    pub fn response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    /// Freezes the configuration into an immutable router.
    ///
    /// # Errors
    ///
    /// Returns `RouterBuildError` if no exception handler was registered or a
    /// binding name is used twice.
    pub fn build(self) -> Result<EventRouter, RouterBuildError> {
        let mut seen = HashSet::new();
        for binding in &self.bindings {
            if !seen.insert(binding.name.as_str()) {
                return Err(RouterBuildError::DuplicateBinding(binding.name.clone()));
            }
        }

        let exception_handler = self
            .exception_handler
            .ok_or(RouterBuildError::MissingExceptionHandler)?;

        Ok(EventRouter {
            bindings: self.bindings,
            exception_handler,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        })
    }
}

/// Immutable dispatch table shared by every conversation.
pub struct EventRouter {
    bindings: Vec<Binding>,
    exception_handler: Arc<dyn ErrorHandler>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl EventRouter {
    /// Binding names in evaluation order.
    pub fn binding_names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.name.as_str())
    }

    /// Name of the binding that would handle `event`, if any.
    pub fn route(&self, event: &SkillEvent) -> Option<&str> {
        self.select(event).map(|b| b.name.as_str())
    }

    fn select(&self, event: &SkillEvent) -> Option<&Binding> {
        self.bindings.iter().find(|b| (b.predicate)(event))
    }

    /// Dispatch one request against the conversation's session state.
    ///
    /// Returns `None` when no binding matches; the host decides how to treat
    /// an unmatched event.
    pub async fn dispatch(
        &self,
        request: &SkillRequest,
        state: &mut SessionState,
    ) -> Option<SkillResponse> {
        for interceptor in &self.request_interceptors {
            interceptor.before_dispatch(request, state);
        }

        let Some(binding) = self.select(&request.event) else {
            debug!(
                request_id = %request.request_id,
                event = ?request.event,
                "No binding matched request"
            );
            return None;
        };

        debug!(request_id = %request.request_id, binding = %binding.name, "Dispatching request");
        let phase_before = state.phase();

        let outcome = AssertUnwindSafe(binding.handler.handle(request, state))
            .catch_unwind()
            .await;

        let response = match outcome {
            Ok(Ok(response)) => response,
            Ok(Err(error)) => self.exception_handler.handle(request, &error),
            Err(payload) => {
                let error = HandlerError::Panicked(panic_message(payload.as_ref()));
                self.exception_handler.handle(request, &error)
            }
        };

        match phase_before.after_dispatch(state, &response) {
            Ok(phase) => debug!(request_id = %request.request_id, phase = ?phase, "Conversation phase"),
            Err(e) => warn!(request_id = %request.request_id, error = %e, "Unexpected conversation phase change"),
        }

        for interceptor in &self.response_interceptors {
            interceptor.after_dispatch(request, &response, state);
        }

        Some(response)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

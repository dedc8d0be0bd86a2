//! Gadget Skill - Voice skill backend for a connected gadget
//!
//! Serves the skill endpoint the voice platform posts requests to.

use std::sync::Arc;

use gadget_skill::adapters::discovery::{AlexaEndpointDirectory, InMemoryEndpointDirectory};
use gadget_skill::adapters::{skill_router, PayloadLogInterceptor, SkillAppState};
use gadget_skill::application::{skill_routes, SkillComponents};
use gadget_skill::config::AppConfig;
use gadget_skill::ports::EndpointDirectory;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration
    let config = AppConfig::load()?;
    config.validate()?;

    // Initialize logging
    let production = config.is_production();
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(production.then(|| {
            fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
        }))
        .with((!production).then(|| fmt::layer()))
        .init();

    // Endpoint discovery
    let static_endpoints = config.discovery.static_endpoint_list();
    let directory: Arc<dyn EndpointDirectory> = if static_endpoints.is_empty() {
        Arc::new(AlexaEndpointDirectory::new(config.discovery.directory_config())?)
    } else {
        tracing::warn!(endpoints = ?static_endpoints, "Serving static endpoints instead of platform discovery");
        Arc::new(InMemoryEndpointDirectory::from_endpoint_ids(static_endpoints)?)
    };

    // Event router
    let components = SkillComponents::new(directory)
        .with_directives(config.skill.directive_builder()?)
        .with_speech(config.speech.clone().into());
    let mut routes = skill_routes(components);
    if config.skill.log_payloads {
        let interceptor = Arc::new(PayloadLogInterceptor::new());
        routes = routes
            .request_interceptor(interceptor.clone())
            .response_interceptor(interceptor);
    }
    let router = Arc::new(routes.build()?);
    tracing::info!(bindings = ?router.binding_names().collect::<Vec<_>>(), "Event router ready");

    // HTTP host
    let state = SkillAppState::new(router).with_application_id(config.skill.application_id.clone());
    let app = skill_router(&config.server.skill_path, state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server.socket_addr()?;
    tracing::info!(skill_path = %config.server.skill_path, "Gadget skill listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

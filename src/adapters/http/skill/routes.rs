//! HTTP routes for the skill endpoint.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{handle_skill_request, health, SkillAppState};

/// Creates the skill router: the skill endpoint at `skill_path` plus `/health`.
pub fn skill_router(skill_path: &str, state: SkillAppState) -> Router {
    Router::new()
        .route(skill_path, post(handle_skill_request))
        .route("/health", get(health))
        .with_state(state)
}

use crate::{
    AppState, admin, create_entity, create_user, delete_entity, get_entity, health,
    list_entities, list_entity_history, list_history, list_users, reset_history, update_entity,
};

use am_core::{Equipment, PhoneLine, TelecomPack, TrackedEntity};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Admin endpoints
        .route("/admin/checkpoint", post(admin::checkpoint_handler))
        // Users
        .route("/api/v1/users", get(list_users).post(create_user))
        // Modification history
        .route(
            "/api/v1/history/{entity_type}",
            get(list_history).delete(reset_history),
        )
        .route(
            "/api/v1/history/{entity_type}/{entity_id}",
            get(list_entity_history),
        );

    let router = entity_routes::<Equipment>(router, "/api/v1/equipments");
    let router = entity_routes::<TelecomPack>(router, "/api/v1/telecom-packs");
    let router = entity_routes::<PhoneLine>(router, "/api/v1/phone-lines");

    router
        // Add shared state
        .with_state(state)
        // CORS middleware (the SPA is served from another origin in development)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// CRUD routes for one entity type under `base`
fn entity_routes<T: TrackedEntity>(router: Router<AppState>, base: &str) -> Router<AppState> {
    router
        .route(base, get(list_entities::<T>).post(create_entity::<T>))
        .route(
            &format!("{}/{{id}}", base),
            get(get_entity::<T>)
                .put(update_entity::<T>)
                .delete(delete_entity::<T>),
        )
}

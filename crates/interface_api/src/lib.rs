//! HTTP API Layer
//!
//! REST surface over the lost & found lifecycle engine, built on Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for items, claims, questions and notifications
//! - **Middleware**: Request IDs, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig, AppState};
//!
//! let app = create_router(AppState::in_memory(ApiConfig::default()));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_lifecycle::{InMemoryContactDirectory, InMemoryOutbox, LifecycleEngine};

use crate::config::ApiConfig;
use crate::handlers::{claims, health, items, notifications};
use crate::middleware::audit_middleware;

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<LifecycleEngine>,
    pub outbox: Arc<InMemoryOutbox>,
    pub directory: Arc<InMemoryContactDirectory>,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires an engine over in-memory stores, delivering notifications to
    /// the outbox the notification routes read from
    pub fn in_memory(config: ApiConfig) -> Self {
        let outbox = Arc::new(InMemoryOutbox::new());
        let directory = Arc::new(InMemoryContactDirectory::new());
        let engine = LifecycleEngine::builder()
            .directory(directory.clone())
            .notifier(outbox.clone())
            .build();

        Self {
            engine: Arc::new(engine),
            outbox,
            directory,
            config,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let item_routes = Router::new()
        .route("/", post(items::report_item).get(items::list_items))
        .route("/:id", get(items::get_item))
        .route("/:id/claims", post(items::submit_claim).get(items::list_claims))
        .route("/:id/handover", post(items::confirm_handover))
        .route("/:id/recovery", post(items::confirm_recovery))
        .route("/:id/close", post(items::close_item))
        .route("/:id/contact", get(items::contact_exchange));

    let claim_routes = Router::new()
        .route("/:id/verify", post(claims::verify_claim))
        .route("/:id/reject", post(claims::reject_claim))
        .route(
            "/:id/questions",
            post(claims::ask_question).get(claims::list_questions),
        );

    let question_routes = Router::new().route("/:id/answer", post(claims::answer_question));

    let participant_routes = Router::new()
        .route("/:id/notifications", get(notifications::list_notifications))
        .route("/:id/notifications/read-all", post(notifications::mark_all_read))
        .route("/:id/badges", get(notifications::helper_badges));

    let notification_routes =
        Router::new().route("/:id/read", post(notifications::mark_read));

    let api = Router::new()
        .nest("/items", item_routes)
        .nest("/claims", claim_routes)
        .nest("/questions", question_routes)
        .nest("/participants", participant_routes)
        .nest("/notifications", notification_routes);

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid));

    if state.config.cors_allow_any {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}

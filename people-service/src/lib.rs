pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use axum::{
    body::Body,
    middleware::from_fn,
    routing::get,
    Json, Router,
};
use service_core::middleware::{
    security_headers::security_headers_middleware,
    tracing::{http_request_span, request_id_middleware},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::PeopleConfig;
use crate::services::PeopleRepository;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::people::list_people,
        handlers::people::get_person,
        handlers::people::create_person,
        handlers::people::update_person,
        handlers::people::delete_person,
    ),
    components(schemas(models::Person)),
    tags(
        (name = "People", description = "CRUD over the people collection"),
        (name = "Observability", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: PeopleConfig,
    pub people: Arc<dyn PeopleRepository>,
}

impl AppState {
    pub fn new(config: PeopleConfig, people: Arc<dyn PeopleRepository>) -> Self {
        Self { config, people }
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/people",
            get(handlers::list_people)
                .post(handlers::create_person)
                .put(handlers::update_person),
        )
        .route(
            "/people/:id",
            get(handlers::get_person).delete(handlers::delete_person),
        );

    // Swagger UI is a development aid; the raw document stays available.
    if state.config.swagger_enabled() {
        app =
            app.merge(SwaggerUi::new("/docs").url("/.well-known/openapi.json", ApiDoc::openapi()));
    } else {
        app = app.route(
            "/.well-known/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        );
    }

    app.with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(http_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
}

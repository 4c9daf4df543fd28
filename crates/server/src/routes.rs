use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod etudiant;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Student routes, mounted under `/etudiant`.
pub fn etudiant_routes() -> Router<ServerState> {
    Router::new()
        .route("/retrieve-all-etudiants", get(etudiant::retrieve_all_etudiants))
        .route("/retrieve-etudiant/:id", get(etudiant::retrieve_etudiant))
        .route("/retrieve-etudiant-cin/:cin", get(etudiant::retrieve_etudiant_by_cin))
        .route("/add-etudiant", post(etudiant::add_etudiant))
        .route("/modify-etudiant", put(etudiant::modify_etudiant))
        .route("/remove-etudiant/:id", delete(etudiant::remove_etudiant))
}

/// Build the full application router: health, student routes and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/etudiant", etudiant_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}

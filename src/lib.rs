pub mod config;
pub mod dto;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod views;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

use handlers::{rest, web};
use service::NoteService;

/// HTML pages at the root, the JSON API under `/rest` and its Swagger UI.
pub fn router(service: Arc<NoteService>) -> Router {
    // HTML router config
    let web_router = Router::new()
        .route("/", get(web::list_notes))
        .route("/add", get(web::add_note).post(web::add_note))
        .route("/delete", get(web::delete_note).post(web::delete_note))
        .route("/update", get(web::update_note).post(web::update_note))
        .route("/updateNote", get(web::edit_note_form))
        .route("/health", get(web::health_check))
        .with_state(service.clone());

    // REST router config
    let rest_router = Router::new()
        .route("/notes", get(rest::get_all_notes).post(rest::create_note))
        .route(
            "/notes/{id}",
            get(rest::get_one_note)
                .put(rest::update_note)
                .delete(rest::delete_note),
        )
        .with_state(service);

    Router::new()
        .merge(web_router)
        .nest("/rest", rest_router)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-doc/openapi.json", rest::ApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
}

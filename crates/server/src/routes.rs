use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod health;
pub mod students;

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let student_routes = Router::new()
        .route("/students", get(students::list).post(students::create))
        .route("/students/", get(students::list).post(students::create))
        .route(
            "/students/:id",
            get(students::get).put(students::update).delete(students::delete),
        );

    Router::new()
        .route("/heart", get(health::heart))
        .merge(student_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// Router with permissive CORS, as served by `run`.
pub fn app(state: AppState) -> Router {
    build_router(state, CorsLayer::very_permissive())
}

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::speech::SpeechService;
use crate::translate::TranslationService;

pub struct AppState {
    pub translation: TranslationService,
    pub speech: SpeechService,
    pub frontend_file: PathBuf,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::frontend))
        .route("/translate", get(handlers::translate))
        .route("/speech", get(handlers::speech))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{HealthResponse, SpeechParams, TranslateParams, TranslateResponse};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::speech::SpeechArtifact;

pub async fn frontend(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    match tokio::fs::read_to_string(&state.frontend_file).await {
        Ok(page) => Ok(Html(page)),
        Err(_) => Err(AppError::NotFound(
            state.frontend_file.display().to_string(),
        )),
    }
}

pub async fn translate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TranslateParams>,
) -> Result<Json<TranslateResponse>, AppError> {
    let translated_text = state
        .translation
        .translate(&params.text, &params.target_lang)
        .await?;

    Ok(Json(TranslateResponse { translated_text }))
}

pub async fn speech(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SpeechParams>,
) -> Result<Response, AppError> {
    let artifact = state.speech.synthesize(&params.text, &params.lang).await?;
    tracing::debug!("Serving speech artifact: {}", artifact.path.display());

    let disposition = format!(
        "attachment; filename=\"{}\"",
        SpeechArtifact::DOWNLOAD_NAME
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, SpeechArtifact::MEDIA_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.audio,
    )
        .into_response())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

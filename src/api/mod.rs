pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

// Missing query parameters deserialize to empty strings so every bad
// request takes the structured 400 path instead of a framework rejection.

#[derive(Debug, Deserialize)]
pub struct TranslateParams {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target_lang: String,
}

#[derive(Debug, Deserialize)]
pub struct SpeechParams {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub lang: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

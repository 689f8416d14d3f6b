use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

mod api;
mod catalog;
mod error;
mod speech;
mod translate;

use api::routes::{create_router, AppState};
use catalog::LanguageCatalog;
use speech::{GoogleSpeech, SpeechService};
use translate::{GoogleTranslate, TranslationService};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT must be a number");
    let frontend_file =
        std::env::var("FRONTEND_FILE").unwrap_or_else(|_| "static/index.html".to_string());
    let audio_dir = std::env::var("AUDIO_DIR").unwrap_or_else(|_| "./audio".to_string());
    let timeout_secs: u64 = std::env::var("PROVIDER_TIMEOUT_SECS")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .expect("PROVIDER_TIMEOUT_SECS must be a number");

    // Each endpoint gets its own catalog; both fall back to the default list
    let translate_catalog = std::env::var("TRANSLATE_LANGS")
        .map(|csv| LanguageCatalog::from_csv(&csv))
        .unwrap_or_default();
    let speech_catalog = std::env::var("SPEECH_LANGS")
        .map(|csv| LanguageCatalog::from_csv(&csv))
        .unwrap_or_default();

    // One shared client; its timeout bounds every provider call
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .expect("Failed to build HTTP client");

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid address");

    tracing::info!("Translate TTS Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Frontend file: {}", frontend_file);
    tracing::info!(
        "Translation languages: {}, speech languages: {}",
        translate_catalog.len(),
        speech_catalog.len()
    );

    // Create app state
    let state = Arc::new(AppState {
        translation: TranslationService::new(
            Arc::new(GoogleTranslate::new(client.clone())),
            translate_catalog,
        ),
        speech: SpeechService::new(Arc::new(GoogleSpeech::new(client)), speech_catalog, audio_dir),
        frontend_file: frontend_file.into(),
    });

    // Create router
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

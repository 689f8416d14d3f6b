pub mod google;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::LanguageCatalog;
use crate::error::{AppError, ProviderError};

pub use google::GoogleSpeech;

/// Playback rate requested from the synthesis provider. Only the normal
/// rate is exposed; the upstream slow variant is intentionally not surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechRate {
    Normal,
}

/// External speech-synthesis capability, returning an MP3 payload.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        lang: &str,
        rate: SpeechRate,
    ) -> Result<Vec<u8>, ProviderError>;
}

/// Synthesized audio for one request.
///
/// Each artifact lives in its own uniquely named file, so concurrent
/// requests never observe each other's output. Nothing deletes the file;
/// its lifetime after the response is the caller's concern.
#[derive(Debug)]
pub struct SpeechArtifact {
    pub path: PathBuf,
    pub audio: Vec<u8>,
}

impl SpeechArtifact {
    pub const MEDIA_TYPE: &'static str = "audio/mpeg";
    pub const DOWNLOAD_NAME: &'static str = "speech.mp3";
}

pub struct SpeechService {
    provider: Arc<dyn SpeechProvider>,
    catalog: LanguageCatalog,
    audio_dir: PathBuf,
}

impl SpeechService {
    pub fn new(
        provider: Arc<dyn SpeechProvider>,
        catalog: LanguageCatalog,
        audio_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            provider,
            catalog,
            audio_dir: audio_dir.into(),
        }
    }

    /// Validate the request, synthesize at normal rate, and persist the
    /// payload under a fresh uuid name.
    pub async fn synthesize(&self, text: &str, lang: &str) -> Result<SpeechArtifact, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::BadRequest("No text provided".into()));
        }
        if !self.catalog.contains(lang) {
            return Err(AppError::UnsupportedLanguage(lang.to_string()));
        }

        let audio = self
            .provider
            .synthesize(text, lang, SpeechRate::Normal)
            .await?;

        tokio::fs::create_dir_all(&self.audio_dir).await?;
        let path = self.audio_dir.join(format!("{}.mp3", Uuid::new_v4()));
        tokio::fs::write(&path, &audio).await?;
        tracing::debug!("Wrote speech artifact: {}", path.display());

        Ok(SpeechArtifact { path, audio })
    }
}

pub mod google;

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::LanguageCatalog;
use crate::error::{AppError, ProviderError};

pub use google::GoogleTranslate;

/// External translation capability. The source language is always detected
/// by the provider; callers only name the target.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, ProviderError>;
}

pub struct TranslationService {
    provider: Arc<dyn TranslationProvider>,
    catalog: LanguageCatalog,
}

impl TranslationService {
    pub fn new(provider: Arc<dyn TranslationProvider>, catalog: LanguageCatalog) -> Self {
        Self { provider, catalog }
    }

    /// Validate the request, then make a single provider attempt.
    ///
    /// No retries; a retry layer would sit outside the gateway so request
    /// latency stays bounded by one provider timeout.
    pub async fn translate(&self, text: &str, target_lang: &str) -> Result<String, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::BadRequest("No text provided".into()));
        }
        if !self.catalog.contains(target_lang) {
            return Err(AppError::UnsupportedLanguage(target_lang.to_string()));
        }

        let translated = self.provider.translate(text, target_lang).await?;
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct EchoProvider {
        calls: AtomicUsize,
        seen_text: Mutex<String>,
        reply: &'static str,
    }

    impl EchoProvider {
        fn new(reply: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen_text: Mutex::new(String::new()),
                reply,
            }
        }
    }

    #[async_trait]
    impl TranslationProvider for EchoProvider {
        async fn translate(&self, text: &str, _target_lang: &str) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_text.lock().unwrap() = text.to_string();
            Ok(self.reply.to_string())
        }
    }

    struct FailingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TranslationProvider for FailingProvider {
        async fn translate(&self, _text: &str, _target_lang: &str) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ProviderError::Response("quota exhausted".into()))
        }
    }

    fn service(provider: Arc<dyn TranslationProvider>) -> TranslationService {
        TranslationService::new(provider, LanguageCatalog::from_csv("en,fr"))
    }

    #[tokio::test]
    async fn empty_text_never_reaches_provider() {
        let provider = Arc::new(EchoProvider::new("Bonjour"));
        let service = service(provider.clone());

        for text in ["", "   ", "\t\n"] {
            let err = service.translate(text, "fr").await.unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_language_never_reaches_provider() {
        let provider = Arc::new(EchoProvider::new("Bonjour"));
        let service = service(provider.clone());

        let err = service.translate("Hello", "xx").await.unwrap_err();
        assert_eq!(err.to_string(), "Language 'xx' not supported");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn delegates_trimmed_text_to_provider() {
        let provider = Arc::new(EchoProvider::new("Bonjour"));
        let service = service(provider.clone());

        let translated = service.translate("  Hello  ", "fr").await.unwrap();
        assert_eq!(translated, "Bonjour");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(*provider.seen_text.lock().unwrap(), "Hello");
    }

    #[tokio::test]
    async fn provider_failure_is_normalized() {
        let provider = Arc::new(FailingProvider {
            calls: AtomicUsize::new(0),
        });
        let service = service(provider.clone());

        let err = service.translate("Hello", "fr").await.unwrap_err();
        match err {
            AppError::Provider(msg) => assert!(msg.contains("quota exhausted")),
            other => panic!("expected provider error, got {:?}", other),
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }
}

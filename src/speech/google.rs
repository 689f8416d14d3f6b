use async_trait::async_trait;

use super::{SpeechProvider, SpeechRate};
use crate::error::ProviderError;

const ENDPOINT: &str = "https://translate.google.com/translate_tts";
const USER_AGENT: &str = "Mozilla/5.0";

/// Client for the Google Translate speech endpoint, which renders short
/// text snippets as MP3.
pub struct GoogleSpeech {
    client: reqwest::Client,
}

impl GoogleSpeech {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn ttsspeed(rate: SpeechRate) -> &'static str {
    match rate {
        SpeechRate::Normal => "1",
    }
}

#[async_trait]
impl SpeechProvider for GoogleSpeech {
    async fn synthesize(
        &self,
        text: &str,
        lang: &str,
        rate: SpeechRate,
    ) -> Result<Vec<u8>, ProviderError> {
        let response = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang),
                ("ttsspeed", ttsspeed(rate)),
                ("q", text),
            ])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Response(format!(
                "speech endpoint returned {}",
                response.status()
            )));
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(ProviderError::Response(
                "speech endpoint returned an empty payload".into(),
            ));
        }

        Ok(audio.to_vec())
    }
}

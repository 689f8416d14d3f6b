use async_trait::async_trait;
use serde_json::Value;

use super::TranslationProvider;
use crate::error::ProviderError;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const USER_AGENT: &str = "Mozilla/5.0";

/// Client for the unofficial Google Translate endpoint (free tier).
pub struct GoogleTranslate {
    client: reqwest::Client,
}

impl GoogleTranslate {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslate {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Response(format!(
                "translation endpoint returned {}",
                response.status()
            )));
        }

        let payload: Value = response.json().await?;
        let translated = collect_segments(&payload);
        if translated.is_empty() {
            return Err(ProviderError::Response(
                "translation payload had no text segments".into(),
            ));
        }

        Ok(translated)
    }
}

/// The endpoint answers with a nested array; each entry of `payload[0]`
/// carries one translated chunk at index 0.
fn collect_segments(payload: &Value) -> String {
    let mut out = String::new();

    if let Some(segments) = payload.get(0).and_then(Value::as_array) {
        for segment in segments {
            if let Some(chunk) = segment.get(0).and_then(Value::as_str) {
                out.push_str(chunk);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_chunks_in_order() {
        let payload = json!([
            [["Bonjour ", "Hello ", null], ["le monde", "world", null]],
            null,
            "en"
        ]);
        assert_eq!(collect_segments(&payload), "Bonjour le monde");
    }

    #[test]
    fn skips_non_text_entries() {
        let payload = json!([[["Bonjour", "Hello", null], [null, null], 42]]);
        assert_eq!(collect_segments(&payload), "Bonjour");
    }

    #[test]
    fn tolerates_unexpected_shapes() {
        assert_eq!(collect_segments(&json!([])), "");
        assert_eq!(collect_segments(&json!({})), "");
        assert_eq!(collect_segments(&json!(null)), "");
    }
}

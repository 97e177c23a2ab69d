//! Client for the public Google Translate web endpoint

use crate::error::{Result, SmartAtsError};
use crate::translate::{LanguageCode, TranslationService};
use log::debug;
use serde_json::Value;

pub struct GoogleTranslateClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslateClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl TranslationService for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        dest: LanguageCode,
    ) -> Result<String> {
        debug!(
            "Translating {} characters from '{}' to '{}'",
            text.len(),
            source,
            dest
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source.code()),
                ("tl", dest.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;

        // The endpoint answers with nested arrays; the translated segments
        // live at [0][i][0].
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                SmartAtsError::Translation("unexpected response shape from translation service".to_string())
            })?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(part);
            }
        }

        if translated.is_empty() {
            return Err(SmartAtsError::Translation(
                "translation service returned no text".to_string(),
            ));
        }

        Ok(translated)
    }
}

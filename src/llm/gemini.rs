//! Google Gemini client for the generation backend

use crate::config::GenerationConfig;
use crate::error::{Result, SmartAtsError};
use crate::llm::GenerationBackend;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationParams,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationParams {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_output_tokens: u32,
}

impl GeminiClient {
    /// Configuration and the API key are injected explicitly; the client
    /// never reads ambient state.
    pub fn new(config: &GenerationConfig, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            max_output_tokens: config.max_output_tokens,
        }
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl GenerationBackend for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(
            "Sending {} character prompt to model '{}'",
            prompt.len(),
            self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationParams {
                max_output_tokens: self.max_output_tokens,
            },
        };

        // Any failure here is fatal for the run; callers surface it as-is.
        let response = self
            .client
            .post(self.request_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| SmartAtsError::Generation(format!("request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| SmartAtsError::Generation(format!("API rejected request: {}", e)))?;

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| SmartAtsError::Generation(format!("malformed response: {}", e)))?;

        body.candidates
            .and_then(|candidates| candidates.into_iter().next())
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                SmartAtsError::Generation("model returned no candidates".to_string())
            })
    }
}

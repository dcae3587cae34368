use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};

use super::{GrammarChecker, GrammarVerdict};
use crate::error::GrammarError;
use crate::storage::GrammarConfig;

/// Grammar checker backed by a Gemini `generateContent` endpoint.
pub struct GeminiChecker {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiChecker {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GrammarError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Build from config, reading the API key from the configured variable.
    pub fn from_config(cfg: &GrammarConfig) -> Result<Self, GrammarError> {
        let api_key = std::env::var(&cfg.api_key_env)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GrammarError::MissingApiKey(cfg.api_key_env.clone()))?;
        Self::new(
            cfg.endpoint.clone(),
            cfg.model.clone(),
            api_key,
            Duration::from_secs(cfg.timeout_secs),
        )
    }

    fn prompt(text: &str) -> String {
        format!(
            "Analyze the following text for English grammar and spelling mistakes. \
             If there are mistakes, list them clearly and provide a corrected version. \
             If the text is not in English, state 'The text must be written in English'. \
             If the grammar is perfect, say 'PERFECT'.\n\n\
             Text to analyze: \"{text}\""
        )
    }

    /// Concatenated text parts of the first candidate.
    fn reply_text(body: &Value) -> Result<String, GrammarError> {
        let parts = body
            .pointer("/candidates/0/content/parts")
            .and_then(Value::as_array)
            .ok_or_else(|| GrammarError::MalformedResponse("no candidate content".into()))?;
        Ok(parts
            .iter()
            .filter_map(|p| p.get("text").and_then(Value::as_str))
            .collect())
    }
}

impl GrammarChecker for GeminiChecker {
    async fn check(&self, text: &str) -> Result<GrammarVerdict, GrammarError> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = json!({
            "contents": [{
                "parts": [{ "text": Self::prompt(text) }]
            }]
        });

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GrammarError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = resp.json().await?;
        let reply = Self::reply_text(&payload)?;
        tracing::debug!(model = %self.model, chars = reply.len(), "grammar reply received");
        Ok(GrammarVerdict::from_reply(&reply))
    }
}

//! Chat-completions judge over blocking HTTP
//!
//! Requests are pinned to deterministic decoding: temperature 0 and a token
//! cap just large enough for a one-digit answer.

use std::time::Duration;

use serde_json::json;

use super::{Judge, TransportError};
use crate::config::JudgeSettings;
use crate::error::{EvalError, Result};

/// Fixed system message sent ahead of every rubric prompt
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that evaluates poetry translations.";

/// Sampling temperature; the minimum, for repeatable scores
pub const TEMPERATURE: f32 = 0.0;

/// Response length cap; only a short numeric answer is expected
pub const MAX_TOKENS: u32 = 10;

/// Environment variables consulted for the bearer token, in order
pub const API_KEY_VARS: [&str; 2] = ["OPENAI_API_KEY", "VERSE_JUDGE_API_KEY"];

/// Judge backed by an OpenAI-compatible `/v1/chat/completions` endpoint
pub struct ChatCompletionsJudge {
    agent: ureq::Agent,
    url: String,
    model: String,
    api_key: String,
}

impl ChatCompletionsJudge {
    pub fn new(settings: &JudgeSettings, api_key: String) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(settings.timeout_seconds)))
            .http_status_as_error(false)
            .build();

        Self {
            agent: ureq::Agent::new_with_config(config),
            url: completions_url(&settings.api_base),
            model: settings.model.clone(),
            api_key,
        }
    }

    /// Build a judge using the API key from the environment.
    ///
    /// A missing key is a configuration error and aborts the run before any
    /// item is scored.
    pub fn from_env(settings: &JudgeSettings) -> Result<Self> {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
            .ok_or_else(|| {
                EvalError::MissingCredentials(format!(
                    "{} environment variable must be set",
                    API_KEY_VARS.join(" or ")
                ))
            })?;

        Ok(Self::new(settings, api_key))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        })
    }
}

impl Judge for ChatCompletionsJudge {
    fn send(&self, prompt: &str) -> std::result::Result<String, TransportError> {
        let payload = self.request_body(prompt).to_string();

        let mut response = self
            .agent
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .send(payload.as_bytes())
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        extract_content(&body)
    }
}

fn completions_url(api_base: &str) -> String {
    format!("{}/v1/chat/completions", api_base.trim_end_matches('/'))
}

/// Pull `choices[0].message.content` out of a chat-completions response body
pub fn extract_content(body: &str) -> std::result::Result<String, TransportError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| TransportError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    value
        .pointer("/choices/0/message/content")
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            TransportError::MalformedResponse("missing choices[0].message.content".to_string())
        })
}

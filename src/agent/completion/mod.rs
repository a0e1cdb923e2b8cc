use std::error::Error as _;

use anyhow::Result;
use serde_json::Value;

use crate::{
    agent::session::Message,
    config::ModelConfig,
    error::{CompletionError, error},
};

pub mod request;
pub mod response;

#[cfg(test)]
pub mod mock;

use request::CompletionRequest;
use response::CompletionResponse;

/// Client for an OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f64,
    api_key: String,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

impl CompletionClient {
    pub fn new(config: &ModelConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.name.clone(),
            temperature: config.temperature,
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        Self::new(config, config.api_key()?)
    }

    pub fn request<'a>(
        &'a self,
        user_text: &'a str,
        history: &'a [Message],
    ) -> CompletionRequest<'a> {
        CompletionRequest::new(&self.model, self.temperature, history, user_text)
    }

    /// Sends `history` followed by `user_text` and returns the assistant's reply.
    ///
    /// Makes exactly one attempt. The authorization header is never logged;
    /// the full payload and response body only show up at trace level.
    pub async fn complete(
        &self,
        user_text: &str,
        history: &[Message],
    ) -> Result<String, CompletionError> {
        let request = self.request(user_text, history);
        log::debug!(
            "completion request -> {} (model: {}, messages: {})",
            self.endpoint,
            self.model,
            request.messages.len()
        );
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "completion payload: {}",
                serde_json::to_string(&request).unwrap_or_default()
            );
        }

        let response = match self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                return error(
                    "completion request",
                    CompletionError::Transport(describe(&err)),
                );
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                return error("completion body", CompletionError::Transport(describe(&err)));
            }
        };
        log::debug!("completion response <- {}", status);
        log::trace!("completion response body: {}", text);

        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(err) => {
                return error(
                    "completion decode",
                    CompletionError::Transport(format!(
                        "endpoint returned {status} with a non-json body: {err}"
                    )),
                );
            }
        };

        match CompletionResponse::into_reply(status, body) {
            Ok(reply) => Ok(reply),
            Err(err) => error("no choices in the response", err),
        }
    }
}

/// reqwest hides the interesting part (timeout, refused, tls) in the source chain.
fn describe(err: &reqwest::Error) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }

    description
}

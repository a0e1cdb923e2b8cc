use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::{constant::FALLBACK_ERROR, error::CompletionError};

#[derive(Deserialize, Debug, Default)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Deserialize, Debug)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Deserialize, Debug)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, or the server's error (falling back to a
    /// generic message) when there is nothing to show.
    pub fn into_reply(status: StatusCode, body: Value) -> Result<String, CompletionError> {
        // a body whose shape we don't recognise is treated like one without choices
        let response = CompletionResponse::deserialize(&body).unwrap_or_else(|_| Self {
            choices: Vec::new(),
            error: body.get("error").cloned(),
        });

        if status.is_success() {
            let content = response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message)
                .and_then(|message| message.content);

            if let Some(content) = content {
                return Ok(content);
            }
        }

        Err(CompletionError::Protocol(
            error_text(response.error).unwrap_or_else(|| FALLBACK_ERROR.to_string()),
        ))
    }
}

fn error_text(error: Option<Value>) -> Option<String> {
    match error? {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Object(fields) => match fields.get("message").and_then(Value::as_str) {
            Some(message) => Some(message.to_string()),
            None => Some(Value::Object(fields).to_string()),
        },
        other => Some(other.to_string()),
    }
}

use serde::{Deserialize, Serialize};

use crate::agent::{Turn, session::Message};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionResponse {
    pub session_id: String,
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatRequest {
    pub content: String,
}

/// `messages` is the whole conversation so the page can re-render from it.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ChatResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub messages: Vec<Message>,
}

impl ChatResponse {
    pub fn new(turn: Turn, messages: Vec<Message>) -> Self {
        match turn {
            Turn::Ignored => Self {
                messages,
                ..Default::default()
            },
            Turn::Reply(reply) => Self {
                reply: Some(reply),
                messages,
                ..Default::default()
            },
            Turn::Failed(error) => Self {
                error: Some(error),
                messages,
                ..Default::default()
            },
        }
    }
}

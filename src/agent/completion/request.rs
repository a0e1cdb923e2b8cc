use serde::Serialize;

use crate::agent::session::{Message, Role};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

impl<'a> From<&'a Message> for ChatMessage<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            role: message.role(),
            content: message.content(),
        }
    }
}

/// Body of `POST /v1/chat/completions`.
#[derive(Serialize, Debug, Clone)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f64,
}

impl<'a> CompletionRequest<'a> {
    /// `history` is serialized in order, followed by exactly one trailing user entry.
    pub fn new(
        model: &'a str,
        temperature: f64,
        history: &'a [Message],
        user_text: &'a str,
    ) -> Self {
        let mut messages: Vec<ChatMessage<'a>> = history.iter().map(ChatMessage::from).collect();
        messages.push(ChatMessage {
            role: Role::User,
            content: user_text,
        });

        Self {
            model,
            messages,
            temperature,
        }
    }
}

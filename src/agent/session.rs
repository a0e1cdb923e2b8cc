use serde::{Deserialize, Serialize};
use strum::Display;

use crate::constant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whitespace-only user input never enters a session.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Conversation owned by a single visitor. Append-only, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    messages: Vec<Message>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(constant::DEFAULT_GREETING)
    }
}

impl Session {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::assistant(greeting)],
        }
    }

    /// Returns false when the message was discarded.
    pub fn append(&mut self, message: Message) -> bool {
        if message.role() == Role::User && message.is_blank() {
            log::debug!("discarding blank user message");
            return false;
        }

        self.messages.push(message);
        true
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Everything before the most recent user message, i.e. the history that
    /// accompanies it to the completion endpoint.
    pub fn history_before_last_user(&self) -> &[Message] {
        match self
            .messages
            .iter()
            .rposition(|message| message.role() == Role::User)
        {
            Some(index) => &self.messages[..index],
            None => &self.messages,
        }
    }
}

use anyhow::Result;

use crate::{
    agent::{
        completion::CompletionClient,
        session::{Message, Session},
    },
    config::AssistantConfig,
};

pub mod completion;
pub mod session;

/// Outcome of one user submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// blank input, nothing happened
    Ignored,
    Reply(String),
    Failed(String),
}

impl Turn {
    /// Text shown in place of the assistant's bubble.
    pub fn rendered(&self) -> Option<&str> {
        match self {
            Self::Ignored => None,
            Self::Reply(text) | Self::Failed(text) => Some(text),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Assistant {
    client: CompletionClient,
    greeting: String,
}

impl Assistant {
    pub fn new(client: CompletionClient, greeting: impl Into<String>) -> Self {
        Self {
            client,
            greeting: greeting.into(),
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Result<Self> {
        Ok(Self::new(
            CompletionClient::from_config(&config.model)?,
            config.greeting.clone(),
        ))
    }

    pub fn new_session(&self) -> Session {
        Session::new(self.greeting.clone())
    }

    /// Runs one turn against `session` and hands it back.
    ///
    /// The user message is appended before the call, the reply only on
    /// success, so a failed turn leaves the session one message longer.
    pub async fn handle(&self, mut session: Session, input: &str) -> (Session, Turn) {
        if !session.append(Message::user(input)) {
            return (session, Turn::Ignored);
        }

        let result = self
            .client
            .complete(input, session.history_before_last_user())
            .await;

        match result {
            Ok(reply) => {
                session.append(Message::assistant(reply.clone()));
                (session, Turn::Reply(reply))
            }
            Err(err) => {
                log::error!("turn failed, {} messages in session: {}", session.len(), err);
                (session, Turn::Failed(err.to_string()))
            }
        }
    }
}

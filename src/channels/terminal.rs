use anyhow::Result;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

use crate::{
    agent::{Assistant, Turn, session::Role},
    channels::AssistantChannel,
};

/// Line-based chat over stdin/stdout. Ends on EOF.
pub struct TerminalChannel<R, W> {
    assistant: Assistant,
    reader: R,
    writer: W,
}

impl TerminalChannel<BufReader<Stdin>, Stdout> {
    pub fn stdio(assistant: Assistant) -> Self {
        Self::new(assistant, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> TerminalChannel<R, W> {
    pub fn new(assistant: Assistant, reader: R, writer: W) -> Self {
        Self {
            assistant,
            reader,
            writer,
        }
    }
}

/// Prints `text` exactly as stored, behind the role's prompt.
async fn say<W: AsyncWrite + Unpin>(writer: &mut W, role: Role, text: &str) -> Result<()> {
    writer
        .write_all(format!("{}> {}\n", role, text).as_bytes())
        .await?;
    writer.flush().await?;

    Ok(())
}

impl<R, W> AssistantChannel for TerminalChannel<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn run(&mut self) -> Result<()> {
        let mut session = self.assistant.new_session();
        for message in session.messages() {
            say(&mut self.writer, message.role(), message.content()).await?;
        }

        let mut lines = (&mut self.reader).lines();
        loop {
            self.writer
                .write_all(format!("{}> ", Role::User).as_bytes())
                .await?;
            self.writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                self.writer.write_all(b"\n").await?;
                break;
            };

            let (updated, turn) = self.assistant.handle(session, &line).await;
            session = updated;

            if let Some(text) = turn.rendered() {
                if matches!(turn, Turn::Failed(_)) {
                    log::warn!("completion failed, conversation continues");
                }
                say(&mut self.writer, Role::Assistant, text).await?;
            }
        }

        log::info!("chat ended after {} messages", session.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::agent::completion::{CompletionClient, mock::MockEndpoint};

    async fn transcript(endpoint: &MockEndpoint, input: &str) -> String {
        let assistant = Assistant::new(
            CompletionClient::new(&endpoint.model_config(), "sk-test").unwrap(),
            "Hello, I am a bot. How can I help you?",
        );
        let mut output = Vec::new();

        TerminalChannel::new(assistant, input.as_bytes(), &mut output)
            .run()
            .await
            .unwrap();

        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn prints_greeting_and_replies() {
        let endpoint =
            MockEndpoint::json(json!({ "choices": [{ "message": { "content": "4" } }] })).await;

        let output = transcript(&endpoint, "What is 2+2?\n   \n").await;

        assert_eq!(
            output,
            "assistant> Hello, I am a bot. How can I help you?\n\
             user> assistant> 4\n\
             user> user> \n"
        );
        assert_eq!(endpoint.requests().await.len(), 1);
    }

    #[tokio::test]
    async fn replies_are_printed_unchanged() {
        let reply = "  indented\n\n- item one\n- item two\n";
        let endpoint =
            MockEndpoint::json(json!({ "choices": [{ "message": { "content": reply } }] })).await;

        let output = transcript(&endpoint, "list please\n").await;

        assert!(output.contains(&format!("user> assistant> {}\nuser> ", reply)));
    }

    #[tokio::test]
    async fn failures_are_printed_and_chat_continues() {
        let endpoint = MockEndpoint::with_status(
            StatusCode::UNAUTHORIZED,
            json!({ "error": "invalid_api_key" }),
        )
        .await;

        let output = transcript(&endpoint, "hi\nagain\n").await;

        assert_eq!(output.matches("assistant> invalid_api_key\n").count(), 2);
        let requests = endpoint.requests().await;
        assert_eq!(requests.len(), 2);
        // the failed turn's user message stays in the history
        assert_eq!(requests[1].body["messages"].as_array().unwrap().len(), 3);
    }
}

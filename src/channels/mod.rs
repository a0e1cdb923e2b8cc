use anyhow::Result;

pub mod http;
pub mod terminal;

pub trait AssistantChannel {
    async fn run(&mut self) -> Result<()>;
}

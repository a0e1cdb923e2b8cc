use anyhow::Result;

mod agent;
mod assistant;
mod channels;
mod config;
mod constant;
mod error;

#[tokio::main]
async fn main() -> Result<()> {
    assistant::cli().await
}

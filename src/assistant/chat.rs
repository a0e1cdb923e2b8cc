use anyhow::{Context, Result};
use clap::Args;

use crate::{
    agent::Assistant,
    channels::{AssistantChannel, terminal::TerminalChannel},
    config::AssistantConfig,
};

#[derive(Debug, Args, Clone)]
pub struct ChatArgs {
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_hint = clap::ValueHint::FilePath,
        help = "path to the config.toml file",
    )]
    pub config: Option<std::path::PathBuf>,
}

pub async fn chat(args: ChatArgs) -> Result<()> {
    let config = AssistantConfig::load(args.config)?;
    let assistant = Assistant::from_config(&config).context("cannot create completion client")?;

    TerminalChannel::stdio(assistant).run().await
}

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    agent::Assistant,
    channels::{AssistantChannel, http::HTTPChannel},
    config::AssistantConfig,
};

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_hint = clap::ValueHint::FilePath,
        help = "path to the config.toml file",
    )]
    pub config: Option<std::path::PathBuf>,

    #[arg(short, long, help = "port to serve on, overrides the config file")]
    pub port: Option<u16>,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let mut config = AssistantConfig::load(args.config)?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    let assistant = Assistant::from_config(&config).context("cannot create completion client")?;
    log::info!(
        "using model {} at {}",
        config.model.name,
        config.model.endpoint
    );

    let mut http = HTTPChannel::new(config.http.clone(), assistant)?;
    http.run().await
}

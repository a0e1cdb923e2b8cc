use anyhow::{Result, bail};
use clap::Args;

use crate::config::AssistantConfig;

#[derive(Debug, Args, Clone)]
pub struct ConfigureArgs {
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_hint = clap::ValueHint::FilePath,
        help = "where to write the config file, defaults to ~/config/.assistant/config.toml",
    )]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, help = "overwrite an existing file")]
    pub force: bool,
}

pub fn configure(args: ConfigureArgs) -> Result<()> {
    let path = match args.config {
        Some(path) => path,
        None => AssistantConfig::default_path()?,
    };

    if path.exists() && !args.force {
        bail!("{} already exists, pass --force to overwrite", path.display());
    }

    AssistantConfig::create_file(path.clone())?;
    log::info!("config written to {}", path.display());

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};

mod chat;
mod configure;
mod run;

#[derive(Parser, Debug)]
#[command(version, about, long_about=None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve the chat page and api
    Run(run::RunArgs),
    /// Chat from the terminal
    Chat(chat::ChatArgs),
    /// Write the default config file
    Configure(configure::ConfigureArgs),
}

/// Unless RUST_LOG says otherwise, log this crate at `level` and keep
/// dependencies quiet.
fn init_logger(level: log::LevelFilter) {
    let result = if std::env::var("RUST_LOG").is_err() {
        pretty_env_logger::formatted_builder()
            .filter_level(log::LevelFilter::Warn)
            .filter_module("assistant", level)
            .filter_module("reqwest", log::LevelFilter::Error)
            .filter_module("hyper", log::LevelFilter::Error)
            .filter_module("hyper_util", log::LevelFilter::Error)
            .filter_module("h2", log::LevelFilter::Error)
            .filter_module("tower_http", log::LevelFilter::Error)
            .filter_module("rustls", log::LevelFilter::Off)
            .try_init()
    } else {
        pretty_env_logger::try_init()
    };

    if let Err(err) = result {
        eprintln!("logger already initialized: {}", err);
    }
}

pub async fn cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            init_logger(log::LevelFilter::Info);
            run::run(args).await?
        }
        Commands::Chat(args) => {
            init_logger(log::LevelFilter::Warn);
            chat::chat(args).await?
        }
        Commands::Configure(args) => {
            init_logger(log::LevelFilter::Info);
            configure::configure(args)?
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands() {
        let cli =
            Cli::try_parse_from(["assistant", "run", "-c", "/tmp/a.toml", "-p", "9000"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.config, Some("/tmp/a.toml".into()));
                assert_eq!(args.port, Some(9000));
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["assistant", "chat"]).unwrap();
        assert!(matches!(cli.command, Commands::Chat(_)));

        let cli = Cli::try_parse_from(["assistant", "configure", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Configure(ref args) if args.force));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["assistant"]).is_err());
    }
}

use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use roster_server::{RosterServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid bind address: {bind}"))?;
    }

    let max = config
        .max_page_size
        .map_or_else(|| "none".to_string(), |max| max.to_string());
    println!(
        "{} Roster listening on {} (page size {}, max {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.default_page_size,
        max
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(RosterServer::new(config).serve())?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Ok(ServerConfig::load(path)?)
        }
        None => Ok(ServerConfig::default()),
    }
}

use clap::Parser;

mod cli;
mod commands;
mod logging;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.log_level.as_deref())?;
    commands::run_command(cli)
}

use anyhow::Result;
use clap::Parser;
use log::info;

mod cli;

use cli::Cli;
use cli::Commands;
use cli::commands::{
    RunCommands, handle_config_command, handle_questions_command, handle_run_command,
};
use uxhf_questionnaire::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("uxhf-questionnaire.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting uxhf-questionnaire");

    // `config` loads lazily so `path` and `init` still work with a broken config
    match cli.command.unwrap_or_else(|| Commands::Run(RunCommands::default())) {
        Commands::Run(args) => handle_run_command(args, Config::load()?).await,
        Commands::Questions(args) => handle_questions_command(args, Config::load()?),
        Commands::Config(args) => handle_config_command(args),
    }
}

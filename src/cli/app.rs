use super::commands::{ConfigCommands, QuestionsCommands, RunCommands};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "uxhf-questionnaire")]
#[command(version)]
#[command(about = "Answer a study-design questionnaire and get a recommended statistical analysis")]
pub struct Cli {
    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the questionnaire and submit the answers for analysis
    Run(RunCommands),
    /// List the questions that will be asked
    Questions(QuestionsCommands),
    /// Inspect or create the configuration file
    Config(ConfigCommands),
}

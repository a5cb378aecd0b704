use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

use uxhf_questionnaire::config::Config;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show the effective configuration (file plus environment overrides)
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

pub fn handle_config_command(args: ConfigCommands) -> Result<()> {
    match args.command {
        ConfigSubcommands::Show => {
            print!("{}", Config::load()?.to_toml_string()?);
        }
        ConfigSubcommands::Path => {
            println!("{}", Config::get_config_path()?.display());
        }
        ConfigSubcommands::Init { force } => {
            let path = Config::get_config_path()?;
            Config::init_at(&path, force)?;
            println!("Config written to {}", path.display().to_string().bright_green());
        }
    }

    Ok(())
}


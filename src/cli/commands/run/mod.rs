pub mod handler;

use clap::Args;
use std::path::PathBuf;
use uxhf_questionnaire::questionnaire::DisplayMode;

pub use handler::handle_run_command;

#[derive(Args, Default)]
pub struct RunCommands {
    /// Presentation mode (overrides config)
    #[arg(long, help = "Show one question at a time or all questions on one page")]
    pub mode: Option<DisplayMode>,

    /// Skip the front page
    #[arg(long, help = "Go straight to the first question")]
    pub no_front_page: bool,

    /// Analysis endpoint (overrides config and UXHF_API_URL)
    #[arg(long, help = "Analysis service URL")]
    pub api_url: Option<String>,

    /// Question file to use instead of the built-in questionnaire
    #[arg(long, help = "TOML file with [[questions]] entries")]
    pub questions: Option<PathBuf>,

    /// Print the request body instead of sending it
    #[arg(long, help = "Print the request body instead of sending it")]
    pub dry_run: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

pub mod config;
pub mod questions;
pub mod run;

pub use config::{ConfigCommands, handle_config_command};
pub use questions::{QuestionsCommands, handle_questions_command};
pub use run::{RunCommands, handle_run_command};

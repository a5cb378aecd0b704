pub mod app;
pub mod commands;
pub mod spinner;

pub use app::{Cli, Commands};
pub use spinner::with_spinner;

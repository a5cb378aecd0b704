//! Terminal prompts and rendering

pub mod prompts;
pub mod render;

pub mod api;
pub mod config;
pub mod questionnaire;
pub mod ui;

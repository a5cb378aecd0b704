//! Client for the remote analysis service
//!
//! Sends the collected answers as `{ "answers": { .. } }` and turns the
//! reply, or any failure, into an [`AnalysisResult`].

pub mod client;
pub mod constants;
pub mod logging;
pub mod models;

pub use client::{AnalysisClient, Analyzer, SubmissionError};
pub use logging::{SubmissionContext, SubmissionLogger, SubmissionMetrics};
pub use models::{AnalysisRequest, AnalysisResponse, AnalysisResult};

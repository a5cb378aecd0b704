//! Structured logging with correlation tracking for analysis submissions
//!
//! Each submission gets a correlation id so the request, the response and
//! the final outcome can be matched up in the log file.

use log::{debug, error, info, warn};
use serde_json::json;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Structured logger for submissions
#[derive(Debug, Clone)]
pub struct SubmissionLogger {
    request_logging: bool,
}

/// Context for a single submission
#[derive(Debug, Clone)]
pub struct SubmissionContext {
    /// Unique correlation ID for this submission
    pub correlation_id: String,
    /// Endpoint the answers are sent to
    pub url: String,
    /// Number of answers in the body
    pub answer_count: usize,
    pub start_time: Instant,
}

/// Outcome of a submission as recorded in the log
#[derive(Debug, Clone)]
pub struct SubmissionMetrics {
    pub duration: Duration,
    pub success: bool,
    pub status_code: Option<u16>,
    pub error_message: Option<String>,
}

impl SubmissionLogger {
    pub fn new(request_logging: bool) -> Self {
        Self { request_logging }
    }

    /// Start tracking a new submission
    pub fn start_submission(&self, url: &str, answer_count: usize) -> SubmissionContext {
        let context = SubmissionContext {
            correlation_id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            answer_count,
            start_time: Instant::now(),
        };

        if self.request_logging {
            let log_data = json!({
                "event": "submission_started",
                "correlation_id": context.correlation_id,
                "url": context.url,
                "answer_count": context.answer_count,
                "timestamp": chrono::Utc::now().to_rfc3339()
            });

            info!("Submission Started: {}", log_data);
        }

        context
    }

    /// Log HTTP response details
    pub fn log_response(&self, context: &SubmissionContext, status_code: u16) {
        if !self.request_logging {
            return;
        }

        let log_data = json!({
            "event": "http_response",
            "correlation_id": context.correlation_id,
            "status_code": status_code,
            "duration_ms": context.elapsed().as_millis(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if status_code >= 400 {
            warn!("HTTP Response (Error): {}", log_data);
        } else {
            debug!("HTTP Response: {}", log_data);
        }
    }

    /// Complete a submission and log its outcome.
    /// Failures are always logged, whatever `request_logging` says.
    pub fn complete_submission(&self, context: &SubmissionContext, metrics: &SubmissionMetrics) {
        let log_data = json!({
            "event": "submission_completed",
            "correlation_id": context.correlation_id,
            "duration_ms": metrics.duration.as_millis(),
            "success": metrics.success,
            "status_code": metrics.status_code,
            "error_message": metrics.error_message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if !metrics.success {
            error!("Submission Failed: {}", log_data);
        } else if self.request_logging {
            info!("Submission Completed: {}", log_data);
        }
    }
}

impl SubmissionContext {
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn create_metrics(
        &self,
        success: bool,
        status_code: Option<u16>,
        error_message: Option<String>,
    ) -> SubmissionMetrics {
        SubmissionMetrics {
            duration: self.elapsed(),
            success,
            status_code,
            error_message,
        }
    }
}

use async_trait::async_trait;
use std::time::Duration;

use super::constants::{USER_AGENT, headers};
use super::logging::SubmissionLogger;
use super::models::{AnalysisRequest, AnalysisResponse, AnalysisResult};
use crate::config::ApiSettings;

/// Every way a submission can fail. Callers of [`Analyzer::analyze`] never
/// see these: they are folded into [`AnalysisResult::failure`].
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("analysis service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl SubmissionError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Something that can turn a set of answers into a recommendation.
///
/// Infallible: any failure is reported as [`AnalysisResult::failure`].
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult;
}

/// HTTP client for the remote analysis service
pub struct AnalysisClient {
    url: String,
    http_client: reqwest::Client,
    logger: SubmissionLogger,
}

impl AnalysisClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, SubmissionError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);

        // No timeouts unless configured
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = settings.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        let http_client = builder.build().map_err(SubmissionError::Client)?;
        Ok(Self::with_custom_client(settings, http_client))
    }

    /// Create a client around a preconfigured HTTP client
    pub fn with_custom_client(settings: &ApiSettings, http_client: reqwest::Client) -> Self {
        Self {
            url: settings.url.clone(),
            http_client,
            logger: SubmissionLogger::new(settings.request_logging),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the answers and decode the response, surfacing every failure
    pub async fn try_analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResponse, SubmissionError> {
        let context = self
            .logger
            .start_submission(&self.url, request.answers.len());

        let outcome = self.send(request, &context).await;

        let metrics = match &outcome {
            Ok(_) => context.create_metrics(true, Some(200), None),
            Err(e) => context.create_metrics(false, e.status_code(), Some(e.to_string())),
        };
        self.logger.complete_submission(&context, &metrics);

        outcome
    }

    async fn send(
        &self,
        request: &AnalysisRequest,
        context: &super::logging::SubmissionContext,
    ) -> Result<AnalysisResponse, SubmissionError> {
        let response = self
            .http_client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, headers::CONTENT_TYPE_JSON)
            .header(reqwest::header::ACCEPT, headers::ACCEPT_JSON)
            .json(request)
            .send()
            .await
            .map_err(SubmissionError::Transport)?;

        let status = response.status();
        self.logger.log_response(context, status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(SubmissionError::Transport)?;
        serde_json::from_slice(&bytes).map_err(|e| SubmissionError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Analyzer for AnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        match self.try_analyze(request).await {
            Ok(response) => response.into_result(),
            Err(e) => {
                log::error!("Error fetching recommendation from {}: {}", self.url, e);
                AnalysisResult::failure()
            }
        }
    }
}

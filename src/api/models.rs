//! Wire types for the analysis service and the result shown to the user

use serde::{Deserialize, Serialize};

use super::constants::{FAILURE_MESSAGE, NO_CODE, NO_EXPLANATION, NO_RECOMMENDATION};
use crate::questionnaire::AnswerMap;

/// Body of the POST sent to the analysis service: `{ "answers": { prompt: option } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub answers: AnswerMap,
}

impl AnalysisRequest {
    pub fn new(answers: AnswerMap) -> Self {
        Self { answers }
    }
}

/// Response from the analysis service. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub r_code: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl AnalysisResponse {
    /// Apply the fixed fallbacks for missing or empty fields
    pub fn into_result(self) -> AnalysisResult {
        AnalysisResult {
            recommendation: non_empty(self.recommendation)
                .unwrap_or_else(|| NO_RECOMMENDATION.to_string()),
            code_listing: Some(non_empty(self.r_code).unwrap_or_else(|| NO_CODE.to_string())),
            explanation: non_empty(self.explanation),
            failed: false,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Outcome of one submission attempt, as displayed in the result view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    recommendation: String,
    code_listing: Option<String>,
    explanation: Option<String>,
    failed: bool,
}

impl AnalysisResult {
    /// The fixed result shown for any failed submission
    pub fn failure() -> Self {
        Self {
            recommendation: FAILURE_MESSAGE.to_string(),
            code_listing: None,
            explanation: None,
            failed: true,
        }
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    /// R code returned by the service; `None` only for failures
    pub fn code_listing(&self) -> Option<&str> {
        self.code_listing.as_deref()
    }

    /// Explanation returned by the service, if it sent one
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub fn explanation_text(&self) -> &str {
        self.explanation().unwrap_or(NO_EXPLANATION)
    }

    pub fn is_failure(&self) -> bool {
        self.failed
    }
}

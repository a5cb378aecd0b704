//! Analysis client against a local fake service

mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use uxhf_questionnaire::api::constants::{FAILURE_MESSAGE, NO_CODE, NO_RECOMMENDATION};
use uxhf_questionnaire::api::{AnalysisClient, AnalysisRequest, Analyzer, SubmissionError};
use uxhf_questionnaire::questionnaire::AnswerMap;
use uxhf_questionnaire::ui::render::result_panel;

fn request() -> AnalysisRequest {
    let mut answers = AnswerMap::new();
    answers.record("1/30 - What is the type of your study?", "Experimental");
    answers.record("29/30 - Do you require real-time results?", "No");
    AnalysisRequest::new(answers)
}

#[tokio::test]
async fn test_success_is_displayed_verbatim() -> Result<()> {
    let service = common::spawn_service(
        StatusCode::OK,
        r#"{"recommendation": "X", "r_code": "Y"}"#,
    )
    .await;
    let client = AnalysisClient::new(&service.settings())?;

    let result = client.analyze(&request()).await;

    assert!(!result.is_failure());
    assert_eq!(result.recommendation(), "X");
    assert_eq!(result.code_listing(), Some("Y"));

    colored::control::set_override(false);
    let panel = result_panel(&result);
    assert!(panel.contains("X"));
    assert!(panel.contains("│ Y"));
    Ok(())
}

#[tokio::test]
async fn test_request_body_carries_answers() -> Result<()> {
    let service = common::spawn_service(StatusCode::OK, "{}").await;
    let client = AnalysisClient::new(&service.settings())?;

    client.analyze(&request()).await;

    assert_eq!(
        service.received(),
        vec![json!({
            "answers": {
                "1/30 - What is the type of your study?": "Experimental",
                "29/30 - Do you require real-time results?": "No"
            }
        })]
    );
    Ok(())
}

#[tokio::test]
async fn test_empty_body_uses_placeholders() -> Result<()> {
    let service = common::spawn_service(StatusCode::OK, "{}").await;
    let client = AnalysisClient::new(&service.settings())?;

    let result = client.analyze(&request()).await;

    assert!(!result.is_failure());
    assert_eq!(result.recommendation(), NO_RECOMMENDATION);
    assert_eq!(result.code_listing(), Some(NO_CODE));
    Ok(())
}

#[tokio::test]
async fn test_server_error_becomes_failure_message() -> Result<()> {
    let service = common::spawn_service(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error": "model unavailable"}"#,
    )
    .await;
    let client = AnalysisClient::new(&service.settings())?;

    match client.try_analyze(&request()).await {
        Err(SubmissionError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("model unavailable"));
        }
        other => panic!("expected status error, got {:?}", other),
    }

    let result = client.analyze(&request()).await;
    assert!(result.is_failure());
    assert_eq!(result.recommendation(), FAILURE_MESSAGE);
    assert_eq!(result.code_listing(), None);
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_becomes_failure_message() -> Result<()> {
    let service = common::spawn_service(StatusCode::OK, "not json").await;
    let client = AnalysisClient::new(&service.settings())?;

    assert!(matches!(
        client.try_analyze(&request()).await,
        Err(SubmissionError::Decode(_))
    ));
    assert!(client.analyze(&request()).await.is_failure());
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_becomes_failure_message() -> Result<()> {
    let client = AnalysisClient::new(&common::refused_settings().await)?;

    assert!(matches!(
        client.try_analyze(&request()).await,
        Err(SubmissionError::Transport(_))
    ));

    let result = client.analyze(&request()).await;
    assert_eq!(result.recommendation(), FAILURE_MESSAGE);
    assert_eq!(result.code_listing(), None);
    Ok(())
}

#[tokio::test]
async fn test_configured_connect_timeout_still_reaches_service() -> Result<()> {
    let service = common::spawn_service(StatusCode::OK, r#"{"recommendation": "X"}"#).await;
    let mut settings = service.settings();
    settings.timeout_secs = None;
    settings.connect_timeout_secs = Some(3);
    let client = AnalysisClient::new(&settings)?;

    let result = client.analyze(&request()).await;

    assert!(!result.is_failure());
    assert_eq!(result.recommendation(), "X");
    Ok(())
}

//! Shared helpers for integration tests: a throwaway analysis service

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};

use uxhf_questionnaire::config::ApiSettings;

type Received = Arc<Mutex<Vec<Value>>>;

/// A local stand-in for the analysis service that replies with a canned
/// status and body and records every request body it sees
pub struct FakeService {
    pub url: String,
    received: Received,
}

impl FakeService {
    pub fn settings(&self) -> ApiSettings {
        ApiSettings {
            url: self.url.clone(),
            timeout_secs: Some(10),
            connect_timeout_secs: None,
            request_logging: true,
        }
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn analyze(
    State((received, status, body)): State<(Received, StatusCode, &'static str)>,
    Json(payload): Json<Value>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    received.lock().unwrap().push(payload);
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

pub async fn spawn_service(status: StatusCode, body: &'static str) -> FakeService {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/analyze", post(analyze))
        .with_state((received.clone(), status, body));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeService {
        url: format!("http://{}/analyze", addr),
        received,
    }
}

/// Settings pointing at a port nothing is listening on
pub async fn refused_settings() -> ApiSettings {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    ApiSettings {
        url: format!("http://{}/analyze", addr),
        timeout_secs: Some(5),
        connect_timeout_secs: Some(2),
        request_logging: true,
    }
}

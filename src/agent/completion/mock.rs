//! In-process stand-in for the completion endpoint, used by tests.

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, header},
    response::IntoResponse,
    routing::post,
};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::config::ModelConfig;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    delay: Duration,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockEndpoint {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockEndpoint {
    pub async fn json(body: Value) -> Self {
        Self::start(StatusCode::OK, body.to_string(), Duration::ZERO).await
    }

    pub async fn with_status(status: StatusCode, body: Value) -> Self {
        Self::start(status, body.to_string(), Duration::ZERO).await
    }

    pub async fn raw(status: StatusCode, body: &str) -> Self {
        Self::start(status, body.to_string(), Duration::ZERO).await
    }

    pub async fn slow(delay: Duration) -> Self {
        Self::start(StatusCode::OK, "{}".into(), delay).await
    }

    async fn start(status: StatusCode, body: String, delay: Duration) -> Self {
        let requests = Arc::new(Mutex::new(vec![]));
        let app = Router::new()
            .route("/v1/chat/completions", post(handle))
            .with_state(MockState {
                status,
                body,
                delay,
                requests: requests.clone(),
            });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}/v1/chat/completions"),
            requests,
        }
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            endpoint: self.url.clone(),
            ..Default::default()
        }
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

async fn handle(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    state.requests.lock().await.push(RecordedRequest {
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(String::from),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    tokio::time::sleep(state.delay).await;

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

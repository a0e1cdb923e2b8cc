use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use reqwest::{
    Method,
    header::{ACCEPT, CONTENT_TYPE},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    agent::Assistant,
    channels::{AssistantChannel, http::state::HTTPState},
    config::HTTPChannelConfig,
};

pub mod models;

mod api;
mod state;
mod webui;

pub struct HTTPChannel {
    config: HTTPChannelConfig,
    assistant: Assistant,
}

impl HTTPChannel {
    pub fn new(config: HTTPChannelConfig, assistant: Assistant) -> Result<Self> {
        Ok(Self { config, assistant })
    }
}

pub fn router(state: HTTPState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE]);

    Router::new()
        // webui
        .route("/", get(webui::index))
        .route("/{*path}", get(webui::assets))
        // api
        .route("/api/v1/ping", get(api::v1::ping))
        // session api
        .route("/api/v1/session", post(api::v1::session::create_session))
        .route(
            "/api/v1/session/{session_id}",
            get(api::v1::session::get_session).delete(api::v1::session::delete_session),
        )
        .route(
            "/api/v1/session/{session_id}/chat",
            post(api::v1::session::chat),
        )
        .layer(cors)
        .with_state(state)
}

impl AssistantChannel for HTTPChannel {
    async fn run(&mut self) -> Result<()> {
        let app = router(HTTPState::new(
            self.assistant.clone(),
            self.config.session_ttl(),
        ));

        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", self.config.port))
            .await
            .with_context(|| format!("failed to bind port {}", self.config.port))?;

        log::info!("http listening on port {}", self.config.port);
        axum::serve(listener, app).await?;

        Ok(())
    }
}

use axum::{
    Json,
    extract::{Path, State},
};
use reqwest::StatusCode;

use crate::channels::http::{
    models::{
        self,
        response::{api_response, err_response},
        session::{ChatRequest, ChatResponse, SessionResponse},
    },
    state::HTTPState,
};

const SESSION_NOT_FOUND: &str = "session not found";

pub async fn create_session(
    State(state): State<HTTPState>,
) -> models::response::Response<SessionResponse> {
    let (session_id, session) = state.create_session().await;
    log::debug!("session {} created", session_id);

    api_response(
        StatusCode::CREATED,
        SessionResponse {
            session_id,
            messages: session.messages().to_vec(),
        },
    )
}

pub async fn get_session(
    Path(session_id): Path<String>,
    State(state): State<HTTPState>,
) -> models::response::Response<SessionResponse> {
    let Some(session) = state.session(&session_id).await else {
        return err_response(StatusCode::NOT_FOUND, SESSION_NOT_FOUND.into());
    };

    let messages = session.lock().await.messages().to_vec();
    api_response(
        StatusCode::OK,
        SessionResponse {
            session_id,
            messages,
        },
    )
}

pub async fn delete_session(
    Path(session_id): Path<String>,
    State(state): State<HTTPState>,
) -> models::response::Response<String> {
    if state.remove_session(&session_id).await {
        log::debug!("session {} ended", session_id);
        api_response(StatusCode::OK, session_id)
    } else {
        err_response(StatusCode::NOT_FOUND, SESSION_NOT_FOUND.into())
    }
}

/// Holds the session's lock for the whole turn, so a session never has two
/// requests in flight.
pub async fn chat(
    Path(session_id): Path<String>,
    State(state): State<HTTPState>,
    Json(request): Json<ChatRequest>,
) -> models::response::Response<ChatResponse> {
    let Some(session) = state.session(&session_id).await else {
        return err_response(StatusCode::NOT_FOUND, SESSION_NOT_FOUND.into());
    };

    let mut session = session.lock().await;
    let (updated, turn) = state
        .assistant
        .handle(session.clone(), &request.content)
        .await;
    *session = updated;

    api_response(
        StatusCode::OK,
        ChatResponse::new(turn, session.messages().to_vec()),
    )
}

//! HTTP surface for the session flow.
//!
//! Each handler maps one user action onto an event for the state machine;
//! the response is always the resulting session view. Request-level
//! validation (unknown session, blank answer, answer outside questioning)
//! is handled here; everything past that point is the machine's business.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::pages::ListOrder;
use crate::session::{Event, InterpreterContext, Phase, SessionId};
use crate::view::{GalleryView, SessionView};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
}

/// Router for the session endpoints.
pub fn session_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", get(get_session))
        .route("/sessions/{id}/start", post(start_session))
        .route("/sessions/{id}/answer", post(submit_answer))
        .route("/sessions/{id}/continue", post(continue_session))
        .route("/sessions/{id}/restart", post(restart_session))
        .route("/sessions/{id}/gallery", get(session_gallery))
        .route("/pages", get(list_pages))
}

fn interpreter_context(state: &AppState, session_id: SessionId) -> InterpreterContext {
    InterpreterContext {
        generation_client: state.generation_client.clone(),
        pages: state.pages.clone(),
        session_id,
    }
}

async fn create_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let id = state.sessions.create_session().await;
    info!("Created session {}", id);
    (
        StatusCode::CREATED,
        Json(SessionCreatedResponse {
            session_id: id.to_string(),
        }),
    )
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, StatusCode> {
    let session_id = SessionId::from(id);
    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(SessionView::from_state(&session_id, &session)))
}

/// Dispatch a user action to the state machine and return the new view.
async fn process_action(
    state: &Arc<AppState>,
    id: Uuid,
    event: Event,
) -> Result<Json<SessionView>, StatusCode> {
    let session_id = SessionId::from(id);
    if state.sessions.get(&session_id).await.is_none() {
        return Err(StatusCode::NOT_FOUND);
    }

    let ctx = interpreter_context(state, session_id);
    let final_state = state.sessions.process_event(&session_id, event, &ctx).await;
    Ok(Json(SessionView::from_state(&session_id, &final_state)))
}

async fn start_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, StatusCode> {
    process_action(&state, id, Event::StartRequested).await
}

async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<SessionView>, StatusCode> {
    let session_id = SessionId::from(id);
    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    if request.answer.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    // Answers are only accepted while a question is open; in particular
    // the generating phase rejects input.
    if !matches!(session.phase, Phase::Questioning { .. }) {
        return Err(StatusCode::CONFLICT);
    }

    let ctx = interpreter_context(&state, session_id);
    let final_state = state
        .sessions
        .process_event(
            &session_id,
            Event::AnswerSubmitted {
                answer: request.answer,
            },
            &ctx,
        )
        .await;
    Ok(Json(SessionView::from_state(&session_id, &final_state)))
}

async fn continue_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, StatusCode> {
    process_action(&state, id, Event::ContinueRequested).await
}

async fn restart_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, StatusCode> {
    process_action(&state, id, Event::RestartRequested).await
}

async fn session_gallery(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GalleryView>, StatusCode> {
    let session_id = SessionId::from(id);
    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    // A session that produced nothing shows the whole persisted collection
    // instead.
    let pages = if session.pages.is_empty() {
        state
            .pages
            .list(ListOrder::CreatedDesc)
            .await
            .map_err(|e| {
                error!("Failed to list pages from backend: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?
    } else {
        session.pages
    };

    Ok(Json(GalleryView::from_pages(pages)))
}

async fn list_pages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<zine_core::page::Page>>, StatusCode> {
    let pages = state
        .pages
        .list(ListOrder::CreatedDesc)
        .await
        .map_err(|e| {
            error!("Failed to list pages from backend: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Json(pages))
}

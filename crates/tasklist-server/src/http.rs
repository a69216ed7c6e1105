// Rust guideline compliant 2026-10-16

//! Routes and handlers for the JSON API.

use crate::middleware::request_tracing;
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tasklist_app::{Ack, AppError, Board, ErrorEnvelope};
use tasklist_core::{RuleSet, SortKey, Task};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The single writer over the task collection.
    pub board: Arc<Board>,
    /// Largest accepted request body in bytes.
    pub max_body_bytes: usize,
}

impl AppState {
    /// Wraps `board` with the default body limit of 1 MiB.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board: Arc::new(board),
            max_body_bytes: 1024 * 1024,
        }
    }

    /// Overrides the request body limit.
    #[must_use]
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// Builds the API router.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;
    Router::new()
        .route("/api/todos", get(list_todos).post(save_todos))
        .route("/api/sort", get(sort_state).post(update_sort))
        .route("/api/health", get(health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum::middleware::from_fn(request_tracing))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
struct ListParams {
    sort: Option<String>,
}

/// Edit applied to the board's sort rules.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SortAction {
    Add,
    Remove,
    Toggle,
}

#[derive(Debug, Deserialize)]
struct SortCommand {
    action: SortAction,
    key: SortKey,
}

#[derive(Debug, Serialize)]
struct SortState {
    rules: RuleSet,
    available: Vec<SortKey>,
}

impl SortState {
    fn of(board: &Board) -> Self {
        Self {
            rules: board.rules(),
            available: board.available_sort_keys(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Health {
    ok: bool,
    message: &'static str,
    ts: String,
}

async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let rules = params
        .sort
        .as_deref()
        .map(RuleSet::parse)
        .transpose()
        .map_err(AppError::from)?;
    let board = Arc::clone(&state.board);
    let tasks = run_blocking(move || {
        Ok(match rules {
            Some(rules) => board.view_with(&rules),
            None => board.view(),
        })
    })
    .await?;
    Ok(Json(tasks))
}

async fn save_todos(
    State(state): State<AppState>,
    payload: Result<Json<Vec<Task>>, JsonRejection>,
) -> Result<Json<Ack>, ApiError> {
    let Json(tasks) = payload.map_err(ApiError::from_rejection)?;
    let board = Arc::clone(&state.board);
    run_blocking(move || board.replace_all(tasks)).await?;
    Ok(Json(Ack::ok()))
}

async fn sort_state(State(state): State<AppState>) -> Json<SortState> {
    Json(SortState::of(&state.board))
}

async fn update_sort(
    State(state): State<AppState>,
    payload: Result<Json<SortCommand>, JsonRejection>,
) -> Result<Json<SortState>, ApiError> {
    let Json(command) = payload.map_err(ApiError::from_rejection)?;
    match command.action {
        SortAction::Add => state.board.add_sort(command.key),
        SortAction::Remove => state.board.remove_sort(command.key),
        SortAction::Toggle => state.board.toggle_sort(command.key),
    };
    Ok(Json(SortState::of(&state.board)))
}

/// Runs board work on the blocking thread pool.
async fn run_blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> tasklist_app::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| {
            ApiError::from(AppError::Io(std::io::Error::other(format!(
                "board task failed: {err}"
            ))))
        })?
        .map_err(ApiError::from)
}

async fn health() -> Json<Health> {
    Json(Health {
        ok: true,
        message: "Hello World",
        ts: chrono::Utc::now().to_rfc3339(),
    })
}

/// Application error rendered as an [`ErrorEnvelope`].
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: AppError,
}

impl ApiError {
    /// Maps a body rejection to `invalid_input`, keeping 413 for oversized bodies.
    fn from_rejection(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            error: AppError::InvalidInput(rejection.body_text()),
        }
    }

    /// Status code this error renders with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        let status = if error.code().is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self { status, error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = %self.error, "request failed");
        }
        (self.status, Json(ErrorEnvelope::from_error(&self.error))).into_response()
    }
}

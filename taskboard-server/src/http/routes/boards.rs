//! Board endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use chrono::Utc;

use crate::http::error::ApiError;
use crate::http::extractors::{parse_id, ApiQuery, IdParams, JsonBody};
use crate::http::server::AppState;
use crate::models::{Board, NewBoard};

use super::MessageResponse;

/// POST /api/boards - create a board
async fn create_board(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<NewBoard>,
) -> Result<Json<Board>, ApiError> {
    req.validate()?;

    let board = req.into_board(Utc::now());
    state.store.create_board(board.clone());
    tracing::debug!(board_id = %board.id, "board created");

    Ok(Json(board))
}

/// GET /api/boards - all boards
async fn list_boards(State(state): State<Arc<AppState>>) -> Json<Vec<Board>> {
    Json(state.store.all_boards())
}

/// GET /api/board?id= - a single board
async fn get_board(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<IdParams>,
) -> Result<Json<Board>, ApiError> {
    let id = params.require()?;

    parse_id(&id)
        .and_then(|id| state.store.get_board(&id))
        .map(Json)
        .ok_or(ApiError::NotFound { resource: "Board" })
}

/// DELETE /api/board?id= - remove a board; its lists are left in place
async fn delete_board(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<IdParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = params.require()?;

    let board = parse_id(&id)
        .and_then(|id| state.store.delete_board(&id))
        .ok_or(ApiError::NotFound { resource: "Board" })?;
    tracing::debug!(board_id = %board.id, "board deleted");

    Ok(Json(MessageResponse::deleted("Board")))
}

/// Board routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/boards", get(list_boards).post(create_board))
        .route("/api/board", get(get_board).delete(delete_board))
}

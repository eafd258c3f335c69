//! List endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use chrono::Utc;

use crate::http::error::ApiError;
use crate::http::extractors::{parse_id, required, ApiQuery, BoardIdParams, IdParams, JsonBody};
use crate::http::server::AppState;
use crate::models::{List, NewList};

use super::MessageResponse;

/// POST /api/lists - create a list on an existing board
///
/// The board is checked once, here. A board deleted between the check
/// and the insert is not detected.
async fn create_list(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<NewList>,
) -> Result<Json<List>, ApiError> {
    let board_id = req.validate()?;

    if state.store.get_board(&board_id).is_none() {
        return Err(ApiError::bad_request("Board not found"));
    }

    let list = req.into_list(board_id, Utc::now());
    state.store.create_list(list.clone());
    tracing::debug!(list_id = %list.id, %board_id, "list created");

    Ok(Json(list))
}

/// GET /api/lists?board_id= - lists belonging to a board
async fn lists_by_board(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<BoardIdParams>,
) -> Result<Json<Vec<List>>, ApiError> {
    let board_id = required(params.board_id, "board_id")?;

    let lists = parse_id(&board_id)
        .map(|id| state.store.lists_by_board(&id))
        .unwrap_or_default();

    Ok(Json(lists))
}

/// GET /api/list?id= - a single list
async fn get_list(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<IdParams>,
) -> Result<Json<List>, ApiError> {
    let id = params.require()?;

    parse_id(&id)
        .and_then(|id| state.store.get_list(&id))
        .map(Json)
        .ok_or(ApiError::NotFound { resource: "List" })
}

/// DELETE /api/list?id= - remove a list; its cards are left in place
async fn delete_list(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<IdParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = params.require()?;

    let list = parse_id(&id)
        .and_then(|id| state.store.delete_list(&id))
        .ok_or(ApiError::NotFound { resource: "List" })?;
    tracing::debug!(list_id = %list.id, "list deleted");

    Ok(Json(MessageResponse::deleted("List")))
}

/// List routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/lists", get(lists_by_board).post(create_list))
        .route("/api/list", get(get_list).delete(delete_list))
}

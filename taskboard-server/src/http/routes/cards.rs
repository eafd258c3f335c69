//! Card endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use chrono::Utc;

use crate::http::error::ApiError;
use crate::http::extractors::{parse_id, required, ApiQuery, IdParams, JsonBody, ListIdParams};
use crate::http::server::AppState;
use crate::models::{Card, NewCard};

use super::MessageResponse;

/// POST /api/cards - create a card in an existing list
async fn create_card(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<NewCard>,
) -> Result<Json<Card>, ApiError> {
    let list_id = req.validate()?;

    if state.store.get_list(&list_id).is_none() {
        return Err(ApiError::bad_request("List not found"));
    }

    let card = req.into_card(list_id, Utc::now());
    state.store.create_card(card.clone());
    tracing::debug!(card_id = %card.id, %list_id, "card created");

    Ok(Json(card))
}

/// GET /api/cards?list_id= - cards belonging to a list
async fn cards_by_list(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ListIdParams>,
) -> Result<Json<Vec<Card>>, ApiError> {
    let list_id = required(params.list_id, "list_id")?;

    let cards = parse_id(&list_id)
        .map(|id| state.store.cards_by_list(&id))
        .unwrap_or_default();

    Ok(Json(cards))
}

/// GET /api/card?id=
async fn get_card(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<IdParams>,
) -> Result<Json<Card>, ApiError> {
    let id = params.require()?;

    parse_id(&id)
        .and_then(|id| state.store.get_card(&id))
        .map(Json)
        .ok_or(ApiError::NotFound { resource: "Card" })
}

/// DELETE /api/card?id=
async fn delete_card(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<IdParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = params.require()?;

    let card = parse_id(&id)
        .and_then(|id| state.store.delete_card(&id))
        .ok_or(ApiError::NotFound { resource: "Card" })?;
    tracing::debug!(card_id = %card.id, "card deleted");

    Ok(Json(MessageResponse::deleted("Card")))
}

/// Card routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/cards", get(cards_by_list).post(create_card))
        .route("/api/card", get(get_card).delete(delete_card))
}

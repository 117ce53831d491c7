use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use super::{
    dto::{AttributesRequest, CreatedAttributesResponse, UpdatedAttributesResponse},
    repo,
    repo_types::{PlayerRow, UpdateOutcome},
};
use crate::{
    error::{ApiError, ApiResult},
    extract::{parse_id, ApiJson},
    state::AppState,
};

pub fn attribute_routes() -> Router<AppState> {
    Router::new()
        .route("/user_data/:id", get(get_user_data))
        .route("/create_attributes/:player_id", post(create_attributes))
        .route(
            "/update_attributes/:player_id",
            put(update_attributes).post(update_attributes),
        )
}

#[instrument(skip(state))]
pub async fn get_user_data(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<PlayerRow>> {
    let id = parse_id(&raw_id).ok_or_else(|| ApiError::bad_request("Invalid user id"))?;

    match repo::find_player_row(&state.db, id).await {
        Ok(Some(row)) => Ok(Json(row)),
        Ok(None) => {
            warn!(user_id = id, "user data not found");
            Err(ApiError::not_found("User not found"))
        }
        Err(e) => {
            error!(error = %e, user_id = id, "fetch user data failed");
            Err(e.into())
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn create_attributes(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ApiJson(payload): ApiJson<AttributesRequest>,
) -> ApiResult<Json<CreatedAttributesResponse>> {
    let player_id = parse_id(&raw_id).ok_or_else(|| ApiError::bad_request("Invalid player id"))?;
    let values = payload.for_create()?;

    let id = repo::insert(&state.db, player_id, &values).await.map_err(|e| {
        error!(error = %e, player_id, "create attributes failed");
        ApiError::from(e)
    })?;

    info!(attributes_id = id, player_id, "attributes created");
    Ok(Json(CreatedAttributesResponse { success: true, id }))
}

#[instrument(skip(state, payload))]
pub async fn update_attributes(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ApiJson(payload): ApiJson<AttributesRequest>,
) -> ApiResult<Json<UpdatedAttributesResponse>> {
    let player_id = parse_id(&raw_id).ok_or_else(|| ApiError::bad_request("Invalid player id"))?;
    let values = payload.for_update()?;

    match repo::update_for_player(&state.db, player_id, &values).await {
        Ok(UpdateOutcome::Updated { rows }) => {
            info!(player_id, rows, "attributes updated");
            Ok(Json(UpdatedAttributesResponse {
                success: true,
                message: "Attributes updated".into(),
                player_id,
            }))
        }
        Ok(UpdateOutcome::PlayerNotFound) => {
            warn!(player_id, "update for unknown player");
            Err(ApiError::not_found("Player not found"))
        }
        Ok(UpdateOutcome::NoAttributes) => {
            warn!(player_id, "update without attribute row");
            Err(ApiError::not_found("Attributes not found for player"))
        }
        Err(e) => {
            error!(error = %e, player_id, "update attributes failed");
            Err(e.into())
        }
    }
}

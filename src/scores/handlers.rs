use axum::{extract::State, routing::get, Json, Router};
use tracing::{error, info, instrument};

use super::{
    dto::{CreatedScoreResponse, LegacyScoreRequest},
    repo::{self, LEGACY_SCORES_LIMIT, TOP_SCORES_LIMIT},
    repo_types::LegacyScore,
};
use crate::{
    attributes::repo_types::PlayerRow,
    error::ApiResult,
    extract::ApiJson,
    state::AppState,
};

pub fn score_routes() -> Router<AppState> {
    Router::new()
        .route("/scores", get(top_scores).post(submit_legacy_score))
        .route("/scores/legacy", get(legacy_scores))
}

#[instrument(skip(state))]
pub async fn top_scores(State(state): State<AppState>) -> ApiResult<Json<Vec<PlayerRow>>> {
    let rows = repo::top_scores(&state.db, TOP_SCORES_LIMIT)
        .await
        .map_err(|e| {
            error!(error = %e, "top scores query failed");
            e
        })?;
    Ok(Json(rows))
}

#[instrument(skip(state, payload))]
pub async fn submit_legacy_score(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LegacyScoreRequest>,
) -> ApiResult<Json<CreatedScoreResponse>> {
    let (player, score) = payload.validate()?;

    let id = repo::insert_legacy(&state.db, &player, score)
        .await
        .map_err(|e| {
            error!(error = %e, %player, "legacy score insert failed");
            e
        })?;

    info!(id, %player, score, "legacy score recorded");
    Ok(Json(CreatedScoreResponse { success: true, id }))
}

#[instrument(skip(state))]
pub async fn legacy_scores(State(state): State<AppState>) -> ApiResult<Json<Vec<LegacyScore>>> {
    let rows = repo::list_legacy(&state.db, LEGACY_SCORES_LIMIT).await?;
    Ok(Json(rows))
}

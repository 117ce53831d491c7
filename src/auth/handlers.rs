use axum::{extract::State, routing::post, Json, Router};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{CreatedResponse, CredentialsRequest, LoginResponse, PublicUser},
        password::{hash_password, verify_password},
        repo_types::User,
    },
    error::{ApiError, ApiResult},
    extract::ApiJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/create_user", post(create_user))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CredentialsRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    let creds = payload.validate().map_err(|e| {
        warn!("create_user missing fields");
        e
    })?;

    let hash = hash_password(&creds.password)?;

    let id = match User::create(&state.db, &creds.username, &hash).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            error!(username = %creds.username, "insert returned no id");
            return Err(ApiError::Internal(anyhow::anyhow!("insert returned no id")));
        }
        Err(e) => {
            error!(error = %e, username = %creds.username, "create user failed");
            return Err(e.into());
        }
    };

    info!(user_id = id, username = %creds.username, "user registered");
    Ok(Json(CreatedResponse { success: true, id }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CredentialsRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let creds = payload.validate()?;

    let user = match User::find_by_username(&state.db, &creds.username).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(username = %creds.username, "login unknown username");
            return Err(ApiError::Unauthorized("Invalid credentials".into()));
        }
        Err(e) => {
            error!(error = %e, "find_by_username failed");
            return Err(e.into());
        }
    };

    if !verify_password(&creds.password, &user.password_hash)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    }

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(Json(LoginResponse {
        success: true,
        user: PublicUser {
            id: user.id,
            username: user.username,
        },
    }))
}

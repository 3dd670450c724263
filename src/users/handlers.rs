use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::PublicUser,
        extractors::Principal,
        password::{hash_password, verify_password},
        repo_types::User,
    },
    error::ApiError,
    state::AppState,
    users::dto::ChangePasswordRequest,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(get_current_user))
        .route("/users/password", put(change_password))
}

#[instrument(skip(state))]
pub async fn get_current_user(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<PublicUser>, ApiError> {
    let user = User::find_by_id(&state.db, principal.id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Could not validate credentials".into()))?;

    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn change_password(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    if payload.new_password.len() < 6 {
        warn!(user_id = %principal.id, "new password too short");
        return Err(ApiError::Validation(
            "Password must be at least 6 characters".into(),
        ));
    }

    let user = User::find_by_id(&state.db, principal.id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Could not validate credentials".into()))?;

    if !verify_password(&payload.old_password, &user.password_hash)? {
        warn!(user_id = %user.id, "password change with incorrect password");
        return Err(ApiError::Forbidden("Incorrect password".into()));
    }

    let hash = hash_password(&payload.new_password)?;
    User::update_password(&state.db, user.id, &hash).await?;

    info!(user_id = %user.id, "password changed");
    Ok(StatusCode::NO_CONTENT)
}

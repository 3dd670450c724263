use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    admin::dto::{RoleUpdate, SafetyParams},
    auth::{
        dto::PublicUser,
        extractors::Principal,
        guard::authorize_admin,
        repo_types::{Role, User},
    },
    error::ApiError,
    foods::{dto::FoodEntryResponse, repo as foods_repo},
    state::AppState,
};

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/admin/foods/", get(list_all_food_entries))
        .route(
            "/auth/admin/food_entry/:id",
            put(update_food_entry_safety).delete(delete_food_entry),
        )
        .route("/auth/admin/users/", get(list_all_users))
        .route("/auth/admin/users/:id/role", put(update_user_role))
}

#[instrument(skip(state, principal), fields(admin_id = %principal.id))]
pub async fn list_all_food_entries(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<FoodEntryResponse>>, ApiError> {
    authorize_admin(&principal)?;

    let entries = foods_repo::list_all(&state.db).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state, principal), fields(admin_id = %principal.id))]
pub async fn update_food_entry_safety(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
    Query(params): Query<SafetyParams>,
) -> Result<Json<FoodEntryResponse>, ApiError> {
    authorize_admin(&principal)?;

    let entry = foods_repo::update_safety(&state.db, id, params.is_safe)
        .await?
        .ok_or_else(|| ApiError::NotFound("Food entry not found".into()))?;

    info!(entry_id = %entry.id, is_safe = params.is_safe, "food entry moderated");
    Ok(Json(entry.into()))
}

#[instrument(skip(state, principal), fields(admin_id = %principal.id))]
pub async fn delete_food_entry(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    authorize_admin(&principal)?;

    if !foods_repo::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Food entry not found".into()));
    }

    info!(entry_id = %id, "food entry deleted by admin");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, principal), fields(admin_id = %principal.id))]
pub async fn list_all_users(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    authorize_admin(&principal)?;

    let users = User::list_all(&state.db).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state, principal, payload), fields(admin_id = %principal.id))]
pub async fn update_user_role(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
    Json(payload): Json<RoleUpdate>,
) -> Result<Json<PublicUser>, ApiError> {
    authorize_admin(&principal)?;

    let role: Role = payload
        .role
        .parse()
        .map_err(|_| ApiError::Validation("Invalid role. Must be 'user' or 'admin'".into()))?;

    let user = User::update_role(&state.db, id, role)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    info!(user_id = %user.id, role = %user.role, "user role updated");
    Ok(Json(user.into()))
}

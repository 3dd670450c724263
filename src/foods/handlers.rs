use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{
        extractors::Principal,
        guard::authorize_owner_or_admin,
        repo_types::Role,
    },
    error::ApiError,
    foods::{
        dto::{CreateFoodEntryRequest, FoodEntryResponse, UpdateFoodEntryRequest},
        repo,
    },
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/foods/", get(list_food_entries))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/food_entry/", post(create_food_entry))
        .route(
            "/food_entry/:id",
            put(update_food_entry).delete(delete_food_entry),
        )
}

fn check_quantity(quantity: i32) -> Result<(), ApiError> {
    if quantity <= 0 {
        return Err(ApiError::Validation(
            "quantity must be greater than 0".into(),
        ));
    }
    Ok(())
}

#[instrument(skip(state, principal), fields(user_id = %principal.id))]
pub async fn list_food_entries(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<FoodEntryResponse>>, ApiError> {
    let entries = match principal.role {
        Role::Admin => repo::list_all(&state.db).await?,
        Role::User => repo::list_by_owner(&state.db, principal.id).await?,
    };
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state, principal, payload), fields(user_id = %principal.id))]
pub async fn create_food_entry(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<CreateFoodEntryRequest>,
) -> Result<(StatusCode, Json<FoodEntryResponse>), ApiError> {
    check_quantity(payload.quantity)?;

    let date = payload.date.unwrap_or_else(OffsetDateTime::now_utc);
    let entry = repo::insert(
        &state.db,
        principal.id,
        &principal.username,
        &payload.food,
        payload.quantity,
        payload.is_safe,
        date,
    )
    .await?;

    info!(entry_id = %entry.id, "food entry created");
    Ok((StatusCode::CREATED, Json(entry.into())))
}

#[instrument(skip(state, principal, payload), fields(user_id = %principal.id))]
pub async fn update_food_entry(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFoodEntryRequest>,
) -> Result<Json<FoodEntryResponse>, ApiError> {
    check_quantity(payload.quantity)?;

    let existing = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Food entry not found".into()))?;

    authorize_owner_or_admin(&principal, existing.owner_id).map_err(|e| {
        warn!(entry_id = %id, owner_id = %existing.owner_id, "update denied");
        e
    })?;

    let entry = repo::update(&state.db, id, &payload.food, payload.quantity, payload.is_safe)
        .await?
        .ok_or_else(|| ApiError::NotFound("Food entry not found".into()))?;

    info!(entry_id = %entry.id, "food entry updated");
    Ok(Json(entry.into()))
}

#[instrument(skip(state, principal), fields(user_id = %principal.id))]
pub async fn delete_food_entry(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let existing = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Food entry not found".into()))?;

    authorize_owner_or_admin(&principal, existing.owner_id).map_err(|e| {
        warn!(entry_id = %id, owner_id = %existing.owner_id, "delete denied");
        e
    })?;

    repo::delete(&state.db, id).await?;

    info!(entry_id = %id, "food entry deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        assert!(matches!(check_quantity(0), Err(ApiError::Validation(_))));
        assert!(matches!(check_quantity(-5), Err(ApiError::Validation(_))));
        assert!(check_quantity(1).is_ok());
    }
}

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Food entry row. `username` is a denormalized snapshot of the owner's
/// username at creation time; `owner_id` is the authoritative reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodEntry {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub username: String,
    pub food: String,
    pub quantity: i32,
    pub is_safe: bool,
    pub date: OffsetDateTime,
}

pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<FoodEntry>> {
    let rows = sqlx::query_as::<_, FoodEntry>(
        r#"
        SELECT id, owner_id, username, food, quantity, is_safe, date
        FROM food_entries
        ORDER BY date DESC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn list_by_owner(db: &PgPool, owner_id: Uuid) -> anyhow::Result<Vec<FoodEntry>> {
    let rows = sqlx::query_as::<_, FoodEntry>(
        r#"
        SELECT id, owner_id, username, food, quantity, is_safe, date
        FROM food_entries
        WHERE owner_id = $1
        ORDER BY date DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<FoodEntry>> {
    let row = sqlx::query_as::<_, FoodEntry>(
        r#"
        SELECT id, owner_id, username, food, quantity, is_safe, date
        FROM food_entries
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn insert(
    db: &PgPool,
    owner_id: Uuid,
    username: &str,
    food: &str,
    quantity: i32,
    is_safe: bool,
    date: OffsetDateTime,
) -> anyhow::Result<FoodEntry> {
    let row = sqlx::query_as::<_, FoodEntry>(
        r#"
        INSERT INTO food_entries (owner_id, username, food, quantity, is_safe, date)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, owner_id, username, food, quantity, is_safe, date
        "#,
    )
    .bind(owner_id)
    .bind(username)
    .bind(food)
    .bind(quantity)
    .bind(is_safe)
    .bind(date)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Update the mutable fields; owner and date are left untouched.
pub async fn update(
    db: &PgPool,
    id: Uuid,
    food: &str,
    quantity: i32,
    is_safe: bool,
) -> anyhow::Result<Option<FoodEntry>> {
    let row = sqlx::query_as::<_, FoodEntry>(
        r#"
        UPDATE food_entries
        SET food = $2, quantity = $3, is_safe = $4
        WHERE id = $1
        RETURNING id, owner_id, username, food, quantity, is_safe, date
        "#,
    )
    .bind(id)
    .bind(food)
    .bind(quantity)
    .bind(is_safe)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Flip the moderation flag only.
pub async fn update_safety(
    db: &PgPool,
    id: Uuid,
    is_safe: bool,
) -> anyhow::Result<Option<FoodEntry>> {
    let row = sqlx::query_as::<_, FoodEntry>(
        r#"
        UPDATE food_entries
        SET is_safe = $2
        WHERE id = $1
        RETURNING id, owner_id, username, food, quantity, is_safe, date
        "#,
    )
    .bind(id)
    .bind(is_safe)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Returns true when a row was actually deleted.
pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM food_entries WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::foods::repo::FoodEntry;

/// Request body for creating a food entry. The entry's owner is always the
/// caller; there is no owner field to supply, and unknown members are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateFoodEntryRequest {
    pub food: String,
    pub quantity: i32,
    pub is_safe: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
}

/// Request body for updating a food entry's mutable fields.
#[derive(Debug, Deserialize)]
pub struct UpdateFoodEntryRequest {
    pub food: String,
    pub quantity: i32,
    pub is_safe: bool,
}

/// Food entry as returned to clients. `user` is the owner's username snapshot.
#[derive(Debug, Serialize)]
pub struct FoodEntryResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub user: String,
    pub food: String,
    pub quantity: i32,
    pub is_safe: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

impl From<FoodEntry> for FoodEntryResponse {
    fn from(e: FoodEntry) -> Self {
        Self {
            id: e.id,
            owner_id: e.owner_id,
            user: e.username,
            food: e.food,
            quantity: e.quantity,
            is_safe: e.is_safe,
            date: e.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_ignores_client_supplied_owner() {
        // An impersonation attempt: extra owner fields are simply dropped
        let body = r#"{
            "user": "somebody-else",
            "owner_id": "1b671a64-40d5-491e-99b0-da01ff1f3341",
            "food": "Apple",
            "quantity": 2,
            "is_safe": true
        }"#;
        let parsed: CreateFoodEntryRequest = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.food, "Apple");
        assert_eq!(parsed.quantity, 2);
        assert!(parsed.date.is_none());
    }

    #[test]
    fn create_request_parses_rfc3339_date() {
        let body = r#"{"food":"Rice","quantity":1,"is_safe":false,"date":"2026-01-02T03:04:05Z"}"#;
        let parsed: CreateFoodEntryRequest = serde_json::from_str(body).unwrap();
        let date = parsed.date.expect("date parsed");
        assert_eq!(date.year(), 2026);
    }
}

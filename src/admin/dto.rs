use serde::Deserialize;

/// Query string for the moderation flag update (`?is_safe=bool`).
#[derive(Debug, Deserialize)]
pub struct SafetyParams {
    pub is_safe: bool,
}

/// Request body for changing a user's role.
#[derive(Debug, Deserialize)]
pub struct RoleUpdate {
    pub role: String,
}

use serde::Deserialize;

/// Request body for changing the caller's own password.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

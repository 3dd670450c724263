use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use crate::auth::jwt::JwtKeys;
use crate::auth::repo_types::{Role, User};
use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated identity and role behind a request.
///
/// Built from a validated bearer token plus a fresh user lookup, so role
/// changes and deactivation take effect on the next request rather than at
/// token expiry.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

#[async_trait]
impl FromRequestParts<AppState> for Principal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".into()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header".into()))?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "token rejected");
            ApiError::Unauthorized("Could not validate credentials".into())
        })?;

        let user = User::find_by_id(&state.db, claims.id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Could not validate credentials".into()))?;

        if !user.is_active {
            warn!(user_id = %user.id, "inactive user rejected");
            return Err(ApiError::Forbidden("Inactive user".into()));
        }

        Ok(Principal {
            id: user.id,
            username: user.username,
            role: user.role,
        })
    }
}

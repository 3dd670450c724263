use uuid::Uuid;

use crate::auth::extractors::Principal;
use crate::auth::repo_types::Role;
use crate::error::ApiError;

/// Permit only admins. Pure decision, no storage access.
pub fn authorize_admin(principal: &Principal) -> Result<(), ApiError> {
    if principal.role == Role::Admin {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "You do not have permission to access this resource".into(),
        ))
    }
}

/// Permit the resource owner or an admin. Pure decision, no storage access.
pub fn authorize_owner_or_admin(principal: &Principal, owner_id: Uuid) -> Result<(), ApiError> {
    if principal.role == Role::Admin || principal.id == owner_id {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "You do not have permission to access this resource".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: Role) -> Principal {
        Principal {
            id: Uuid::new_v4(),
            username: "tester".into(),
            role,
        }
    }

    #[test]
    fn admin_passes_admin_guard() {
        assert!(authorize_admin(&principal(Role::Admin)).is_ok());
    }

    #[test]
    fn user_fails_admin_guard() {
        let err = authorize_admin(&principal(Role::User)).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[test]
    fn owner_passes_ownership_guard() {
        let p = principal(Role::User);
        assert!(authorize_owner_or_admin(&p, p.id).is_ok());
    }

    #[test]
    fn admin_passes_ownership_guard_on_foreign_resource() {
        let p = principal(Role::Admin);
        assert!(authorize_owner_or_admin(&p, Uuid::new_v4()).is_ok());
    }

    #[test]
    fn non_owner_fails_ownership_guard() {
        let p = principal(Role::User);
        let err = authorize_owner_or_admin(&p, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }
}

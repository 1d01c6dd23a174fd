//! # User Commands
//!
//! The admin users page. The form requires a name and an email; the role
//! defaults to employee.

use serde::Serialize;
use tracing::{debug, info};

use grill_core::validation::{validate_display_name, validate_email};
use grill_core::{AdminUser, NewUser, UserPatch};

use crate::error::ApiError;
use crate::state::AdminState;

/// One row of the users table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    #[serde(flatten)]
    pub user: AdminUser,
    pub role_label: &'static str,
}

pub fn list_users(admin: &AdminState) -> Vec<UserRow> {
    debug!("list_users command");
    admin.with_store(|s| {
        s.users()
            .list()
            .iter()
            .map(|user| UserRow {
                role_label: user.role.label(),
                user: user.clone(),
            })
            .collect()
    })
}

pub fn add_user(admin: &AdminState, new_user: NewUser) -> Result<AdminUser, ApiError> {
    let new_user = NewUser {
        name: validate_display_name(&new_user.name)?,
        email: validate_email(&new_user.email)?,
        role: new_user.role,
    };

    let user = admin
        .with_store_mut(|s| {
            let id = s.users_mut().add(new_user);
            s.users().get(&id).cloned()
        })
        .ok_or_else(|| ApiError::internal("Added user is missing"))?;

    info!(id = %user.id, role = %user.role, "User added");
    Ok(user)
}

pub fn edit_user(admin: &AdminState, id: &str, mut patch: UserPatch) -> Result<AdminUser, ApiError> {
    if let Some(name) = &patch.name {
        patch.name = Some(validate_display_name(name)?);
    }
    if let Some(email) = &patch.email {
        patch.email = Some(validate_email(email)?);
    }

    admin.with_store_mut(|s| {
        if !s.users_mut().update(id, &patch) {
            return Err(ApiError::not_found("User", id));
        }
        s.users()
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("User", id))
    })
}

pub fn remove_user(admin: &AdminState, id: &str) -> Result<(), ApiError> {
    if admin.with_store_mut(|s| s.users_mut().remove(id)) {
        info!(id = %id, "User removed");
        Ok(())
    } else {
        Err(ApiError::not_found("User", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use grill_core::UserRole;

    #[test]
    fn test_add_user_validates() {
        let admin = AdminState::demo();

        let err = add_user(
            &admin,
            NewUser {
                name: "Bia".to_string(),
                email: "bia".to_string(),
                role: UserRole::Employee,
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let user = add_user(
            &admin,
            NewUser {
                name: " Bia Entregas ".to_string(),
                email: "bia@grillpoint.com".to_string(),
                role: UserRole::Employee,
            },
        )
        .unwrap();
        assert_eq!(user.name, "Bia Entregas");
        assert!(user.id.starts_with("u-"));
        assert_eq!(list_users(&admin).len(), 4);
    }

    #[test]
    fn test_list_shows_role_label() {
        let admin = AdminState::demo();
        let rows = list_users(&admin);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].user.id, "u1");
        assert_eq!(rows[0].role_label, "Administrador");

        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["roleLabel"], "Administrador");
    }

    #[test]
    fn test_edit_and_remove() {
        let admin = AdminState::demo();

        let user = edit_user(&admin, "u3", UserPatch::new().role(UserRole::Admin)).unwrap();
        assert_eq!(user.role, UserRole::Admin);

        assert!(remove_user(&admin, "u3").is_ok());
        assert_eq!(remove_user(&admin, "u3").unwrap_err().code, ErrorCode::NotFound);
        assert_eq!(
            edit_user(&admin, "u3", UserPatch::new().name("x")).unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}

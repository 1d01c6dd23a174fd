//! # User Directory
//!
//! Staff accounts listed on the admin users page. There is no
//! authentication behind them; the role is only a label.

use std::sync::Arc;

use tracing::debug;

use grill_core::{AdminUser, NewUser, UserPatch};

use crate::ids::{Clock, IdGenerator};

/// Repository for staff users.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<AdminUser>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl UserDirectory {
    pub fn new(users: Vec<AdminUser>, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        UserDirectory { users, ids, clock }
    }

    /// Adds a user created today under a fresh id. Returns the id.
    pub fn add(&mut self, new_user: NewUser) -> String {
        let mut id = self.ids.user_id();
        while self.get(&id).is_some() {
            id = self.ids.user_id();
        }

        let created_at = self.clock.today();
        debug!(id = %id, email = %new_user.email, created_at = %created_at, "Adding user");

        self.users.push(new_user.into_user(id.clone(), created_at));
        id
    }

    /// Merges `patch` into the user. Returns `false` for an unknown id.
    pub fn update(&mut self, id: &str, patch: &UserPatch) -> bool {
        let Some(user) = self.users.iter_mut().find(|u| u.id == id) else {
            debug!(id = %id, "Update skipped, no such user");
            return false;
        };

        debug!(id = %id, "Updating user");
        patch.apply_to(user);
        true
    }

    /// Deletes the user. Returns `false` for an unknown id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        let removed = self.users.len() != before;

        debug!(id = %id, removed, "Removing user");
        removed
    }

    pub fn list(&self) -> &[AdminUser] {
        &self.users
    }

    pub fn get(&self, id: &str) -> Option<&AdminUser> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub(crate) fn replace_all(&mut self, users: Vec<AdminUser>) {
        self.users = users;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{FixedClock, SequentialIds};
    use crate::seed::AdminSnapshot;
    use chrono::NaiveDate;
    use grill_core::UserRole;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn directory() -> UserDirectory {
        UserDirectory::new(
            AdminSnapshot::demo().users,
            Arc::new(SequentialIds::new()),
            Arc::new(FixedClock(today())),
        )
    }

    #[test]
    fn test_add_stamps_id_and_date() {
        let mut users = directory();
        let id = users.add(NewUser {
            name: "Bia Entregas".to_string(),
            email: "bia@grillpoint.com".to_string(),
            role: UserRole::Employee,
        });

        assert_eq!(id, "u-1");
        let user = users.get(&id).unwrap();
        assert_eq!(user.created_at, today());
        assert_eq!(user.role, UserRole::Employee);
        assert_eq!(users.len(), 4);
    }

    #[test]
    fn test_update_role() {
        let mut users = directory();

        assert!(users.update("u2", &UserPatch::new().role(UserRole::Admin)));
        let user = users.get("u2").unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.name, "Maria Caixa");
    }

    #[test]
    fn test_remove_and_unknown() {
        let mut users = directory();

        assert!(users.remove("u3"));
        assert!(!users.remove("u3"));
        assert!(!users.update("u3", &UserPatch::new().name("x")));
        assert_eq!(users.len(), 2);
    }
}

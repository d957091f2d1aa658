//! In-memory user store

use parking_lot::RwLock;
use shared::error::{AppError, AppResult};
use shared::models::{UserAccount, UserCreate, UserFilter, UserUpdate};
use validator::Validate;

use super::UserStore;

struct Directory {
    users: Vec<UserAccount>,
    next_id: i64,
}

/// User store kept in process memory
pub struct InMemoryUserStore {
    inner: RwLock<Directory>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Seed the store; new ids continue after the highest seeded id
    pub fn with_users(mut users: Vec<UserAccount>) -> Self {
        users.sort_by_key(|u| u.id);
        let next_id = users.last().map_or(1, |u| u.id + 1);
        Self {
            inner: RwLock::new(Directory { users, next_id }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().users.is_empty()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

impl UserStore for InMemoryUserStore {
    fn list(&self, filter: &UserFilter) -> Vec<UserAccount> {
        self.inner
            .read()
            .users
            .iter()
            .filter(|u| filter.matches(u))
            .cloned()
            .collect()
    }

    fn find_by_id(&self, id: i64) -> Option<UserAccount> {
        self.inner.read().users.iter().find(|u| u.id == id).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<UserAccount> {
        self.inner
            .read()
            .users
            .iter()
            .find(|u| same_email(&u.email, email))
            .cloned()
    }

    fn create(&self, data: UserCreate) -> AppResult<UserAccount> {
        data.validate()?;

        let mut dir = self.inner.write();
        if dir.users.iter().any(|u| same_email(&u.email, &data.email)) {
            return Err(AppError::email_already_exists(data.email));
        }

        let send_invite = data.send_invite;
        let account = data.into_account(dir.next_id);
        dir.next_id += 1;
        dir.users.push(account.clone());

        tracing::info!(
            user_id = account.id,
            role_id = %account.role,
            send_invite,
            "User created"
        );
        Ok(account)
    }

    fn update(&self, id: i64, data: UserUpdate) -> AppResult<UserAccount> {
        data.validate()?;

        let mut dir = self.inner.write();
        if let Some(email) = data.email.as_deref()
            && dir
                .users
                .iter()
                .any(|u| u.id != id && same_email(&u.email, email))
        {
            return Err(AppError::email_already_exists(email));
        }

        let user = dir
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::user_not_found(id))?;

        if let Some(name) = data.name {
            user.name = name;
        }
        if let Some(email) = data.email {
            user.email = email;
        }
        if let Some(role) = data.role {
            user.role = role;
        }
        if let Some(status) = data.status {
            user.status = status;
        }

        tracing::info!(user_id = id, status = ?user.status, "User updated");
        Ok(user.clone())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let mut dir = self.inner.write();
        let index = dir
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AppError::user_not_found(id))?;
        dir.users.remove(index);

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}

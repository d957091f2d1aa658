//! User Directory
//!
//! Dashboard accounts are read and written through [`UserStore`].
//! [`InMemoryUserStore`] is the default backend.

pub mod memory;

pub use memory::InMemoryUserStore;

use shared::error::AppResult;
use shared::models::{UserAccount, UserCreate, UserFilter, UserStatus, UserUpdate};

/// CRUD over user accounts
pub trait UserStore: Send + Sync {
    /// Accounts matching the filter, ordered by id
    fn list(&self, filter: &UserFilter) -> Vec<UserAccount>;
    fn find_by_id(&self, id: i64) -> Option<UserAccount>;
    fn find_by_email(&self, email: &str) -> Option<UserAccount>;
    fn create(&self, data: UserCreate) -> AppResult<UserAccount>;
    fn update(&self, id: i64, data: UserUpdate) -> AppResult<UserAccount>;
    fn delete(&self, id: i64) -> AppResult<()>;

    /// Activate or deactivate an account
    fn set_status(&self, id: i64, status: UserStatus) -> AppResult<UserAccount> {
        self.update(
            id,
            UserUpdate {
                status: Some(status),
                ..Default::default()
            },
        )
    }
}

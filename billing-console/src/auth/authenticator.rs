//! Pluggable authentication
//!
//! [`Authenticator`] is the seam a real identity backend plugs into.
//! [`CredentialAuthenticator`] keeps argon2 hashes in memory and is what the
//! console uses when no backend is wired.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{UserAccount, UserStatus};

use crate::security_log;

/// Authenticated session
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: UserAccount,
    /// Opaque bearer token
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

/// Verifies credentials and opens a session
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, email: &str, password: &str) -> AppResult<Session>;
}

struct CredentialRecord {
    user: UserAccount,
    password_hash: String,
}

/// In-memory credential list with argon2 password hashes
#[derive(Default)]
pub struct CredentialAuthenticator {
    records: Vec<CredentialRecord>,
}

impl CredentialAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account, hashing the plain password
    pub fn register(&mut self, user: UserAccount, password: &str) -> AppResult<()> {
        let password_hash = hash_password(password)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;
        self.register_hashed(user, password_hash)
    }

    /// Register an account with an existing PHC hash string
    pub fn register_hashed(&mut self, user: UserAccount, password_hash: String) -> AppResult<()> {
        if self.records.iter().any(|r| r.user.email == user.email) {
            return Err(AppError::email_already_exists(user.email));
        }
        self.records.push(CredentialRecord {
            user,
            password_hash,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Authenticator for CredentialAuthenticator {
    fn authenticate(&self, email: &str, password: &str) -> AppResult<Session> {
        let Some(record) = self.records.iter().find(|r| r.user.email == email) else {
            security_log!("WARN", "login_failed", email = email, reason = "unknown_account");
            return Err(AppError::invalid_credentials());
        };

        // Unparseable hash counts as a mismatch
        if !verify_password(password, &record.password_hash).unwrap_or(false) {
            security_log!("WARN", "login_failed", email = email, reason = "bad_password");
            return Err(AppError::invalid_credentials());
        }

        match record.user.status {
            UserStatus::Active => {}
            UserStatus::Inactive => {
                security_log!("WARN", "login_rejected", email = email, reason = "inactive");
                return Err(AppError::new(ErrorCode::AccountDisabled));
            }
            UserStatus::Pending => {
                security_log!("WARN", "login_rejected", email = email, reason = "pending");
                return Err(AppError::new(ErrorCode::AccountPending));
            }
        }

        security_log!("INFO", "login_success", email = email, user_id = record.user.id);

        Ok(Session {
            user: record.user.clone(),
            token: uuid::Uuid::new_v4().simple().to_string(),
            issued_at: Utc::now(),
        })
    }
}

/// Hash password using argon2
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

/// Verify password using argon2
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

//! Shared types for the billing console
//!
//! Common types used by the console core and any UI layer that consumes it:
//! permission and role models, user accounts, anticipation quotes, and the
//! unified error system.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Action, Permission, PermissionSet, Resource, Role};

//! Data models
//!
//! Shared between the console core and any UI layer that renders it.

pub mod anticipation;
pub mod permission;
pub mod role;
pub mod user;

// Re-exports
pub use anticipation::*;
pub use permission::*;
pub use role::*;
pub use user::*;

//! `invtrack-auth` — user account records and roles.
//!
//! This crate is intentionally decoupled from HTTP, sessions and storage.

pub mod roles;
pub mod user;

pub use roles::Role;
pub use user::{User, UserStatus};

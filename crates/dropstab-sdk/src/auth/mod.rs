//! Authentication module for the Dropstab SDK
//!
//! Email/password login, refresh-token exchange and the in-memory session
//! that backs the `Authorization` header of every API request.

pub mod manager;
pub mod types;

pub use manager::TokenManager;
pub use types::{Session, TokenResponse};

//! Authentication-related types
//!
//! Request and response payloads for the login and refresh endpoints, and the
//! in-memory [`Session`] they produce.

use serde::{Deserialize, Serialize};

/// Tokens currently held by the client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Bearer token attached to API requests
    pub access_token: Option<String>,
    /// Token used to obtain a new access token
    pub refresh_token: Option<String>,
}

impl Session {
    /// Session holding both tokens
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token: Some(refresh_token.into()),
        }
    }

    /// Session holding only a refresh token; the first request triggers a refresh
    pub fn from_refresh_token(refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: None,
            refresh_token: Some(refresh_token.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

impl From<TokenResponse> for Session {
    fn from(tokens: TokenResponse) -> Self {
        Self::new(tokens.access_token, tokens.refresh_token)
    }
}

/// Body of `POST /portfolio/login`
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /portfolio/refreshToken`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Token pair returned by login and refresh
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Server-declared lifetime in seconds; informational only
    #[serde(default)]
    pub expires_in: Option<u64>,
}

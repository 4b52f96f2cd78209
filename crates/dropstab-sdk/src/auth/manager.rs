//! Token management with on-demand refresh
//!
//! The TokenManager owns the single in-memory [`Session`]. It obtains tokens
//! through login, replaces them through refresh, and hands out the cached
//! access token, refreshing only when none is held. It does not track expiry
//! and does not react to 401 responses.

use super::types::{LoginRequest, RefreshRequest, Session, TokenResponse};
use crate::client::decode_response;
use crate::endpoints::{self, Endpoint};
use crate::error::{ApiError, Result};
use crate::logging::Logger;
use serde::Serialize;
use tokio::sync::RwLock;

/// Holds the current session and refreshes it on demand
#[derive(Debug)]
pub struct TokenManager {
    http_client: reqwest::Client,
    base_url: String,
    session: RwLock<Session>,
    logger: Logger,
}

impl TokenManager {
    /// Create a token manager with an empty session
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>, logger: Logger) -> Self {
        Self::with_session(http_client, base_url, Session::default(), logger)
    }

    /// Create a token manager seeded with existing tokens
    pub fn with_session(
        http_client: reqwest::Client,
        base_url: impl Into<String>,
        session: Session,
        logger: Logger,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            session: RwLock::new(session),
            logger,
        }
    }

    /// Log in with email and password and store the returned tokens
    ///
    /// On failure the current session is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        self.logger.info(format_args!("Attempting to log in as {email}"));

        let request = LoginRequest { email, password };
        match self.post_tokens(endpoints::LOGIN, &request).await {
            Ok(tokens) => {
                self.replace_session(tokens).await;
                self.logger.info("Login successful");
                Ok(())
            }
            Err(e) => {
                self.logger.error(format_args!("Login failed: {e}"));
                Err(e)
            }
        }
    }

    /// Exchange the stored refresh token for a new token pair
    ///
    /// Fails with [`ApiError::Unauthenticated`] without touching the network
    /// when no refresh token is held.
    pub async fn refresh(&self) -> Result<()> {
        self.refresh_tokens().await.map(|_| ())
    }

    /// Get a usable access token, refreshing when none is cached
    pub async fn get_access_token(&self) -> Result<String> {
        {
            let session = self.session.read().await;
            if let Some(access_token) = &session.access_token {
                self.logger.debug("Returning cached access token");
                return Ok(access_token.clone());
            }
        }

        self.refresh_tokens().await
    }

    /// Snapshot of the current session
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Whether any token is held
    pub async fn is_authenticated(&self) -> bool {
        !self.session.read().await.is_empty()
    }

    /// Drop the current session locally; nothing is sent to the server
    pub async fn logout(&self) {
        *self.session.write().await = Session::default();
        self.logger.info("Session cleared");
    }

    /// Refresh and return the new access token
    async fn refresh_tokens(&self) -> Result<String> {
        let refresh_token = self.session.read().await.refresh_token.clone();
        let Some(refresh_token) = refresh_token else {
            self.logger
                .warn("No refresh token available. Please log in again.");
            return Err(ApiError::Unauthenticated);
        };

        self.logger.info("Refreshing access token");
        let request = RefreshRequest {
            refresh_token: &refresh_token,
        };
        match self.post_tokens(endpoints::REFRESH_TOKEN, &request).await {
            Ok(tokens) => {
                let access_token = tokens.access_token.clone();
                self.replace_session(tokens).await;
                self.logger.info("Access token refreshed");
                Ok(access_token)
            }
            Err(e) => {
                self.logger.error(format_args!("Token refresh failed: {e}"));
                Err(e)
            }
        }
    }

    /// POST to an auth endpoint; these requests carry no Authorization header
    async fn post_tokens<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> Result<TokenResponse> {
        let url = format!("{}{}", self.base_url, endpoint.path);
        let response = self
            .http_client
            .request(endpoint.method.as_reqwest(), &url)
            .json(body)
            .send()
            .await?;
        decode_response(response).await
    }

    async fn replace_session(&self, tokens: TokenResponse) {
        if let Some(expires_in) = tokens.expires_in {
            self.logger
                .debug(format_args!("Server reports token lifetime of {expires_in}s"));
        }
        *self.session.write().await = Session::from(tokens);
    }
}

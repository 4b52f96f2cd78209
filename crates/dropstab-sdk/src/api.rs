//! Entry point of the SDK
//!
//! [`DropstabApi`] wires the token manager, the HTTP client and the resource
//! services together. Construct it with [`ClientBuilder`] or
//! [`DropstabApi::new`].
//!
//! ```rust,no_run
//! use dropstab_sdk::{ClientBuilder, LogLevel};
//!
//! # async fn example() -> dropstab_sdk::Result<()> {
//! let api = ClientBuilder::default()
//!     .log_levels([LogLevel::Info, LogLevel::Error, LogLevel::Debug])
//!     .build()?;
//!
//! api.login("user@example.com", "password").await?;
//!
//! let groups: serde_json::Value = api.portfolio_service().get_portfolio_groups().await?;
//! println!("{groups}");
//! # Ok(())
//! # }
//! ```

use crate::{
    auth::{Session, TokenManager},
    client::{build_http_client, ApiClient, DEFAULT_TIMEOUT_SECS},
    config::{normalize_base_url, DropstabConfig},
    endpoints::DEFAULT_API_URL,
    error::{ApiError, Result},
    logging::{LogLevel, LogLevels, Logger},
    services::PortfolioService,
};
use std::sync::Arc;
use std::time::Duration;

/// Facade over the Dropstab API services
#[derive(Debug)]
pub struct DropstabApi {
    token_manager: Arc<TokenManager>,
    api_client: Arc<ApiClient>,
    portfolio_service: PortfolioService,
}

impl DropstabApi {
    /// Build from a loaded configuration with an empty session
    pub fn new(config: &DropstabConfig) -> Result<Self> {
        config.validate()?;
        ClientBuilder::from_config(config).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Log in and store the session tokens
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        self.token_manager.login(email, password).await
    }

    /// Token manager holding the session
    pub fn token_manager(&self) -> &TokenManager {
        &self.token_manager
    }

    pub fn portfolio_service(&self) -> &PortfolioService {
        &self.portfolio_service
    }

    pub fn base_url(&self) -> &str {
        self.api_client.base_url()
    }
}

/// Builder for constructing a [`DropstabApi`] with custom configuration
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    log_levels: Option<LogLevels>,
    timeout: Option<Duration>,
    session: Session,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-filled from a configuration
    pub fn from_config(config: &DropstabConfig) -> Self {
        Self::default()
            .base_url(config.base_url.clone())
            .log_levels(config.log_levels.iter().copied())
            .timeout(config.timeout())
    }

    /// Set the base URL for the API
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the severities the SDK emits (defaults to info and error)
    pub fn log_levels(mut self, levels: impl IntoIterator<Item = LogLevel>) -> Self {
        self.log_levels = Some(levels.into_iter().collect());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Start with an existing token pair instead of logging in
    pub fn with_tokens(
        mut self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        self.session = Session::new(access_token, refresh_token);
        self
    }

    /// Start with only a refresh token; the first request refreshes
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.session = Session::from_refresh_token(refresh_token);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DropstabApi> {
        let base_url =
            normalize_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_API_URL))?;
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() {
            return Err(ApiError::Config("timeout must be greater than zero".into()));
        }
        let levels = self.log_levels.unwrap_or_default();

        let http_client = build_http_client(timeout)?;

        let token_manager = Arc::new(TokenManager::with_session(
            http_client.clone(),
            base_url.clone(),
            self.session,
            Logger::new("AuthService", levels),
        ));
        let api_client = Arc::new(ApiClient::new(
            http_client,
            base_url,
            token_manager.clone(),
            Logger::new("ApiClient", levels),
        ));
        let portfolio_service =
            PortfolioService::new(api_client.clone(), Logger::new("PortfolioService", levels));

        Ok(DropstabApi {
            token_manager,
            api_client,
            portfolio_service,
        })
    }
}

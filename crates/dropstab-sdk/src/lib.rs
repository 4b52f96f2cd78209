//! # Dropstab SDK
//!
//! Client library for the Dropstab portfolio-tracking API.
//!
//! The SDK logs a user in, keeps the access and refresh tokens in memory,
//! attaches the access token to every request and refreshes it when none is
//! cached. Portfolio groups can be created, listed and fetched by id.
//!
//! ```rust,no_run
//! use dropstab_sdk::{CreatePortfolioParams, DropstabApi, DropstabConfig, PortfolioColor};
//!
//! # async fn example() -> dropstab_sdk::Result<()> {
//! let api = DropstabApi::new(&DropstabConfig::from_env()?)?;
//! api.login("user@example.com", "password").await?;
//!
//! let created: serde_json::Value = api
//!     .portfolio_service()
//!     .create_portfolio(&CreatePortfolioParams {
//!         name: "My Portfolio".into(),
//!         description: "This is my first portfolio".into(),
//!         color: PortfolioColor::Blue,
//!         include_in_total: true,
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod services;
pub mod types;

pub use api::{ClientBuilder, DropstabApi};
pub use auth::{Session, TokenManager};
pub use client::ApiClient;
pub use config::DropstabConfig;
pub use error::{ApiError, Result};
pub use logging::{LogLevel, LogLevels, Logger};
pub use services::PortfolioService;
pub use types::{
    CreatePortfolioParams, CurrencyValues, NetChange, PortfolioAsset, PortfolioColor,
    PortfolioGroup, PortfolioOptions, PortfolioShort, PortfolioTotal,
};

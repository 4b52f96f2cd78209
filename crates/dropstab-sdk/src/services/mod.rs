//! Resource services built on top of [`crate::client::ApiClient`]

pub mod portfolio;

pub use portfolio::PortfolioService;

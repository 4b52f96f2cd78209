//! Portfolio group operations

use crate::{
    client::ApiClient,
    endpoints::{PORTFOLIO_CREATE, PORTFOLIO_GROUPS_SHORT, PORTFOLIO_GROUP_ITEM},
    error::Result,
    logging::Logger,
    types::CreatePortfolioParams,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Creates and fetches portfolio groups
///
/// Responses are decoded into whatever type the caller asks for. Use
/// `serde_json::Value` for the raw body, or the models in [`crate::types`].
#[derive(Debug)]
pub struct PortfolioService {
    api_client: Arc<ApiClient>,
    logger: Logger,
}

impl PortfolioService {
    pub fn new(api_client: Arc<ApiClient>, logger: Logger) -> Self {
        Self { api_client, logger }
    }

    /// Create a new portfolio group
    pub async fn create_portfolio<T: DeserializeOwned>(
        &self,
        params: &CreatePortfolioParams,
    ) -> Result<T> {
        self.logger.info(format_args!(
            "Creating portfolio '{}' ({})",
            params.name, params.color
        ));

        let result = self
            .api_client
            .send(PORTFOLIO_CREATE, PORTFOLIO_CREATE.path, Some(params))
            .await;

        match &result {
            Ok(_) => self.logger.info("Portfolio created successfully"),
            Err(e) => self.logger.error(format_args!("Error creating portfolio: {e}")),
        }
        result
    }

    /// Get the short list of the user's portfolio groups
    pub async fn get_portfolio_groups<T: DeserializeOwned>(&self) -> Result<T> {
        self.logger.info("Fetching portfolio groups");

        let result = self
            .api_client
            .send::<(), T>(PORTFOLIO_GROUPS_SHORT, PORTFOLIO_GROUPS_SHORT.path, None)
            .await;

        match &result {
            Ok(_) => self.logger.info("Portfolio groups fetched successfully"),
            Err(e) => self
                .logger
                .error(format_args!("Error fetching portfolio groups: {e}")),
        }
        result
    }

    /// Get a single portfolio group by id
    pub async fn get_portfolio_group<T: DeserializeOwned>(&self, id: i64) -> Result<T> {
        self.logger
            .info(format_args!("Fetching portfolio group {id}"));

        let path = PORTFOLIO_GROUP_ITEM.resolve(&[("id", &id.to_string())]);
        let result = self
            .api_client
            .send::<(), T>(PORTFOLIO_GROUP_ITEM, &path, None)
            .await;

        match &result {
            Ok(_) => self
                .logger
                .info(format_args!("Portfolio group {id} fetched successfully")),
            Err(e) => self
                .logger
                .error(format_args!("Error fetching portfolio group {id}: {e}")),
        }
        result
    }
}

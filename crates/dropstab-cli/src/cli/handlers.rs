//! Command handlers

use crate::cli::commands::PortfolioAction;
use crate::error::Result;
use dropstab_sdk::{CreatePortfolioParams, DropstabApi};
use serde_json::Value;

pub fn handle_login() -> Result<()> {
    println!("Login successful");
    Ok(())
}

pub async fn handle_portfolios(api: &DropstabApi, action: PortfolioAction) -> Result<()> {
    let service = api.portfolio_service();

    let response: Value = match action {
        PortfolioAction::List => service.get_portfolio_groups().await?,
        PortfolioAction::Show { id } => service.get_portfolio_group(id).await?,
        PortfolioAction::Create {
            name,
            description,
            color,
            include_in_total,
        } => {
            let params = CreatePortfolioParams {
                name,
                description,
                color,
                include_in_total,
            };
            service.create_portfolio(&params).await?
        }
    };

    println!("{}", render(&response)?);
    Ok(())
}

/// Pretty JSON for terminal output
pub fn render(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

//! Type definitions for the Dropstab SDK
//!
//! Portfolio payloads as the API returns them. The SDK only transports these;
//! fields the API may omit or null out are optional.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Accent color of a portfolio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PortfolioColor {
    Indigo,
    Cyan,
    Purple,
    Orange,
    Blue,
    Green,
}

impl PortfolioColor {
    pub const ALL: [PortfolioColor; 6] = [
        PortfolioColor::Indigo,
        PortfolioColor::Cyan,
        PortfolioColor::Purple,
        PortfolioColor::Orange,
        PortfolioColor::Blue,
        PortfolioColor::Green,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioColor::Indigo => "INDIGO",
            PortfolioColor::Cyan => "CYAN",
            PortfolioColor::Purple => "PURPLE",
            PortfolioColor::Orange => "ORANGE",
            PortfolioColor::Blue => "BLUE",
            PortfolioColor::Green => "GREEN",
        }
    }
}

impl fmt::Display for PortfolioColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortfolioColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == upper)
            .ok_or_else(|| format!("unknown portfolio color: {s}"))
    }
}

/// Request body for creating a portfolio group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioParams {
    pub name: String,
    pub description: String,
    pub color: PortfolioColor,
    pub include_in_total: bool,
}

/// Response of the short portfolio list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioShort {
    #[serde(default)]
    pub btc_change_24h: Option<String>,
    /// Untyped on the API side
    #[serde(default)]
    pub btc_dominance: serde_json::Value,
    #[serde(default)]
    pub btc_price_usd: Option<String>,
    #[serde(default)]
    pub eth_change_24h: Option<String>,
    #[serde(default)]
    pub eth_price_usd: Option<String>,
    #[serde(default)]
    pub global_initial_type: Option<String>,
    #[serde(default)]
    pub portfolio_groups: Vec<PortfolioGroup>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// A user's tracked collection of assets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i64>,
    #[serde(default)]
    pub share_type: Option<String>,
    #[serde(default)]
    pub portfolio_sharing_type: Option<String>,
    #[serde(default)]
    pub is_sharing_public: Option<bool>,
    #[serde(default)]
    pub assets_count: Option<u64>,
    #[serde(default)]
    pub share_token: Option<String>,
    #[serde(default)]
    pub following: Option<bool>,
    #[serde(default)]
    pub followers_count: Option<u64>,
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub need_to_index: Option<bool>,
    #[serde(default)]
    pub sharing_slug: Option<String>,
    #[serde(default)]
    pub portfolio_total: Option<PortfolioTotal>,
    #[serde(default)]
    pub assets: Vec<PortfolioAsset>,
    #[serde(default)]
    pub options: Option<PortfolioOptions>,
}

/// Aggregate values of a portfolio group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotal {
    pub total_cap: CurrencyValues,
    pub initial_cap: CurrencyValues,
    /// Keyed by timeframe
    #[serde(default)]
    pub net_change_absolute: NetChange,
    #[serde(default)]
    pub net_change_percent: NetChange,
    pub profit: CurrencyValues,
}

/// Net change per timeframe
pub type NetChange = HashMap<String, CurrencyValues>;

/// A value expressed in each quote currency the API reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct CurrencyValues {
    #[serde(default)]
    pub usd: Option<String>,
    #[serde(default)]
    pub btc: Option<String>,
    #[serde(default)]
    pub eth: Option<String>,
    #[serde(default)]
    pub bnb: Option<String>,
    #[serde(default)]
    pub sol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAsset {
    pub id: i64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub rank: Option<i64>,
    pub symbol: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub currency_id: Option<i64>,
    #[serde(default)]
    pub portfolio_id: Option<i64>,
}

/// Display options of a portfolio group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOptions {
    #[serde(default)]
    pub chart_timeframe: Option<String>,
    #[serde(default)]
    pub show_chart: Option<bool>,
    #[serde(default)]
    pub show_small_holdings: Option<bool>,
    #[serde(default)]
    pub show_holdings_share_chart: Option<bool>,
    #[serde(default)]
    pub show_upcoming_events: Option<bool>,
    #[serde(default)]
    pub show_notes: Option<bool>,
    #[serde(default)]
    pub portfolio_timeframe: Option<String>,
    #[serde(default)]
    pub color: Option<PortfolioColor>,
    #[serde(default)]
    pub top_performance: Option<bool>,
    #[serde(default)]
    pub include_in_total: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_params_wire_format() {
        let params = CreatePortfolioParams {
            name: "Test Portfolio".into(),
            description: "Test Description".into(),
            color: PortfolioColor::Indigo,
            include_in_total: true,
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "name": "Test Portfolio",
                "description": "Test Description",
                "color": "INDIGO",
                "includeInTotal": true,
            })
        );
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("blue".parse::<PortfolioColor>().unwrap(), PortfolioColor::Blue);
        assert_eq!("GREEN".parse::<PortfolioColor>().unwrap(), PortfolioColor::Green);
        assert!("magenta".parse::<PortfolioColor>().is_err());
        for color in PortfolioColor::ALL {
            assert_eq!(color.to_string().parse::<PortfolioColor>().unwrap(), color);
        }
    }

    #[test]
    fn test_portfolio_short_deserializes_api_payload() {
        let short: PortfolioShort = serde_json::from_value(json!({
            "btcChange24h": "1.2",
            "btcDominance": 54.1,
            "btcPriceUsd": "64000",
            "ethChange24h": "-0.4",
            "ethPriceUsd": "3100",
            "globalInitialType": "USD",
            "profileImage": null,
            "username": "trader",
            "portfolioGroups": [{
                "id": 1402496,
                "name": "Test Portfolio",
                "description": null,
                "username": "trader",
                "userId": 77,
                "profileImage": null,
                "sortOrder": 0,
                "shareType": "PRIVATE",
                "portfolioSharingType": "NONE",
                "isSharingPublic": false,
                "assetsCount": 1,
                "shareToken": "abc",
                "following": false,
                "followersCount": 0,
                "updatedAt": null,
                "createdAt": 1727000000000i64,
                "needToIndex": false,
                "sharingSlug": "test-portfolio",
                "portfolioTotal": {
                    "totalCap": { "USD": "10", "BTC": "0.0001", "ETH": "0.003", "BNB": "0.02", "SOL": "0.07" },
                    "initialCap": { "USD": "8" },
                    "netChangeAbsolute": { "24h": { "USD": "2" } },
                    "netChangePercent": { "24h": { "USD": "25" } },
                    "profit": { "USD": "2" }
                },
                "assets": [{
                    "id": 9,
                    "slug": "bitcoin",
                    "name": "Bitcoin",
                    "rank": 1,
                    "symbol": "BTC",
                    "image": "https://example.com/btc.png",
                    "custom": false,
                    "currencyId": 1,
                    "portfolioId": 1402496
                }],
                "options": { "color": "INDIGO", "includeInTotal": true, "showChart": true }
            }]
        }))
        .unwrap();

        assert_eq!(short.username.as_deref(), Some("trader"));
        assert_eq!(short.btc_dominance, json!(54.1));

        let group = &short.portfolio_groups[0];
        assert_eq!(group.id, 1402496);
        assert_eq!(group.description, None);
        assert_eq!(group.assets[0].symbol, "BTC");

        let total = group.portfolio_total.as_ref().unwrap();
        assert_eq!(total.total_cap.sol.as_deref(), Some("0.07"));
        assert_eq!(total.net_change_percent["24h"].usd.as_deref(), Some("25"));

        let options = group.options.as_ref().unwrap();
        assert_eq!(options.color, Some(PortfolioColor::Indigo));
        assert_eq!(options.include_in_total, Some(true));
    }

    #[test]
    fn test_minimal_group() {
        let group: PortfolioGroup =
            serde_json::from_value(json!({ "id": 1, "name": "Portfolio 1" })).unwrap();
        assert!(group.assets.is_empty());
        assert!(group.portfolio_total.is_none());
    }
}

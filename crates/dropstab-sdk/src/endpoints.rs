//! Endpoint table for the Dropstab API

use reqwest::Method;

/// Default API URL when not specified
pub const DEFAULT_API_URL: &str = "https://api2.icodrops.com";

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub const fn as_reqwest(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }
}

/// A (method, path) pair; paths may contain `:name` placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
}

impl Endpoint {
    const fn new(method: HttpMethod, path: &'static str) -> Self {
        Self { method, path }
    }

    /// Substitute `:name` placeholders with the given values
    pub fn resolve(&self, params: &[(&str, &str)]) -> String {
        self.path
            .split('/')
            .map(|segment| {
                segment
                    .strip_prefix(':')
                    .and_then(|name| params.iter().find(|(key, _)| *key == name))
                    .map(|(_, value)| urlencoding::encode(value).into_owned())
                    .unwrap_or_else(|| segment.to_string())
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

// ===== Auth =====

/// POST `{email, password}`
pub const LOGIN: Endpoint = Endpoint::new(HttpMethod::Post, "/portfolio/login");

/// POST `{refreshToken}`
pub const REFRESH_TOKEN: Endpoint = Endpoint::new(HttpMethod::Post, "/portfolio/refreshToken");

// ===== Portfolio =====

pub const PORTFOLIO_CREATE: Endpoint =
    Endpoint::new(HttpMethod::Post, "/portfolio/api/portfolioGroup");

pub const PORTFOLIO_GROUPS_SHORT: Endpoint =
    Endpoint::new(HttpMethod::Get, "/portfolio/api/portfolioGroup/short");

/// Replace `:id` with the portfolio group id
pub const PORTFOLIO_GROUP_ITEM: Endpoint =
    Endpoint::new(HttpMethod::Get, "/portfolio/api/portfolioGroup/:id");

use crate::constants::*;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Live route source; `None` serves the built-in candidates
    pub route_source: Option<RouteSourceConfig>,
    /// Live explanation service; `None` serves the canned reply
    pub explanation: Option<ExplanationConfig>,
}

#[derive(Debug, Clone)]
pub struct RouteSourceConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl RouteSourceConfig {
    pub fn new(api_key: String) -> Self {
        RouteSourceConfig {
            api_key,
            base_url: DEFAULT_ROUTES_API_URL.to_string(),
            timeout_secs: DEFAULT_ROUTE_SOURCE_TIMEOUT_SECS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn from_env() -> Result<Option<Self>, String> {
        let Some(api_key) = non_empty_var("GOOGLE_MAPS_API_KEY") else {
            return Ok(None);
        };

        Ok(Some(RouteSourceConfig {
            api_key,
            base_url: non_empty_var("ROUTES_API_URL")
                .unwrap_or_else(|| DEFAULT_ROUTES_API_URL.to_string()),
            timeout_secs: parse_timeout(
                "ROUTE_SOURCE_TIMEOUT_SECS",
                DEFAULT_ROUTE_SOURCE_TIMEOUT_SECS,
            )?,
        }))
    }
}

#[derive(Debug, Clone)]
pub struct ExplanationConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ExplanationConfig {
    pub fn new(api_key: String) -> Self {
        ExplanationConfig {
            api_key,
            model: DEFAULT_EXPLANATION_MODEL.to_string(),
            base_url: DEFAULT_EXPLANATION_API_URL.to_string(),
            timeout_secs: DEFAULT_EXPLANATION_TIMEOUT_SECS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn from_env() -> Result<Option<Self>, String> {
        let Some(api_key) = non_empty_var("VERTEX_API_KEY") else {
            return Ok(None);
        };

        Ok(Some(ExplanationConfig {
            api_key,
            model: non_empty_var("VERTEX_MODEL")
                .unwrap_or_else(|| DEFAULT_EXPLANATION_MODEL.to_string()),
            base_url: non_empty_var("EXPLANATION_API_URL")
                .unwrap_or_else(|| DEFAULT_EXPLANATION_API_URL.to_string()),
            timeout_secs: parse_timeout(
                "EXPLANATION_TIMEOUT_SECS",
                DEFAULT_EXPLANATION_TIMEOUT_SECS,
            )?,
        }))
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            route_source: RouteSourceConfig::from_env()?,
            explanation: ExplanationConfig::from_env()?,
        })
    }

    /// Configuration with both upstreams disabled
    pub fn offline() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.parse().unwrap_or(8000),
            route_source: None,
            explanation: None,
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_timeout(key: &str, default: u64) -> Result<u64, String> {
    let secs: u64 = env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| format!("Invalid {}", key))?;

    if secs == 0 {
        return Err(format!("{} must be greater than 0", key));
    }
    Ok(secs)
}

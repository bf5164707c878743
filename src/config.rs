// src/config.rs
use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::services::gateway::DEFAULT_GATEWAY_URL;

pub const API_KEY_VAR: &str = "AI_GATEWAY_API_KEY";

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub gateway_url: String,
    pub api_key: Option<String>,
    pub admin_key: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("gateway_url", &self.gateway_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("admin_key", &self.admin_key.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl Config {
    /// Reads the process environment once. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", 3000),
            gateway_url: var("AI_GATEWAY_URL").unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string()),
            api_key: var(API_KEY_VAR),
            admin_key: var("ADMIN_KEY"),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match var(key) {
        Some(raw) => parse_or(key, &raw, default),
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

fn parse_or<T: FromStr + Display>(key: &str, raw: &str, default: T) -> T
where
    T::Err: Display,
{
    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

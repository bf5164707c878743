// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gateway::GatewayClient;
use crate::services::usage::UsageCounters;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// `None` when no credential was configured; `/chat` then answers 500 without calling out.
    pub gateway: Option<GatewayClient>,
    pub usage: UsageCounters,
    pub admin_key: Option<String>,
}

impl AppState {
    pub fn new(gateway: Option<GatewayClient>, admin_key: Option<String>) -> Self {
        Self {
            gateway,
            usage: UsageCounters::new(),
            admin_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let gateway = config
            .api_key
            .as_ref()
            .map(|key| GatewayClient::new(config.gateway_url.clone(), key.clone()));
        Self::new(gateway, config.admin_key.clone())
    }
}

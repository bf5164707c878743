// src/services/usage.rs
//! Process-lifetime counters for relayed chats, served at `/admin/metrics`.
use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::message::Language;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    pub requests: u64,
    pub by_language: BTreeMap<String, u64>,
    pub by_outcome: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default)]
pub struct UsageCounters {
    inner: Arc<RwLock<UsageSnapshot>>,
}

impl UsageCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one `/chat` call. `language` is `None` when the request never reached the gateway.
    pub async fn record(&self, language: Option<Language>, outcome: &'static str) {
        let mut usage = self.inner.write().await;
        usage.requests += 1;
        if let Some(language) = language {
            *usage.by_language.entry(language.code().to_string()).or_default() += 1;
        }
        *usage.by_outcome.entry(outcome.to_string()).or_default() += 1;
    }

    pub async fn snapshot(&self) -> UsageSnapshot {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refused_requests_count_without_language() {
        let usage = UsageCounters::new();
        usage.record(Some(Language::Ta), "ok").await;
        usage.record(Some(Language::Ta), "rate_limited").await;
        usage.record(None, "bad_request").await;

        let snapshot = usage.snapshot().await;
        assert_eq!(snapshot.requests, 3);
        assert_eq!(snapshot.by_language.get("ta"), Some(&2));
        assert_eq!(snapshot.by_language.get("en"), None);
        assert_eq!(snapshot.by_outcome.get("ok"), Some(&1));
        assert_eq!(snapshot.by_outcome.get("bad_request"), Some(&1));
    }

    #[tokio::test]
    async fn clones_share_counters() {
        let usage = UsageCounters::new();
        usage.clone().record(Some(Language::En), "ok").await;
        assert_eq!(usage.snapshot().await.requests, 1);
    }
}

//! In-memory gateway for tests and offline runs.

use crate::application::gateway::SparkGateway;
use crate::error::{AppError, SparkResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Gateway serving canned payloads instead of talking to a broker.
///
/// Account-scoped payloads are keyed by account key; asking for an account
/// the mock was not seeded with yields a gateway error, which is what a
/// live gateway reports for an unknown key.
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    static_data: Option<Value>,
    holdings: HashMap<String, Value>,
    summaries: HashMap<String, Value>,
    securities: HashMap<String, Value>,
}

impl MockGateway {
    /// Creates an empty mock with no payloads seeded
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the static-data payload
    pub fn with_static_data(mut self, payload: Value) -> Self {
        self.static_data = Some(payload);
        self
    }

    /// Seeds the holdings payload for one account
    pub fn with_holdings(mut self, account_key: &str, payload: Value) -> Self {
        self.holdings.insert(account_key.to_string(), payload);
        self
    }

    /// Seeds the holdings-summary payload for one account
    pub fn with_holdings_summary(mut self, account_key: &str, payload: Value) -> Self {
        self.summaries.insert(account_key.to_string(), payload);
        self
    }

    /// Seeds the securities payload for one account
    pub fn with_securities(mut self, account_key: &str, payload: Value) -> Self {
        self.securities.insert(account_key.to_string(), payload);
        self
    }

    fn lookup(map: &HashMap<String, Value>, account_key: &str, what: &str) -> SparkResult<Value> {
        map.get(account_key).cloned().ok_or_else(|| {
            AppError::Gateway(format!("no {what} payload seeded for account {account_key}"))
        })
    }
}

#[async_trait]
impl SparkGateway for MockGateway {
    async fn static_data(&self) -> SparkResult<Value> {
        self.static_data
            .clone()
            .ok_or_else(|| AppError::Gateway("no static data payload seeded".to_string()))
    }

    async fn account_holdings(&self, account_key: &str) -> SparkResult<Value> {
        Self::lookup(&self.holdings, account_key, "holdings")
    }

    async fn account_holdings_summary(&self, account_key: &str) -> SparkResult<Value> {
        Self::lookup(&self.summaries, account_key, "holdings summary")
    }

    async fn account_securities(&self, account_key: &str) -> SparkResult<Value> {
        Self::lookup(&self.securities, account_key, "securities")
    }
}

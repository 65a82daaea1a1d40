use crate::error::SparkResult;
use async_trait::async_trait;
use serde_json::Value;

/// Boundary to the broker's Spark system.
///
/// Implementations own everything this crate deliberately does not: HTTP
/// transport, authentication and token handling, retries and rate limits.
/// Each method resolves to the raw, already-deserialized JSON body of the
/// corresponding endpoint; the normalizers in [`crate::model`] take it
/// from there.
#[async_trait]
pub trait SparkGateway: Send + Sync {
    /// Raw body of `DataProvider/GetStaticData`; accounts live here
    async fn static_data(&self) -> SparkResult<Value>;

    /// Raw body of `Account/GetHoldings` for one account
    ///
    /// # Arguments
    /// * `account_key` - Account key (`ACC_<branch>-<number>`)
    async fn account_holdings(&self, account_key: &str) -> SparkResult<Value>;

    /// Raw body of the holdings-summary endpoint for one account
    async fn account_holdings_summary(&self, account_key: &str) -> SparkResult<Value>;

    /// Raw body of `Account/GetAccountSecurities` for one account
    async fn account_securities(&self, account_key: &str) -> SparkResult<Value>;
}

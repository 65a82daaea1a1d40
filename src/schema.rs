//! Raw schema map for the Spark API payloads.
//!
//! The upstream responses are minified and alias-keyed. Every alias this
//! client recognizes is listed in this one module, either as a key constant
//! used for traversal or as a `#[serde(rename)]` attribute on a raw record,
//! so an upstream key rename is a one-file change. Raw fields that are not
//! listed here are dropped when a record is decoded; the alias keys
//! themselves never survive into the typed entities.

use serde::Deserialize;
use serde_json::Value;

/// Top-level field holding the payload body in every Spark response
pub const RESPONSE_DATA_KEY: &str = "data";

/// Discriminator field on each static-data entry
pub const STATIC_ENTRY_TYPE_KEY: &str = "b";

/// Field on a static-data entry holding the entry's item list
pub const STATIC_ENTRY_ITEMS_KEY: &str = "a";

/// Traversal path to the total balance value in an account-securities payload
pub const ACCOUNT_BALANCE_PATH: [&str; 3] = ["data", "a", "o"];

/// One account record as it appears inside an `"ACC"` static-data entry
#[derive(Debug, Clone, Deserialize)]
pub struct RawAccount {
    /// Account key used by every account-scoped endpoint (`ACC_<branch>-<number>`)
    #[serde(rename = "_k", default)]
    pub key: Option<String>,
    /// Nested detail object carrying the human-facing account fields
    #[serde(rename = "a", default)]
    pub detail: Option<RawAccountDetail>,
}

/// Detail sub-object of a raw account record
///
/// The number field carries the same value as the suffix of the account
/// key, which is how the two fields are told apart.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAccountDetail {
    /// Name listed on the account
    #[serde(rename = "e", default)]
    pub name: Option<Value>,
    /// Account number (the `<number>` part of the key)
    #[serde(rename = "b", default)]
    pub number: Option<Value>,
}

/// One holding record from a holdings payload
///
/// Only the five tracked aliases are listed; everything else in the record
/// is dropped on decode. Every field is optional because the upstream
/// omits fields it has no value for.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHolding {
    /// Numeric fund identifier
    #[serde(rename = "c", default)]
    pub fund_number: Option<i64>,
    /// Fund display name
    #[serde(rename = "j", default)]
    pub fund_name: Option<String>,
    /// Quantity held
    #[serde(rename = "bd", default)]
    pub fund_amount: Option<f64>,
    /// Cash value of the position
    #[serde(rename = "be", default)]
    pub fund_worth: Option<f64>,
    /// Reported share of the portfolio, 0-100
    #[serde(rename = "bk", default)]
    pub fund_percent: Option<f64>,
}

/// The two aliased fields of a holdings-summary payload body
#[derive(Debug, Clone, Deserialize)]
pub struct RawHoldingsSummary {
    /// Current total worth of the account, cash included
    #[serde(rename = "b", default)]
    pub total_worth: Option<f64>,
    /// Cash component of the total worth
    #[serde(rename = "g", default)]
    pub cash_worth: Option<f64>,
}

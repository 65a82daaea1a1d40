use crate::error::{AppError, SparkResult};
use crate::schema::{self, RawHolding, RawHoldingsSummary};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A single account's position in one fund
///
/// Fields mirror what the holdings endpoint reports. A field the upstream
/// record omitted is `None` rather than a parse failure, so one sparse
/// record never poisons the whole list. The reported percentages of an
/// account's holdings need not sum to 100; cash is excluded from them in
/// some response modes.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Numeric fund identifier, unique within an account's holdings
    pub fund_number: Option<i64>,
    /// Fund display name
    pub fund_name: Option<String>,
    /// Quantity held
    pub fund_amount: Option<f64>,
    /// Cash value of the position
    pub fund_worth: Option<f64>,
    /// Reported share of the portfolio, 0-100
    pub fund_percent: Option<f64>,
}

impl From<RawHolding> for Holding {
    fn from(raw: RawHolding) -> Self {
        Holding {
            fund_number: raw.fund_number,
            fund_name: raw.fund_name,
            fund_amount: raw.fund_amount,
            fund_worth: raw.fund_worth,
            fund_percent: raw.fund_percent,
        }
    }
}

/// Account-level worth totals reported alongside holdings
///
/// Under normal data `total_worth >= cash_worth >= 0`.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsSummary {
    /// Total worth of the account, cash included
    pub total_worth: f64,
    /// Cash component of the total worth
    pub cash_worth: f64,
}

/// Normalizes a holdings payload into typed holdings.
///
/// Each record keeps exactly the five tracked aliases, renamed to their
/// typed field names; every other raw field is dropped. Records missing
/// some of the five fields parse with those fields absent.
///
/// # Arguments
/// * `raw` - Deserialized body of the holdings endpoint
///
/// # Returns
/// All holdings of the account, in payload order
pub fn parse_account_holdings(raw: &Value) -> SparkResult<Vec<Holding>> {
    let records = raw
        .get(schema::RESPONSE_DATA_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::schema_mismatch("holdings", schema::RESPONSE_DATA_KEY))?;

    let mut holdings = Vec::with_capacity(records.len());
    for record in records {
        let raw_holding: RawHolding = serde_json::from_value(record.clone())?;
        holdings.push(Holding::from(raw_holding));
    }

    debug!("Holdings normalized: {} holdings", holdings.len());
    Ok(holdings)
}

/// Normalizes a holdings-summary payload into the two worth figures.
///
/// Both fields are required. The summary feeds the balancer's denominator,
/// so an absent or non-numeric field is surfaced as schema drift here
/// instead of turning into NaN downstream.
pub fn parse_account_holdings_summary(raw: &Value) -> SparkResult<HoldingsSummary> {
    let body = raw
        .get(schema::RESPONSE_DATA_KEY)
        .ok_or_else(|| AppError::schema_mismatch("holdings summary", schema::RESPONSE_DATA_KEY))?;
    let raw_summary: RawHoldingsSummary = serde_json::from_value(body.clone())?;

    let total_worth = raw_summary
        .total_worth
        .ok_or_else(|| AppError::schema_mismatch("holdings summary", "data.b"))?;
    let cash_worth = raw_summary
        .cash_worth
        .ok_or_else(|| AppError::schema_mismatch("holdings summary", "data.g"))?;

    Ok(HoldingsSummary {
        total_worth,
        cash_worth,
    })
}

/// Extracts the total balance of an account from a securities payload.
pub fn parse_account_balance(raw: &Value) -> SparkResult<f64> {
    let mut cursor = raw;
    for key in schema::ACCOUNT_BALANCE_PATH {
        cursor = cursor.get(key).ok_or_else(|| {
            AppError::schema_mismatch("account securities", schema::ACCOUNT_BALANCE_PATH.join("."))
        })?;
    }
    cursor.as_f64().ok_or_else(|| {
        AppError::schema_mismatch("account securities", schema::ACCOUNT_BALANCE_PATH.join("."))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn holdings_payload() -> Value {
        json!({
            "data": [
                { "c": 5100, "j": "Government bonds", "bd": 120.0, "be": 400.0, "bk": 40.0, "zz": "noise" },
                { "c": 5200, "j": "Equity index", "bd": 10.5, "be": 300.0, "bk": 30.0 }
            ]
        })
    }

    #[test]
    fn parses_all_records() {
        let holdings = parse_account_holdings(&holdings_payload()).unwrap();
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0].fund_number, Some(5100));
        assert_eq!(holdings[0].fund_name.as_deref(), Some("Government bonds"));
        assert_eq!(holdings[1].fund_worth, Some(300.0));
    }

    #[test]
    fn unlisted_raw_fields_are_dropped() {
        let holdings = parse_account_holdings(&holdings_payload()).unwrap();
        let serialized = serde_json::to_value(&holdings[0]).unwrap();
        let keys: Vec<&str> = serialized.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["fundAmount", "fundName", "fundNumber", "fundPercent", "fundWorth"]
        );
    }

    #[test]
    fn sparse_record_parses_with_absent_fields() {
        let payload = json!({ "data": [ { "c": 5100 } ] });
        let holdings = parse_account_holdings(&payload).unwrap();
        assert_eq!(holdings[0].fund_number, Some(5100));
        assert_eq!(holdings[0].fund_name, None);
        assert_eq!(holdings[0].fund_worth, None);
    }

    #[test]
    fn missing_response_path_is_schema_mismatch() {
        let err = parse_account_holdings(&json!({})).unwrap_err();
        assert!(matches!(err, AppError::SchemaMismatch { payload: "holdings", .. }));
    }

    #[test]
    fn empty_holdings_list_is_not_an_error() {
        let holdings = parse_account_holdings(&json!({ "data": [] })).unwrap();
        assert!(holdings.is_empty());
    }

    #[test]
    fn summary_renames_both_fields() {
        let payload = json!({ "data": { "b": 1000.0, "g": 200.0, "x": 5 } });
        let summary = parse_account_holdings_summary(&payload).unwrap();
        assert_eq!(summary.total_worth, 1000.0);
        assert_eq!(summary.cash_worth, 200.0);
    }

    #[test]
    fn summary_missing_field_is_schema_mismatch() {
        let payload = json!({ "data": { "b": 1000.0 } });
        let err = parse_account_holdings_summary(&payload).unwrap_err();
        assert!(matches!(
            err,
            AppError::SchemaMismatch { payload: "holdings summary", .. }
        ));
    }

    #[test]
    fn balance_follows_nested_path() {
        let payload = json!({ "data": { "a": { "o": 1234.56 } } });
        assert_eq!(parse_account_balance(&payload).unwrap(), 1234.56);
    }

    #[test]
    fn balance_missing_path_is_schema_mismatch() {
        let err = parse_account_balance(&json!({ "data": {} })).unwrap_err();
        assert!(matches!(err, AppError::SchemaMismatch { .. }));
    }
}

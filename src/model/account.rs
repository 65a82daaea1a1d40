use crate::constants::{ACCOUNT_KEY_SEPARATOR, ACCOUNT_TYPE_TAG};
use crate::error::{AppError, SparkResult};
use crate::schema::{self, RawAccount};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// One brokerage account listed under a Spark user
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account key used by account-scoped API calls (`ACC_<branch>-<number>`)
    pub key: String,
    /// Name listed on the account
    pub name: String,
    /// Account number (the `<number>` part of the key)
    pub number: String,
}

impl Account {
    /// Builds an account from its raw record.
    ///
    /// The key is mandatory; name and number come from the detail
    /// sub-object, with the number falling back to the key suffix when the
    /// raw field is absent.
    fn from_raw(raw: RawAccount) -> SparkResult<Self> {
        let key = raw
            .key
            .ok_or_else(|| AppError::schema_mismatch("static data", "data[].a[]._k"))?;

        let detail = raw.detail;
        let name = detail
            .as_ref()
            .and_then(|d| d.name.as_ref())
            .and_then(scalar_to_string)
            .unwrap_or_default();
        let number = detail
            .as_ref()
            .and_then(|d| d.number.as_ref())
            .and_then(scalar_to_string)
            .or_else(|| account_key_to_number(&key).map(str::to_string))
            .unwrap_or_default();

        Ok(Account { key, name, number })
    }
}

/// Extracts the account number from an account key.
///
/// Keys have the shape `ACC_<branch>-<number>`; the number is everything
/// after the separator. Returns `None` for a key without a separator.
pub fn account_key_to_number(key: &str) -> Option<&str> {
    let mut parts = key.split(ACCOUNT_KEY_SEPARATOR);
    parts.next()?;
    parts.next()
}

/// Normalizes a static-data payload into the accounts listed under the user.
///
/// Entries under the response path are filtered to those whose
/// discriminator equals the account tag; every record under a matching
/// entry is mapped to a typed [`Account`]. A payload with no account
/// entries yields an empty vector. A payload missing the response path, an
/// entry discriminator, or a matching entry's item list yields
/// [`AppError::SchemaMismatch`].
///
/// # Arguments
/// * `raw` - Deserialized body of the static-data endpoint
///
/// # Returns
/// All accounts listed under this Spark user
pub fn parse_accounts(raw: &Value) -> SparkResult<Vec<Account>> {
    let entries = raw
        .get(schema::RESPONSE_DATA_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::schema_mismatch("static data", schema::RESPONSE_DATA_KEY))?;

    let mut accounts = Vec::new();
    for entry in entries {
        let tag = entry
            .get(schema::STATIC_ENTRY_TYPE_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::schema_mismatch("static data", "data[].b"))?;
        if tag != ACCOUNT_TYPE_TAG {
            continue;
        }

        let items = entry
            .get(schema::STATIC_ENTRY_ITEMS_KEY)
            .and_then(Value::as_array)
            .ok_or_else(|| AppError::schema_mismatch("static data", "data[].a"))?;
        for item in items {
            let raw_account: RawAccount = serde_json::from_value(item.clone())?;
            accounts.push(Account::from_raw(raw_account)?);
        }
    }

    debug!("Static data normalized: {} accounts", accounts.len());
    Ok(accounts)
}

/// Coerces a scalar JSON value into its string form.
///
/// Objects, arrays, booleans and null have no account-field string form
/// and yield `None`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

//! # Spark Client
//!
//! Typed client core for the Spark (ordernet) brokerage account-data API.
//!
//! The upstream API answers with terse, alias-keyed JSON that was never
//! meant for external consumption. This crate is the translation boundary:
//! it normalizes those payloads into a stable domain model (accounts,
//! holdings, holdings summary) and computes the cash adjustments that move
//! a portfolio's fund allocation to a target allocation.
//!
//! Transport, authentication and retry policy live behind the
//! [`application::gateway::SparkGateway`] trait and are deliberately not
//! part of this crate; every parsing and balancing function is a pure,
//! synchronous function of its arguments.
//!
//! ## Quick start
//!
//! ```rust
//! use spark_client::balance::{BalanceStrategy, DesiredAllocationEntry, balance_portfolio};
//! use spark_client::model::{Holding, HoldingsSummary};
//!
//! let holdings = vec![Holding {
//!     fund_number: Some(5100),
//!     fund_name: Some("Government bonds".to_string()),
//!     fund_amount: Some(120.0),
//!     fund_worth: Some(400.0),
//!     fund_percent: Some(40.0),
//! }];
//! let summary = HoldingsSummary {
//!     total_worth: 1000.0,
//!     cash_worth: 200.0,
//! };
//! let desired = vec![DesiredAllocationEntry {
//!     fund_number: 5100,
//!     percent: 60.0,
//! }];
//!
//! let result = balance_portfolio(&holdings, &summary, &desired, &BalanceStrategy::default());
//! assert_eq!(result[0].as_ref().unwrap().amount_to_balance, "80.00");
//! ```

/// Module containing the account service and the broker gateway boundary
pub mod application;
/// Module containing the portfolio balancer
pub mod balance;
/// Module containing gateway configuration
pub mod config;
/// Module containing global constants
pub mod constants;
/// Module containing the error types of the library
pub mod error;
/// Module containing the typed domain entities and their normalizers
pub mod model;
/// Module providing convenient imports of the most used types
pub mod prelude;
/// Module containing display types for balancing results
pub mod presentation;
/// Module containing the raw schema map of the upstream payloads
pub mod schema;
/// Module containing shared utilities
pub mod utils;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the crate
///
/// # Returns
/// The version string as declared in `Cargo.toml`
pub fn version() -> &'static str {
    VERSION
}

//! # Spark Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and functions of the library.
//!
//! ## Usage
//!
//! ```rust
//! use spark_client::prelude::*;
//!
//! let holdings: Vec<Holding> = Vec::new();
//! assert!(find_fund(5100, &holdings).is_none());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for a Spark gateway implementation
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, SparkResult};

// ============================================================================
// DOMAIN ENTITIES AND NORMALIZERS
// ============================================================================

/// Typed entities produced by the normalizers
pub use crate::model::{Account, Holding, HoldingsSummary};

/// Normalization entry points for the raw payloads
pub use crate::model::{
    account_key_to_number, parse_account_balance, parse_account_holdings,
    parse_account_holdings_summary, parse_accounts,
};

// ============================================================================
// PORTFOLIO BALANCER
// ============================================================================

/// Balancing strategies, inputs and results
pub use crate::balance::{
    BalanceStrategy, BalancedHolding, DesiredAllocationEntry, balance_portfolio, find_fund,
};

// ============================================================================
// GATEWAY BOUNDARY AND SERVICES
// ============================================================================

/// Broker gateway contract
pub use crate::application::gateway::SparkGateway;

/// Account service over a gateway
pub use crate::application::account_service::AccountService;

/// In-memory gateway for tests and offline runs
pub use crate::application::mock::MockGateway;

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Renderable balancing report
pub use crate::presentation::BalanceReport;

// ============================================================================
// UTILITIES
// ============================================================================

/// Financial calculation utilities
pub use crate::utils::finance::{format_cash_amount, round_to_cents, total_fund_percent};

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

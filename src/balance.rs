//! Portfolio balancer.
//!
//! Computes, for every entry of a desired allocation, the signed cash
//! amount that moves the fund's share of the portfolio to its target
//! percentage. Every function here is a pure function of its arguments:
//! no shared state, no I/O, safe to call concurrently.

use crate::model::{Holding, HoldingsSummary};
use crate::utils::finance::{format_cash_amount, total_fund_percent};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which figure the current allocation is computed from.
///
/// The two bases answer the same question from different inputs. Callers
/// pick one explicitly; nothing is inferred from which options happen to
/// be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BalanceStrategy {
    /// Current allocation from each holding's cash worth against the
    /// portfolio worth.
    WorthBasis {
        /// New cash entering the rebalance, added to the portfolio worth
        addition_to_portfolio: f64,
        /// Whether cash already in the account counts toward the portfolio worth
        use_cash_in_account: bool,
    },
    /// Current allocation from each holding's reported percentage,
    /// renormalized against the sum of all reported percentages. Cash is
    /// always excluded from the portfolio worth.
    PercentBasis,
}

impl Default for BalanceStrategy {
    fn default() -> Self {
        BalanceStrategy::WorthBasis {
            addition_to_portfolio: 0.0,
            use_cash_in_account: false,
        }
    }
}

/// One target of a desired allocation
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesiredAllocationEntry {
    /// Fund the target applies to; must match a current holding to take effect
    pub fund_number: i64,
    /// Target share of the balanced portfolio, 0-100
    pub percent: f64,
}

/// A holding together with the cash delta that balances it
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancedHolding {
    /// The matched holding's fields
    #[serde(flatten)]
    pub holding: Holding,
    /// Signed cash amount to move, fixed-point with two decimals.
    /// Positive adds cash to the fund, negative withdraws.
    pub amount_to_balance: String,
}

/// Locates a holding by fund number, using exact numeric equality.
///
/// `None` is the expected answer for a fund the account does not hold;
/// the balancer skips such targets instead of failing.
pub fn find_fund(fund_number: i64, holdings: &[Holding]) -> Option<&Holding> {
    holdings.iter().find(|h| h.fund_number == Some(fund_number))
}

/// Computes the cash delta for every entry of a desired allocation.
///
/// The output has one slot per desired entry, in input order: `Some` with
/// the matched holding and its amount, or `None` when the account holds no
/// such fund. The output length always equals the input length.
///
/// All arithmetic is `f64`; rounding happens once, at the final amount. A
/// zero portfolio worth (worth basis) or zero percent sum (percent basis)
/// makes the current proportion undefined; it is coerced to 0 so the
/// result is always a finite number.
pub fn balance_portfolio(
    holdings: &[Holding],
    summary: &HoldingsSummary,
    desired: &[DesiredAllocationEntry],
    strategy: &BalanceStrategy,
) -> Vec<Option<BalancedHolding>> {
    let portfolio_worth = match strategy {
        BalanceStrategy::WorthBasis {
            addition_to_portfolio,
            use_cash_in_account,
        } => {
            let excluded_cash = if *use_cash_in_account {
                0.0
            } else {
                summary.cash_worth
            };
            summary.total_worth + addition_to_portfolio - excluded_cash
        }
        BalanceStrategy::PercentBasis => summary.total_worth - summary.cash_worth,
    };
    let percent_sum = total_fund_percent(holdings);

    desired
        .iter()
        .map(|entry| {
            let holding = match find_fund(entry.fund_number, holdings) {
                Some(holding) => holding,
                None => {
                    debug!("Fund {} not held, skipping", entry.fund_number);
                    return None;
                }
            };

            let current_percent = match strategy {
                BalanceStrategy::WorthBasis { .. } => {
                    if portfolio_worth == 0.0 {
                        0.0
                    } else {
                        holding.fund_worth.unwrap_or_default() / portfolio_worth * 100.0
                    }
                }
                BalanceStrategy::PercentBasis => {
                    if percent_sum == 0.0 {
                        0.0
                    } else {
                        holding.fund_percent.unwrap_or_default() / percent_sum * 100.0
                    }
                }
            };
            let percent_to_balance = entry.percent - current_percent;
            let amount = percent_to_balance / 100.0 * portfolio_worth;
            debug!(
                "Fund {}: current {:.4}%, to balance {:.4}%",
                entry.fund_number, current_percent, percent_to_balance
            );

            Some(BalancedHolding {
                holding: holding.clone(),
                amount_to_balance: format_cash_amount(amount),
            })
        })
        .collect()
}

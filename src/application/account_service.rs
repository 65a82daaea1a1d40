use crate::application::gateway::SparkGateway;
use crate::balance::{BalanceStrategy, BalancedHolding, DesiredAllocationEntry, balance_portfolio};
use crate::error::SparkResult;
use crate::model::{
    Account, Holding, HoldingsSummary, parse_account_balance, parse_account_holdings,
    parse_account_holdings_summary, parse_accounts,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Account operations over a [`SparkGateway`].
///
/// Mirrors the upstream endpoints one-to-one: fetch the raw payload
/// through the gateway, normalize it, hand back typed values.
pub struct AccountService<G: SparkGateway> {
    gateway: Arc<G>,
}

impl<G: SparkGateway> AccountService<G> {
    /// Creates a new service over the given gateway
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Gets all the accounts listed under this Spark user
    pub async fn get_accounts(&self) -> SparkResult<Vec<Account>> {
        info!("Getting accounts");

        let payload = self.gateway.static_data().await?;
        let accounts = parse_accounts(&payload)?;

        debug!("Accounts obtained: {} accounts", accounts.len());
        Ok(accounts)
    }

    /// Gets all holdings of an account
    ///
    /// # Arguments
    /// * `account` - Account to get holdings for
    pub async fn get_account_holdings(&self, account: &Account) -> SparkResult<Vec<Holding>> {
        info!("Getting holdings for account {}", account.number);

        let payload = self.gateway.account_holdings(&account.key).await?;
        let holdings = parse_account_holdings(&payload)?;

        debug!("Holdings obtained: {} holdings", holdings.len());
        Ok(holdings)
    }

    /// Gets the worth summary of an account
    pub async fn get_account_holdings_summary(
        &self,
        account: &Account,
    ) -> SparkResult<HoldingsSummary> {
        info!("Getting holdings summary for account {}", account.number);

        let payload = self.gateway.account_holdings_summary(&account.key).await?;
        parse_account_holdings_summary(&payload)
    }

    /// Gets the total balance of an account
    pub async fn get_account_balance(&self, account: &Account) -> SparkResult<f64> {
        info!("Getting balance for account {}", account.number);

        let payload = self.gateway.account_securities(&account.key).await?;
        parse_account_balance(&payload)
    }

    /// Computes the balancing amounts that move an account's holdings to
    /// the desired allocation.
    ///
    /// Fetches holdings and summary, then runs the balancer: one output
    /// slot per desired entry, in input order, with `None` for funds the
    /// account does not hold.
    pub async fn balance_account(
        &self,
        account: &Account,
        desired: &[DesiredAllocationEntry],
        strategy: &BalanceStrategy,
    ) -> SparkResult<Vec<Option<BalancedHolding>>> {
        info!("Balancing account {}", account.number);

        let holdings = self.get_account_holdings(account).await?;
        let summary = self.get_account_holdings_summary(account).await?;

        let results = balance_portfolio(&holdings, &summary, desired, strategy);
        debug!(
            "Balancing computed: {} of {} targets matched",
            results.iter().filter(|r| r.is_some()).count(),
            results.len()
        );
        Ok(results)
    }
}

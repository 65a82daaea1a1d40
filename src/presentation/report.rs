use crate::balance::BalancedHolding;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Renderable result of a balancing run.
///
/// One row per desired-allocation entry, in input order; entries that
/// matched no current holding render as a skipped row rather than
/// disappearing from the table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Balancer output, one slot per desired entry
    pub entries: Vec<Option<BalancedHolding>>,
}

impl BalanceReport {
    /// Wraps a balancer output for display
    pub fn new(entries: Vec<Option<BalancedHolding>>) -> Self {
        Self { entries }
    }

    /// Returns the number of entries that matched a current holding
    ///
    /// # Returns
    /// Count of non-skipped entries
    #[must_use]
    pub fn matched(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Returns true if no entry matched a current holding
    ///
    /// # Returns
    /// True if every entry was skipped or the report is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matched() == 0
    }

    /// Returns an iterator over the entries
    ///
    /// # Returns
    /// Iterator over the balancer output slots
    pub fn iter(&self) -> impl Iterator<Item = &Option<BalancedHolding>> {
        self.entries.iter()
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();

        // Set table format
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        // Add header
        table.add_row(Row::new(vec![
            Cell::new("FUND"),
            Cell::new("NAME"),
            Cell::new("WORTH"),
            Cell::new("PERCENT"),
            Cell::new("AMOUNT TO BALANCE"),
        ]));

        for entry in &self.entries {
            match entry {
                Some(balanced) => {
                    let fund = balanced
                        .holding
                        .fund_number
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    let name = balanced
                        .holding
                        .fund_name
                        .clone()
                        .unwrap_or_else(|| "-".to_string());
                    let worth = balanced
                        .holding
                        .fund_worth
                        .map(|w| format!("{:.2}", w))
                        .unwrap_or_else(|| "-".to_string());
                    let percent = balanced
                        .holding
                        .fund_percent
                        .map(|p| format!("{:.2}", p))
                        .unwrap_or_else(|| "-".to_string());

                    table.add_row(Row::new(vec![
                        Cell::new(&fund),
                        Cell::new(&name),
                        Cell::new(&worth),
                        Cell::new(&percent),
                        Cell::new(&balanced.amount_to_balance),
                    ]));
                }
                None => {
                    table.add_row(Row::new(vec![
                        Cell::new("-"),
                        Cell::new("(not held)"),
                        Cell::new("-"),
                        Cell::new("-"),
                        Cell::new("-"),
                    ]));
                }
            }
        }

        write!(f, "{}", table)
    }
}

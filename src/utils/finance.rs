//! Financial calculation helpers shared by the balancer.

use crate::constants::AMOUNT_DECIMALS;
use crate::model::Holding;

/// Sums the reported percentages across a list of holdings.
///
/// Holdings without a reported percentage count as zero; the percent-basis
/// balancer renormalizes against this sum.
pub fn total_fund_percent(holdings: &[Holding]) -> f64 {
    holdings.iter().filter_map(|h| h.fund_percent).sum()
}

/// Rounds a cash amount to the balancing precision, half away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    let scale = 10f64.powi(AMOUNT_DECIMALS as i32);
    let rounded = (value * scale).round() / scale;
    // collapse negative zero so a vanishing delta prints as "0.00"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Formats a cash amount as a signed fixed-point string with two decimals.
///
/// # Arguments
/// * `value` - The unrounded amount
///
/// # Returns
/// The amount rounded once, at this final step, e.g. `"-80.00"`
pub fn format_cash_amount(value: f64) -> String {
    format!("{:.2}", round_to_cents(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding_with_percent(percent: Option<f64>) -> Holding {
        Holding {
            fund_number: Some(1),
            fund_name: None,
            fund_amount: None,
            fund_worth: None,
            fund_percent: percent,
        }
    }

    #[test]
    fn sums_reported_percentages() {
        let holdings = [
            holding_with_percent(Some(40.0)),
            holding_with_percent(Some(30.5)),
        ];
        assert_eq!(total_fund_percent(&holdings), 70.5);
    }

    #[test]
    fn absent_percentages_count_as_zero() {
        let holdings = [holding_with_percent(None), holding_with_percent(Some(25.0))];
        assert_eq!(total_fund_percent(&holdings), 25.0);
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_cash_amount(80.0), "80.00");
        assert_eq!(format_cash_amount(-80.0), "-80.00");
        assert_eq!(format_cash_amount(12.345), "12.35");
    }

    #[test]
    fn vanishing_negative_delta_prints_as_plain_zero() {
        assert_eq!(format_cash_amount(-0.0001), "0.00");
        assert_eq!(format_cash_amount(0.0), "0.00");
    }
}

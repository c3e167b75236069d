//! Net Worth Report
//!
//! Totals current balances across capitals and shows how the total is
//! distributed, with low-funds flags per capital.

use crate::models::{Capital, Money};

use super::spending::percentage_of;

/// One capital's position in the net worth total
#[derive(Debug, Clone, PartialEq)]
pub struct CapitalPosition {
    pub capital: Capital,
    /// Share of net worth (0-100); zero when net worth is zero
    pub share: f64,
    /// Remaining balance as whole percent of initial balance
    pub percent_remaining: Option<i64>,
    /// Less than 20% of the initial balance remains
    pub low_funds: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetWorthReport {
    /// Capitals in display order
    pub positions: Vec<CapitalPosition>,
    /// Sum of current balances
    pub net_worth: Money,
    /// Sum of initial balances
    pub total_initial: Money,
}

impl NetWorthReport {
    pub fn generate(capitals: &[Capital]) -> Self {
        let net_worth = total_net_worth(capitals);
        let total_initial = capitals
            .iter()
            .fold(Money::zero(), |acc, c| acc.saturating_add(c.initial_balance));

        let positions = capitals
            .iter()
            .map(|capital| CapitalPosition {
                share: percentage_of(capital.current_balance, net_worth),
                percent_remaining: capital.percent_remaining(),
                low_funds: capital.is_low_funds(),
                capital: capital.clone(),
            })
            .collect();

        Self {
            positions,
            net_worth,
            total_initial,
        }
    }

    /// Capitals flagged as low on funds
    pub fn low_funds(&self) -> impl Iterator<Item = &CapitalPosition> {
        self.positions.iter().filter(|p| p.low_funds)
    }
}

/// Sum of current balances over all capitals
pub fn total_net_worth(capitals: &[Capital]) -> Money {
    capitals
        .iter()
        .fold(Money::zero(), |acc, c| acc.saturating_add(c.current_balance))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital(name: &str, initial: i64, current: i64) -> Capital {
        let mut capital = Capital::new(name, Money::from_units(initial), "#000");
        capital.current_balance = Money::from_units(current);
        capital
    }

    #[test]
    fn test_net_worth_and_shares() {
        let capitals = vec![capital("Cash", 1000, 150), capital("Bank", 5000, 4850)];
        let report = NetWorthReport::generate(&capitals);

        assert_eq!(report.net_worth, Money::from_units(5000));
        assert_eq!(report.total_initial, Money::from_units(6000));
        assert!((report.positions[0].share - 3.0).abs() < 1e-9);
        assert!((report.positions[1].share - 97.0).abs() < 1e-9);
    }

    #[test]
    fn test_low_funds_flags() {
        let capitals = vec![capital("Low", 1000, 150), capital("Fine", 1000, 250)];
        let report = NetWorthReport::generate(&capitals);

        assert!(report.positions[0].low_funds);
        assert!(!report.positions[1].low_funds);
        let low: Vec<_> = report.low_funds().map(|p| p.capital.name.as_str()).collect();
        assert_eq!(low, vec!["Low"]);
        assert_eq!(report.positions[0].percent_remaining, Some(15));
    }

    #[test]
    fn test_empty_capitals() {
        let report = NetWorthReport::generate(&[]);
        assert_eq!(report.net_worth, Money::zero());
        assert!(report.positions.is_empty());
    }
}

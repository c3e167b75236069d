//! Capital model
//!
//! A capital is a named pool of money (cash, a bank account, ...) with a
//! fixed initial balance. Its current balance is derived from the expenses
//! drawn against it and is only ever written by the balance deriver.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CapitalId;
use super::money::Money;

/// Default display color for new capitals
pub const DEFAULT_CAPITAL_COLOR: &str = "#6366f1";

const MAX_NAME_LEN: usize = 100;

/// A named source of money
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capital {
    /// Unique identifier
    pub id: CapitalId,

    /// Display label (e.g., "Cash")
    pub name: String,

    /// Balance at creation time; never changes afterwards
    pub initial_balance: Money,

    /// Initial balance minus every expense drawn against this capital
    pub current_balance: Money,

    /// Display-only color (e.g., "#10b981")
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_CAPITAL_COLOR.to_string()
}

impl Capital {
    /// Create a new capital whose current balance equals its initial balance
    pub fn new(name: impl Into<String>, initial_balance: Money, color: impl Into<String>) -> Self {
        Self {
            id: CapitalId::new(),
            name: name.into(),
            initial_balance,
            current_balance: initial_balance,
            color: color.into(),
        }
    }

    /// Money drawn from this capital so far
    pub fn spent(&self) -> Money {
        self.initial_balance.saturating_sub(self.current_balance)
    }

    /// Whether less than 20% of the initial balance remains
    pub fn is_low_funds(&self) -> bool {
        // current < initial * 0.2, kept in integer cents
        (self.current_balance.cents() as i128) * 10 < (self.initial_balance.cents() as i128) * 2
    }

    /// Remaining balance as a whole percentage of the initial balance
    ///
    /// Returns `None` for a zero initial balance.
    pub fn percent_remaining(&self) -> Option<i64> {
        let initial = self.initial_balance.cents() as i128;
        if initial == 0 {
            return None;
        }
        let (num, den) = if initial < 0 {
            (-(self.current_balance.cents() as i128) * 100, -initial)
        } else {
            ((self.current_balance.cents() as i128) * 100, initial)
        };
        // Round half away from zero
        let rounded = if num >= 0 {
            (2 * num + den) / (2 * den)
        } else {
            -((-2 * num + den) / (2 * den))
        };
        Some(rounded as i64)
    }

    /// Validate the capital
    pub fn validate(&self) -> Result<(), CapitalValidationError> {
        if self.name.trim().is_empty() {
            return Err(CapitalValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(CapitalValidationError::NameTooLong(len));
        }

        if !self.initial_balance.is_in_range() {
            return Err(CapitalValidationError::BalanceOutOfRange(self.initial_balance));
        }

        Ok(())
    }
}

impl fmt::Display for Capital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.current_balance)
    }
}

/// Validation errors for capitals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapitalValidationError {
    EmptyName,
    NameTooLong(usize),
    BalanceOutOfRange(Money),
}

impl fmt::Display for CapitalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Capital name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Capital name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::BalanceOutOfRange(balance) => {
                write!(f, "Initial balance {} exceeds {}", balance, Money::MAX)
            }
        }
    }
}

impl std::error::Error for CapitalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_with(initial: i64, current: i64) -> Capital {
        let mut capital = Capital::new("Test", Money::from_units(initial), DEFAULT_CAPITAL_COLOR);
        capital.current_balance = Money::from_units(current);
        capital
    }

    #[test]
    fn test_new_capital() {
        let capital = Capital::new("Cash", Money::from_units(1000), "#10b981");
        assert_eq!(capital.name, "Cash");
        assert_eq!(capital.current_balance, Money::from_units(1000));
        assert_eq!(capital.spent(), Money::zero());
    }

    #[test]
    fn test_low_funds_threshold() {
        assert!(capital_with(1000, 150).is_low_funds());
        assert!(!capital_with(1000, 250).is_low_funds());
        assert!(!capital_with(1000, 200).is_low_funds());
        assert!(capital_with(1000, -5).is_low_funds());
        assert!(!capital_with(0, 0).is_low_funds());
    }

    #[test]
    fn test_percent_remaining() {
        assert_eq!(capital_with(1000, 150).percent_remaining(), Some(15));
        assert_eq!(capital_with(1000, 1000).percent_remaining(), Some(100));
        assert_eq!(capital_with(3, 2).percent_remaining(), Some(67));
        assert_eq!(capital_with(3, 1).percent_remaining(), Some(33));
        assert_eq!(capital_with(1000, -100).percent_remaining(), Some(-10));
        assert_eq!(capital_with(0, 0).percent_remaining(), None);
    }

    #[test]
    fn test_validation() {
        let mut capital = Capital::new("Valid", Money::zero(), DEFAULT_CAPITAL_COLOR);
        assert!(capital.validate().is_ok());

        capital.name = "   ".into();
        assert_eq!(capital.validate(), Err(CapitalValidationError::EmptyName));

        capital.name = "a".repeat(101);
        assert!(matches!(
            capital.validate(),
            Err(CapitalValidationError::NameTooLong(101))
        ));

        capital.name = "Huge".into();
        capital.initial_balance = -Money::MAX - Money::from_cents(1);
        assert!(matches!(
            capital.validate(),
            Err(CapitalValidationError::BalanceOutOfRange(_))
        ));
    }

    #[test]
    fn test_serializes_camel_case() {
        let capital = Capital::new("Cash", Money::from_units(1000), "#10b981");
        let json = serde_json::to_value(&capital).unwrap();
        assert_eq!(json["initialBalance"], 100_000);
        assert_eq!(json["currentBalance"], 100_000);

        let back: Capital = serde_json::from_value(json).unwrap();
        assert_eq!(back, capital);
    }
}

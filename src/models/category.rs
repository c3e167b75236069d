//! Expense categories
//!
//! A fixed set of spending labels. Categories serialize as their display
//! label so stored snapshots stay human-readable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Health")]
    Health,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Self::FoodAndDining,
        Self::Transportation,
        Self::Shopping,
        Self::BillsAndUtilities,
        Self::Entertainment,
        Self::Health,
        Self::Other,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }

    /// Parse a category from its label or a short alias (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if let Some(category) = Self::ALL.iter().find(|c| c.label().to_lowercase() == s) {
            return Some(*category);
        }

        match s.as_str() {
            "food" | "dining" | "food_and_dining" => Some(Self::FoodAndDining),
            "transport" | "travel" => Some(Self::Transportation),
            "shop" => Some(Self::Shopping),
            "bills" | "utilities" | "bills_and_utilities" => Some(Self::BillsAndUtilities),
            "fun" => Some(Self::Entertainment),
            "medical" => Some(Self::Health),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            let valid: Vec<_> = Self::ALL.iter().map(|c| c.label()).collect();
            format!("Invalid category: '{}'. Valid categories: {}", s, valid.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels_and_aliases() {
        assert_eq!(Category::parse("Food & Dining"), Some(Category::FoodAndDining));
        assert_eq!(Category::parse("bills & utilities"), Some(Category::BillsAndUtilities));
        assert_eq!(Category::parse("food"), Some(Category::FoodAndDining));
        assert_eq!(Category::parse("TRANSPORT"), Some(Category::Transportation));
        assert_eq!(Category::parse("health"), Some(Category::Health));
        assert_eq!(Category::parse("groceries"), None);
    }

    #[test]
    fn test_every_label_parses_back() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.label()), Some(category));
        }
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::BillsAndUtilities).unwrap();
        assert_eq!(json, "\"Bills & Utilities\"");
        let parsed: Category = serde_json::from_str("\"Food & Dining\"").unwrap();
        assert_eq!(parsed, Category::FoodAndDining);
    }

    #[test]
    fn test_from_str_error_lists_categories() {
        let err = "rent".parse::<Category>().unwrap_err();
        assert!(err.contains("Entertainment"));
    }
}

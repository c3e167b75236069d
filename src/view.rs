//! Top-level views
//!
//! The application shows exactly one view at a time. `View` names them and
//! `render` turns the current ledger into that view's text.

use std::fmt;

use clap::ValueEnum;

use crate::config::Settings;
use crate::display::{format_capital_list, format_dashboard, format_expense_list};
use crate::display::report::{format_header, format_spending_report};
use crate::ledger::AppState;
use crate::reports::{DashboardReport, NetWorthReport, SpendingReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum View {
    #[default]
    Dashboard,
    Expenses,
    Capitals,
    Settings,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Expenses => "expenses",
            Self::Capitals => "capitals",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render one view of the ledger
pub fn render(view: View, state: &AppState, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match view {
        View::Dashboard => {
            let report = DashboardReport::generate(state, settings.recent_count);
            format_dashboard(&report, state.capitals(), symbol, date_format)
        }
        View::Expenses => {
            let mut output = format_header("Expenses");
            let all: Vec<_> = state.expenses().iter().collect();
            output.push_str(&format_expense_list(&all, state.capitals(), symbol, date_format));
            output.push('\n');
            output.push_str(&format_header("Spending by Category"));
            output.push_str(&format_spending_report(
                &SpendingReport::generate(state.expenses()),
                symbol,
            ));
            output
        }
        View::Capitals => {
            let mut output = format_header("Capitals");
            output.push_str(&format_capital_list(
                &NetWorthReport::generate(state.capitals()),
                symbol,
            ));
            output
        }
        View::Settings => {
            let mut output = format_header("Settings");
            output.push_str(&format!("  Theme:           {}\n", state.theme()));
            output.push_str(&format!("  Currency symbol: {}\n", settings.currency_symbol));
            output.push_str(&format!("  Date format:     {}\n", settings.date_format));
            output.push_str(&format!("  Recent expenses: {}\n", settings.recent_count));
            output
        }
    }
}

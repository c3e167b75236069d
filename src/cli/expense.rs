//! Expense CLI commands
//!
//! Implements CLI commands for logging, listing and deleting expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_list};
use crate::error::CapTrackResult;
use crate::ledger::ExpenseFilter;
use crate::models::Category;
use crate::services::Tracker;
use crate::storage::KeyValueStore;

use super::{parse_category, parse_date_arg, parse_money};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Log a new expense against a capital
    Add {
        /// Capital ID (cap-...) or name; IDs are matched first
        capital: String,
        /// Amount spent (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (food, transport, shopping, bills, entertainment, health, other)
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Note
        #[arg(short, long, default_value = "")]
        note: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses, newest first
    List {
        /// Match against note or category
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by capital ID or name
        #[arg(short, long)]
        capital: Option<String>,
        /// Filter by category
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> CapTrackResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        ExpenseCommands::Add {
            capital,
            amount,
            category,
            note,
            date,
        } => {
            let amount = parse_money(&amount, "amount")?;
            let category = match category {
                Some(c) => parse_category(&c)?,
                None => Category::default(),
            };
            let date = match date {
                Some(d) => parse_date_arg(&d)?,
                None => chrono::Local::now().date_naive(),
            };
            let capital = tracker.find_capital(&capital)?;
            let (capital_id, capital_name) = (capital.id, capital.name.clone());

            let expense = tracker.add_expense(capital_id, amount, category, &note, date)?;

            println!(
                "Added expense: {} {}",
                expense.amount.format_with_symbol(symbol),
                expense.description()
            );
            println!("  Capital: {}", capital_name);
            if let Some(capital) = tracker.state().capital_store().get(capital_id) {
                println!(
                    "  Remaining: {}",
                    capital.current_balance.format_with_symbol(symbol)
                );
                if capital.is_low_funds() {
                    println!("  Warning: {} is low on funds", capital.name);
                }
            }
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List {
            search,
            capital,
            category,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(search) = search {
                filter = filter.with_search(search);
            }
            if let Some(capital) = capital {
                filter = filter.with_capital(tracker.find_capital(&capital)?.id);
            }
            if let Some(category) = category {
                filter = filter.with_category(parse_category(&category)?);
            }

            let mut expenses = tracker.filter_expenses(&filter);
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }
            print!(
                "{}",
                format_expense_list(&expenses, tracker.capitals(), symbol, date_format)
            );
        }

        ExpenseCommands::Show { id } => {
            let expense = tracker.find_expense(&id)?;
            print!(
                "{}",
                format_expense_details(expense, tracker.capitals(), symbol, date_format)
            );
        }

        ExpenseCommands::Delete { id } => {
            let expense = tracker.find_expense(&id)?;
            let (expense_id, amount) = (expense.id, expense.amount);

            tracker.delete_expense(expense_id)?;
            println!(
                "Deleted expense {} ({})",
                expense_id,
                amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::MemoryStore;

    fn add(capital: &str, amount: &str, date: Option<&str>) -> ExpenseCommands {
        ExpenseCommands::Add {
            capital: capital.into(),
            amount: amount.into(),
            category: Some("food".into()),
            note: "Lunch".into(),
            date: date.map(String::from),
        }
    }

    #[test]
    fn test_add_expense_updates_balance() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        handle_expense_command(&mut tracker, &Settings::default(), add("Cash", "50", Some("2024-01-15")))
            .unwrap();

        let cash = tracker.find_capital("Cash").unwrap();
        assert_eq!(cash.current_balance, Money::from_units(950));
        assert_eq!(tracker.expenses()[0].category, Category::FoodAndDining);
    }

    #[test]
    fn test_rejected_inputs_leave_state_unchanged() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        let settings = Settings::default();
        let before = tracker.state().clone();

        for cmd in [
            add("Cash", "-10", Some("2024-01-15")),
            add("Cash", "0", Some("2024-01-15")),
            add("Cash", "abc", Some("2024-01-15")),
            add("Cash", "90000000000000000", Some("2024-01-15")),
            add("Cash", "10", Some("2024-02-30")),
        ] {
            let err = handle_expense_command(&mut tracker, &settings, cmd).unwrap_err();
            assert!(err.is_validation(), "unexpected error: {}", err);
        }
        let err = handle_expense_command(&mut tracker, &settings, add("Crypto", "10", None)).unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(tracker.state(), &before);
    }

    #[test]
    fn test_delete_expense_by_short_id() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        let settings = Settings::default();
        handle_expense_command(&mut tracker, &settings, add("Bank Account", "100", None)).unwrap();
        let short_id = tracker.expenses()[0].id.to_string();

        handle_expense_command(&mut tracker, &settings, ExpenseCommands::Delete { id: short_id }).unwrap();
        assert!(tracker.expenses().is_empty());
        assert_eq!(
            tracker.find_capital("Bank Account").unwrap().current_balance,
            Money::from_units(5000)
        );
    }
}

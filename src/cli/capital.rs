//! Capital CLI commands
//!
//! Implements CLI commands for capital management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::capital::{format_capital_details, format_capital_list};
use crate::error::CapTrackResult;
use crate::models::DEFAULT_CAPITAL_COLOR;
use crate::reports::NetWorthReport;
use crate::services::Tracker;
use crate::storage::KeyValueStore;

use super::parse_money;

/// Capital subcommands
#[derive(Subcommand)]
pub enum CapitalCommands {
    /// Add a new capital
    Add {
        /// Capital name
        name: String,
        /// Initial balance (e.g., "1000.00" or "1000")
        #[arg(allow_hyphen_values = true)]
        balance: String,
        /// Display color
        #[arg(short, long, default_value = DEFAULT_CAPITAL_COLOR)]
        color: String,
    },
    /// List all capitals with balances
    List,
    /// Show capital details
    Show {
        /// Capital ID (cap-...) or name; IDs are matched first
        capital: String,
    },
    /// Delete a capital and all of its expenses
    Delete {
        /// Capital ID (cap-...) or name; IDs are matched first
        capital: String,
    },
}

/// Handle a capital command
pub fn handle_capital_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    cmd: CapitalCommands,
) -> CapTrackResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CapitalCommands::Add {
            name,
            balance,
            color,
        } => {
            let initial_balance = parse_money(&balance, "balance")?;
            let capital = tracker.add_capital(&name, initial_balance, &color)?;

            println!("Added capital: {}", capital.name);
            println!(
                "  Balance: {}",
                capital.initial_balance.format_with_symbol(symbol)
            );
            println!("  ID: {}", capital.id);
        }

        CapitalCommands::List => {
            let report = NetWorthReport::generate(tracker.capitals());
            print!("{}", format_capital_list(&report, symbol));
        }

        CapitalCommands::Show { capital } => {
            let found = tracker.find_capital(&capital)?;
            print!("{}", format_capital_details(found, symbol));
        }

        CapitalCommands::Delete { capital } => {
            let found = tracker.find_capital(&capital)?;
            let (id, name) = (found.id, found.name.clone());

            let outcome = tracker.delete_capital(id)?;
            println!("Deleted capital: {}", name);
            if outcome.expenses_removed > 0 {
                println!(
                    "  Also removed {} expense(s) drawn on it",
                    outcome.expenses_removed
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_add_and_delete_capital() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        let settings = Settings::default();

        handle_capital_command(
            &mut tracker,
            &settings,
            CapitalCommands::Add {
                name: "Savings".into(),
                balance: "2500.50".into(),
                color: DEFAULT_CAPITAL_COLOR.into(),
            },
        )
        .unwrap();
        let savings = tracker.find_capital("savings").unwrap();
        assert_eq!(savings.current_balance.cents(), 250_050);

        handle_capital_command(
            &mut tracker,
            &settings,
            CapitalCommands::Delete {
                capital: "Savings".into(),
            },
        )
        .unwrap();
        assert_eq!(tracker.capitals().len(), 2);
    }

    #[test]
    fn test_malformed_balance_is_validation_error() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        let err = handle_capital_command(
            &mut tracker,
            &Settings::default(),
            CapitalCommands::Add {
                name: "Broken".into(),
                balance: "NaN".into(),
                color: DEFAULT_CAPITAL_COLOR.into(),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(tracker.capitals().len(), 2);
    }

    #[test]
    fn test_delete_unknown_capital_is_not_found() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        let err = handle_capital_command(
            &mut tracker,
            &Settings::default(),
            CapitalCommands::Delete {
                capital: "Nowhere".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}

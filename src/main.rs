use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use captrack::cli::{
    handle_capital_command, handle_expense_command, handle_reset_command, handle_show_command,
    handle_theme_command, CapitalCommands, ExpenseCommands, ThemeAction,
};
use captrack::config::{CapTrackPaths, Settings};
use captrack::services::Tracker;
use captrack::storage::FileStore;
use captrack::view::View;

#[derive(Parser)]
#[command(
    name = "captrack",
    version,
    about = "Track capitals and the expenses drawn against them",
    long_about = "CapTrack keeps named pools of money (cash, bank accounts, ...) \
                  and the expenses you pay from them. Balances are always derived \
                  from each capital's starting amount and its expenses."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Capital management commands
    #[command(subcommand, alias = "cap")]
    Capital(CapitalCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Render one view (dashboard, expenses, capitals, settings)
    Show {
        #[arg(value_enum, default_value_t = View::Dashboard)]
        view: View,
    },

    /// Toggle or set the display theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Toggle)]
        action: ThemeAction,
    },

    /// Delete all data and restore the default capitals
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CapTrackPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    // Initialize storage
    let store = FileStore::open(paths.data_dir())?;
    let mut tracker = Tracker::open(store)?;

    match cli.command {
        Some(Commands::Capital(cmd)) => {
            handle_capital_command(&mut tracker, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut tracker, &settings, cmd)?;
        }
        Some(Commands::Show { view }) => {
            handle_show_command(&tracker, &settings, view)?;
        }
        Some(Commands::Theme { action }) => {
            handle_theme_command(&mut tracker, action)?;
        }
        Some(Commands::Reset { yes }) => {
            handle_reset_command(&mut tracker, yes)?;
        }
        Some(Commands::Config) => {
            println!("CapTrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent expenses: {}", settings.recent_count);
            println!("  Theme:           {}", tracker.theme());
        }
        None => {
            handle_show_command(&tracker, &settings, View::Dashboard)?;
            println!();
            println!("Run 'captrack --help' for usage information.");
        }
    }

    Ok(())
}

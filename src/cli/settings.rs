//! View, theme and reset commands

use clap::ValueEnum;

use crate::config::Settings;
use crate::error::{CapTrackError, CapTrackResult};
use crate::models::Theme;
use crate::services::Tracker;
use crate::storage::KeyValueStore;
use crate::view::{self, View};

/// What the theme command does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeAction {
    #[default]
    Toggle,
    Light,
    Dark,
}

/// Render a single view
pub fn handle_show_command<S: KeyValueStore>(
    tracker: &Tracker<S>,
    settings: &Settings,
    view: View,
) -> CapTrackResult<()> {
    tracing::debug!(%view, "rendering view");
    print!("{}", view::render(view, tracker.state(), settings));
    Ok(())
}

/// Change the stored theme preference
pub fn handle_theme_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    action: ThemeAction,
) -> CapTrackResult<Theme> {
    let theme = match action {
        ThemeAction::Toggle => tracker.toggle_theme()?,
        ThemeAction::Light => tracker.set_theme(Theme::Light)?,
        ThemeAction::Dark => tracker.set_theme(Theme::Dark)?,
    };
    println!("Theme: {}", theme);
    Ok(theme)
}

/// Wipe all data and restore the default capitals
pub fn handle_reset_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    confirmed: bool,
) -> CapTrackResult<()> {
    if !confirmed {
        return Err(CapTrackError::Validation(
            "Reset deletes every capital and expense. Re-run with --yes to confirm".into(),
        ));
    }

    tracker.reset()?;
    println!("All data cleared. Default capitals restored:");
    for capital in tracker.capitals() {
        println!("  - {} ({})", capital.name, capital.initial_balance);
    }
    Ok(())
}

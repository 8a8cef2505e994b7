//! Travel Wishlist: command-line front end.
//!
//! Each invocation is one session: the visited-only filter applies to that
//! invocation, the theme is remembered in the settings file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use travel_wishlist::app::App;
use travel_wishlist::logging;
use travel_wishlist::managers::wishlist_view::SubmitOutcome;
use travel_wishlist::services::settings_engine::SettingsEngineTrait;
use travel_wishlist::services::theme_engine::ThemeEngineTrait;
use travel_wishlist::types::errors::DestinationError;
use travel_wishlist::types::settings::ThemeMode;
use travel_wishlist::ui::card;

#[derive(Parser, Debug)]
#[command(name = "wishlist", version, about = "Keep a wishlist of places to travel")]
struct Cli {
    /// Database file (defaults to the platform data directory).
    #[arg(long, global = true, env = "WISHLIST_DB")]
    db: Option<PathBuf>,

    /// Settings file (defaults to the platform config directory).
    #[arg(long, global = true, env = "WISHLIST_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a destination.
    Add {
        name: String,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// List destinations, oldest first.
    List {
        #[arg(long)]
        visited_only: bool,
    },
    /// Edit a destination by exact name or id. An empty value clears a field.
    ///
    /// A target that matches a destination name is treated as a name, even if numeric.
    Edit {
        target: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Mark a destination visited.
    Visit { target: String },
    /// Mark a destination not visited.
    Unvisit { target: String },
    /// Delete a destination.
    Delete { target: String },
    /// Show or change the theme.
    Theme { action: Option<ThemeAction> },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeAction {
    Toggle,
    Light,
    Dark,
    System,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn run(cli: Cli) -> CliResult<()> {
    let log = logging::init();
    let mut app = App::open(cli.config, cli.db)?;
    log.apply_level(&app.settings_engine.get_settings().logging.level);

    match cli.command {
        Command::Add { name, notes, image_url } => {
            app.view.form.name = name;
            app.view.form.notes = notes.unwrap_or_default();
            app.view.form.image_url = image_url.unwrap_or_default();
            match app.submit()? {
                SubmitOutcome::Added(item) => print!("{}", card::render_card(&item)),
                _ => return Err(DestinationError::EmptyName.into()),
            }
        }
        Command::List { visited_only } => {
            app.set_visited_only(visited_only);
            print!("{}", card::render_grid(&app.visible_items()));
        }
        Command::Edit { target, name, notes, image_url } => {
            let id = app.resolve_target(&target)?;
            let item = app
                .view
                .items()
                .iter()
                .find(|i| i.id == Some(id))
                .cloned()
                .ok_or(DestinationError::NotFound(id))?;
            app.view.start_edit(&item);
            if let Some(name) = name {
                app.view.form.name = name;
            }
            if let Some(notes) = notes {
                app.view.form.notes = notes;
            }
            if let Some(image_url) = image_url {
                app.view.form.image_url = image_url;
            }
            match app.submit()? {
                SubmitOutcome::Updated(item) => print!("{}", card::render_card(&item)),
                _ => return Err(DestinationError::EmptyName.into()),
            }
        }
        Command::Visit { target } => {
            let id = app.resolve_target(&target)?;
            app.toggle_visited(id, true)?;
        }
        Command::Unvisit { target } => {
            let id = app.resolve_target(&target)?;
            app.toggle_visited(id, false)?;
        }
        Command::Delete { target } => {
            let id = app.resolve_target(&target)?;
            app.delete(id)?;
        }
        Command::Theme { action } => {
            match action {
                Some(ThemeAction::Toggle) => {
                    app.toggle_theme()?;
                }
                Some(ThemeAction::Light) => app.set_theme(ThemeMode::Light)?,
                Some(ThemeAction::Dark) => app.set_theme(ThemeMode::Dark)?,
                Some(ThemeAction::System) => app.set_theme(ThemeMode::System)?,
                None => {}
            }
            println!(
                "{} ({})",
                app.theme_engine.get_theme().as_str(),
                app.theme_engine.effective_theme().as_str()
            );
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("wishlist: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! `shiftcal` command line
//!
//! Parses arguments with clap, forwards to the command layer and returns the
//! text to print.

pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shiftcal_domain::{parse_date_key, ClockTime, Config, Result, ViewMode};

use crate::commands;
use crate::AppContext;

/// Personal shift calendar
#[derive(Debug, Parser)]
#[command(name = "shiftcal", version, about)]
pub struct Cli {
    /// Configuration file (JSON or TOML); skips environment and probing
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Act as this user (overrides the configured identity)
    #[arg(long, global = true, value_name = "USER_ID")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the month containing ANCHOR (default: today)
    Month { anchor: Option<String> },

    /// Show the Monday-first week containing ANCHOR (default: today)
    Week { anchor: Option<String> },

    /// Assign a shift type to a day or an inclusive range of days
    Assign {
        start: String,
        /// Last day of a multi-day assignment
        #[arg(long)]
        end: Option<String>,
        /// Shift type id; an empty id clears the days
        #[arg(long = "type", value_name = "ID")]
        type_id: String,
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Remove the shift on a day
    Clear { date: String },

    /// List assigned days
    List {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },

    /// Manage shift types
    Types {
        #[command(subcommand)]
        command: TypeCommands,
    },

    /// Show who is signed in
    Session,

    /// Re-read the stored document and show the session
    Reload,

    /// End the session
    SignOut,
}

#[derive(Debug, Subcommand)]
pub enum TypeCommands {
    /// List shift types by start time
    List,
    /// Add a shift type (08:00-16:00, next free color)
    Add { name: Option<String> },
    /// Rename a shift type; an empty name deletes it
    Rename { id: String, name: String },
    /// Change start and end time (HH:MM)
    Times { id: String, start: String, end: String },
    /// Change color to one of the palette tokens (e.g. bg-cyan-200)
    Color { id: String, color: String },
    /// Delete a shift type
    Remove { id: String },
}

/// Configuration for this invocation.
///
/// `--config` reads that file only; otherwise the usual environment, probed
/// file, defaults order applies. `--user` wins over any configured user.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => shiftcal_infra::config::load_from_file(Some(path.clone()))?,
        None => shiftcal_infra::config::load()?,
    };

    if let Some(user) = &cli.user {
        config.identity.user_id = Some(user.clone());
    }

    Ok(config)
}

/// Run one subcommand and return its text output.
pub async fn run(ctx: &AppContext, command: Commands) -> Result<String> {
    match command {
        Commands::Month { anchor } => show(ctx, ViewMode::Month, anchor.as_deref()).await,
        Commands::Week { anchor } => show(ctx, ViewMode::Week, anchor.as_deref()).await,
        Commands::Assign { start, end, type_id, notes } => {
            let entries =
                commands::assign_shift(ctx, &start, end.as_deref(), &type_id, &notes).await?;
            if entries.is_empty() {
                Ok("No shifts in range".to_string())
            } else {
                Ok(render::shift_entries(&entries))
            }
        }
        Commands::Clear { date } => {
            commands::delete_shift(ctx, &date).await?;
            Ok(format!("Cleared {date}"))
        }
        Commands::List { from, to } => {
            let entries = commands::list_shifts(ctx, from.as_deref(), to.as_deref()).await?;
            Ok(render::shift_entries(&entries))
        }
        Commands::Types { command } => run_types(ctx, command).await,
        Commands::Session => Ok(render::session(&commands::get_session(ctx).await?)),
        Commands::Reload => Ok(render::session(&commands::reload_session(ctx).await?)),
        Commands::SignOut => Ok(render::session(&commands::sign_out(ctx).await?)),
    }
}

async fn show(ctx: &AppContext, mode: ViewMode, anchor: Option<&str>) -> Result<String> {
    commands::set_view_mode(ctx, mode).await?;
    let view = match anchor {
        Some(raw) => commands::show_date(ctx, parse_date_key(raw)?).await?,
        None => commands::go_to_today(ctx).await?,
    };
    Ok(render::calendar(&view))
}

async fn run_types(ctx: &AppContext, command: TypeCommands) -> Result<String> {
    match command {
        TypeCommands::List => Ok(render::shift_types(&commands::list_shift_types(ctx).await?)),
        TypeCommands::Add { name } => {
            let added = commands::add_shift_type(ctx, name.as_deref()).await?;
            Ok(render::shift_types(std::slice::from_ref(&added)))
        }
        TypeCommands::Rename { id, name } => {
            let updated = commands::update_shift_type(ctx, &id, "name", &name).await?;
            Ok(updated_or_removed(&id, updated.as_ref()))
        }
        TypeCommands::Times { id, start, end } => {
            // Both values are checked before the first save.
            ClockTime::parse(&start)?;
            ClockTime::parse(&end)?;
            commands::update_shift_type(ctx, &id, "startTime", &start).await?;
            let updated = commands::update_shift_type(ctx, &id, "endTime", &end).await?;
            Ok(updated_or_removed(&id, updated.as_ref()))
        }
        TypeCommands::Color { id, color } => {
            let updated = commands::update_shift_type(ctx, &id, "color", &color).await?;
            Ok(updated_or_removed(&id, updated.as_ref()))
        }
        TypeCommands::Remove { id } => {
            commands::remove_shift_type(ctx, &id).await?;
            Ok(format!("Removed shift type {id}"))
        }
    }
}

fn updated_or_removed(id: &str, updated: Option<&shiftcal_domain::ShiftType>) -> String {
    match updated {
        Some(shift_type) => render::shift_types(std::slice::from_ref(shift_type)),
        None => format!("Removed shift type {id} (blank name)"),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_assign_with_range_and_global_user() {
        let cli = Cli::try_parse_from([
            "shiftcal", "assign", "2024-03-11", "--end", "2024-03-15", "--type", "tarde", "--user",
            "uid-1",
        ])
        .unwrap();

        assert_eq!(cli.user.as_deref(), Some("uid-1"));
        match cli.command {
            Commands::Assign { start, end, type_id, notes } => {
                assert_eq!(start, "2024-03-11");
                assert_eq!(end.as_deref(), Some("2024-03-15"));
                assert_eq!(type_id, "tarde");
                assert!(notes.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_type_subcommands() {
        let cli = Cli::try_parse_from(["shiftcal", "types", "times", "noche", "21:00", "05:00"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Types { command: TypeCommands::Times { ref id, .. } } if id == "noche"
        ));
    }

    #[test]
    fn parses_reload() {
        let cli = Cli::try_parse_from(["shiftcal", "reload", "--user", "uid-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Reload));
        assert_eq!(cli.user.as_deref(), Some("uid-1"));
    }

    #[test]
    fn user_flag_overrides_configured_identity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shiftcal.json");
        std::fs::write(&path, r#"{ "store": { "backend": "memory" }, "identity": { "user_id": "a" } }"#)
            .unwrap();

        let cli = Cli::try_parse_from([
            "shiftcal",
            "--config",
            path.to_str().unwrap(),
            "--user",
            "b",
            "session",
        ])
        .unwrap();

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.identity.user_id.as_deref(), Some("b"));
    }
}

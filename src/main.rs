mod commands;
mod render;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rota_core::rota::Rota;
use rota_core::rota_config::RotaConfig;
use rota_core::slot::{Day, Slot, SlotKind};
use rota_core::user::User;
use rota_core::week;

#[derive(Parser)]
#[command(name = "rota")]
#[command(about = "Weekly pickup/dropoff signup board for your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive board: log in, browse weeks, sign up for slots
    Board,
    /// Print the schedule for a week
    Show {
        /// Week to show (any date in it, YYYY-MM-DD; defaults to this week)
        #[arg(long)]
        week: Option<String>,

        /// Print the week's record as JSON instead of the grid
        #[arg(long)]
        json: bool,
    },
    /// Sign up for a slot, overwriting any existing signup
    Signup {
        /// Weekday (monday..friday)
        day: String,

        /// Slot kind (pickup or dropoff)
        kind: String,

        /// Who signs up (user id from the roster)
        #[arg(short, long)]
        user: String,

        /// Time text shown on the board, e.g. "08:00"
        #[arg(short, long)]
        time: String,

        /// Optional note shown next to the time
        #[arg(short, long)]
        notes: Option<String>,

        /// Week of the slot (any date in it; defaults to this week)
        #[arg(long)]
        week: Option<String>,
    },
    /// Cancel a signup (no-op when the slot is already open)
    Cancel {
        /// Weekday (monday..friday)
        day: String,

        /// Slot kind (pickup or dropoff)
        kind: String,

        /// Week of the slot (any date in it; defaults to this week)
        #[arg(long)]
        week: Option<String>,
    },
    /// List the user roster
    Users,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Board) {
        Commands::Board => commands::board::run(),
        Commands::Show { week, json } => {
            let week_start = resolve_week(week.as_deref())?;
            commands::show::run(week_start, json)
        }
        Commands::Signup {
            day,
            kind,
            user,
            time,
            notes,
            week,
        } => {
            let rota = Rota::load()?;
            require_users(&rota)?;
            let slot = resolve_slot(&day, &kind)?;
            let user = resolve_user(&rota, &user)?;
            let week_start = resolve_week(week.as_deref())?;
            commands::signup::run(
                &rota,
                week_start,
                slot,
                &user,
                &time,
                notes.as_deref().unwrap_or(""),
            )
        }
        Commands::Cancel { day, kind, week } => {
            let slot = resolve_slot(&day, &kind)?;
            let week_start = resolve_week(week.as_deref())?;
            commands::cancel::run(week_start, slot)
        }
        Commands::Users => commands::users::run(),
    }
}

fn require_users(rota: &Rota) -> Result<()> {
    if rota.users().is_empty() {
        anyhow::bail!(
            "No users configured.\n\n\
            Add at least one [[users]] entry to:\n  \
            {}",
            RotaConfig::config_path()?.display()
        );
    }

    Ok(())
}

fn resolve_user(rota: &Rota, id: &str) -> Result<User> {
    match rota.user(id) {
        Some(user) => Ok(user.clone()),
        None => {
            let available: Vec<_> = rota.users().iter().map(|u| u.id.clone()).collect();
            anyhow::bail!("User '{}' not found. Available: {}", id, available.join(", "));
        }
    }
}

fn resolve_slot(day: &str, kind: &str) -> Result<Slot> {
    let day: Day = day.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let kind: SlotKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    Ok(Slot::new(day, kind))
}

/// Parse a --week argument (any date inside the week) and normalize it to
/// that week's Monday. No argument means the current week.
fn resolve_week(arg: Option<&str>) -> Result<NaiveDate> {
    let date = match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))?,
        None => Local::now().date_naive(),
    };

    Ok(week::start_of_week(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_week_normalizes_to_monday() {
        let start = resolve_week(Some("2025-03-05")).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
    }

    #[test]
    fn resolve_week_rejects_other_formats() {
        assert!(resolve_week(Some("03/05/2025")).is_err());
        assert!(resolve_week(Some("next week")).is_err());
    }

    #[test]
    fn resolve_slot_parses_day_and_kind() {
        let slot = resolve_slot("monday", "pickup").unwrap();
        assert_eq!(slot.key(), "monday_pickup");
    }

    #[test]
    fn resolve_slot_rejects_weekends() {
        assert!(resolve_slot("saturday", "pickup").is_err());
    }
}

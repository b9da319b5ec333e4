//! Interactive signup board.
//!
//! One process is one session: it starts logged out on the current week,
//! and the view-mode enum drives which screen is shown. Every mutation
//! persists the store and the next loop iteration re-renders the week.

use anyhow::{Context, Result};
use chrono::Local;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use rota_core::rota::Rota;
use rota_core::session::{Modal, Session, ViewMode};
use rota_core::slot::Slot;
use rota_core::store::ScheduleStore;

use crate::render;

pub fn run() -> Result<()> {
    let rota = Rota::load()?;
    crate::require_users(&rota)?;

    let mut store = ScheduleStore::load(&rota.schedule_path());
    let mut session = Session::new(Local::now().date_naive());

    loop {
        let keep_going = match session.view_mode() {
            ViewMode::LoggedOut => login(&rota, &mut session)?,
            ViewMode::Calendar => calendar(&rota, &mut store, &mut session)?,
        };

        if !keep_going {
            return Ok(());
        }
    }
}

/// Login screen: pick a user from the roster. Returns false on quit.
fn login(rota: &Rota, session: &mut Session) -> Result<bool> {
    let mut items: Vec<String> = rota.users().iter().map(|u| u.name.clone()).collect();
    items.push("Quit".to_string());

    let selection = Select::new()
        .with_prompt("  Who are you?")
        .items(&items)
        .default(0)
        .interact()?;

    if selection == rota.users().len() {
        return Ok(false);
    }

    session.log_in(&rota.users()[selection].id);
    Ok(true)
}

/// One calendar screen: render the week, then act on a selection.
/// Returns false on quit.
fn calendar(rota: &Rota, store: &mut ScheduleStore, session: &mut Session) -> Result<bool> {
    let Some(user) = session.current_user() else {
        return Ok(true);
    };

    let record = store.week(&session.week_key());

    println!();
    println!("  {}", format!("Signed in as {}", rota.display_name(user)).dimmed());
    println!();
    println!("{}", render::render_week(rota, session.week_start(), &record));
    println!();

    let slots: Vec<Slot> = Slot::all().collect();
    let mut items: Vec<String> = slots
        .iter()
        .map(|slot| render::slot_action_label(rota, &record, *slot))
        .collect();
    items.push("Previous week".to_string());
    items.push("Next week".to_string());
    items.push("Log out".to_string());
    items.push("Quit".to_string());

    let selection = Select::new()
        .with_prompt("  Pick a slot or an action")
        .items(&items)
        .default(0)
        .interact()?;

    if selection < slots.len() {
        open_slot(rota, store, session, slots[selection])?;
        return Ok(true);
    }

    match selection - slots.len() {
        0 => session.shift_week(-1),
        1 => session.shift_week(1),
        2 => session.log_out(),
        _ => return Ok(false),
    }

    Ok(true)
}

/// The signup modal for one cell. Saving with an empty time writes
/// nothing and keeps the modal open; deleting is offered only over an
/// existing signup.
fn open_slot(rota: &Rota, store: &mut ScheduleStore, session: &Session, slot: Slot) -> Result<()> {
    let (prefill, can_delete) = match Modal::open(session, store, slot) {
        Modal::Closed => return Ok(()),
        Modal::Create { .. } => (None, false),
        Modal::Edit { existing, .. } => (Some(existing), true),
    };

    let Some(user) = session.current_user() else {
        return Ok(());
    };

    loop {
        println!();
        println!("  {}", slot.label().bold());

        let mut actions = vec!["Save"];
        if can_delete {
            actions.push("Delete");
        }
        actions.push("Cancel");

        let selection = Select::new().items(&actions).default(0).interact()?;

        match actions[selection] {
            "Save" => {
                let mut time_input = Input::<String>::new()
                    .with_prompt("  Time")
                    .allow_empty(true);
                if let Some(existing) = &prefill {
                    time_input = time_input.with_initial_text(existing.time.clone());
                }
                let time = time_input.interact_text()?;

                let mut notes_input = Input::<String>::new()
                    .with_prompt("  Notes (optional)")
                    .allow_empty(true);
                if let Some(existing) = &prefill {
                    notes_input = notes_input.with_initial_text(existing.notes.clone());
                }
                let notes = notes_input.interact_text()?;

                if store.submit(&session.week_key(), slot, user, &time, &notes) {
                    save(rota, store)?;
                    return Ok(());
                }
                // Empty time: nothing written, back to the modal menu.
            }
            "Delete" => {
                if store.clear_slot(&session.week_key(), slot) {
                    save(rota, store)?;
                }
                return Ok(());
            }
            _ => return Ok(()),
        }
    }
}

fn save(rota: &Rota, store: &ScheduleStore) -> Result<()> {
    let path = rota.schedule_path();
    store
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))
}

use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use rota_core::rota::Rota;
use rota_core::slot::Slot;
use rota_core::store::ScheduleStore;
use rota_core::user::User;
use rota_core::week;

use crate::render;

pub fn run(
    rota: &Rota,
    week_start: NaiveDate,
    slot: Slot,
    user: &User,
    time: &str,
    notes: &str,
) -> Result<()> {
    let path = rota.schedule_path();
    let mut store = ScheduleStore::load(&path);
    let week_key = week::week_key(week_start);

    // An empty time is rejected without touching the store.
    if !store.submit(&week_key, slot, &user.id, time, notes) {
        return Ok(());
    }

    store
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{}", render::render_week(rota, week_start, &store.week(&week_key)));
    println!();
    println!("{}", format!("  {} signed up for {}", user.name, slot.label()).green());

    Ok(())
}

use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use rota_core::rota::Rota;
use rota_core::slot::Slot;
use rota_core::store::ScheduleStore;
use rota_core::week;

use crate::render;

pub fn run(week_start: NaiveDate, slot: Slot) -> Result<()> {
    let rota = Rota::load()?;
    let path = rota.schedule_path();
    let mut store = ScheduleStore::load(&path);
    let week_key = week::week_key(week_start);

    // Cancelling an open cell changes nothing.
    if !store.clear_slot(&week_key, slot) {
        println!("{}", format!("   No signup for {} that week", slot.label()).dimmed());
        return Ok(());
    }

    store
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{}", render::render_week(&rota, week_start, &store.week(&week_key)));
    println!();
    println!("{}", format!("  Cancelled {}", slot.label()).red());

    Ok(())
}

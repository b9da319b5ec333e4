use anyhow::Result;
use chrono::NaiveDate;
use rota_core::rota::Rota;
use rota_core::store::ScheduleStore;
use rota_core::week;

use crate::render;

pub fn run(week_start: NaiveDate, json: bool) -> Result<()> {
    let rota = Rota::load()?;
    let store = ScheduleStore::load(&rota.schedule_path());
    let record = store.week(&week::week_key(week_start));

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("{}", render::render_week(&rota, week_start, &record));
    Ok(())
}

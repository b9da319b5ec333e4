//! Terminal rendering for the weekly board.
//!
//! Every data change re-renders the full 10-cell grid.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use rota_core::rota::Rota;
use rota_core::slot::{Day, Slot, SlotKind};
use rota_core::store::WeekRecord;
use rota_core::week;

/// Header for the displayed week, e.g. "Mar 3, 2025 - Mar 7, 2025".
pub fn week_range(week_start: NaiveDate) -> String {
    let end = week::week_end(week_start);
    format!(
        "{} - {}",
        week_start.format("%b %-d, %Y"),
        end.format("%b %-d, %Y")
    )
}

/// Full render of one week: five days, two cells each. Occupied cells
/// show the signup's display name, time and note; open cells show a
/// placeholder.
pub fn render_week(rota: &Rota, week_start: NaiveDate, record: &WeekRecord) -> String {
    let mut lines = Vec::new();

    lines.push(format!("📅 {}", week_range(week_start)));
    lines.push(String::new());

    for day in Day::ALL {
        let date = day.date_in(week_start);
        lines.push(format!(
            "   {} {}",
            day.label().bold(),
            date.format("%b %-d").to_string().dimmed()
        ));

        for kind in SlotKind::ALL {
            lines.push(render_cell(rota, record, Slot::new(day, kind)));
        }
    }

    lines.join("\n")
}

fn render_cell(rota: &Rota, record: &WeekRecord, slot: Slot) -> String {
    let label = format!("{:<8}", slot.kind.as_str());

    match record.get(slot) {
        Some(signup) => {
            let mut line = format!(
                "      {} {} {}",
                label.dimmed(),
                rota.display_name(&signup.user).green(),
                signup.time
            );
            if !signup.notes.is_empty() {
                line.push_str(&format!("  {}", signup.notes.dimmed()));
            }
            line
        }
        None => format!("      {} {}", label.dimmed(), "open".dimmed()),
    }
}

/// Menu label for a cell in the interactive board: open cells offer
/// "Sign up", occupied cells offer "Edit".
pub fn slot_action_label(rota: &Rota, record: &WeekRecord, slot: Slot) -> String {
    match record.get(slot) {
        Some(signup) => format!(
            "{}: {} {} (edit)",
            slot.label(),
            rota.display_name(&signup.user),
            signup.time
        ),
        None => format!("{}: open (sign up)", slot.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_core::rota_config::RotaConfig;
    use rota_core::store::ScheduleStore;

    fn test_rota() -> Rota {
        Rota::with_config(RotaConfig::default())
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    fn slot(key: &str) -> Slot {
        key.parse().unwrap()
    }

    #[test]
    fn week_range_spans_monday_to_friday() {
        assert_eq!(week_range(monday()), "Mar 3, 2025 - Mar 7, 2025");
    }

    #[test]
    fn occupied_cells_show_name_time_and_note() {
        let mut store = ScheduleStore::default();
        store.submit("2025-03-03", slot("monday_pickup"), "parent1", "08:00", "bring snacks");

        let out = render_week(&test_rota(), monday(), &store.week("2025-03-03"));
        assert!(out.contains("Parent 1"));
        assert!(out.contains("08:00"));
        assert!(out.contains("bring snacks"));
    }

    #[test]
    fn open_cells_show_a_placeholder() {
        let out = render_week(&test_rota(), monday(), &ScheduleStore::default().week("2025-03-03"));
        assert_eq!(out.matches("open").count(), 10);
    }

    #[test]
    fn stale_user_ids_render_verbatim() {
        let mut store = ScheduleStore::default();
        store.submit("2025-03-03", slot("friday_dropoff"), "ghost", "15:00", "");

        let out = render_week(&test_rota(), monday(), &store.week("2025-03-03"));
        assert!(out.contains("ghost"));
    }

    #[test]
    fn action_labels_distinguish_signup_and_edit() {
        let mut store = ScheduleStore::default();
        store.submit("2025-03-03", slot("monday_pickup"), "parent1", "08:00", "");
        let record = store.week("2025-03-03");

        let rota = test_rota();
        assert!(slot_action_label(&rota, &record, slot("monday_pickup")).contains("(edit)"));
        assert!(slot_action_label(&rota, &record, slot("monday_dropoff")).contains("(sign up)"));
    }
}

//! In-memory session state and the signup modal.

use chrono::NaiveDate;

use crate::signup::Signup;
use crate::slot::Slot;
use crate::store::ScheduleStore;
use crate::week;

/// Which top-level view the UI shows. Exactly one is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    LoggedOut,
    Calendar,
}

/// One run's selection of user and displayed week. Never persisted; a new
/// process starts logged out on the current week.
#[derive(Debug, Clone)]
pub struct Session {
    user: Option<String>,
    week_start: NaiveDate,
}

impl Session {
    pub fn new(today: NaiveDate) -> Session {
        Session {
            user: None,
            week_start: week::start_of_week(today),
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        if self.user.is_some() {
            ViewMode::Calendar
        } else {
            ViewMode::LoggedOut
        }
    }

    pub fn current_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn log_in(&mut self, user: &str) {
        self.user = Some(user.to_string());
    }

    /// Clears the selected user; the calendar stays hidden until the next
    /// login.
    pub fn log_out(&mut self) {
        self.user = None;
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// Store key of the displayed week.
    pub fn week_key(&self) -> String {
        week::week_key(self.week_start)
    }

    pub fn shift_week(&mut self, direction: i64) {
        self.week_start = week::shift_week(self.week_start, direction);
    }
}

/// The signup modal over one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Closed,
    Create { slot: Slot },
    Edit { slot: Slot, existing: Signup },
}

impl Modal {
    /// Open the modal for a clicked cell. Without a logged-in user the
    /// click is a no-op and the modal stays closed. An occupied cell
    /// opens in edit mode, carrying the existing signup for prefill and
    /// the delete affordance.
    pub fn open(session: &Session, store: &ScheduleStore, slot: Slot) -> Modal {
        if session.current_user().is_none() {
            return Modal::Closed;
        }

        match store.week(&session.week_key()).get(slot) {
            Some(existing) => Modal::Edit {
                slot,
                existing: existing.clone(),
            },
            None => Modal::Create { slot },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    fn slot(key: &str) -> Slot {
        key.parse().unwrap()
    }

    // --- Session ---

    #[test]
    fn new_session_is_logged_out_on_the_current_week() {
        let session = Session::new(wednesday());
        assert_eq!(session.view_mode(), ViewMode::LoggedOut);
        assert_eq!(session.current_user(), None);
        assert_eq!(session.week_key(), "2025-03-03");
    }

    #[test]
    fn login_shows_the_calendar_and_logout_hides_it() {
        let mut session = Session::new(wednesday());

        session.log_in("parent1");
        assert_eq!(session.view_mode(), ViewMode::Calendar);
        assert_eq!(session.current_user(), Some("parent1"));

        session.log_out();
        assert_eq!(session.view_mode(), ViewMode::LoggedOut);
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn shifting_weeks_moves_the_anchor_by_seven_days() {
        let mut session = Session::new(wednesday());

        session.shift_week(1);
        assert_eq!(session.week_key(), "2025-03-10");

        session.shift_week(-1);
        assert_eq!(session.week_key(), "2025-03-03");
    }

    // --- Modal ---

    #[test]
    fn modal_stays_closed_while_logged_out() {
        let session = Session::new(wednesday());
        let mut store = ScheduleStore::default();
        store.submit("2025-03-03", slot("monday_pickup"), "parent1", "08:00", "");

        let modal = Modal::open(&session, &store, slot("monday_pickup"));
        assert_eq!(modal, Modal::Closed);
    }

    #[test]
    fn open_cell_opens_for_create() {
        let mut session = Session::new(wednesday());
        session.log_in("parent1");

        let modal = Modal::open(&session, &ScheduleStore::default(), slot("monday_pickup"));
        assert_eq!(
            modal,
            Modal::Create {
                slot: slot("monday_pickup")
            }
        );
    }

    #[test]
    fn occupied_cell_opens_for_edit_with_prefill() {
        let mut session = Session::new(wednesday());
        session.log_in("parent2");

        let mut store = ScheduleStore::default();
        store.submit("2025-03-03", slot("monday_pickup"), "parent1", "08:00", "bring snacks");

        match Modal::open(&session, &store, slot("monday_pickup")) {
            Modal::Edit { slot: s, existing } => {
                assert_eq!(s, slot("monday_pickup"));
                assert_eq!(existing.user, "parent1");
                assert_eq!(existing.time, "08:00");
                assert_eq!(existing.notes, "bring snacks");
            }
            other => panic!("expected edit modal, got {:?}", other),
        }
    }

    #[test]
    fn modal_looks_at_the_displayed_week_only() {
        let mut session = Session::new(wednesday());
        session.log_in("parent1");

        let mut store = ScheduleStore::default();
        store.submit("2025-03-03", slot("monday_pickup"), "parent1", "08:00", "");

        session.shift_week(1);
        let modal = Modal::open(&session, &store, slot("monday_pickup"));
        assert_eq!(
            modal,
            Modal::Create {
                slot: slot("monday_pickup")
            }
        );
    }
}

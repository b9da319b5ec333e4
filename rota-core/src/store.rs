//! The persisted schedule: one JSON blob mapping week keys to slot records.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RotaError, RotaResult};
use crate::signup::Signup;
use crate::slot::Slot;

/// Signups for one week, keyed by slot. Holds at most one signup per cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekRecord {
    slots: BTreeMap<Slot, Signup>,
}

impl WeekRecord {
    pub fn get(&self, slot: Slot) -> Option<&Signup> {
        self.slots.get(&slot)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

/// The full schedule, keyed by week key (ISO date of each week's Monday).
///
/// This is the sole persisted entity. Week records are created lazily on
/// the first signup in a week and never pruned, so long-running installs
/// accumulate empty records for weeks whose signups were all cancelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleStore {
    weeks: BTreeMap<String, WeekRecord>,
}

impl ScheduleStore {
    /// Read the schedule blob. Missing or unparsable data yields an
    /// empty store; corruption is never surfaced to the caller.
    pub fn load(path: &Path) -> ScheduleStore {
        let Ok(content) = std::fs::read_to_string(path) else {
            return ScheduleStore::default();
        };

        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Persist the full store unconditionally. The blob goes to a temp
    /// file first and is renamed into place, so a crash mid-write leaves
    /// the previous version intact.
    pub fn save(&self, path: &Path) -> RotaResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| RotaError::Serialization(e.to_string()))?;

        let temp = path.with_extension("tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, path)?;
        Ok(())
    }

    /// The record for a week, or an empty one. Never creates the week.
    pub fn week(&self, week_key: &str) -> WeekRecord {
        self.weeks.get(week_key).cloned().unwrap_or_default()
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Set or clear one cell. Setting creates the week record lazily;
    /// clearing leaves an empty record in place.
    pub fn set_slot(&mut self, week_key: &str, slot: Slot, signup: Option<Signup>) {
        match signup {
            Some(signup) => {
                self.weeks
                    .entry(week_key.to_string())
                    .or_default()
                    .slots
                    .insert(slot, signup);
            }
            None => {
                if let Some(record) = self.weeks.get_mut(week_key) {
                    record.slots.remove(&slot);
                }
            }
        }
    }

    /// The convergent create/edit write: a fresh signup stamped now
    /// overwrites whatever the cell held. An empty time is rejected
    /// without mutating anything and the caller gets `false` back.
    pub fn submit(&mut self, week_key: &str, slot: Slot, user: &str, time: &str, notes: &str) -> bool {
        if time.is_empty() {
            return false;
        }

        self.set_slot(week_key, slot, Some(Signup::new(user, time, notes)));
        true
    }

    /// Remove a signup if one exists. Clearing an already-open cell is a
    /// no-op and returns `false`.
    pub fn clear_slot(&mut self, week_key: &str, slot: Slot) -> bool {
        let occupied = self
            .weeks
            .get(week_key)
            .is_some_and(|record| record.slots.contains_key(&slot));

        if occupied {
            self.set_slot(week_key, slot, None);
        }
        occupied
    }
}

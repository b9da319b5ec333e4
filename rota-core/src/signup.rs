//! Signup records occupying grid cells.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The record occupying one (week, day, kind) cell.
///
/// `time` is free-form text ("08:00"-like by convention, never parsed)
/// and `user` is a roster id. Stale ids left behind by roster edits are
/// kept as-is and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signup {
    pub user: String,
    pub time: String,
    #[serde(default)]
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

impl Signup {
    /// Build a signup stamped with the current time.
    pub fn new(user: &str, time: &str, notes: &str) -> Signup {
        Signup {
            user: user.to_string(),
            time: time.to_string(),
            notes: notes.to_string(),
            timestamp: Utc::now(),
        }
    }
}

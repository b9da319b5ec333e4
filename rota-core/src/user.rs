//! The user roster.

use serde::{Deserialize, Serialize};

/// One selectable user. `id` is the stable identifier stored in signups,
/// `name` is what the board displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// Roster used when the config file doesn't define one.
pub fn default_roster() -> Vec<User> {
    [
        ("parent1", "Parent 1"),
        ("parent2", "Parent 2"),
        ("helper1", "Helper 1"),
        ("helper2", "Helper 2"),
    ]
    .into_iter()
    .map(|(id, name)| User {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

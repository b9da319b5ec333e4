//! Slot identifiers for the weekly grid.
//!
//! The board is a fixed 5 x 2 grid: one pickup and one dropoff cell for
//! each weekday. A `Slot` names one cell, and its canonical string form
//! (`monday_pickup`) doubles as the key inside the persisted blob.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A displayed weekday. The board covers Monday through Friday only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Lowercase wire name, as used in slot keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
        }
    }

    /// Capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// The calendar date of this day within the week starting at `week_start`.
    pub fn date_in(&self, week_start: NaiveDate) -> NaiveDate {
        let offset = Day::ALL.iter().position(|d| d == self).unwrap_or(0) as i64;
        week_start + Duration::days(offset)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Day::Monday),
            "tuesday" => Ok(Day::Tuesday),
            "wednesday" => Ok(Day::Wednesday),
            "thursday" => Ok(Day::Thursday),
            "friday" => Ok(Day::Friday),
            _ => Err(format!(
                "Unknown day '{}'. Expected monday, tuesday, wednesday, thursday or friday",
                s
            )),
        }
    }
}

/// Whether a cell is the morning pickup or the afternoon dropoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotKind {
    Pickup,
    Dropoff,
}

impl SlotKind {
    pub const ALL: [SlotKind; 2] = [SlotKind::Pickup, SlotKind::Dropoff];

    /// Lowercase wire name, as used in slot keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::Pickup => "pickup",
            SlotKind::Dropoff => "dropoff",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SlotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pickup" => Ok(SlotKind::Pickup),
            "dropoff" => Ok(SlotKind::Dropoff),
            _ => Err(format!(
                "Unknown slot kind '{}'. Expected pickup or dropoff",
                s
            )),
        }
    }
}

/// One cell in the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub day: Day,
    pub kind: SlotKind,
}

impl Slot {
    pub fn new(day: Day, kind: SlotKind) -> Slot {
        Slot { day, kind }
    }

    /// All 10 cells, day-major (monday pickup, monday dropoff, tuesday...).
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| SlotKind::ALL.into_iter().map(move |kind| Slot { day, kind }))
    }

    /// Canonical storage key, e.g. `monday_pickup`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.day.as_str(), self.kind.as_str())
    }

    /// Human-readable label, e.g. `Monday pickup`.
    pub fn label(&self) -> String {
        format!("{} {}", self.day.label(), self.kind.as_str())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}", self.day, self.kind)
    }
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, kind) = s.split_once('_').ok_or_else(|| {
            format!("Invalid slot key '{}'. Expected <day>_<pickup|dropoff>", s)
        })?;

        Ok(Slot {
            day: day.parse()?,
            kind: kind.parse()?,
        })
    }
}

// Slots serialize as their key string so they can act as JSON map keys
// inside the persisted blob.

impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D>(deserializer: D) -> Result<Slot, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips_for_every_slot() {
        for slot in Slot::all() {
            assert_eq!(slot.key().parse::<Slot>().unwrap(), slot);
        }
    }

    #[test]
    fn all_covers_ten_cells_day_major() {
        let slots: Vec<Slot> = Slot::all().collect();
        assert_eq!(slots.len(), 10);
        assert_eq!(slots[0].key(), "monday_pickup");
        assert_eq!(slots[1].key(), "monday_dropoff");
        assert_eq!(slots[9].key(), "friday_dropoff");
    }

    #[test]
    fn parse_rejects_weekend_and_garbage() {
        assert!("saturday_pickup".parse::<Slot>().is_err());
        assert!("monday_lunch".parse::<Slot>().is_err());
        assert!("no-separator".parse::<Slot>().is_err());
    }

    #[test]
    fn parse_accepts_mixed_case() {
        assert_eq!(
            "Monday_Pickup".parse::<Slot>().unwrap(),
            Slot::new(Day::Monday, SlotKind::Pickup)
        );
    }

    #[test]
    fn serializes_as_key_string() {
        let slot = Slot::new(Day::Monday, SlotKind::Pickup);
        assert_eq!(serde_json::to_string(&slot).unwrap(), "\"monday_pickup\"");

        let back: Slot = serde_json::from_str("\"friday_dropoff\"").unwrap();
        assert_eq!(back, Slot::new(Day::Friday, SlotKind::Dropoff));
    }

    #[test]
    fn day_dates_follow_week_start() {
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(Day::Monday.date_in(monday), monday);
        assert_eq!(
            Day::Friday.date_in(monday),
            NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
        );
    }
}

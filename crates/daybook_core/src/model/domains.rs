//! Domain-specific record types.
//!
//! # Responsibility
//! - Specialize the shared [`Record`] with per-domain fields.
//! - Name the persisted collection each domain lives in.
//!
//! # Invariants
//! - Domains add fields only; lifecycle, ordering and persistence always go
//!   through the shared components.
//! - Base fields are flattened so every collection file stays a flat array
//!   of objects with stable field names.

use crate::model::record::{Record, Temporal};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record type bound to one persisted collection.
pub trait DomainRecord: Temporal + Serialize + DeserializeOwned + Clone {
    /// Collection name; doubles as the file stem on disk.
    const COLLECTION: &'static str;
}

macro_rules! impl_temporal {
    ($name:ident, $collection:literal) => {
        impl Temporal for $name {
            fn record(&self) -> &Record {
                &self.record
            }

            fn record_mut(&mut self) -> &mut Record {
                &mut self.record
            }
        }

        impl DomainRecord for $name {
            const COLLECTION: &'static str = $collection;
        }
    };
}

/// Coursework with a due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(flatten)]
    pub record: Record,
    pub course: String,
    #[serde(default)]
    pub notes: String,
}

impl_temporal!(Assignment, "assignments");

/// Scheduled exam, viewed with a countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    #[serde(flatten)]
    pub record: Record,
    pub course: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl_temporal!(Exam, "exams");

/// Repeat cadence for reminders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    #[default]
    Once,
    Daily,
    Weekly,
    Monthly,
}

/// Dated reminder with an optional repeat cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(flatten)]
    pub record: Record,
    #[serde(default)]
    pub repeat: Repeat,
}

impl_temporal!(Reminder, "reminders");

/// One timed slot in the daily plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerEntry {
    #[serde(flatten)]
    pub record: Record,
}

impl_temporal!(PlannerEntry, "planner");

/// Family occasion (birthday dinner, visit, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyEvent {
    #[serde(flatten)]
    pub record: Record,
    #[serde(default)]
    pub person: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl_temporal!(FamilyEvent, "family_events");

/// Errand to run for someone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Errand {
    #[serde(flatten)]
    pub record: Record,
    pub for_whom: String,
}

impl_temporal!(Errand, "errands");

/// Plain to-do; classification lives in the base category/tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(flatten)]
    pub record: Record,
}

impl_temporal!(Todo, "todos");

/// Quick note; never carries a deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(flatten)]
    pub record: Record,
    pub body: String,
}

impl_temporal!(Note, "notes");

impl Note {
    /// Case-insensitive keyword match over title and body.
    pub fn matches(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.record.title.to_lowercase().contains(&needle)
            || self.body.to_lowercase().contains(&needle)
    }
}

/// Family member book entry.
///
/// Not a temporal record: birthdays recur yearly, so the next occurrence is
/// derived on read (see `temporal::countdown::next_birthday`) instead of
/// being stored as a target datetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub name: String,
    pub relation: String,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FamilyMember {
    pub const COLLECTION: &'static str = "family";
}

/// Address-book entry; covers people outside the family book (friends,
/// professors, ...).
///
/// Not a temporal record, like [`FamilyMember`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub relation: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Contact {
    pub const COLLECTION: &'static str = "contacts";
}

/// Saved gift idea for someone, with a purchased flag instead of the shared
/// pending/completed lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftIdea {
    pub for_whom: String,
    pub idea: String,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub purchased: bool,
}

impl GiftIdea {
    pub const COLLECTION: &'static str = "gifts";
}

#[cfg(test)]
mod tests {
    use super::{Assignment, Note, Repeat};
    use crate::model::record::Record;
    use chrono::NaiveDate;

    fn clock() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 8)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn flattened_base_fields_serialize_at_top_level() {
        let assignment = Assignment {
            record: Record::new("problem set 4", clock()),
            course: "Linear Algebra".to_string(),
            notes: String::new(),
        };

        let value = serde_json::to_value(&assignment).unwrap();
        assert_eq!(value["title"], "problem set 4");
        assert_eq!(value["course"], "Linear Algebra");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["priority"], "medium");
    }

    #[test]
    fn note_keyword_match_is_case_insensitive() {
        let note = Note {
            record: Record::new("Thesis ideas", clock()),
            body: "Compare three baselines".to_string(),
        };
        assert!(note.matches("THESIS"));
        assert!(note.matches("baselines"));
        assert!(!note.matches("grocery"));
    }

    #[test]
    fn repeat_defaults_to_once() {
        assert_eq!(Repeat::default(), Repeat::Once);
    }

    #[test]
    fn gift_idea_purchased_defaults_to_false() {
        let gift: super::GiftIdea =
            serde_json::from_str(r#"{"for_whom": "Mom", "idea": "scented candles"}"#).unwrap();
        assert!(!gift.purchased);
        assert_eq!(gift.budget, None);
        assert_eq!(gift.occasion, None);
    }

    #[test]
    fn contact_optional_fields_may_be_omitted() {
        let contact: super::Contact =
            serde_json::from_str(r#"{"name": "Dr. Alvarez", "relation": "Professor"}"#).unwrap();
        assert_eq!(contact.phone, None);
        assert_eq!(contact.email, None);
        assert_eq!(contact.notes, None);
    }
}

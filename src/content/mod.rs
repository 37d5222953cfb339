//! Candidate pools and prayer templates
//!
//! Static inputs loaded once at process start and never mutated.

pub(crate) mod prayer;
pub(crate) mod store;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub(crate) use prayer::PrayerTemplates;
pub(crate) use store::{ThemedPool, load_verse_pool};

/// One selectable verse
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEntry")]
pub(crate) struct CandidateEntry {
    pub(crate) reference: String,
    /// Absent when the pool only lists references; filled in by the scripture provider
    pub(crate) text: Option<String>,
    pub(crate) theme: Option<String>,
}

/// Pool files may list bare references or full objects
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Reference(String),
    Full {
        reference: String,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        theme: Option<String>,
    },
}

impl From<RawEntry> for CandidateEntry {
    fn from(raw: RawEntry) -> Self {
        match raw {
            RawEntry::Reference(reference) => Self {
                reference,
                text: None,
                theme: None,
            },
            RawEntry::Full {
                reference,
                text,
                theme,
            } => Self {
                reference,
                text: text.filter(|t| !t.trim().is_empty()),
                theme,
            },
        }
    }
}

/// Time-of-day slot for theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TimeOfDay {
    Morning,
    Evening,
}

impl TimeOfDay {
    /// Morning before noon, evening from noon on
    pub(crate) fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeOfDay::Morning
        } else {
            TimeOfDay::Evening
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_from_bare_reference() {
        let entry: CandidateEntry = serde_json::from_str(r#""John 3:16""#).unwrap();
        assert_eq!(entry.reference, "John 3:16");
        assert!(entry.text.is_none());
    }

    #[test]
    fn entry_from_object() {
        let entry: CandidateEntry = serde_json::from_str(
            r#"{"text":"The Lord is my shepherd.","reference":"Psalm 23:1","theme":"peace"}"#,
        )
        .unwrap();
        assert_eq!(entry.text.as_deref(), Some("The Lord is my shepherd."));
        assert_eq!(entry.theme.as_deref(), Some("peace"));
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let entry: CandidateEntry =
            serde_json::from_str(r#"{"text":"  ","reference":"Psalm 23:1"}"#).unwrap();
        assert!(entry.text.is_none());
    }

    #[test]
    fn noon_is_evening() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
    }
}

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Conference,
    Corporate,
    Cultural,
    Exhibition,
    Other,
}

impl EventType {
    pub const ALL: [Self; 5] = [
        Self::Conference,
        Self::Corporate,
        Self::Cultural,
        Self::Exhibition,
        Self::Other,
    ];

    /// Value stored in the `event_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conference => "conference",
            Self::Corporate => "corporate",
            Self::Cultural => "cultural",
            Self::Exhibition => "exhibition",
            Self::Other => "other",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match self {
            Self::Conference => language.pick("Conference", "مؤتمر"),
            Self::Corporate => language.pick("Corporate Event", "فعالية مؤسسية"),
            Self::Cultural => language.pick("Cultural Event", "فعالية ثقافية"),
            Self::Exhibition => language.pick("Exhibition", "معرض"),
            Self::Other => language.pick("Other", "أخرى"),
        }
    }

    /// Label of the empty selection.
    pub fn placeholder(language: Language) -> &'static str {
        language.pick("Select event type", "اختر نوع الفعالية")
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown event type: {0}")]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event_type| event_type.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.into()))
    }
}

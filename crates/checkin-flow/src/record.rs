//! Session record and step marker for one check-in conversation

use serde::{Deserialize, Serialize};

/// Which question is pending for the session.
///
/// Steps only ever advance, one at a time; a step repeats while the answer
/// is unusable and is never revisited once passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckinStep {
    #[default]
    Mood,
    Water,
    Sleep,
    Steps,
    Done,
}

impl CheckinStep {
    /// The question the companion asks while this step is pending
    pub fn question(&self) -> &'static str {
        match self {
            CheckinStep::Mood => "How are you feeling today?",
            CheckinStep::Water => "How much water have you had today?",
            CheckinStep::Sleep => "How many hours did you sleep last night?",
            CheckinStep::Steps => "How many steps have you walked today?",
            CheckinStep::Done => "Great job! Let me know if you want to update anything.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckinStep::Mood => "mood",
            CheckinStep::Water => "water",
            CheckinStep::Sleep => "sleep",
            CheckinStep::Steps => "steps",
            CheckinStep::Done => "done",
        }
    }
}

/// Accumulated answers for one active conversation.
///
/// `water_ml` and `steps` are running totals that only grow; `sleep_hours`
/// holds the most recent parsed value. Everything is discarded with the
/// conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinRecord {
    pub mood: Option<String>,
    pub water_ml: u64,
    pub sleep_hours: Option<u64>,
    pub steps: u64,
}

/// The pending step plus the record: everything one conversation owns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinState {
    pub step: CheckinStep,
    pub record: CheckinRecord,
}

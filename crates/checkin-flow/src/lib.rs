//! checkin-flow: the four-question wellness check-in conversation
//!
//! This crate holds the session-local questionnaire state machine: a fixed
//! mood → water → sleep → steps sequence, numeric extraction from free-text
//! answers, and the reply spoken after each user turn. It performs no I/O;
//! the hosting voice session feeds it transcribed utterances and speaks
//! whatever it returns.

mod record;
pub use record::{CheckinRecord, CheckinState, CheckinStep};

mod extract;
pub use extract::extract_number;

mod tracker;
pub use tracker::{handle_utterance, TurnOutcome};

/// Initialize the check-in flow system
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Initializing check-in flow");
    Ok(())
}

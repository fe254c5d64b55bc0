//! The four-question check-in state machine

use crate::{extract_number, CheckinState, CheckinStep};

/// Reply and successor state produced by one user turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub reply: String,
    pub state: CheckinState,
}

impl TurnOutcome {
    fn stay(reply: &str, state: CheckinState) -> Self {
        Self {
            reply: reply.to_string(),
            state,
        }
    }
}

/// Advance one conversation by a single user utterance.
///
/// Total over its input: every utterance, an empty one included, maps to a
/// reply and a successor state. The pending step decides which record field
/// may change; every other field is left untouched, and once the terminal
/// step is reached nothing changes again. The caller owns the state and
/// passes it back in on the next turn.
pub fn handle_utterance(state: CheckinState, utterance: &str) -> TurnOutcome {
    let text = utterance.to_lowercase();
    let CheckinState { step, mut record } = state;

    match step {
        CheckinStep::Mood => {
            // Only all-whitespace input re-asks; anything else is taken as
            // the mood label, with the literal word "feeling" removed.
            if text.trim().is_empty() {
                return TurnOutcome::stay(
                    CheckinStep::Mood.question(),
                    CheckinState { step, record },
                );
            }
            let mood = text.replace("feeling", "").trim().to_string();
            record.mood = Some(mood.clone());
            let next = CheckinStep::Water;
            TurnOutcome {
                reply: format!("Got it. You're feeling {mood}. {}", next.question()),
                state: CheckinState { step: next, record },
            }
        }

        CheckinStep::Water => match extract_number(&text) {
            None => TurnOutcome::stay("How much water did you drink?", CheckinState { step, record }),
            Some(amount) => {
                record.water_ml = record.water_ml.saturating_add(amount);
                let next = CheckinStep::Sleep;
                TurnOutcome {
                    reply: format!("Water updated: {} ml. {}", record.water_ml, next.question()),
                    state: CheckinState { step: next, record },
                }
            }
        },

        CheckinStep::Sleep => match extract_number(&text) {
            None => TurnOutcome::stay("How many hours did you sleep?", CheckinState { step, record }),
            Some(hours) => {
                record.sleep_hours = Some(hours);
                let next = CheckinStep::Steps;
                TurnOutcome {
                    reply: format!("Noted. You slept {hours} hours. {}", next.question()),
                    state: CheckinState { step: next, record },
                }
            }
        },

        CheckinStep::Steps => match extract_number(&text) {
            None => TurnOutcome::stay("How many steps did you walk?", CheckinState { step, record }),
            Some(count) => {
                record.steps = record.steps.saturating_add(count);
                TurnOutcome {
                    reply: format!("Steps updated: {}. Great job today!", record.steps),
                    state: CheckinState {
                        step: CheckinStep::Done,
                        record,
                    },
                }
            }
        },

        CheckinStep::Done => TurnOutcome::stay(
            "You're all set! Tell me if you want to update anything.",
            CheckinState { step, record },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CheckinRecord;

    fn at(step: CheckinStep, record: CheckinRecord) -> CheckinState {
        CheckinState { step, record }
    }

    #[test]
    fn test_mood_answer_advances_to_water() {
        let outcome = handle_utterance(CheckinState::default(), "Feeling great");
        assert_eq!(outcome.state.step, CheckinStep::Water);
        assert_eq!(outcome.state.record.mood.as_deref(), Some("great"));
        assert_eq!(
            outcome.reply,
            "Got it. You're feeling great. How much water have you had today?"
        );
    }

    #[test]
    fn test_mood_strips_every_feeling_occurrence() {
        let outcome = handle_utterance(CheckinState::default(), "feeling feeling fine");
        assert_eq!(outcome.state.record.mood.as_deref(), Some("fine"));
        assert_eq!(outcome.state.step, CheckinStep::Water);
    }

    #[test]
    fn test_mood_keeps_interior_whitespace() {
        // replace-all leaves the gap where the word was; only the ends are
        // trimmed
        let outcome = handle_utterance(CheckinState::default(), "I'm feeling great");
        assert_eq!(outcome.state.record.mood.as_deref(), Some("i'm  great"));
    }

    #[test]
    fn test_blank_mood_reasks() {
        let outcome = handle_utterance(CheckinState::default(), "   ");
        assert_eq!(outcome.state.step, CheckinStep::Mood);
        assert!(outcome.state.record.mood.is_none());
        assert_eq!(outcome.reply, "How are you feeling today?");
    }

    #[test]
    fn test_water_extracts_and_advances() {
        let outcome = handle_utterance(at(CheckinStep::Water, CheckinRecord::default()), "about 500ml");
        assert_eq!(outcome.state.step, CheckinStep::Sleep);
        assert_eq!(outcome.state.record.water_ml, 500);
        assert!(outcome.reply.contains("Water updated: 500 ml."));
    }

    #[test]
    fn test_water_accumulates_across_turns() {
        let first = handle_utterance(at(CheckinStep::Water, CheckinRecord::default()), "200");
        assert_eq!(first.state.record.water_ml, 200);

        let second = handle_utterance(at(CheckinStep::Water, first.state.record), "300");
        assert_eq!(second.state.record.water_ml, 500);
        assert!(second.reply.contains("Water updated: 500 ml."));
    }

    #[test]
    fn test_water_without_digits_reasks() {
        let outcome = handle_utterance(at(CheckinStep::Water, CheckinRecord::default()), "a few glasses");
        assert_eq!(outcome.state.step, CheckinStep::Water);
        assert_eq!(outcome.state.record.water_ml, 0);
        assert_eq!(outcome.reply, "How much water did you drink?");
    }

    #[test]
    fn test_sleep_without_digits_reasks() {
        let outcome = handle_utterance(at(CheckinStep::Sleep, CheckinRecord::default()), "not sure");
        assert_eq!(outcome.state.step, CheckinStep::Sleep);
        assert!(outcome.state.record.sleep_hours.is_none());
        assert_eq!(outcome.reply, "How many hours did you sleep?");
    }

    #[test]
    fn test_sleep_overwrites_previous_value() {
        let record = CheckinRecord {
            sleep_hours: Some(8),
            ..CheckinRecord::default()
        };
        let outcome = handle_utterance(at(CheckinStep::Sleep, record), "more like 6");
        assert_eq!(outcome.state.record.sleep_hours, Some(6));
        assert_eq!(outcome.state.step, CheckinStep::Steps);
        assert!(outcome.reply.contains("You slept 6 hours."));
    }

    #[test]
    fn test_steps_accumulates_and_finishes() {
        let record = CheckinRecord {
            steps: 3000,
            ..CheckinRecord::default()
        };
        let outcome = handle_utterance(at(CheckinStep::Steps, record), "another 2000");
        assert_eq!(outcome.state.step, CheckinStep::Done);
        assert_eq!(outcome.state.record.steps, 5000);
        assert_eq!(outcome.reply, "Steps updated: 5000. Great job today!");
    }

    #[test]
    fn test_done_is_a_self_loop() {
        let record = CheckinRecord {
            mood: Some("great".to_string()),
            water_ml: 500,
            sleep_hours: Some(7),
            steps: 4000,
        };
        let state = at(CheckinStep::Done, record.clone());

        let first = handle_utterance(state, "add 300 ml please");
        assert_eq!(first.state.step, CheckinStep::Done);
        assert_eq!(first.state.record, record);
        assert_eq!(
            first.reply,
            "You're all set! Tell me if you want to update anything."
        );

        let second = handle_utterance(first.state, "");
        assert_eq!(second.reply, first.reply);
        assert_eq!(second.state.record, record);
    }

    #[test]
    fn test_full_session_walkthrough() {
        let mut state = CheckinState::default();
        let utterances = [
            "I'm feeling great",
            "about 500ml",
            "roughly 7 hours",
            "around 4000 steps",
        ];
        let mut replies = Vec::new();
        for utterance in utterances {
            let outcome = handle_utterance(state, utterance);
            replies.push(outcome.reply);
            state = outcome.state;
        }

        assert_eq!(state.step, CheckinStep::Done);
        assert_eq!(state.record.water_ml, 500);
        assert_eq!(state.record.sleep_hours, Some(7));
        assert_eq!(state.record.steps, 4000);
        assert!(replies[1].ends_with("How many hours did you sleep last night?"));
        assert!(replies[2].ends_with("How many steps have you walked today?"));
        assert_eq!(replies[3], "Steps updated: 4000. Great job today!");
    }

    #[test]
    fn test_steps_never_regress_on_bad_input() {
        let mut state = at(CheckinStep::Water, CheckinRecord::default());
        for junk in ["no idea", "???", "some"] {
            let outcome = handle_utterance(state, junk);
            assert_eq!(outcome.state.step, CheckinStep::Water);
            state = outcome.state;
        }
        let outcome = handle_utterance(state, "600");
        assert_eq!(outcome.state.step, CheckinStep::Sleep);
        assert_eq!(outcome.state.record.water_ml, 600);
    }

    #[test]
    fn test_input_is_lowercased_before_handling() {
        let outcome = handle_utterance(CheckinState::default(), "FEELING GOOD");
        assert_eq!(outcome.state.record.mood.as_deref(), Some("good"));
    }
}

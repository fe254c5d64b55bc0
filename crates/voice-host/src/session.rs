//! One hosted check-in conversation, greeting to wrap-up

use checkin_flow::{handle_utterance, CheckinRecord, CheckinState, CheckinStep};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{SttStream, TtsEngine, UsageMetrics};

/// Summary handed back to the host binary when a session ends
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub session_id: Uuid,
    pub turns: u32,
    pub reprompts: u32,
    pub completed: bool,
    pub record: CheckinRecord,
}

/// Drives one conversation over whichever providers it is handed.
///
/// Utterances are handled one at a time to completion, so the flow state
/// never sees concurrent writers; independent sessions each get their own
/// host and share nothing but the metrics hub.
pub struct SessionHost {
    session_id: Uuid,
    metrics: UsageMetrics,
}

impl SessionHost {
    pub fn new(metrics: UsageMetrics) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            metrics,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Run the conversation until the flow reaches its terminal step or
    /// the transcription stream runs dry.
    pub fn run(
        &self,
        mut stt: Box<dyn SttStream + Send>,
        mut tts: Box<dyn TtsEngine + Send>,
    ) -> SessionReport {
        let mut state = CheckinState::default();
        let mut turns = 0u32;
        let mut reprompts = 0u32;

        self.metrics.sessions_active.inc();
        info!(session = %self.session_id, "session started");

        self.speak(tts.as_mut(), state.step.question());

        while state.step != CheckinStep::Done {
            let segment = match stt.poll() {
                Some(segment) => segment,
                None => break,
            };
            turns += 1;
            self.metrics.utterances.inc();
            debug!(
                session = %self.session_id,
                step = state.step.as_str(),
                text = %segment.text,
                "utterance"
            );

            let before = state.step;
            let outcome = handle_utterance(state, &segment.text);
            state = outcome.state;
            if state.step == before {
                reprompts += 1;
                self.metrics.reprompts.inc();
            }
            self.speak(tts.as_mut(), &outcome.reply);
        }

        self.metrics.sessions_active.dec();
        let completed = state.step == CheckinStep::Done;
        info!(session = %self.session_id, turns, completed, "session ended");

        SessionReport {
            session_id: self.session_id,
            turns,
            reprompts,
            completed,
            record: state.record,
        }
    }

    fn speak(&self, tts: &mut dyn TtsEngine, text: &str) {
        self.metrics.tts_chars.inc_by(text.len() as u64);
        let samples = tts.synthesize(text);
        debug!(
            session = %self.session_id,
            chars = text.len(),
            samples = samples.len(),
            "synthesized reply"
        );
    }
}

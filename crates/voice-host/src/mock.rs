use crate::{SttConfig, SttSegment, SttStream, TtsConfig, TtsEngine};
use time::OffsetDateTime;

/// Utterances replayed when a mock stream is built without a script
const DEFAULT_SCRIPT: &[&str] = &[
    "I'm feeling pretty good",
    "about 750 ml so far",
    "around 7 hours",
    "maybe 5000 steps",
];

pub struct MockStt {
    lines: Vec<String>,
    cursor: usize,
}

impl SttStream for MockStt {
    fn new(config: SttConfig) -> Self
    where
        Self: Sized,
    {
        let lines = if config.scripted_lines.is_empty() {
            DEFAULT_SCRIPT.iter().map(|s| s.to_string()).collect()
        } else {
            config.scripted_lines
        };
        Self { lines, cursor: 0 }
    }

    fn push_audio(&mut self, _pcm_s16le: &[i16]) {
        // ignore in mock
    }

    fn poll(&mut self) -> Option<SttSegment> {
        let text = self.lines.get(self.cursor)?.clone();
        let idx = self.cursor as u64;
        self.cursor += 1;
        Some(SttSegment {
            start_ms: idx * 1000,
            end_ms: (idx + 1) * 1000,
            text,
            ts: Some(OffsetDateTime::now_utc()),
        })
    }
}

pub struct MockTts {
    cfg: TtsConfig,
}

impl TtsEngine for MockTts {
    fn new(config: TtsConfig) -> Self
    where
        Self: Sized,
    {
        Self { cfg: config }
    }

    fn synthesize(&mut self, text: &str) -> Vec<i16> {
        // Placeholder tone in S16LE; duration tracks the text length
        let sr = self.cfg.sample_rate_hz.max(8_000) as f32;
        let dur_s = (text.len() as f32 / 12.0).clamp(0.25, 1.5);
        let frames = (sr * dur_s) as usize;
        let freq = 330.0_f32;
        (0..frames)
            .map(|n| {
                let t = n as f32 / sr;
                ((2.0 * std::f32::consts::PI * freq * t).sin() * 2500.0) as i16
            })
            .collect()
    }
}

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SttConfig {
    pub language: Option<String>,
    pub sample_rate_hz: u32,
    /// Utterances replayed by the mock backend; real providers ignore this.
    #[serde(default)]
    pub scripted_lines: Vec<String>,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            language: Some("en".to_string()),
            sample_rate_hz: 16_000,
            scripted_lines: Vec::new(),
        }
    }
}

/// One transcribed user turn, as delivered by an STT provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SttSegment {
    pub start_ms: u64,
    pub end_ms: u64,
    pub text: String,
    pub ts: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    pub voice: Option<String>,
    pub sample_rate_hz: u32,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            voice: None,
            sample_rate_hz: 16_000,
        }
    }
}

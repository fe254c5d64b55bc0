use crate::{SttConfig, SttSegment, TtsConfig};

/// A provider-side transcription stream: audio in, text segments out.
///
/// The host only ever consumes `poll`; which vendor sits behind it is a
/// wiring decision made at startup.
pub trait SttStream {
    fn new(config: SttConfig) -> Self
    where
        Self: Sized;
    fn push_audio(&mut self, _pcm_s16le: &[i16]);
    fn poll(&mut self) -> Option<SttSegment>;
}

/// A provider-side synthesizer: text in, PCM out.
pub trait TtsEngine {
    fn new(config: TtsConfig) -> Self
    where
        Self: Sized;
    fn synthesize(&mut self, text: &str) -> Vec<i16>;
}

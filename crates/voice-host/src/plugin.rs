#[cfg(feature = "mock")]
use crate::{MockStt, MockTts};
use crate::{HostError, Result, SttConfig, SttStream, TtsConfig, TtsEngine};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SttBackendKind {
    Mock,
    Deepgram,
    Whisper,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TtsBackendKind {
    Mock,
    Murf,
    Piper,
}

pub fn new_stt_backend(
    kind: SttBackendKind,
    cfg: SttConfig,
) -> Result<Box<dyn SttStream + Send>> {
    match kind {
        SttBackendKind::Mock => {
            #[cfg(feature = "mock")]
            {
                Ok(Box::new(MockStt::new(cfg)))
            }
            #[cfg(not(feature = "mock"))]
            {
                let _ = cfg;
                Err(HostError::Unsupported("mock feature not enabled"))
            }
        }
        SttBackendKind::Deepgram => Err(HostError::Unsupported(
            "deepgram backend not yet integrated",
        )),
        SttBackendKind::Whisper => Err(HostError::Unsupported(
            "whisper backend not yet integrated",
        )),
    }
}

pub fn new_tts_backend(
    kind: TtsBackendKind,
    cfg: TtsConfig,
) -> Result<Box<dyn TtsEngine + Send>> {
    match kind {
        TtsBackendKind::Mock => {
            #[cfg(feature = "mock")]
            {
                Ok(Box::new(MockTts::new(cfg)))
            }
            #[cfg(not(feature = "mock"))]
            {
                let _ = cfg;
                Err(HostError::Unsupported("mock feature not enabled"))
            }
        }
        TtsBackendKind::Murf => Err(HostError::Unsupported("murf backend not yet integrated")),
        TtsBackendKind::Piper => Err(HostError::Unsupported("piper backend not yet integrated")),
    }
}

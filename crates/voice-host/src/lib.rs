//! voice-host: provider seams and the per-session conversation host
//!
//! Trait contracts for speech-to-text and text-to-speech providers with
//! feature-gated backends, usage metrics, and the loop that drives one
//! check-in conversation end to end. The default build enables a `mock`
//! backend so binaries compile and run on any host without vendor
//! credentials; the core flow never learns which provider is wired in.

mod types;
pub use types::{SttConfig, SttSegment, TtsConfig};

mod error;
pub use error::{HostError, Result};

mod traits;
pub use traits::{SttStream, TtsEngine};

#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use mock::{MockStt, MockTts};

pub mod plugin;

mod metrics;
pub use metrics::UsageMetrics;

mod session;
pub use session::{SessionHost, SessionReport};

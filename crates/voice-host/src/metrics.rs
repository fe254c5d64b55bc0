use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};

use crate::{HostError, Result};

/// Usage counters for one host process, shared across its sessions
#[derive(Clone)]
pub struct UsageMetrics {
    pub registry: Registry,
    pub utterances: IntCounter,
    pub reprompts: IntCounter,
    pub tts_chars: IntCounter,
    pub sessions_active: IntGauge,
}

impl UsageMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let utterances = IntCounter::new("hc_utterances_total", "Total user utterances handled")
            .map_err(|e| HostError::Metrics(e.to_string()))?;
        let reprompts = IntCounter::new(
            "hc_reprompts_total",
            "Turns that re-asked the pending question",
        )
        .map_err(|e| HostError::Metrics(e.to_string()))?;
        let tts_chars = IntCounter::new(
            "hc_tts_chars_total",
            "Characters handed to speech synthesis",
        )
        .map_err(|e| HostError::Metrics(e.to_string()))?;
        let sessions_active = IntGauge::new("hc_sessions_active", "Sessions currently running")
            .map_err(|e| HostError::Metrics(e.to_string()))?;

        let _ = registry.register(Box::new(utterances.clone()));
        let _ = registry.register(Box::new(reprompts.clone()));
        let _ = registry.register(Box::new(tts_chars.clone()));
        let _ = registry.register(Box::new(sessions_active.clone()));

        Ok(Self {
            registry,
            utterances,
            reprompts,
            tts_chars,
            sessions_active,
        })
    }

    pub fn encode_text(&self) -> String {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buf) {
            return format!("error encoding metrics: {e}");
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_appear_in_text_dump() {
        let metrics = match UsageMetrics::new() {
            Ok(m) => m,
            Err(e) => panic!("metrics init failed: {e}"),
        };
        metrics.utterances.inc();
        metrics.utterances.inc();
        metrics.tts_chars.inc_by(42);

        let text = metrics.encode_text();
        assert!(text.contains("hc_utterances_total 2"));
        assert!(text.contains("hc_tts_chars_total 42"));
        assert!(text.contains("hc_reprompts_total 0"));
    }
}

use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use checkin_flow::init as init_checkin_flow;
use voice_host::plugin::{new_stt_backend, new_tts_backend, SttBackendKind, TtsBackendKind};
use voice_host::{SessionHost, SttConfig, TtsConfig, UsageMetrics};

#[derive(Parser)]
#[command(name = "companion-daemon")]
#[command(about = "Solas Health voice companion daemon")]
struct Args {
    /// STT backend to use
    #[arg(long, default_value = "mock")]
    stt_backend: String,

    /// TTS backend to use
    #[arg(long, default_value = "mock")]
    tts_backend: String,

    /// Sample rate for audio processing
    #[arg(long, default_value = "16000")]
    sample_rate: u32,

    /// Language for transcription
    #[arg(long, default_value = "en")]
    language: Option<String>,

    /// Voice for speech synthesis
    #[arg(long, default_value = "en-US-matthew")]
    voice: Option<String>,

    /// Newline-separated utterances fed to the mock STT backend
    #[arg(long)]
    transcript: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();

    let args = Args::parse();

    info!("Solas companion daemon starting");
    info!("STT Backend: {}", args.stt_backend);
    info!("TTS Backend: {}", args.tts_backend);
    info!("Sample Rate: {}Hz", args.sample_rate);

    init_checkin_flow().map_err(|e| anyhow::anyhow!("Failed to init check-in flow: {}", e))?;

    let stt_kind = match args.stt_backend.as_str() {
        "mock" => SttBackendKind::Mock,
        "deepgram" => SttBackendKind::Deepgram,
        "whisper" => SttBackendKind::Whisper,
        _ => {
            error!("Unknown STT backend: {}", args.stt_backend);
            return Err(anyhow::anyhow!("Unknown STT backend"));
        }
    };
    let tts_kind = match args.tts_backend.as_str() {
        "mock" => TtsBackendKind::Mock,
        "murf" => TtsBackendKind::Murf,
        "piper" => TtsBackendKind::Piper,
        _ => {
            error!("Unknown TTS backend: {}", args.tts_backend);
            return Err(anyhow::anyhow!("Unknown TTS backend"));
        }
    };

    let scripted_lines = match &args.transcript {
        Some(path) => read_transcript(path)?,
        None => Vec::new(),
    };
    if !scripted_lines.is_empty() {
        info!("Loaded {} transcript lines", scripted_lines.len());
    }

    let stt_config = SttConfig {
        language: args.language,
        sample_rate_hz: args.sample_rate,
        scripted_lines,
    };
    let tts_config = TtsConfig {
        voice: args.voice,
        sample_rate_hz: args.sample_rate,
    };

    let stt = match new_stt_backend(stt_kind, stt_config) {
        Ok(stream) => {
            info!("STT backend initialized");
            stream
        }
        Err(e) => {
            error!("Failed to initialize STT backend: {}", e);
            return Err(anyhow::anyhow!("STT initialization failed: {}", e));
        }
    };
    let tts = match new_tts_backend(tts_kind, tts_config) {
        Ok(engine) => {
            info!("TTS backend initialized");
            engine
        }
        Err(e) => {
            error!("Failed to initialize TTS backend: {}", e);
            return Err(anyhow::anyhow!("TTS initialization failed: {}", e));
        }
    };

    let metrics = UsageMetrics::new().map_err(|e| anyhow::anyhow!("Metrics init failed: {}", e))?;

    let host = SessionHost::new(metrics.clone());
    info!("Session {} ready", host.session_id());

    let report = host.run(stt, tts);

    info!("Session report: {}", serde_json::to_string(&report)?);
    info!("Usage:\n{}", metrics.encode_text());

    info!("Companion daemon shutting down");
    Ok(())
}

fn read_transcript(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .map_err(|e| anyhow::anyhow!("Failed to open transcript {}: {}", path.display(), e))?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

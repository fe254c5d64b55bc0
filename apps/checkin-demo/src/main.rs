//! Wellness Check-in Demo Application
//!
//! Drives the four-question check-in flow over plain text:
//! Utterance → Tracker → Reply

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::{error, info};

use checkin_flow::{handle_utterance, init as init_checkin_flow, CheckinState, CheckinStep};

#[derive(Parser)]
#[command(name = "checkin-demo")]
#[command(about = "Solas Health wellness check-in demo")]
struct Args {
    /// Interactive mode (read utterances from stdin)
    #[arg(long)]
    interactive: bool,

    /// Test a single utterance against a fresh session
    #[arg(long)]
    utterance: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();

    let args = Args::parse();

    info!("🌿 Starting Solas wellness check-in demo");

    if let Err(e) = init_checkin_flow() {
        error!("Failed to initialize check-in flow: {}", e);
        return Ok(());
    }

    if let Some(utterance) = args.utterance {
        test_single_utterance(&utterance)?;
    } else if args.interactive {
        run_interactive_checkin()?;
    } else {
        run_demo_script().await?;
    }

    info!("✅ Check-in demo completed");
    Ok(())
}

fn test_single_utterance(utterance: &str) -> Result<()> {
    println!("🎤 Utterance: \"{}\"", utterance);

    let outcome = handle_utterance(CheckinState::default(), utterance);
    println!("🗣️  {}", outcome.reply);
    println!("📋 Record: {}", serde_json::to_string(&outcome.state.record)?);

    Ok(())
}

fn run_interactive_checkin() -> Result<()> {
    println!("🌿 Interactive Wellness Check-in");
    println!("Answer each question and press Enter ('quit' to exit):");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut state = CheckinState::default();
    println!("🗣️  {}", state.step.question());

    loop {
        print!("🎤 You: ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let utterance = input.trim();

        if utterance.eq_ignore_ascii_case("quit") || utterance.eq_ignore_ascii_case("exit") {
            break;
        }

        // Blank input is a real answer here: the mood step re-asks on it
        let outcome = handle_utterance(state, utterance);
        state = outcome.state;
        println!("🗣️  {}", outcome.reply);

        if state.step == CheckinStep::Done {
            println!();
            println!(
                "📋 Today's record:\n{}",
                serde_json::to_string_pretty(&state.record)?
            );
            break;
        }
    }

    Ok(())
}

async fn run_demo_script() -> Result<()> {
    let demo_utterances = vec![
        "I'm feeling pretty good",
        "hmm, not sure",
        "about 750 ml",
        "7 hours give or take",
        "no idea",
        "roughly 5000 steps",
    ];

    println!(
        "🌿 Running scripted check-in with {} utterances",
        demo_utterances.len()
    );
    println!();

    let mut state = CheckinState::default();
    println!("🗣️  {}", state.step.question());

    for (i, utterance) in demo_utterances.iter().enumerate() {
        println!("{}/{}: 🎤 {}", i + 1, demo_utterances.len(), utterance);
        let outcome = handle_utterance(state, utterance);
        state = outcome.state;
        println!("🗣️  {}", outcome.reply);
        println!();

        // Small delay between turns
        tokio::time::sleep(tokio::time::Duration::from_millis(400)).await;
    }

    println!(
        "📋 Today's record:\n{}",
        serde_json::to_string_pretty(&state.record)?
    );
    println!("🎉 Demo complete!");
    Ok(())
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

//! Event Demo
//!
//! Simulates UI actions that produce analytics events. Tracked events are
//! written as debug log lines, or printed as JSON with `--json`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use event_tracker::{EventTracker, MemorySink};

/// Event Demo - Fire analytics events from simulated UI actions
#[derive(Parser, Debug)]
#[command(name = "event-demo")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    action: Action,

    /// Print recorded events as JSON instead of logging them
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Press the share button
    Share {
        #[arg(long, default_value = "image.jpg")]
        image: String,
        #[arg(long, default_value = "some string message")]
        message: String,
    },
    /// Tap a button
    Tap,
    /// Open a screen
    Open {
        #[arg(long, default_value = "home")]
        screen: String,
        #[arg(long, default_value_t = 0)]
        depth: u32,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let sink = MemorySink::new();
    let tracker = if args.json {
        EventTracker::with_sink(sink.clone())
    } else {
        EventTracker::new()
    };

    log::info!("Simulating UI action: {:?}", args.action);

    match &args.action {
        Action::Share { image, message } => event_demo::on_share_clicked(&tracker, image, message),
        Action::Tap => event_demo::on_button_tapped(&tracker),
        Action::Open { screen, depth } => event_demo::on_screen_opened(&tracker, screen, *depth),
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sink.events())?);
    }

    Ok(())
}

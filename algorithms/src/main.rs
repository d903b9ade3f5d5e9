mod cli;

use std::io::{self, Write};

use algorithms::config::ReplayConfig;
use algorithms::control_flow::playback::{FrameSummary, Player};
use algorithms::data_structures::probe_recorder::{Recording, record};
use algorithms::demo::demo_keys;
use algorithms::logger::initialize_logger_with;
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Format};
use log::{LevelFilter, info};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    initialize_logger_with(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info });
    let config = resolve_config(&cli)?;
    config.validate()?;

    let keys = demo_keys(config.nkeys, config.seed);
    let recording = record(keys, config.size)?;
    info!(
        "recorded {} steps for {} keys into {} slots",
        recording.steps.len(),
        recording.key_count(),
        recording.size
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => print_frames(&mut out, &recording)?,
        Format::Json => {
            if cli.pretty {
                serde_json::to_writer_pretty(&mut out, &recording)?;
            } else {
                serde_json::to_writer(&mut out, &recording)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<ReplayConfig> {
    let mut config = match &cli.config {
        Some(path) => ReplayConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ReplayConfig::default(),
    };
    if let Some(size) = cli.size {
        config.size = size;
    }
    if let Some(nkeys) = cli.nkeys {
        config.nkeys = nkeys;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn print_frames(out: &mut impl Write, recording: &Recording<String>) -> io::Result<()> {
    let mut player = Player::new(recording.steps.len());
    while let Some(summary) = FrameSummary::new(recording, &player) {
        writeln!(out, "{summary}")?;
        writeln!(out, "  {}", table_row(&summary.step.table_snapshot))?;
        if player.is_finished() {
            break;
        }
        player.tick();
    }
    Ok(())
}

fn table_row(slots: &[Option<String>]) -> String {
    let cells: Vec<&str> = slots.iter().map(|s| s.as_deref().unwrap_or(".")).collect();
    format!("[{}]", cells.join(" | "))
}

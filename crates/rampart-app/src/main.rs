use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use rampart_app::config::{load_config, AppConfig, Overrides};
use rampart_app::render::LogSink;
use rampart_app::state::AppState;
use rampart_core::commands::PlayerCommand;
use rampart_core::enums::{GamePhase, TowerKind};
use rampart_core::types::TileCoord;

/// Headless RAMPART runner: plays a seeded session in real time and logs it.
#[derive(Debug, Parser)]
#[command(name = "rampart", version)]
struct Cli {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    /// Wall-clock seconds to run before stopping
    #[arg(long, default_value_t = 30.0)]
    seconds: f64,

    /// Bullet tower to build at start, as COL,ROW (repeatable)
    #[arg(long = "tower", value_parser = parse_tile)]
    towers: Vec<TileCoord>,

    /// Log filter, e.g. "debug" or "rampart_sim=trace"
    #[arg(long)]
    log: Option<String>,
}

fn parse_tile(s: &str) -> Result<TileCoord, String> {
    let (col, row) = s
        .split_once(',')
        .ok_or_else(|| format!("expected COL,ROW, got {s:?}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column: {e}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {e}"))?;
    Ok(TileCoord::new(col, row))
}

/// `now + seconds`, rejecting negative, non-finite and unrepresentable spans.
fn deadline_after(now: Instant, seconds: f64) -> Result<Instant> {
    let Ok(span) = Duration::try_from_secs_f64(seconds) else {
        bail!("--seconds must be a non-negative number, got {seconds}");
    };
    match now.checked_add(span) {
        Some(deadline) => Ok(deadline),
        None => bail!("--seconds {seconds} is too far in the future"),
    }
}

fn init_logging(filter: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let mut config = match &cli.config {
        Some(path) => load_config(path).context("loading config")?,
        None => AppConfig::default(),
    };
    config.apply(&cli.overrides);
    let deadline = deadline_after(Instant::now(), cli.seconds)?;

    info!(
        "RAMPART starting: seed {}, {}x{} tiles, time scale {}",
        config.sim.seed, config.sim.cols, config.sim.rows, config.sim.time_scale
    );

    let state = AppState::new();
    state
        .start(&config.sim, LogSink::new(config.status_interval))
        .context("starting simulation")?;

    for tile in &cli.towers {
        state.send_command(PlayerCommand::BuildTower {
            kind: TowerKind::Bullet,
            tile: *tile,
        })?;
    }

    while Instant::now() < deadline {
        thread::sleep(Duration::from_millis(100));
        if let Some(snapshot) = state.snapshot()? {
            if snapshot.phase == GamePhase::GameOver {
                break;
            }
        }
    }

    let last = state.snapshot()?;
    state.stop()?;

    if let Some(snapshot) = last {
        info!(
            "finished at t={:.1}s on wave {}: {} gold, {} lives",
            snapshot.time.elapsed_secs,
            snapshot.wave.wave,
            snapshot.economy.gold,
            snapshot.economy.lives
        );
    }
    Ok(())
}

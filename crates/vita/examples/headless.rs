//! Runs a simulation with no GUI, printing each frame to stdout.
//!
//! ```text
//! cargo run -p vita --example headless -- [pattern] [generations] [interval_ms]
//! ```
//!
//! `pattern` is one of the library names (default `glider`) or `random`.
//! `generations` is `-1` for unbounded (default 32).

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use vita::grid::pattern;
use vita::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = std::env::args().skip(1);
    let shape = args.next().unwrap_or_else(|| "glider".to_owned());
    let generations: i64 = args.next().map_or(Ok(32), |s| s.parse())?;
    let interval_ms: u64 = args.next().map_or(Ok(100), |s| s.parse())?;

    let config = SimConfig {
        width: 20,
        height: 20,
        max_generations: MaxGenerations::try_from(generations)?,
        tick_interval: Duration::from_millis(interval_ms),
    };

    let (observer, frames) = ChannelObserver::pair();
    let controller = Controller::new(config, Arc::new(observer))?;

    if shape == "random" {
        controller.randomize(0x5eed, 0.35)?;
    } else {
        let found = pattern::find(&shape).ok_or_else(|| format!("unknown pattern {shape:?}"))?;
        controller.place_pattern(found, 2, 2)?;
    }

    info!(%shape, "starting");
    controller.start()?;

    for frame in frames.iter() {
        println!("{frame}  population {}", frame.stats.population);
        println!("{}\n", frame.cells);
        if !frame.running {
            break;
        }
        if frame.cells.is_extinct() {
            info!(generation = %frame.generation, "population died out");
            controller.stop();
        }
    }

    let metrics = controller.metrics();
    info!(
        steps = metrics.total_steps(),
        ticks = metrics.ticks,
        overruns = metrics.overruns,
        last_step_us = metrics.last_step_us,
        "done"
    );
    Ok(())
}

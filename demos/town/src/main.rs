//! town — headless run of the epitown epidemic simulation.
//!
//! Places houses and offices at random on the tile grid, connects them with
//! a spanning-tree road network, populates the town and steps the SEIRD
//! model hour by hour until the epidemic dies out or the hour budget ends.
//! Hourly counts and the road layout are written as CSV.
//!
//! ```text
//! town --params params.json --seed 7 --max-hours 720 --out output/town
//! ```

mod layout;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use log4rs::Config;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

use ep_core::{SimParams, SimRng};
use ep_output::{CsvWriter, SimOutputObserver};
use ep_sim::SimBuilder;

use layout::random_town;

// ISO 8601 timestamp and colour-coded level.
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

/// Seed offset of the layout stream; the population uses offset 1.
const LAYOUT_STREAM: u64 = 2;

#[derive(Parser, Debug)]
#[command(version, about = "Headless epitown epidemic simulation")]
struct Args {
    /// JSON file of simulation parameters; missing fields take defaults.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Override the RNG seed from the parameter file.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many simulated hours even if infections remain.
    #[arg(long, default_value_t = 24 * 365)]
    max_hours: u64,

    /// Output directory for `hourly_counts.csv` and `roads.csv`.
    #[arg(long, default_value = "output/town")]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn init_logging(level: LevelFilter) -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .context("building log configuration")?;
    log4rs::init_config(config).context("installing logger")?;
    Ok(())
}

fn load_params(path: Option<&Path>) -> Result<SimParams> {
    let Some(path) = path else {
        return Ok(SimParams::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.into())?;

    let mut params = load_params(args.params.as_deref())?;
    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    params.validate().context("invalid parameters")?;
    for warning in params.warnings() {
        log::warn!("{warning}");
    }

    println!("=== town — {} ===", params.simulation_name);
    println!(
        "Houses: {}  |  Offices: {}  |  People: {}  |  Seed: {}",
        params.num_houses,
        params.num_offices,
        params.num_people(),
        params.seed,
    );

    // 1. Lay out the town.
    let mut layout_rng = SimRng::new(params.seed).child(LAYOUT_STREAM);
    let town = random_town(&params, &mut layout_rng)?;

    // 2. Roads, population and clock.
    let mut sim = SimBuilder::new(params, town).build()?;
    println!(
        "Road network: {} buildings, {} roads  |  {} ticks per hour",
        sim.network.node_count(),
        sim.network.edge_count(),
        sim.clock.ticks_per_hour,
    );

    // 3. Output.
    let writer = CsvWriter::new(&args.out)
        .with_context(|| format!("creating output in {}", args.out.display()))?;
    let mut obs = SimOutputObserver::new(writer);

    // 4. Run.
    let t0 = Instant::now();
    let summary = sim.run(args.max_hours, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        return Err(e).context("writing output");
    }

    // 5. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  ended day {} hour {} after {} hours ({})",
        summary.day,
        summary.hour,
        summary.hours,
        if summary.epidemic_over { "no active infections" } else { "hour budget reached" },
    );
    println!("  hourly_counts.csv : {} rows", obs.rows_written());
    println!();

    println!("{:<14} {:>8}", "State", "Agents");
    println!("{}", "-".repeat(23));
    for (state, count) in summary.final_counts.iter() {
        println!("{:<14} {:>8}", format!("{state:?}"), count);
    }

    Ok(())
}

//! odds — best odds of reaching the destination before the countdown ends.
//!
//! ```text
//! odds vehicle.json intel.json [--max-paths N] [--timeout-secs S] [--itinerary] [-v]
//! ```
//!
//! Exit status: 0 with the percentage on stdout; 2 when no route connects
//! the endpoints at all; 1 for any other failure.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use od_core::MissionParameters;
use od_journey::{EventLog, JourneyEvent, JourneySimulator};
use od_odds::{open_routes, EnumerationLimits, MissionConfig, OddsCalculator, OddsError, OddsReport};

#[derive(Debug, Parser)]
#[command(name = "odds", version)]
#[command(about = "Compute the best odds of reaching the destination before the countdown ends")]
struct Args {
    /// Vehicle document: autonomy, departure, arrival, routes_db
    vehicle: PathBuf,

    /// Intel document: countdown, bounty_hunters
    intel: PathBuf,

    /// Abort if more than this many routes exist
    #[arg(long)]
    max_paths: Option<usize>,

    /// Abort if route enumeration runs longer than this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the day-by-day itinerary of the best route
    #[arg(long)]
    itinerary: bool,

    /// Log every evaluated route (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn limits(&self) -> EnumerationLimits {
        let mut limits = EnumerationLimits::unbounded();
        if let Some(n) = self.max_paths {
            limits = limits.with_max_paths(n);
        }
        if let Some(s) = self.timeout_secs {
            limits = limits.with_deadline(Duration::from_secs(s));
        }
        limits
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(&args) {
        Ok((mission, report)) => {
            println!("odds: {:.2}%", report.percent);
            if args.itinerary {
                print_itinerary(&mission, &report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => match e.downcast_ref::<OddsError>() {
            Some(OddsError::NoPathFound { origin, destination }) => {
                eprintln!("no route from {origin} to {destination}");
                ExitCode::from(2)
            }
            _ => {
                eprintln!("error: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(args: &Args) -> Result<(MissionParameters, OddsReport)> {
    let config = MissionConfig::load(&args.vehicle, &args.intel).context("loading mission documents")?;
    let mission = config.to_mission()?;
    log::debug!(
        "{} → {}: autonomy {}, countdown {}, {} sightings",
        mission.origin,
        mission.destination,
        mission.base_autonomy,
        mission.countdown,
        mission.sightings.len(),
    );
    log::trace!("sightings: {:?}", mission.sightings.to_vec());

    let graph = open_routes(&config.vehicle.routes_db)
        .with_context(|| format!("opening route store {}", config.vehicle.routes_db.display()))?;

    let report = OddsCalculator::new(&*graph).with_limits(args.limits()).evaluate(&mission)?;
    Ok((mission, report))
}

fn print_itinerary(mission: &MissionParameters, report: &OddsReport) {
    let mut log = EventLog::new();
    let outcome = JourneySimulator::new(mission).simulate_with(&report.best_path, &mut log);

    println!("route: {} → {}", mission.origin, report.best_path);
    for event in &log.events {
        match event {
            JourneyEvent::Refuel { day, location } => println!("  {day}: refuel at {location}"),
            JourneyEvent::Wait { day, location } => println!("  {day}: hold at {location}"),
            JourneyEvent::Encounter { day, location, penalty } => {
                println!("  {day}: encounter at {location} (−{:.1} points)", penalty * 100.0)
            }
        }
    }
    println!(
        "  {}: arrive at {} (deadline {}, {} encounters)",
        outcome.elapsed,
        mission.destination,
        mission.deadline(),
        outcome.encounters,
    );
}

//! Hotspot patrol simulator CLI
//!
//! Clusters synthetic incidents into hotspots, dispatches patrol units and
//! replays incident rounds, optionally exporting every round for a renderer.

use clap::Parser;
use hotspot_core::AssignmentPolicy;
use hotspot_sim::{
    IncidentRetention, IncidentSource, SimConfig, SimError, SimExport, SimulationController,
};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Hotspot patrol simulation
#[derive(Parser, Debug)]
#[command(name = "hotspot-sim")]
#[command(about = "Cluster incidents into hotspots and dispatch patrol units", long_about = None)]
struct Args {
    /// JSON config file (flags below override it)
    #[arg(short, long)]
    config: Option<String>,

    /// Master seed for determinism
    #[arg(short, long)]
    seed: Option<u64>,

    /// Seed from OS entropy instead of the configured seed
    #[arg(long, conflicts_with = "seed")]
    unseeded: bool,

    /// Number of initial incidents
    #[arg(short = 'n', long)]
    incidents: Option<usize>,

    /// Number of hotspots (k)
    #[arg(short = 'k', long)]
    hotspots: Option<usize>,

    /// Number of patrol units
    #[arg(short, long)]
    units: Option<usize>,

    /// Number of simulation rounds
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    rounds: Option<i64>,

    /// Unit assignment policy (nearest, round_robin)
    #[arg(long)]
    policy: Option<String>,

    /// Incident source (uniform, at_hotspot)
    #[arg(long)]
    incident_source: Option<String>,

    /// Incident retention (permanent, ephemeral)
    #[arg(long)]
    retention: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON summary on stdout
    #[arg(long)]
    json: bool,

    /// Export every round to a JSON file for rendering
    #[arg(long)]
    export: Option<String>,
}

/// Parses a policy flag or exits with the list of valid names.
fn parse_flag<T: std::str::FromStr<Err = String>>(value: &str, valid: &str) -> T {
    value.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available values: {}", valid);
        std::process::exit(1);
    })
}

fn build_config(args: &Args) -> Result<SimConfig, SimError> {
    let mut config = match &args.config {
        Some(path) => SimConfig::from_json_file(path)?,
        None => SimConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.random_seed = Some(seed);
    }
    if args.unseeded {
        config.random_seed = None;
    }
    if let Some(n) = args.incidents {
        config.num_incidents = n;
    }
    if let Some(k) = args.hotspots {
        config.num_hotspots = k;
    }
    if let Some(units) = args.units {
        config.num_patrol_units = units;
    }
    if let Some(rounds) = args.rounds {
        config.num_iterations = rounds;
    }
    if let Some(policy) = &args.policy {
        config.assignment_policy = parse_flag::<AssignmentPolicy>(policy, "nearest, round_robin");
    }
    if let Some(source) = &args.incident_source {
        config.incident_source = parse_flag::<IncidentSource>(source, "uniform, at_hotspot");
    }
    if let Some(retention) = &args.retention {
        config.incident_retention = parse_flag::<IncidentRetention>(retention, "permanent, ephemeral");
    }

    Ok(config)
}

fn run(args: &Args) -> Result<(), SimError> {
    let config = build_config(args)?;
    let mut controller = SimulationController::new(config)?;

    if !args.json {
        info!("Hotspot patrol simulator v0.1.0 (seed={})", controller.seed());
    }

    let mut export = args.export.as_ref().map(|_| {
        let config = controller.config();
        SimExport::new(controller.seed(), config.num_hotspots, config.num_patrol_units)
    });
    if let (Some(export), Some(initial)) = (export.as_mut(), controller.initial_snapshot()) {
        export.set_initial(initial);
    }

    let summary = controller.run(&mut export)?;

    if let (Some(export), Some(path)) = (&export, &args.export) {
        export.write_to_file(path)?;
        info!("Exported {} frames to {}", export.frames.len(), path);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for (i, center) in summary.final_centers.iter().enumerate() {
            info!("  hotspot {} at ({:.4}, {:.4})", i, center.x, center.y);
        }
        info!("Replay with --seed {}", summary.seed);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    if let Err(e) = run(&args) {
        error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}

//! streetsafe — find the safest route between two locations on a street map,
//! weighting each road by the crime reported near it.
//!
//! ```text
//! streetsafe <map-file> <start-name> <end-name> [--incidents <file>]
//! ```
//!
//! Location names are the `<lon>,<lat>` strings used in the map file.  The
//! optional incidents file is an already-downloaded open-data crime payload
//! (JSON array); without it the route is weighted by base cost alone.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};

use ss_graph::WeightingPolicy;
use ss_ingest::{load_map, read_incidents};
use ss_route::{DijkstraRouter, Router};

const USAGE: &str = "usage: streetsafe <map-file> <start-name> <end-name> [--incidents <file>]";

struct Args {
    map:       PathBuf,
    start:     String,
    end:       String,
    incidents: Option<PathBuf>,
}

fn parse_args() -> Option<Args> {
    let mut positional = Vec::new();
    let mut incidents = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--incidents" {
            incidents = Some(PathBuf::from(args.next()?));
        } else {
            positional.push(arg);
        }
    }
    // Exactly three positional arguments; anything else is a usage failure.
    let [map, start, end] = <[String; 3]>::try_from(positional).ok()?;
    Some(Args { map: PathBuf::from(map), start, end, incidents })
}

fn main() -> ExitCode {
    let Some(args) = parse_args() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("streetsafe: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let (mut graph, locations) = load_map(&args.map)
        .with_context(|| format!("loading map {}", args.map.display()))?;
    println!(
        "loaded {} locations, {} road segments",
        graph.vertex_count(),
        graph.edge_count()
    );

    if let Some(path) = &args.incidents {
        let incidents = read_incidents(path)
            .with_context(|| format!("reading incidents {}", path.display()))?;
        ss_route::assign_incidents(&mut graph, &incidents, WeightingPolicy::Accumulate)?;
        println!("weighted roads with {} incident reports", incidents.len());
    }

    let start = locations.resolve(&args.start)?;
    let end = locations.resolve(&args.end)?;

    match DijkstraRouter.route(&graph, start, end)? {
        Some(route) => {
            println!("safest route from {} to {}:", args.start, args.end);
            for label in route.labels(&graph)? {
                println!("  {label}");
            }
            println!("total cost: {:.2}", route.total_cost);
        }
        None => println!("no path found from {} to {}", args.start, args.end),
    }
    Ok(ExitCode::SUCCESS)
}

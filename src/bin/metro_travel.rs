use log::error;
use metro_travel::loader::{read_destinations, read_fares};
use metro_travel::report::Report;
use metro_travel::{OutputFormat, PathFinder, RouteGraph, TravelConfig};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = match TravelConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };

    // Loading failures are fatal: there is nothing to route over
    let catalog = read_destinations(&config.destinations_path).map_err(|err| {
        error!("Could not load {}: {}", config.destinations_path.display(), err);
        err
    })?;
    let fares = read_fares(&config.fares_path).map_err(|err| {
        error!("Could not load {}: {}", config.fares_path.display(), err);
        err
    })?;

    let graph = RouteGraph::new(&catalog, Some(&fares))?;
    let view = graph.filtered_view(config.has_visa);
    let finder = PathFinder::new(&view);

    let report = Report::for_query(&finder, &config)?;

    match config.output {
        OutputFormat::Text => println!("{}", report.text),
        OutputFormat::Json => println!("{}", report.to_json(&finder, &config)?),
    }

    Ok(())
}

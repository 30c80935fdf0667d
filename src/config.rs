use std::path::PathBuf;

use crate::{Error, Result};

/// Which route the traveller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// Cheapest route plus cheaper-first alternatives
    #[default]
    Cost,
    /// Route with the fewest stops
    Stops,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// The render model of the view, with the route highlighted
    Json,
}

/// Configuration for one route query
#[derive(Debug, Clone, PartialEq)]
pub struct TravelConfig {
    pub destinations_path: PathBuf,
    pub fares_path: PathBuf,
    pub origin: String,
    pub destination: String,
    pub has_visa: bool,
    pub mode: QueryMode,
    /// Number of routes listed in cost mode, the cheapest included
    pub alternatives: usize,
    pub output: OutputFormat,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            destinations_path: PathBuf::from("destinos.txt"),
            fares_path: PathBuf::from("tarifas.txt"),
            origin: String::new(),
            destination: String::new(),
            has_visa: false,
            mode: QueryMode::Cost,
            alternatives: 4,
            output: OutputFormat::Text,
        }
    }
}

pub const USAGE: &str = "usage: metro_travel <ORIGIN> <DESTINATION> [--visa] [--stops] \
[--alternatives N] [--destinations PATH] [--fares PATH] [--json]";

impl TravelConfig {
    /// Parses command line arguments, program name excluded
    ///
    /// Rejects a missing endpoint and an origin equal to the destination.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = TravelConfig::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--visa" => config.has_visa = true,
                "--stops" => config.mode = QueryMode::Stops,
                "--json" => config.output = OutputFormat::Json,
                "--alternatives" | "-k" => {
                    let value = flag_value(&mut args, &arg)?;
                    config.alternatives = value.parse().map_err(|_| {
                        Error::InvalidArgument(format!("{} expects a number, got '{}'", arg, value))
                    })?;
                }
                "--destinations" => config.destinations_path = PathBuf::from(flag_value(&mut args, &arg)?),
                "--fares" => config.fares_path = PathBuf::from(flag_value(&mut args, &arg)?),
                flag if flag.starts_with("--") => {
                    return Err(Error::InvalidArgument(format!("unknown option {}", flag)));
                }
                _ => positional.push(arg.trim().to_string()),
            }
        }

        match positional.as_slice() {
            [origin, destination] => {
                config.origin = origin.clone();
                config.destination = destination.clone();
            }
            _ => return Err(Error::InvalidArgument(USAGE.to_string())),
        }

        if config.origin.is_empty() || config.destination.is_empty() {
            return Err(Error::InvalidArgument(
                "select both an origin and a destination".to_string(),
            ));
        }
        if config.origin == config.destination {
            return Err(Error::InvalidArgument(
                "origin and destination cannot be the same".to_string(),
            ));
        }

        Ok(config)
    }
}

fn flag_value<I>(args: &mut I, flag: &str) -> Result<String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| Error::InvalidArgument(format!("{} expects a value", flag)))
}

//! Text and JSON answers for one route query.
//!
//! Visa and connectivity failures are expected outcomes here: they become a
//! message for the traveller instead of an error. Anything else is passed on.

use serde_json::json;

use crate::config::{QueryMode, TravelConfig};
use crate::finder::PathFinder;
use crate::render::{Highlight, RenderGraph};
use crate::{Error, Result, Unreachable};

/// The answer to one query: what to print and the route to highlight
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub text: String,
    /// Airport codes of the chosen route, empty when there is none
    pub path: Vec<String>,
}

impl Report {
    /// Runs the query `config` asks for and formats the outcome
    pub fn for_query(finder: &PathFinder<'_>, config: &TravelConfig) -> Result<Self> {
        let outcome = match config.mode {
            QueryMode::Cost => cost_report(finder, &config.origin, &config.destination, config.alternatives),
            QueryMode::Stops => stops_report(finder, &config.origin, &config.destination),
        };

        match outcome {
            Ok(report) => Ok(report),
            Err(err @ (Error::NotReachable { .. } | Error::NoPath { .. })) => Ok(Report {
                text: user_message(&err),
                path: Vec::new(),
            }),
            Err(err) => Err(err),
        }
    }

    /// JSON document with the report, the route and the render model of the view
    pub fn to_json(&self, finder: &PathFinder<'_>, config: &TravelConfig) -> serde_json::Result<String> {
        let highlight = Highlight {
            origin: Some(config.origin.as_str()),
            destination: Some(config.destination.as_str()),
            path: &self.path,
        };
        let graph = RenderGraph::from_view(finder.view(), &highlight);
        let document = json!({ "report": self.text, "path": self.path, "graph": graph });
        serde_json::to_string_pretty(&document)
    }
}

/// Cheapest route followed by up to `alternatives - 1` dearer ones
///
/// At least the cheapest route is always listed, even when `alternatives` is 0.
pub fn cost_report(finder: &PathFinder<'_>, origin: &str, destination: &str, alternatives: usize) -> Result<Report> {
    // The k-best query swallows failures, so surface visa and unknown-airport problems first
    finder.view().resolve(origin)?;
    finder.view().resolve(destination)?;

    let routes = finder.k_shortest_paths_by_cost(origin, destination, alternatives.max(1));
    let Some(best) = routes.first() else {
        return Err(Error::NoPath {
            origin: origin.to_string(),
            destination: destination.to_string(),
        });
    };

    let mut text = format!("Total cost: ${:.2}\nRoute: {}\n", best.cost, best.path.join(" -> "));
    if routes.len() > 1 {
        text.push_str("\nOther possible routes (more expensive):\n");
        for (idx, route) in routes.iter().enumerate().skip(1) {
            text.push_str(&format!(
                "Route {}: ${:.2} | {}\n",
                idx + 1,
                route.cost,
                route.path.join(" -> ")
            ));
        }
    }

    Ok(Report {
        text,
        path: best.path.clone(),
    })
}

pub fn stops_report(finder: &PathFinder<'_>, origin: &str, destination: &str) -> Result<Report> {
    let route = finder.shortest_path_by_stops(origin, destination)?;
    let text = format!(
        "Number of stops: {}\nTotal cost: ${:.2}\nRoute: {}",
        route.stops,
        route.cost,
        route.path.join(" -> ")
    );
    Ok(Report { text, path: route.path })
}

/// Message shown to the traveller for a failed query
pub fn user_message(err: &Error) -> String {
    match err {
        Error::NotReachable {
            reason: Unreachable::VisaRequired { name },
            ..
        } => format!("You cannot travel to {} without a visa.", name),
        other => other.to_string(),
    }
}

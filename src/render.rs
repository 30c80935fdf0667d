use serde::{Deserialize, Serialize};

use crate::graph::FilteredView;

/// Represents an airport for visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub visa_required: bool,
    #[serde(default)]
    pub is_origin: bool,
    #[serde(default)]
    pub is_destination: bool,
    #[serde(default)]
    pub on_path: bool,
}

/// Represents a fare for visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEdge {
    pub source: String,
    pub target: String,
    pub price: f64,
    #[serde(default)]
    pub is_path: bool,
}

/// Everything a presentation layer needs to draw one view of the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderGraph {
    pub has_visa: bool,
    pub nodes: Vec<RenderNode>,
    pub links: Vec<RenderEdge>,
}

/// What to emphasise when rendering a view
#[derive(Debug, Clone, Default)]
pub struct Highlight<'a> {
    pub origin: Option<&'a str>,
    pub destination: Option<&'a str>,
    pub path: &'a [String],
}

impl RenderGraph {
    /// Converts a view into render structures, marking the highlighted route
    ///
    /// A path edge is matched in either orientation since fares are undirected.
    pub fn from_view(view: &FilteredView<'_>, highlight: &Highlight<'_>) -> Self {
        let on_path = |code: &str| highlight.path.iter().any(|step| step == code);
        let path_edge = |a: &str, b: &str| {
            highlight
                .path
                .windows(2)
                .any(|hop| (hop[0] == a && hop[1] == b) || (hop[0] == b && hop[1] == a))
        };

        let nodes = view
            .airports()
            .map(|airport| RenderNode {
                id: airport.code.clone(),
                label: airport.name.clone(),
                visa_required: airport.visa_required,
                is_origin: highlight.origin == Some(airport.code.as_str()),
                is_destination: highlight.destination == Some(airport.code.as_str()),
                on_path: on_path(&airport.code),
            })
            .collect();

        let links = view
            .connections()
            .into_iter()
            .map(|connection| RenderEdge {
                source: connection.from.code.clone(),
                target: connection.to.code.clone(),
                price: connection.price,
                is_path: path_edge(&connection.from.code, &connection.to.code),
            })
            .collect();

        RenderGraph {
            has_visa: view.has_visa(),
            nodes,
            links,
        }
    }

    /// Serializes the render model as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

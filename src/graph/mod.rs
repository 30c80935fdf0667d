pub mod traits;
pub mod model;
pub mod route;
pub mod view;
pub mod masked;
pub mod generators;

pub use traits::Graph;
pub use model::{Airport, Destination, DestinationCatalog, Fare};
pub use route::{Cost, RouteGraph};
pub use view::{Connection, FilteredView};
pub use masked::MaskedGraph;

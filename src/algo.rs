pub mod connected;
pub mod connected_components;
pub mod cycle;
pub mod shortest_paths;
pub mod spanning_forest;

mod forest;

pub use connected::{is_connected, path_exists, Connected};
pub use connected_components::{num_connected_components, ConnectedComponents};
pub use cycle::{has_cycle, Cyclic};
pub use shortest_paths::{shortest_path_length, Distances};
pub use spanning_forest::{spanning_forest, SpanningForest};

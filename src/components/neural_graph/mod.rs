mod component;
pub mod layout;
mod render;
mod state;
mod types;

pub use component::NeuralGraphCanvas;
pub use types::{GraphData, GraphEdge, GraphNode};

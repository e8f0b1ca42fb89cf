#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	/// Hours played (or another magnitude); drives the node radius.
	pub weight: f64,
}

#[derive(Clone, Debug)]
pub struct GraphEdge {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

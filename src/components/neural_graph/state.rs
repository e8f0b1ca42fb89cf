use std::collections::HashMap;

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::layout::{self, PlacedNode};
use super::types::GraphData;

pub const HIT_RADIUS: f64 = 12.0;

const ACTIVE_SCALE: f64 = 1.2;
const HOVER_SCALE: f64 = 1.1;
const SCALE_EASE_SPEED: f64 = 6.0;

pub struct NeuralGraphState {
	data: GraphData,
	positions: HashMap<String, PlacedNode>,
	scales: HashMap<String, f64>,
	pub width: f64,
	pub height: f64,
	seed: u64,
	pub hover: Option<String>,
	pub active: Option<String>,
	pub pulse_time: f64,
}

impl NeuralGraphState {
	pub fn new(data: GraphData, width: f64, height: f64, seed: u64) -> Self {
		let mut state = Self {
			scales: data.nodes.iter().map(|n| (n.id.clone(), 1.0)).collect(),
			data,
			positions: HashMap::new(),
			width,
			height,
			seed,
			hover: None,
			active: None,
			pulse_time: 0.0,
		};
		state.recompute();
		state
	}

	/// Re-run the layout at the current dimensions with the stored seed.
	fn recompute(&mut self) {
		let mut rng = SmallRng::seed_from_u64(self.seed);
		self.positions = layout::compute_layout(
			&self.data,
			self.width,
			self.height,
			layout::DEFAULT_ITERATIONS,
			&mut rng,
		);
		debug!(
			"laid out {} nodes in {}x{} (seed {})",
			self.positions.len(),
			self.width,
			self.height,
			self.seed
		);
	}

	pub fn data(&self) -> &GraphData {
		&self.data
	}

	pub fn positions(&self) -> &HashMap<String, PlacedNode> {
		&self.positions
	}

	pub fn position(&self, id: &str) -> Option<&PlacedNode> {
		self.positions.get(id)
	}

	pub fn scale(&self, id: &str) -> f64 {
		self.scales.get(id).copied().unwrap_or(1.0)
	}

	/// The topmost node whose disc (floored at HIT_RADIUS) covers the point.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<String> {
		let mut found = None;
		for node in &self.data.nodes {
			if let Some(placed) = self.positions.get(&node.id) {
				let (dx, dy) = (placed.x - x, placed.y - y);
				if (dx * dx + dy * dy).sqrt() < placed.radius.max(HIT_RADIUS) {
					found = Some(node.id.clone());
				}
			}
		}
		found
	}

	pub fn set_hover(&mut self, node: Option<String>) {
		self.hover = node;
	}

	pub fn set_active(&mut self, node: Option<String>) {
		self.active = node;
	}

	pub fn is_active(&self, id: &str) -> bool {
		self.active.as_deref() == Some(id)
	}

	pub fn is_hovered(&self, id: &str) -> bool {
		self.hover.as_deref() == Some(id)
	}

	/// An edge is highlighted when the active node is one of its endpoints.
	pub fn edge_highlighted(&self, source: &str, target: &str) -> bool {
		self.active.as_deref() == Some(source) || self.active.as_deref() == Some(target)
	}

	/// Ease each node's display scale toward its target and advance the
	/// glow clock.
	pub fn tick(&mut self, dt: f64) {
		self.pulse_time += dt;
		let step = (SCALE_EASE_SPEED * dt).min(1.0);
		for node in &self.data.nodes {
			let target = if self.is_active(&node.id) {
				ACTIVE_SCALE
			} else if self.is_hovered(&node.id) {
				HOVER_SCALE
			} else {
				1.0
			};
			let scale = self.scales.entry(node.id.clone()).or_insert(1.0);
			*scale += (target - *scale) * step;
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.recompute();
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::{GraphEdge, GraphNode};
	use super::*;

	fn sample_data() -> GraphData {
		GraphData {
			nodes: vec![
				GraphNode { id: "a".into(), label: "A".into(), weight: 0.0 },
				GraphNode { id: "b".into(), label: "B".into(), weight: 150.0 },
				GraphNode { id: "c".into(), label: "C".into(), weight: 300.0 },
			],
			edges: vec![
				GraphEdge { source: "a".into(), target: "b".into() },
				GraphEdge { source: "b".into(), target: "c".into() },
			],
		}
	}

	#[test]
	fn hit_test_finds_node_at_its_center_and_misses_far_away() {
		let state = NeuralGraphState::new(sample_data(), 400.0, 400.0, 3);
		for node in &state.data().nodes {
			let placed = state.position(&node.id).copied().unwrap();
			assert!(
				state.node_at_position(placed.x, placed.y).is_some(),
				"no hit at center of {}",
				node.id
			);
		}
		assert_eq!(state.node_at_position(-50.0, -50.0), None);
	}

	#[test]
	fn resize_recomputes_within_new_bounds() {
		let mut state = NeuralGraphState::new(sample_data(), 400.0, 400.0, 11);
		state.resize(240.0, 180.0);
		for placed in state.positions().values() {
			assert!(placed.x >= placed.radius && placed.x <= 240.0 - placed.radius);
			assert!(placed.y >= placed.radius && placed.y <= 180.0 - placed.radius);
		}
	}

	#[test]
	fn resize_with_same_dimensions_is_stable() {
		let mut state = NeuralGraphState::new(sample_data(), 400.0, 400.0, 21);
		let before = state.positions().clone();
		state.resize(400.0, 400.0);
		assert_eq!(&before, state.positions());
	}

	#[test]
	fn scales_ease_toward_their_targets() {
		let mut state = NeuralGraphState::new(sample_data(), 400.0, 400.0, 5);
		state.set_active(Some("a".into()));
		state.set_hover(Some("b".into()));

		let mut last_a = state.scale("a");
		let mut last_b = state.scale("b");
		for _ in 0..30 {
			state.tick(0.016);
			let (a, b) = (state.scale("a"), state.scale("b"));
			assert!(a >= last_a && a <= ACTIVE_SCALE);
			assert!(b >= last_b && b <= HOVER_SCALE);
			(last_a, last_b) = (a, b);
		}
		assert!(last_a > 1.15);
		assert!(last_b > 1.05);
		assert!((state.scale("c") - 1.0).abs() < 1e-9);

		// Clearing the selection eases back down.
		state.set_active(None);
		state.tick(0.016);
		assert!(state.scale("a") < last_a);
	}
}

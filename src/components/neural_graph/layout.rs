//! Force-directed placement for the neural graph.
//!
//! A fixed-iteration batch relaxation: nodes start at seeded-random
//! positions, then repel close neighbours and are pulled along edges that
//! stretch past the rest length, with a bounds clamp after every
//! iteration. There is no convergence check; the iteration count alone
//! terminates the pass. Output is deterministic for a given RNG seed, and
//! intentionally varies between seeds.

use std::collections::HashMap;

use rand::Rng;

use super::types::GraphData;

/// Radius of a weightless node.
pub const BASE_RADIUS: f64 = 10.0;
/// Weight units per additional pixel of radius.
pub const WEIGHT_SCALE: f64 = 50.0;
/// Relaxation passes for a standard layout.
pub const DEFAULT_ITERATIONS: usize = 100;

const PLACEMENT_MARGIN: f64 = 100.0;
const REPULSION_RANGE: f64 = 100.0;
const REST_LENGTH: f64 = 150.0;
const FORCE_STEP: f64 = 5.0;
const ATTRACTION_FALLOFF: f64 = 1000.0;

/// A laid-out node, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedNode {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
}

/// Visual radius for a node of the given weight. Monotone in the weight.
pub fn node_radius(weight: f64) -> f64 {
	BASE_RADIUS + weight / WEIGHT_SCALE
}

/// Compute positions for every node of `data` within `width` x `height`.
///
/// Edges naming unknown node ids are skipped; they never fail the call.
/// The layout is reproducible for a fixed `rng` seed and iteration count.
pub fn compute_layout<R: Rng>(
	data: &GraphData,
	width: f64,
	height: f64,
	iterations: usize,
	rng: &mut R,
) -> HashMap<String, PlacedNode> {
	let mut index = HashMap::new();
	for (i, node) in data.nodes.iter().enumerate() {
		index.insert(node.id.as_str(), i);
	}

	// Initial placement, inset so the first iterations rarely touch the
	// clamp. Small viewports shrink the inset rather than inverting it.
	let margin_x = PLACEMENT_MARGIN.min(width / 2.0);
	let margin_y = PLACEMENT_MARGIN.min(height / 2.0);
	let mut placed: Vec<PlacedNode> = data
		.nodes
		.iter()
		.map(|node| PlacedNode {
			x: margin_x + rng.random::<f64>() * (width - 2.0 * margin_x),
			y: margin_y + rng.random::<f64>() * (height - 2.0 * margin_y),
			radius: node_radius(node.weight),
		})
		.collect();

	let edges: Vec<(usize, usize)> = data
		.edges
		.iter()
		.filter_map(|edge| {
			match (index.get(edge.source.as_str()), index.get(edge.target.as_str())) {
				(Some(&src), Some(&tgt)) => Some((src, tgt)),
				_ => None,
			}
		})
		.collect();

	relax(&mut placed, &edges, width, height, iterations);

	data.nodes
		.iter()
		.zip(placed)
		.map(|(node, pos)| (node.id.clone(), pos))
		.collect()
}

/// Run the fixed-count relaxation over already-placed nodes.
fn relax(nodes: &mut [PlacedNode], edges: &[(usize, usize)], width: f64, height: f64, iterations: usize) {
	for _ in 0..iterations {
		// Repulsion over ordered pairs: each unordered pair is visited
		// twice per iteration, displacing both endpoints each visit.
		for i in 0..nodes.len() {
			for j in 0..nodes.len() {
				if i == j {
					continue;
				}
				let dx = nodes[j].x - nodes[i].x;
				let dy = nodes[j].y - nodes[i].y;
				let dist = (dx * dx + dy * dy).sqrt();
				if dist < REPULSION_RANGE {
					// atan2 keeps coincident nodes from producing NaN;
					// they part along the x axis.
					let angle = dy.atan2(dx);
					let force = 1.0 / (dist + 1.0);
					let (fx, fy) = (angle.cos() * force * FORCE_STEP, angle.sin() * force * FORCE_STEP);
					nodes[j].x += fx;
					nodes[j].y += fy;
					nodes[i].x -= fx;
					nodes[i].y -= fy;
				}
			}
		}

		// One-sided springs: edges only pull once stretched past the rest
		// length, never push.
		for &(src, tgt) in edges {
			let dx = nodes[tgt].x - nodes[src].x;
			let dy = nodes[tgt].y - nodes[src].y;
			let dist = (dx * dx + dy * dy).sqrt();
			if dist > REST_LENGTH {
				let angle = dy.atan2(dx);
				let force = (dist - REST_LENGTH) / ATTRACTION_FALLOFF;
				let (fx, fy) = (angle.cos() * force * FORCE_STEP, angle.sin() * force * FORCE_STEP);
				nodes[src].x += fx;
				nodes[src].y += fy;
				nodes[tgt].x -= fx;
				nodes[tgt].y -= fy;
			}
		}

		for node in nodes.iter_mut() {
			node.x = clamp_axis(node.x, node.radius, width);
			node.y = clamp_axis(node.y, node.radius, height);
		}
	}
}

/// Clamp a center coordinate to `[radius, extent - radius]`, min before
/// max, so an extent below one diameter resolves to the near bound
/// instead of panicking.
fn clamp_axis(value: f64, radius: f64, extent: f64) -> f64 {
	value.min(extent - radius).max(radius)
}

#[cfg(test)]
mod tests {
	use float_cmp::approx_eq;
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::super::types::{GraphEdge, GraphNode};
	use super::*;

	fn graph(weights: &[f64], edges: &[(usize, usize)]) -> GraphData {
		GraphData {
			nodes: weights
				.iter()
				.enumerate()
				.map(|(i, &weight)| GraphNode {
					id: i.to_string(),
					label: format!("Node {i}"),
					weight,
				})
				.collect(),
			edges: edges
				.iter()
				.map(|&(src, tgt)| GraphEdge {
					source: src.to_string(),
					target: tgt.to_string(),
				})
				.collect(),
		}
	}

	fn assert_within_bounds(layout: &HashMap<String, PlacedNode>, width: f64, height: f64) {
		for (id, node) in layout {
			assert!(
				node.x >= node.radius && node.x <= width - node.radius,
				"node {id} x {} outside [{}, {}]",
				node.x,
				node.radius,
				width - node.radius
			);
			assert!(
				node.y >= node.radius && node.y <= height - node.radius,
				"node {id} y {} outside [{}, {}]",
				node.y,
				node.radius,
				height - node.radius
			);
		}
	}

	#[test]
	fn positions_bounded_from_first_iteration() {
		let data = graph(&[120.0, 0.0, 300.0, 45.0], &[(0, 1), (1, 2), (2, 3)]);
		for seed in 0..16 {
			for iterations in [1, DEFAULT_ITERATIONS] {
				let mut rng = SmallRng::seed_from_u64(seed);
				let layout = compute_layout(&data, 400.0, 300.0, iterations, &mut rng);
				assert_within_bounds(&layout, 400.0, 300.0);
			}
		}
	}

	#[test]
	fn single_node_stays_bounded_for_any_seed() {
		let data = graph(&[200.0], &[]);
		for seed in 0..64 {
			let mut rng = SmallRng::seed_from_u64(seed);
			let layout = compute_layout(&data, 400.0, 400.0, DEFAULT_ITERATIONS, &mut rng);
			assert_eq!(layout.len(), 1);
			assert_within_bounds(&layout, 400.0, 400.0);
		}
	}

	#[test]
	fn empty_graph_yields_empty_layout() {
		let data = GraphData::default();
		let mut rng = SmallRng::seed_from_u64(7);
		assert!(compute_layout(&data, 400.0, 400.0, DEFAULT_ITERATIONS, &mut rng).is_empty());
	}

	#[test]
	fn same_seed_reproduces_layout() {
		let data = graph(&[10.0, 20.0, 30.0], &[(0, 1), (1, 2)]);
		let mut a = SmallRng::seed_from_u64(42);
		let mut b = SmallRng::seed_from_u64(42);
		let first = compute_layout(&data, 500.0, 400.0, DEFAULT_ITERATIONS, &mut a);
		let second = compute_layout(&data, 500.0, 400.0, DEFAULT_ITERATIONS, &mut b);
		assert_eq!(first, second);
	}

	#[test]
	fn dangling_edge_leaves_positions_untouched() {
		let mut with_ghost = graph(&[50.0, 80.0], &[(0, 1)]);
		with_ghost.edges.push(GraphEdge {
			source: "0".into(),
			target: "ghost".into(),
		});
		let clean = graph(&[50.0, 80.0], &[(0, 1)]);

		let mut a = SmallRng::seed_from_u64(9);
		let mut b = SmallRng::seed_from_u64(9);
		let ghosted = compute_layout(&with_ghost, 400.0, 400.0, DEFAULT_ITERATIONS, &mut a);
		let reference = compute_layout(&clean, 400.0, 400.0, DEFAULT_ITERATIONS, &mut b);
		assert_eq!(ghosted, reference);
		assert!(!ghosted.contains_key("ghost"));
	}

	#[test]
	fn radius_is_monotone_in_weight() {
		assert!(approx_eq!(f64, node_radius(0.0), 10.0));
		assert!(approx_eq!(f64, node_radius(100.0), 12.0));
		let mut previous = node_radius(0.0);
		for weight in (0..=500).step_by(25) {
			let radius = node_radius(weight as f64);
			assert!(radius >= previous);
			previous = radius;
		}
		assert!(node_radius(0.0) < node_radius(100.0));
	}

	#[test]
	fn clamp_is_idempotent() {
		for value in [-50.0, 0.0, 10.0, 199.5, 390.0, 500.0] {
			let once = clamp_axis(value, 10.0, 400.0);
			assert_eq!(clamp_axis(once, 10.0, 400.0), once);
		}
		// Extent below one diameter settles on the near bound, still stable.
		let tight = clamp_axis(5.0, 10.0, 15.0);
		assert_eq!(clamp_axis(tight, 10.0, 15.0), tight);
	}

	#[test]
	fn connected_pair_separates_toward_rest_length() {
		// Two weightless nodes dropped 10 units apart in a 400x400
		// viewport: repulsion dominates until the pair leaves the
		// repulsion range, attraction never engages below the rest
		// length, so the gap widens toward the [range, rest-length] band.
		let edges = [(0usize, 1usize)];
		let mut nodes = [
			PlacedNode { x: 195.0, y: 200.0, radius: node_radius(0.0) },
			PlacedNode { x: 205.0, y: 200.0, radius: node_radius(0.0) },
		];
		relax(&mut nodes, &edges, 400.0, 400.0, DEFAULT_ITERATIONS);
		let dist = ((nodes[1].x - nodes[0].x).powi(2) + (nodes[1].y - nodes[0].y).powi(2)).sqrt();
		assert!(dist > 40.0, "pair failed to separate: {dist}");
		assert!(dist < 160.0, "pair overshot the rest length: {dist}");
		for node in &nodes {
			assert!(node.x >= 10.0 && node.x <= 390.0);
			assert!(node.y >= 10.0 && node.y <= 390.0);
		}

		// Run long enough and the gap settles just past the repulsion
		// range, inside the force-free band below the rest length.
		relax(&mut nodes, &edges, 400.0, 400.0, 1000);
		let settled = ((nodes[1].x - nodes[0].x).powi(2) + (nodes[1].y - nodes[0].y).powi(2)).sqrt();
		assert!((95.0..160.0).contains(&settled), "settled distance {settled}");
	}

	proptest! {
		#[test]
		fn boundedness_holds_for_arbitrary_inputs(
			seed in 0u64..1024,
			weights in prop::collection::vec(0.0f64..400.0, 1..12),
			width in 60.0f64..800.0,
			height in 60.0f64..800.0,
		) {
			// Chain the nodes so attraction participates too.
			let edges: Vec<(usize, usize)> = (1..weights.len()).map(|i| (i - 1, i)).collect();
			let data = graph(&weights, &edges);
			let mut rng = SmallRng::seed_from_u64(seed);
			let layout = compute_layout(&data, width, height, 30, &mut rng);
			for node in layout.values() {
				prop_assert!(node.x >= node.radius && node.x <= width - node.radius);
				prop_assert!(node.y >= node.radius && node.y <= height - node.radius);
			}
		}
	}
}

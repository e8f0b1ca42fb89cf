//! Hard-coded mock data backing every demo surface. Nothing here is
//! fetched or persisted; the product tiers shown are simulations.

use crate::components::neural_graph::{GraphData, GraphEdge, GraphNode};

#[derive(Clone, Copy, Debug)]
pub struct Game {
	pub id: &'static str,
	pub name: &'static str,
	pub hours: f64,
	pub category: &'static str,
	pub connections: &'static [&'static str],
}

/// The demo library. Connection lists are symmetric, which yields
/// duplicate edges in the graph; the layout engine tolerates those.
pub const GAMES: &[Game] = &[
	Game {
		id: "elden-ring",
		name: "Elden Ring",
		hours: 120.0,
		category: "RPG",
		connections: &["dark-souls-3", "witcher-3", "starfield"],
	},
	Game {
		id: "dark-souls-3",
		name: "Dark Souls III",
		hours: 85.0,
		category: "RPG",
		connections: &["elden-ring", "bloodborne", "sekiro"],
	},
	Game {
		id: "bloodborne",
		name: "Bloodborne",
		hours: 65.0,
		category: "RPG",
		connections: &["dark-souls-3", "sekiro"],
	},
	Game {
		id: "sekiro",
		name: "Sekiro",
		hours: 50.0,
		category: "Action",
		connections: &["dark-souls-3", "bloodborne"],
	},
	Game {
		id: "witcher-3",
		name: "The Witcher 3",
		hours: 200.0,
		category: "RPG",
		connections: &["elden-ring", "cyberpunk-2077"],
	},
	Game {
		id: "cyberpunk-2077",
		name: "Cyberpunk 2077",
		hours: 90.0,
		category: "RPG",
		connections: &["witcher-3"],
	},
	Game {
		id: "starfield",
		name: "Starfield",
		hours: 110.0,
		category: "RPG",
		connections: &["elden-ring", "no-mans-sky"],
	},
	Game {
		id: "no-mans-sky",
		name: "No Man's Sky",
		hours: 75.0,
		category: "Exploration",
		connections: &["starfield"],
	},
	Game {
		id: "counter-strike-2",
		name: "Counter-Strike 2",
		hours: 300.0,
		category: "FPS",
		connections: &["valorant", "apex-legends"],
	},
	Game {
		id: "valorant",
		name: "Valorant",
		hours: 150.0,
		category: "FPS",
		connections: &["counter-strike-2", "apex-legends"],
	},
	Game {
		id: "apex-legends",
		name: "Apex Legends",
		hours: 200.0,
		category: "FPS",
		connections: &["counter-strike-2", "valorant"],
	},
];

pub fn find_game(id: &str) -> Option<&'static Game> {
	GAMES.iter().find(|game| game.id == id)
}

/// The games library as a graph, hours as node weight.
pub fn games_graph() -> GraphData {
	GraphData {
		nodes: GAMES
			.iter()
			.map(|game| GraphNode {
				id: game.id.to_string(),
				label: game.name.to_string(),
				weight: game.hours,
			})
			.collect(),
		edges: GAMES
			.iter()
			.flat_map(|game| {
				game.connections.iter().map(|target| GraphEdge {
					source: game.id.to_string(),
					target: target.to_string(),
				})
			})
			.collect(),
	}
}

/// Product-feature nodes for the fullscreen hero graph. The core node is
/// weighted heaviest so it reads as the hub.
const FEATURES: &[(&str, &str, f64, &[&str])] = &[
	(
		"core",
		"GS Core",
		500.0,
		&["timeline", "dna", "integration", "privacy", "manifesto"],
	),
	("timeline", "Timeline", 150.0, &["core", "dna"]),
	("dna", "Gaming DNA", 200.0, &["core", "timeline"]),
	("integration", "Integrations", 150.0, &["core", "privacy"]),
	("privacy", "Privacy", 120.0, &["core", "integration"]),
	("manifesto", "Manifesto", 100.0, &["core"]),
];

pub fn feature_graph() -> GraphData {
	GraphData {
		nodes: FEATURES
			.iter()
			.map(|&(id, label, weight, _)| GraphNode {
				id: id.to_string(),
				label: label.to_string(),
				weight,
			})
			.collect(),
		edges: FEATURES
			.iter()
			.flat_map(|&(id, _, _, connections)| {
				connections.iter().map(move |target| GraphEdge {
					source: id.to_string(),
					target: target.to_string(),
				})
			})
			.collect(),
	}
}

#[derive(Clone, Copy, Debug)]
pub struct TimelineEvent {
	pub id: u32,
	pub date: &'static str,
	pub title: &'static str,
	pub description: &'static str,
	pub platform: &'static str,
	pub tag: &'static str,
}

pub const TIMELINE: &[TimelineEvent] = &[
	TimelineEvent {
		id: 1,
		date: "April 15, 2023",
		title: "Completed Elden Ring",
		description: "Defeated the final boss after 120 hours of gameplay.",
		platform: "PlayStation 5",
		tag: "ER",
	},
	TimelineEvent {
		id: 2,
		date: "March 3, 2023",
		title: "Reached Global Elite in CS2",
		description: "After 300 hours, finally reached the highest competitive rank.",
		platform: "PC",
		tag: "CS",
	},
	TimelineEvent {
		id: 3,
		date: "February 20, 2023",
		title: "Started The Witcher 3",
		description: "Began a new journey in the Northern Kingdoms.",
		platform: "PC",
		tag: "W3",
	},
	TimelineEvent {
		id: 4,
		date: "January 5, 2023",
		title: "Platinum Trophy in God of War Ragnarok",
		description: "Collected all trophies and completed all side quests.",
		platform: "PlayStation 5",
		tag: "GoW",
	},
	TimelineEvent {
		id: 5,
		date: "December 10, 2022",
		title: "Reached 100 hours in Cyberpunk 2077",
		description: "Explored Night City extensively after the 2.0 update.",
		platform: "PC",
		tag: "CP",
	},
];

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
	pub id: &'static str,
	pub name: &'static str,
	pub connected: bool,
	pub last_sync: Option<String>,
	pub games_tracked: u32,
}

pub fn default_platforms() -> Vec<Platform> {
	vec![
		Platform {
			id: "steam",
			name: "Steam",
			connected: true,
			last_sync: Some("2 hours ago".into()),
			games_tracked: 42,
		},
		Platform {
			id: "playstation",
			name: "PlayStation Network",
			connected: true,
			last_sync: Some("1 day ago".into()),
			games_tracked: 18,
		},
		Platform {
			id: "xbox",
			name: "Xbox",
			connected: false,
			last_sync: None,
			games_tracked: 0,
		},
	]
}

#[derive(Clone, Copy, Debug)]
pub struct OnboardingStep {
	pub id: &'static str,
	pub title: &'static str,
	pub description: &'static str,
}

pub const ONBOARDING_STEPS: &[OnboardingStep] = &[
	OnboardingStep {
		id: "welcome",
		title: "Welcome to GameScrobbler",
		description: "Let's set up your gaming profile and connect your platforms.",
	},
	OnboardingStep {
		id: "neural-graph",
		title: "Your Neural Graph",
		description: "Discover connections between your games, playstyles, and preferences through our neural visualization.",
	},
	OnboardingStep {
		id: "platforms",
		title: "Connect Your Platforms",
		description: "Link your gaming accounts to automatically track your activity.",
	},
	OnboardingStep {
		id: "privacy",
		title: "Privacy Settings",
		description: "Control how your data is used and who can see it.",
	},
	OnboardingStep {
		id: "complete",
		title: "You're All Set!",
		description: "Your GameScrobbler profile is ready to go.",
	},
];

#[derive(Clone, Copy, Debug)]
pub struct ManifestoPrinciple {
	pub title: &'static str,
	pub body: &'static [&'static str],
}

pub const MANIFESTO: &[ManifestoPrinciple] = &[
	ManifestoPrinciple {
		title: "Data Ownership",
		body: &[
			"Your gaming data belongs to you. Not to platforms, not to publishers, and not to us. GameScrobbler exists to give gamers ownership and control over their gaming history, preferences, and achievements across all platforms.",
			"In an era where data has become the new currency, we stand firm on privacy, transparency, and user control. Your gaming DNA is yours to explore, share, or keep private as you see fit.",
		],
	},
	ManifestoPrinciple {
		title: "Interoperability",
		body: &[
			"The fragmentation of gaming platforms has created silos of player data, hiding the complete picture of your gaming journey. GameScrobbler breaks down these walls and builds a unified view of your experience regardless of where you play.",
			"Your achievements, playtime, and preferences should move seamlessly with you across platforms.",
		],
	},
	ManifestoPrinciple {
		title: "Insight",
		body: &[
			"Data without insight is just noise. The Neural Graph turns raw gaming data into meaningful patterns, connections, and discoveries about your unique gaming personality.",
			"We keep building better tools for understanding your gaming DNA, helping you discover new games and gain a deeper appreciation for your journey.",
		],
	},
	ManifestoPrinciple {
		title: "Community",
		body: &[
			"Gaming is inherently social, and sharing insights about gaming habits can strengthen communities. GameScrobbler connects players on genuine compatibility rather than arbitrary matchmaking.",
			"We envision players sharing their gaming DNA, discovering others with complementary styles, and forging connections through a shared passion for games.",
		],
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn games_graph_edges_all_reference_known_nodes() {
		let graph = games_graph();
		assert_eq!(graph.nodes.len(), GAMES.len());
		for edge in &graph.edges {
			assert!(
				graph.nodes.iter().any(|n| n.id == edge.source),
				"unknown source {}",
				edge.source
			);
			assert!(
				graph.nodes.iter().any(|n| n.id == edge.target),
				"unknown target {}",
				edge.target
			);
		}
	}

	#[test]
	fn games_connections_are_symmetric() {
		for game in GAMES {
			for target in game.connections {
				let peer = find_game(target).unwrap_or_else(|| panic!("missing game {target}"));
				assert!(
					peer.connections.contains(&game.id),
					"{} links {} but not back",
					game.id,
					target
				);
			}
		}
	}

	#[test]
	fn feature_graph_is_hub_shaped() {
		let graph = feature_graph();
		assert_eq!(graph.nodes.len(), 6);
		let core_degree = graph
			.edges
			.iter()
			.filter(|e| e.source == "core" || e.target == "core")
			.count();
		// Five spokes listed on core plus the five reciprocal listings.
		assert_eq!(core_degree, 10);
		for edge in &graph.edges {
			assert!(graph.nodes.iter().any(|n| n.id == edge.source));
			assert!(graph.nodes.iter().any(|n| n.id == edge.target));
		}
	}
}

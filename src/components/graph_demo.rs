use leptos::prelude::*;

use crate::components::neural_graph::NeuralGraphCanvas;
use crate::data::{self, Game};

/// "Your Gaming Neural Graph" section: the games graph on canvas next to
/// an insights panel for the selected node.
#[component]
pub fn GraphDemoSection() -> impl IntoView {
	let active = RwSignal::new(None::<String>);
	let graph = Signal::derive(data::games_graph);

	view! {
		<section id="demo" class="graph-demo">
			<div class="section-heading">
				<h2>"Your Gaming Neural Graph"</h2>
				<p>
					"Discover connections between your games, playstyles, and preferences through our advanced neural visualization."
				</p>
			</div>
			<div class="graph-demo-grid">
				<div class="graph-demo-canvas card">
					<NeuralGraphCanvas
						data=graph
						active=active
						on_select=Callback::new(move |id: String| active.set(Some(id)))
						height=Some(500.0)
					/>
				</div>
				<div class="graph-demo-panel card">
					<h3>"Game Insights"</h3>
					{move || match active.get().as_deref().and_then(data::find_game) {
						Some(game) => view! { <GameDetails game=game /> }.into_any(),
						None => {
							view! {
								<div class="panel-empty">
									<p>"Select a game node to view detailed insights"</p>
									<p class="muted">
										"Discover connections between games, playtime patterns, and genre preferences"
									</p>
								</div>
							}
								.into_any()
						}
					}}
				</div>
			</div>
			<p class="demo-footnote">
				"This is just a demo. Sign up to see your personalized gaming neural graph."
			</p>
		</section>
	}
}

#[component]
fn GameDetails(game: &'static Game) -> impl IntoView {
	let tab = RwSignal::new("insights");
	let playstyle = match game.category {
		"RPG" => "exploration and character development",
		"FPS" => "competitive team-based gameplay",
		_ => "immersive world interaction",
	};

	view! {
		<div class="game-details">
			<h3 class="game-name">{game.name}</h3>
			<p class="muted">"Category: " {game.category}</p>

			<div class="stat-grid">
				<div class="stat">
					<p class="stat-label">"Hours Played"</p>
					<p class="stat-value">{game.hours}</p>
				</div>
				<div class="stat">
					<p class="stat-label">"Connections"</p>
					<p class="stat-value">{game.connections.len()}</p>
				</div>
			</div>

			<h4>"Connected Games"</h4>
			<ul class="connected-games">
				{game
					.connections
					.iter()
					.filter_map(|id| data::find_game(id))
					.map(|peer| {
						view! {
							<li>
								<span class="peer-name">{peer.name}</span>
								<span class="muted">{peer.category}</span>
								<span class="peer-hours">{format!("{} hrs", peer.hours)}</span>
							</li>
						}
					})
					.collect_view()}
			</ul>

			<div class="tab-list">
				<button
					class=move || if tab.get() == "insights" { "tab active" } else { "tab" }
					on:click=move |_| tab.set("insights")
				>
					"Insights"
				</button>
				<button
					class=move || if tab.get() == "stats" { "tab active" } else { "tab" }
					on:click=move |_| tab.set("stats")
				>
					"Stats"
				</button>
			</div>
			<Show
				when=move || tab.get() == "insights"
				fallback=|| {
					view! {
						<dl class="stat-rows">
							<dt>"Last played"</dt>
							<dd>"3 days ago"</dd>
							<dt>"Achievements"</dt>
							<dd>"24/42"</dd>
							<dt>"Friends playing"</dt>
							<dd>"5"</dd>
						</dl>
					}
				}
			>
				<p>
					{format!(
						"Your playstyle in {} shows a preference for {}.",
						game.name,
						playstyle,
					)}
				</p>
			</Show>
		</div>
	}
}

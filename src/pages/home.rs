use leptos::prelude::*;

use crate::components::neural_graph::NeuralGraphCanvas;
use crate::components::{CtaSection, GraphDemoSection, Header, HeroSection, ManifestoSection};
use crate::data;

/// Scroll the landing page to the section a feature node stands for.
fn scroll_to_section(node_id: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	match node_id {
		"core" => window.scroll_to_with_x_and_y(0.0, 0.0),
		"timeline" | "dna" | "integration" => scroll_into_view(&window, "demo"),
		"privacy" | "manifesto" => scroll_into_view(&window, "manifesto"),
		_ => {}
	}
}

fn scroll_into_view(window: &web_sys::Window, element_id: &str) {
	if let Some(element) = window
		.document()
		.and_then(|document| document.get_element_by_id(element_id))
	{
		element.scroll_into_view();
	}
}

/// Landing page: fullscreen feature graph behind the hero, then the demo,
/// call-to-action, and manifesto sections.
#[component]
pub fn Home() -> impl IntoView {
	let active = RwSignal::new(Some("core".to_string()));
	let feature = Signal::derive(data::feature_graph);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<Header />
			<div class="fullscreen-graph">
				<NeuralGraphCanvas
					data=feature
					active=active
					fullscreen=true
					on_select=Callback::new(move |id: String| {
						scroll_to_section(&id);
						active.set(Some(id));
					})
				/>
				<div class="graph-overlay">
					<HeroSection />
				</div>
			</div>
			<GraphDemoSection />
			<CtaSection />
			<ManifestoSection />
		</ErrorBoundary>
	}
}

use leptos::prelude::*;

use crate::data;

#[component]
pub fn ManifestoSection() -> impl IntoView {
	view! {
		<section id="manifesto" class="manifesto">
			<h2>"The GameScrobbler Manifesto"</h2>
			<p class="lede">
				"Our vision for the future of gaming data ownership and interoperability."
			</p>
			{data::MANIFESTO
				.iter()
				.map(|principle| {
					view! {
						<article class="principle">
							<h3>{principle.title}</h3>
							{principle
								.body
								.iter()
								.map(|paragraph| view! { <p>{*paragraph}</p> })
								.collect_view()}
						</article>
					}
				})
				.collect_view()}
		</section>
	}
}

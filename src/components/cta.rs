use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn CtaSection() -> impl IntoView {
	view! {
		<section class="cta">
			<div class="cta-card">
				<h3>"Explore Your DNA"</h3>
				<p>
					"Visualize your unique gaming profile and discover your core playstyles, favorite genres, and lifetime milestones."
				</p>
				<A href="/dashboard" attr:class="button primary">"Explore Your Neural Graph"</A>
				<p class="cta-note">
					"Experience your entire gaming profile in an immersive neural graph demo."
				</p>
			</div>
			<div class="cta-card">
				<h3>"Connect Platforms"</h3>
				<p>
					"Seamlessly integrate your Steam, Xbox, and PlayStation accounts to unlock a unified data layer."
				</p>
				<button class="button" disabled>"Coming Soon"</button>
			</div>
			<div class="cta-card">
				<h3>"Read Manifesto"</h3>
				<p>
					"Discover our mission to give gamers true data ownership, interoperability, and meaningful insights."
				</p>
				<A href="/manifesto" attr:class="button">"Manifesto"</A>
			</div>
		</section>
	}
}

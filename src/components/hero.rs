use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HeroSection() -> impl IntoView {
	let visible = RwSignal::new(false);
	// Flips the fade-in class on after mount.
	Effect::new(move |_| visible.set(true));

	view! {
		<section class=move || if visible.get() { "hero hero-visible" } else { "hero" }>
			<div class="hero-emblem">"GS"</div>
			<h1>"GameScrobbler"</h1>
			<p class="hero-tagline">
				"Visualize your gaming DNA. Own your data. Connect your platforms."
			</p>
			<div class="hero-actions">
				<A href="/onboarding" attr:class="button primary">"Get Started"</A>
				<A href="/dashboard" attr:class="button">"View Dashboard"</A>
			</div>
		</section>
	}
}

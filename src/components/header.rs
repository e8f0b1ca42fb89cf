use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
	let menu_open = RwSignal::new(false);

	view! {
		<header class="site-header">
			<div class="site-header-inner">
				<A href="/" attr:class="logo">
					<span class="logo-emblem">"GS"</span>
					<span class="logo-name">"GameScrobbler"</span>
				</A>
				<nav class="nav-desktop">
					<A href="/manifesto">"Manifesto"</A>
					<A href="/dashboard">"Dashboard"</A>
					<A href="/onboarding" attr:class="nav-cta">"Get Started"</A>
				</nav>
				<button
					class="nav-toggle"
					on:click=move |_| menu_open.update(|open| *open = !*open)
				>
					{move || if menu_open.get() { "Close" } else { "Menu" }}
				</button>
			</div>
			<Show when=move || menu_open.get()>
				<nav class="nav-mobile" on:click=move |_| menu_open.set(false)>
					<A href="/manifesto">"Manifesto"</A>
					<A href="/dashboard">"Dashboard"</A>
					<A href="/onboarding">"Get Started"</A>
				</nav>
			</Show>
		</header>
	}
}

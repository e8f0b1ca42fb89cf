use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::Header;

/// 404 fallback route.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<Header />
		<main class="not-found">
			<h1>"404"</h1>
			<p>"This page does not exist."</p>
			<A href="/" attr:class="button">"Back to the homepage"</A>
		</main>
	}
}

use leptos::prelude::*;

use crate::components::{Header, ManifestoSection};

#[component]
pub fn Manifesto() -> impl IntoView {
	view! {
		<Header />
		<main class="manifesto-page">
			<ManifestoSection />
		</main>
	}
}

use leptos::prelude::*;

use crate::components::{Header, OnboardingFlow};

#[component]
pub fn Onboarding() -> impl IntoView {
	view! {
		<Header />
		<main class="onboarding-page">
			<OnboardingFlow />
		</main>
	}
}

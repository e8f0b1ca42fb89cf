use leptos::prelude::*;
use leptos_router::components::A;

use super::neural_graph::NeuralGraphCanvas;
use super::settings::PrivacyToggles;
use super::IntegrationPanel;
use crate::data;

/// Five-step setup wizard. Steps only move client-local state; the
/// platform and privacy steps reuse the real panels.
#[component]
pub fn OnboardingFlow() -> impl IntoView {
	let step = RwSignal::new(0usize);
	let last = data::ONBOARDING_STEPS.len() - 1;
	let feature = Signal::derive(data::feature_graph);

	view! {
		<div class="onboarding">
			<div class="progress-dots">
				{(0..data::ONBOARDING_STEPS.len())
					.map(|i| {
						view! {
							<span class=move || {
								if step.get() >= i { "dot filled" } else { "dot" }
							}></span>
						}
					})
					.collect_view()}
			</div>

			{move || {
				let current = data::ONBOARDING_STEPS[step.get()];
				view! {
					<h2>{current.title}</h2>
					<p class="step-description">{current.description}</p>
				}
			}}

			{move || match data::ONBOARDING_STEPS[step.get()].id {
				"neural-graph" => {
					view! {
						<div class="step-preview">
							<NeuralGraphCanvas
								data=feature
								active=Signal::derive(|| None::<String>)
								height=Some(280.0)
							/>
						</div>
					}
						.into_any()
				}
				"platforms" => view! { <IntegrationPanel /> }.into_any(),
				"privacy" => view! { <PrivacyToggles /> }.into_any(),
				"complete" => {
					view! {
						<A href="/dashboard" attr:class="button primary">"Go to Dashboard"</A>
					}
						.into_any()
				}
				_ => ().into_any(),
			}}

			<div class="wizard-nav">
				<button
					class="button"
					disabled=move || step.get() == 0
					on:click=move |_| step.update(|s| *s = s.saturating_sub(1))
				>
					"Back"
				</button>
				<button
					class="button primary"
					disabled=move || step.get() == last
					on:click=move |_| step.update(|s| *s = (*s + 1).min(last))
				>
					"Next"
				</button>
			</div>
		</div>
	}
}

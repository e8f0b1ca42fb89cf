use leptos::prelude::*;
use log::{debug, info};

use super::after;

#[derive(Clone, Copy, PartialEq)]
enum SettingsTab {
	Privacy,
	Export,
	Delete,
}

#[derive(Clone, Copy, PartialEq)]
enum ExportState {
	Idle,
	Preparing,
	Ready,
}

/// Data ownership settings: privacy toggles plus simulated export and
/// delete flows. Everything here is client-local state.
#[component]
pub fn DataOwnershipSettings() -> impl IntoView {
	let tab = RwSignal::new(SettingsTab::Privacy);
	let tabs = [
		(SettingsTab::Privacy, "Privacy"),
		(SettingsTab::Export, "Export Data"),
		(SettingsTab::Delete, "Delete Data"),
	];

	view! {
		<div class="settings">
			<div class="tab-list">
				{tabs
					.into_iter()
					.map(|(value, label)| {
						view! {
							<button
								class=move || if tab.get() == value { "tab active" } else { "tab" }
								on:click=move |_| tab.set(value)
							>
								{label}
							</button>
						}
					})
					.collect_view()}
			</div>
			{move || match tab.get() {
				SettingsTab::Privacy => {
					view! {
						<div class="settings-pane">
							<p class="intro">
								"Control how your gaming data is used and who can see it."
							</p>
							<PrivacyToggles />
						</div>
					}
						.into_any()
				}
				SettingsTab::Export => view! { <ExportPanel /> }.into_any(),
				SettingsTab::Delete => view! { <DeletePanel /> }.into_any(),
			}}
		</div>
	}
}

/// The five privacy switches; state is per-mount and flipping one only
/// logs, like every other simulated control.
#[component]
pub fn PrivacyToggles() -> impl IntoView {
	let toggles = [
		("Public Profile", "Allow others to view your profile", RwSignal::new(true)),
		("Share Game Activity", "Show games you're playing", RwSignal::new(true)),
		("Share Achievements", "Show trophies and achievements you earn", RwSignal::new(true)),
		("Allow Recommendations", "Use your history to suggest new games", RwSignal::new(true)),
		("Anonymize Data", "Strip identifying details from shared insights", RwSignal::new(false)),
	];

	view! {
		<div class="privacy-toggles">
			{toggles
				.into_iter()
				.map(|(label, description, on)| {
					view! {
						<label class="toggle-row">
							<span class="toggle-text">
								<span class="toggle-label">{label}</span>
								<p class="muted">{description}</p>
							</span>
							<input
								type="checkbox"
								prop:checked=move || on.get()
								on:change=move |_| {
									on.update(|value| *value = !*value);
									debug!("{label} set to {}", on.get_untracked());
								}
							/>
						</label>
					}
				})
				.collect_view()}
		</div>
	}
}

#[component]
fn ExportPanel() -> impl IntoView {
	let state = RwSignal::new(ExportState::Idle);

	view! {
		<div class="settings-pane">
			<p class="intro">"Download a complete archive of your gaming data."</p>
			{move || match state.get() {
				ExportState::Idle => {
					view! {
						<button
							class="button primary"
							on:click=move |_| {
								state.set(ExportState::Preparing);
								info!("preparing data export");
								after(1500, move || state.set(ExportState::Ready));
							}
						>
							"Prepare Export"
						</button>
					}
						.into_any()
				}
				ExportState::Preparing => {
					view! { <p class="muted">"Preparing your archive..."</p> }.into_any()
				}
				ExportState::Ready => {
					view! {
						<p>"Your archive is ready."</p>
						<button
							class="button"
							on:click=move |_| {
								info!("demo export downloaded");
								state.set(ExportState::Idle);
							}
						>
							"Download (demo)"
						</button>
					}
						.into_any()
				}
			}}
		</div>
	}
}

#[component]
fn DeletePanel() -> impl IntoView {
	let confirming = RwSignal::new(false);

	view! {
		<div class="settings-pane">
			<p class="intro">
				"Permanently remove your profile and history. In this demo nothing is stored, so there is nothing to lose."
			</p>
			<Show
				when=move || confirming.get()
				fallback=move || {
					view! {
						<button class="button danger" on:click=move |_| confirming.set(true)>
							"Delete All Data"
						</button>
					}
				}
			>
				<p class="warning">"This cannot be undone. Are you sure?"</p>
				<div class="confirm-actions">
					<button class="button" on:click=move |_| confirming.set(false)>
						"Cancel"
					</button>
					<button
						class="button danger"
						on:click=move |_| {
							info!("simulated account deletion");
							confirming.set(false);
						}
					>
						"Yes, delete everything"
					</button>
				</div>
			</Show>
		</div>
	}
}

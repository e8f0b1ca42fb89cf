use leptos::prelude::*;
use log::info;

use crate::components::{
	after, DataOwnershipSettings, GraphDemoSection, Header, IntegrationPanel, TimelineView,
};
use crate::data;

#[derive(Clone, Copy, PartialEq)]
enum DashboardTab {
	Overview,
	Timeline,
	Integrations,
	Settings,
}

/// Dashboard mockup: tabbed views over the same mock catalogue.
#[component]
pub fn Dashboard() -> impl IntoView {
	let tab = RwSignal::new(DashboardTab::Overview);
	let refreshing = RwSignal::new(false);
	let tabs = [
		(DashboardTab::Overview, "Overview"),
		(DashboardTab::Timeline, "Timeline"),
		(DashboardTab::Integrations, "Integrations"),
		(DashboardTab::Settings, "Settings"),
	];

	let refresh = move |_| {
		if refreshing.get_untracked() {
			return;
		}
		refreshing.set(true);
		info!("refreshing mock data");
		after(1200, move || refreshing.set(false));
	};

	view! {
		<Header />
		<main class="dashboard">
			<div class="dashboard-head">
				<div>
					<h1>"Your Gaming Dashboard"</h1>
					<p class="muted">"Welcome back, Gamer"</p>
				</div>
				<button class="button primary" disabled=move || refreshing.get() on:click=refresh>
					{move || if refreshing.get() { "Refreshing..." } else { "Refresh Data" }}
				</button>
			</div>

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
				DashboardTab::Overview => view! { <OverviewTab /> }.into_any(),
				DashboardTab::Timeline => view! { <TimelineView /> }.into_any(),
				DashboardTab::Integrations => view! { <IntegrationPanel /> }.into_any(),
				DashboardTab::Settings => view! { <DataOwnershipSettings /> }.into_any(),
			}}
		</main>
	}
}

#[component]
fn OverviewTab() -> impl IntoView {
	view! {
		<div class="overview-grid">
			<div class="overview-main">
				<GraphDemoSection />
			</div>
			<div class="card">
				<h2>"Recent Activity"</h2>
				{data::TIMELINE
					.iter()
					.take(3)
					.map(|event| {
						view! {
							<div class="activity-row">
								<span class="timeline-tag">{event.tag}</span>
								<span>
									<p>{event.title}</p>
									<p class="muted">{event.date}</p>
								</span>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}

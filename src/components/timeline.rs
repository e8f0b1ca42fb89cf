use leptos::prelude::*;

use crate::data;

/// Gaming milestones, newest first; clicking a row expands its detail.
#[component]
pub fn TimelineView() -> impl IntoView {
	let expanded = RwSignal::new(None::<u32>);

	view! {
		<div class="timeline">
			{data::TIMELINE
				.iter()
				.map(|event| {
					let id = event.id;
					view! {
						<div class="timeline-item">
							<button
								class="timeline-head"
								on:click=move |_| {
									expanded
										.update(|current| {
											*current = if *current == Some(id) { None } else { Some(id) };
										})
								}
							>
								<span class="timeline-tag">{event.tag}</span>
								<span class="timeline-summary">
									<h3>{event.title}</h3>
									<p class="muted">{event.date}</p>
								</span>
							</button>
							<Show when=move || expanded.get() == Some(id)>
								<div class="timeline-detail">
									<p>{event.description}</p>
									<p class="muted">{event.platform}</p>
								</div>
							</Show>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}

use leptos::prelude::*;
use log::{debug, info};

use super::after;
use crate::data;

/// Platform connection cards. The OAuth handshake is simulated with a
/// 2-second timer; nothing leaves the browser.
#[component]
pub fn IntegrationPanel() -> impl IntoView {
	let platforms = RwSignal::new(data::default_platforms());
	let connecting = RwSignal::new(None::<&'static str>);

	let connect = move |id: &'static str| {
		connecting.set(Some(id));
		info!("starting simulated OAuth flow for {id}");
		after(2000, move || {
			platforms.update(|list| {
				if let Some(platform) = list.iter_mut().find(|p| p.id == id) {
					platform.connected = true;
					platform.last_sync = Some("Just now".into());
					platform.games_tracked = 0;
				}
			});
			connecting.set(None);
			info!("{id} connected");
		});
	};

	let disconnect = move |id: &'static str| {
		platforms.update(|list| {
			if let Some(platform) = list.iter_mut().find(|p| p.id == id) {
				platform.connected = false;
				platform.last_sync = None;
				platform.games_tracked = 0;
			}
		});
		info!("{id} disconnected");
	};

	view! {
		<div class="integration-panel">
			<p class="intro">
				"Connect your gaming platforms to automatically track your gaming activity and build your neural graph."
			</p>
			<div class="platform-grid">
				{move || {
					platforms
						.get()
						.into_iter()
						.map(|platform| {
							let id = platform.id;
							let busy = move || connecting.get() == Some(id);
							let auto_sync = RwSignal::new(true);
							view! {
								<div class="platform-card card">
									<div class="platform-head">
										<h3>{platform.name}</h3>
										{if platform.connected {
											view! { <span class="badge connected">"Connected"</span> }
												.into_any()
										} else {
											view! { <span class="badge">"Disconnected"</span> }.into_any()
										}}
									</div>
									<dl class="platform-meta">
										<dt>"Last sync"</dt>
										<dd>
											{platform.last_sync.clone().unwrap_or_else(|| "Never".into())}
										</dd>
										<dt>"Games tracked"</dt>
										<dd>{platform.games_tracked}</dd>
									</dl>
									{if platform.connected {
										view! {
											<label class="sync-toggle">
												<input
													type="checkbox"
													prop:checked=move || auto_sync.get()
													on:change=move |_| {
														auto_sync.update(|on| *on = !*on);
														debug!(
															"auto-sync for {id} set to {}",
															auto_sync.get_untracked(),
														);
													}
												/>
												" Auto-sync"
											</label>
											<button class="button" on:click=move |_| disconnect(id)>
												"Disconnect"
											</button>
										}
											.into_any()
									} else {
										view! {
											<button
												class="button primary"
												disabled=busy
												on:click=move |_| connect(id)
											>
												{move || if busy() { "Connecting..." } else { "Connect" }}
											</button>
										}
											.into_any()
									}}
								</div>
							}
						})
						.collect_view()
				}}
			</div>
		</div>
	}
}

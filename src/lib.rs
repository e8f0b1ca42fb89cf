//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod data;
mod pages;

// Top-Level pages
use crate::pages::dashboard::Dashboard;
use crate::pages::home::Home;
use crate::pages::manifesto::Manifesto;
use crate::pages::not_found::NotFound;
use crate::pages::onboarding::Onboarding;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router covering the landing page, dashboard mockup, onboarding
/// wizard, and manifesto, and handling 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="GameScrobbler - Your Gaming DNA" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/dashboard") view=Dashboard />
				<Route path=path!("/onboarding") view=Onboarding />
				<Route path=path!("/manifesto") view=Manifesto />
			</Routes>
		</Router>
	}
}

mod cta;
mod graph_demo;
mod header;
mod hero;
mod integrations;
mod manifesto;
pub mod neural_graph;
mod onboarding;
mod settings;
mod timeline;

pub use cta::CtaSection;
pub use graph_demo::GraphDemoSection;
pub use header::Header;
pub use hero::HeroSection;
pub use integrations::IntegrationPanel;
pub use manifesto::ManifestoSection;
pub use onboarding::OnboardingFlow;
pub use settings::{DataOwnershipSettings, PrivacyToggles};
pub use timeline::TimelineView;

/// Run `f` once after `ms` milliseconds on the browser event loop.
/// Simulated flows (OAuth connects, export preparation) run through this.
pub(crate) fn after(ms: i32, f: impl FnOnce() + 'static) {
	use wasm_bindgen::JsCast;

	let cb = wasm_bindgen::closure::Closure::once_into_js(f);
	if let Some(window) = web_sys::window() {
		let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
	}
}

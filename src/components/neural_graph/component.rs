use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::NeuralGraphState;
use super::types::GraphData;

#[component]
pub fn NeuralGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(into)] active: Signal<Option<String>>,
	#[prop(into, optional)] on_select: Option<Callback<String>>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let tooltip = RwSignal::new(None::<(f64, f64, String)>);
	let state: Rc<RefCell<Option<NeuralGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(500.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		// Each mount gets its own layout; the seed is kept so resizes
		// re-place the same arrangement at the new dimensions.
		let seed = js_sys::Date::now() as u64;
		*state_init.borrow_mut() = Some(NeuralGraphState::new(data.get(), w, h, seed));

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Keep the canvas highlight in step with the owner's selection.
	let state_active = state.clone();
	Effect::new(move |_| {
		let selected = active.get();
		if let Some(ref mut s) = *state_active.borrow_mut() {
			s.set_active(selected);
		}
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hovered = s.node_at_position(x, y);
			match hovered {
				Some(ref id) => {
					let label = s
						.data()
						.nodes
						.iter()
						.find(|n| &n.id == id)
						.map(|n| n.label.clone())
						.unwrap_or_default();
					tooltip.set(Some((x + 14.0, y + 14.0, label)));
				}
				None => tooltip.set(None),
			}
			s.set_hover(hovered);
		}
	};

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		let hit = state_click
			.borrow()
			.as_ref()
			.and_then(|s| s.node_at_position(x, y));
		if let (Some(id), Some(cb)) = (hit, on_select) {
			cb.run(id);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		tooltip.set(None);
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.set_hover(None);
		}
	};

	view! {
		<div class="neural-graph" style="position: relative;">
			<canvas
				node_ref=canvas_ref
				class="neural-graph-canvas"
				on:mousemove=on_mousemove
				on:click=on_click
				on:mouseleave=on_mouseleave
				style="display: block; cursor: pointer;"
			/>
			<Show when=move || tooltip.get().is_some()>
				<div
					class="neural-graph-tooltip"
					style=move || {
						tooltip
							.get()
							.map(|(x, y, _)| {
								format!(
									"position: absolute; left: {x}px; top: {y}px; pointer-events: none;",
								)
							})
							.unwrap_or_default()
					}
				>
					{move || tooltip.get().map(|(_, _, label)| label).unwrap_or_default()}
				</div>
			</Show>
		</div>
	}
}

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::NeuralGraphState;

const BACKGROUND: &str = "#05050a";
const LABEL_RADIUS_THRESHOLD: f64 = 15.0;

pub fn render(state: &NeuralGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &NeuralGraphState, ctx: &CanvasRenderingContext2d) {
	for edge in &state.data().edges {
		// Edges naming unknown nodes are skipped here too.
		let (Some(src), Some(tgt)) = (state.position(&edge.source), state.position(&edge.target))
		else {
			continue;
		};

		let highlighted = state.edge_highlighted(&edge.source, &edge.target);
		let (alpha, width) = if highlighted { (0.8, 2.0) } else { (0.3, 1.0) };

		ctx.set_stroke_style_str(&format!("rgba(149, 76, 233, {})", alpha));
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(src.x, src.y);
		ctx.line_to(tgt.x, tgt.y);
		ctx.stroke();
	}
}

fn draw_nodes(state: &NeuralGraphState, ctx: &CanvasRenderingContext2d) {
	for node in &state.data().nodes {
		let Some(placed) = state.position(&node.id) else {
			continue;
		};
		let (is_active, is_hovered) = (state.is_active(&node.id), state.is_hovered(&node.id));
		let radius = placed.radius * state.scale(&node.id);

		if is_active || is_hovered {
			// Soft halo behind the emphasized node.
			let glow_radius = radius * 2.2;
			let alpha = if is_active {
				0.3 + 0.1 * (state.pulse_time * 2.0).sin().abs()
			} else {
				0.2
			};
			let gradient = ctx
				.create_radial_gradient(placed.x, placed.y, radius * 0.3, placed.x, placed.y, glow_radius)
				.unwrap();
			gradient
				.add_color_stop(0.0, &format!("rgba(149, 76, 233, {})", alpha))
				.unwrap();
			gradient
				.add_color_stop(1.0, "rgba(149, 76, 233, 0)")
				.unwrap();
			ctx.begin_path();
			let _ = ctx.arc(placed.x, placed.y, glow_radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}

		ctx.begin_path();
		let _ = ctx.arc(placed.x, placed.y, radius, 0.0, 2.0 * PI);
		if is_active {
			ctx.set_fill_style_str("#954ce9");
		} else {
			ctx.set_fill_style_str("rgba(149, 76, 233, 0.5)");
		}
		ctx.fill();

		if is_active {
			ctx.begin_path();
			let _ = ctx.arc(placed.x, placed.y, radius + 2.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.7)");
			ctx.set_line_width(1.5);
			ctx.stroke();
		}

		if radius > LABEL_RADIUS_THRESHOLD {
			ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");
			ctx.set_font("bold 10px sans-serif");
			ctx.set_text_align("center");
			let _ = ctx.fill_text(&short_label(&node.label), placed.x, placed.y + 3.0);
		}

		if is_active || is_hovered {
			ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
			ctx.set_font("11px sans-serif");
			ctx.set_text_align("left");
			let _ = ctx.fill_text(&node.label, placed.x + radius + 6.0, placed.y + 3.0);
		}
	}
}

/// Initials drawn inside large nodes, e.g. "Elden Ring" -> "ER".
fn short_label(label: &str) -> String {
	label
		.split_whitespace()
		.take(2)
		.filter_map(|word| word.chars().next())
		.collect::<String>()
		.to_uppercase()
}

#[cfg(test)]
mod tests {
	use super::short_label;

	#[test]
	fn short_label_takes_leading_initials() {
		assert_eq!(short_label("Elden Ring"), "ER");
		assert_eq!(short_label("Bloodborne"), "B");
		assert_eq!(short_label("The Witcher 3"), "TW");
		assert_eq!(short_label(""), "");
	}
}

use std::f64::consts::{PI, TAU};

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use wheel_core::model::Segment;
use wheel_core::layout::arc_size;

use crate::canvas::{
    clear_text_shadow, set_fill_gradient, set_fill_style, set_stroke_style, set_text_shadow,
};

/// Gap between the dial and the canvas edge, leaving room for rim and pointer.
const EDGE_PADDING: f64 = 25.0;
/// How far the rim extends beyond the wedges.
const RIM_EXTENT: f64 = 15.0;
const KNOB_COUNT: usize = 8;
const HUB_RADIUS: f64 = 35.0;

/// Draw the full dial for one rotation snapshot. Pure translation of state
/// into drawing primitives; all geometry decisions live in `wheel-core`.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    ring: &[Segment],
    rotation: f64,
    font_px: f64,
) -> Result<(), JsValue> {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - EDGE_PADDING;

    ctx.clear_rect(0.0, 0.0, width, height);

    draw_rim(ctx, cx, cy, radius)?;
    if ring.is_empty() {
        // Inert wheel: static frame only.
        return Ok(());
    }

    let arc = arc_size(ring.len());
    for (index, segment) in ring.iter().enumerate() {
        let start = index as f64 * arc + rotation;
        draw_wedge(ctx, cx, cy, radius, start, arc, &segment.color)?;
        draw_label(ctx, cx, cy, radius, start + arc / 2.0, &segment.label, font_px)?;
    }

    draw_hub(ctx, cx, cy)?;
    draw_pointer(ctx, cx, cy, radius)
}

fn draw_rim(
    ctx: &CanvasRenderingContext2d,
    cx: f64,
    cy: f64,
    radius: f64,
) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(cx, cy, radius + RIM_EXTENT, 0.0, TAU)?;
    set_fill_style(ctx, "#E0F2FE");
    ctx.fill();
    ctx.set_line_width(8.0);
    set_stroke_style(ctx, "#3B82F6");
    ctx.stroke();

    for i in 0..KNOB_COUNT {
        let angle = i as f64 / KNOB_COUNT as f64 * TAU;
        let kx = cx + (radius + RIM_EXTENT) * angle.cos();
        let ky = cy + (radius + RIM_EXTENT) * angle.sin();
        ctx.begin_path();
        ctx.arc(kx, ky, 6.0, 0.0, TAU)?;
        set_fill_style(ctx, "#fff");
        ctx.fill();
        set_stroke_style(ctx, "#CBD5E1");
        ctx.set_line_width(2.0);
        ctx.stroke();
    }
    Ok(())
}

fn draw_wedge(
    ctx: &CanvasRenderingContext2d,
    cx: f64,
    cy: f64,
    radius: f64,
    start: f64,
    arc: f64,
    color: &str,
) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.move_to(cx, cy);
    ctx.arc(cx, cy, radius, start, start + arc)?;
    set_fill_style(ctx, color);
    ctx.fill();
    ctx.set_line_width(2.0);
    set_stroke_style(ctx, "white");
    ctx.stroke();
    Ok(())
}

fn draw_label(
    ctx: &CanvasRenderingContext2d,
    cx: f64,
    cy: f64,
    radius: f64,
    bisector: f64,
    label: &str,
    font_px: f64,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(cx, cy)?;
    ctx.rotate(bisector)?;
    ctx.set_text_align("right");
    set_fill_style(ctx, "#fff");
    ctx.set_font(&format!("900 {font_px}px Nunito, sans-serif"));
    set_text_shadow(ctx);
    let text = fit_label(ctx, label, radius - 40.0);
    ctx.fill_text(&text, radius - 20.0, font_px / 3.0)?;
    clear_text_shadow(ctx);
    ctx.restore();
    Ok(())
}

/// Strip trailing characters until the label plus ellipsis fits `max_width`.
/// Re-evaluated on every draw; the measurement depends on the font currently
/// set on the context.
fn fit_label(ctx: &CanvasRenderingContext2d, label: &str, max_width: f64) -> String {
    if text_width(ctx, label) <= max_width {
        return label.to_string();
    }
    let mut text = label.to_string();
    while !text.is_empty() && text_width(ctx, &format!("{text}...")) > max_width {
        text.pop();
    }
    format!("{text}...")
}

fn text_width(ctx: &CanvasRenderingContext2d, s: &str) -> f64 {
    ctx.measure_text(s).map(|m| m.width()).unwrap_or(0.0)
}

fn draw_hub(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(cx, cy, HUB_RADIUS, 0.0, TAU)?;
    set_fill_style(ctx, "white");
    ctx.fill();

    // Inner shadow for depth
    let gradient = ctx.create_radial_gradient(cx, cy, 10.0, cx, cy, HUB_RADIUS)?;
    gradient.add_color_stop(0.0, "#f8fafc")?;
    gradient.add_color_stop(1.0, "#e2e8f0")?;
    set_fill_gradient(ctx, &gradient);
    ctx.fill();

    ctx.set_line_width(4.0);
    set_stroke_style(ctx, "#cbd5e1");
    ctx.stroke();
    Ok(())
}

/// Gold teardrop above the top of the dial, tip pointing at the winning
/// wedge (the fixed 3π/2 read-off position).
fn draw_pointer(
    ctx: &CanvasRenderingContext2d,
    cx: f64,
    cy: f64,
    radius: f64,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(cx, cy - radius - 20.0)?;
    ctx.begin_path();
    ctx.move_to(0.0, 0.0);
    ctx.bezier_curve_to(10.0, -10.0, 10.0, -25.0, 0.0, -35.0);
    ctx.bezier_curve_to(-10.0, -25.0, -10.0, -10.0, 0.0, 0.0);
    set_fill_style(ctx, "#FCD34D");
    ctx.fill();
    ctx.set_line_width(3.0);
    set_stroke_style(ctx, "#B45309");
    ctx.stroke();

    ctx.begin_path();
    ctx.arc(0.0, -25.0, 4.0, 0.0, PI * 2.0)?;
    set_fill_style(ctx, "#78350F");
    ctx.fill();
    ctx.restore();
    Ok(())
}

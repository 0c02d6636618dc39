use wasm_bindgen::prelude::*;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

// Non-deprecated helpers to set canvas styles via property assignment.
pub fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(color),
    );
}

pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(color),
    );
}

pub fn set_fill_gradient(ctx: &CanvasRenderingContext2d, gradient: &CanvasGradient) {
    let _ = js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str("fillStyle"), gradient);
}

/// Label drop shadow used by the wedge renderer.
pub fn set_text_shadow(ctx: &CanvasRenderingContext2d) {
    ctx.set_shadow_color("rgba(0,0,0,0.3)");
    ctx.set_shadow_blur(2.0);
    ctx.set_shadow_offset_x(1.0);
    ctx.set_shadow_offset_y(1.0);
}

pub fn clear_text_shadow(ctx: &CanvasRenderingContext2d) {
    ctx.set_shadow_color("rgba(0,0,0,0)");
    ctx.set_shadow_blur(0.0);
    ctx.set_shadow_offset_x(0.0);
    ctx.set_shadow_offset_y(0.0);
}

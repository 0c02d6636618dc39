use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use wheel_core::Celebration;

/// Fire-and-forget celebration dispatch. The host page may provide a global
/// `confetti(options)` function (e.g. canvas-confetti); when it is absent
/// the outcome is simply not celebrated.
pub fn fire_confetti(window: &Window, c: &Celebration) {
    let f = match Reflect::get(window, &JsValue::from_str("confetti")) {
        Ok(v) => v,
        Err(_) => return,
    };
    let Some(f) = f.dyn_ref::<Function>() else {
        return;
    };

    let opts = Object::new();
    let _ = Reflect::set(
        &opts,
        &JsValue::from_str("particleCount"),
        &JsValue::from_f64(f64::from(c.particle_count)),
    );
    let _ = Reflect::set(
        &opts,
        &JsValue::from_str("spread"),
        &JsValue::from_f64(c.spread),
    );
    let origin = Object::new();
    let _ = Reflect::set(
        &origin,
        &JsValue::from_str("y"),
        &JsValue::from_f64(c.origin_y),
    );
    let _ = Reflect::set(&opts, &JsValue::from_str("origin"), &origin);
    let colors = Array::new();
    for color in &c.colors {
        colors.push(&JsValue::from_str(color));
    }
    let _ = Reflect::set(&opts, &JsValue::from_str("colors"), &colors);

    let _ = f.call1(&JsValue::NULL, &opts);
}

//! Browser shell for the spin-wheel engine: canvas setup, config loading,
//! input wiring and the requestAnimationFrame loop. All spin/geometry logic
//! lives in `wheel-core`; this crate only feeds it timestamps and clicks and
//! renders the snapshots it exposes.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, MouseEvent};

mod canvas;
mod effects;
mod render;
mod state;
mod upload;
mod utils;

use state::{STATE, State};
use utils::{
    asset_url, event_canvas_coords, fetch_text_with_fallbacks, get_query_param, log, now_ms,
    sync_canvas_size,
};
use wheel_core::{ClickOutcome, SpinOutcome, WheelConfig, WheelController, WheelMode};

fn init_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let cv = document
        .get_element_by_id("cv")
        .ok_or_else(|| JsValue::from_str("canvas #cv not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = cv
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((cv, ctx))
}

/// Render the current controller snapshot.
pub(crate) fn draw_state(s: &State) {
    sync_canvas_size(&s.window, &s.canvas);
    let width = s.canvas.width() as f64;
    let height = s.canvas.height() as f64;
    if let Err(e) = render::draw(
        &s.ctx,
        width,
        height,
        s.controller.ring(),
        s.controller.rotation(),
        s.controller.config().font_px(),
    ) {
        log(&format!("draw failed: {:?}", e));
    }
}

pub(crate) fn update_winner_dom(s: &State, text: &str) {
    if let Some(el) = s.document.get_element_by_id("winner")
        && let Ok(el) = el.dyn_into::<HtmlElement>()
    {
        el.set_inner_text(text);
    }
}

pub(crate) fn update_stats_dom(s: &State) {
    let el = match s.document.get_element_by_id("stats") {
        Some(e) => match e.dyn_into::<HtmlElement>() {
            Ok(v) => v,
            Err(_) => return,
        },
        None => return,
    };
    let stats = s.controller.stats();
    if stats.total_spins == 0 {
        el.set_inner_html("<div style=\"opacity:.7\">No spins yet</div>");
        return;
    }
    let mut html = String::new();
    html.push_str("<ul style=\"margin:0;padding-left:18px\">");
    for seg in &s.controller.config().segments {
        html.push_str(&format!(
            "<li>{}: {}</li>",
            seg.label,
            stats.count_for(&seg.id)
        ));
    }
    html.push_str("</ul>");
    html.push_str(&format!("<div>Total spins: {}</div>", stats.total_spins));
    el.set_inner_html(&html);
}

fn report_outcome(s: &State, outcome: &SpinOutcome) {
    update_winner_dom(s, &outcome.winner.label);
    update_stats_dom(s);
    effects::fire_confetti(&s.window, &outcome.celebration);
}

fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();
    upload::attach_file_input(state.clone())?;

    // Reset button: restore auto-disabled segments
    if let Some(btn) = doc.get_element_by_id("resetWheel") {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            s.controller.reset();
            update_winner_dom(&s, "Spin to decide!");
            draw_state(&s);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Canvas clicks either start a spin or pick a wedge, per the configured
    // mode; both are ignored mid-spin.
    {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut guard = st.borrow_mut();
            let s = &mut *guard;
            let (x, y) = event_canvas_coords(&e, &s.canvas);
            let dx = x - s.canvas.width() as f64 / 2.0;
            let dy = y - s.canvas.height() as f64 / 2.0;
            let now = now_ms(&s.window);
            match s.controller.handle_click(dx, dy, now, &mut s.rng) {
                ClickOutcome::SpinStarted => {
                    update_winner_dom(s, "");
                }
                ClickOutcome::Picked(segment) => {
                    update_winner_dom(s, &segment.label);
                }
                ClickOutcome::Ignored => {}
            }
        }));
        state
            .borrow()
            .canvas
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    Ok(())
}

fn start_animation(state: Rc<RefCell<State>>) {
    type RafClosure = Closure<dyn FnMut(f64)>;
    let f: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        {
            let mut s = state.borrow_mut();
            if s.controller.is_spinning() {
                if let Some(outcome) = s.controller.tick(ts) {
                    report_outcome(&s, &outcome);
                }
                draw_state(&s);
            }
        }
        let _ = web_sys::window()
            .unwrap()
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }) as Box<dyn FnMut(f64)>));
    let _ = web_sys::window()
        .unwrap()
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
}

fn default_wheel() -> WheelConfig {
    let txt = include_str!("../../wheels/classic.json");
    serde_json::from_str::<WheelConfig>(txt).unwrap_or_default()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let (canvas, ctx) = init_canvas(&document)?;

    let search = window.location().search().unwrap_or_default();
    let mode = match get_query_param(&search, "mode").as_deref() {
        Some("pick") => WheelMode::Pick,
        _ => WheelMode::Spin,
    };
    let controller = WheelController::new(default_wheel(), mode);

    // If URL param w is set, we try to fetch wheels/<w>.json; otherwise the
    // bundled default stays.
    if let Some(name) = get_query_param(&search, "w") {
        let win = window.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let text = fetch_text_with_fallbacks(
                &win,
                &[
                    &asset_url(&format!("wheels/{}.json", name)),
                    &format!("/wheels/{}.json", name),
                    &format!("wheels/{}.json", name),
                ],
            )
            .await
            .unwrap_or_default();
            match serde_json::from_str::<WheelConfig>(&text) {
                Ok(config) => STATE.with(|st| {
                    if let Some(st_rc) = st.borrow().as_ref() {
                        let mut s = st_rc.borrow_mut();
                        s.controller.set_config(config);
                        update_winner_dom(&s, "Spin to decide!");
                        update_stats_dom(&s);
                        draw_state(&s);
                    }
                }),
                Err(e) => log(&format!("Failed to load wheel '{}': {e}", name)),
            }
        });
    }

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        canvas,
        ctx,
        controller,
        rng: StdRng::from_entropy(),
    }));

    STATE.with(|st| st.replace(Some(state.clone())));
    attach_ui(state.clone())?;
    start_animation(state.clone());
    {
        let s = state.borrow();
        update_stats_dom(&s);
        draw_state(&s);
    }
    Ok(())
}

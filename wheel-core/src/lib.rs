//! Spin-wheel engine: segment layout, time-driven rotation with cubic
//! ease-out, and the angle→segment mapping shared by winner resolution and
//! click hit-testing. Pure and platform-free; the browser shell lives in
//! `wheel-wasm`.

pub mod controller;
pub mod layout;
pub mod model;
pub mod resolve;
pub mod spin;
pub mod stats;

pub use controller::{Celebration, ClickOutcome, SpinOutcome, WheelController, WheelMode};
pub use layout::{arc_size, build_ring};
pub use model::{Segment, WheelConfig, WheelSettings, preset_color};
pub use resolve::{POINTER_ANGLE, normalize_angle, resolve_click, resolve_winner};
pub use spin::{SpinPhase, SpinState, Tick, ease_out_cubic};
pub use stats::SpinStats;

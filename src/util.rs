// Formatting and console helpers shared by the components.

use wasm_bindgen::JsValue;

/// Renders an XP amount the way the counters display it: whole numbers
/// without a fraction, anything else with one decimal.
pub fn format_xp(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

/// Steady-state automation rate in XP per second.
pub fn xp_per_second(xp_per_cycle: f64, base_time_ms: f64) -> f64 {
    if base_time_ms <= 0.0 {
        return 0.0;
    }
    xp_per_cycle * 1000.0 / base_time_ms
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

//! Owned interval handles for per-enemy automation timers.
//!
//! Every automated enemy gets one `setInterval` registration whose callback
//! dispatches an `AutomationTick` into the reducer. The registry owns the
//! handles; replacing or dropping an entry clears its interval, so starting
//! automation twice can never double-accumulate.

use crate::model::AUTOMATION_TICK_MS;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Identifies an enemy across zones: enemy ids are only unique per zone.
pub type EnemyKey = (u32, u32);

struct TimerToken {
    id: i32,
    // Keeps the callback alive for as long as the interval is registered.
    _tick: Closure<dyn FnMut()>,
}

impl Drop for TimerToken {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// Registry of running automation intervals, keyed by (zone id, enemy id).
#[derive(Default)]
pub struct AutomationTimers {
    active: HashMap<EnemyKey, TimerToken>,
}

impl AutomationTimers {
    /// Registers a 100 ms interval for `key`, cancelling any interval the
    /// same enemy already had.
    pub fn start<F: FnMut() + 'static>(&mut self, key: EnemyKey, tick: F) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            AUTOMATION_TICK_MS as i32,
        ) {
            self.active.insert(key, TimerToken { id, _tick: closure });
        }
    }

    pub fn is_running(&self, key: EnemyKey) -> bool {
        self.active.contains_key(&key)
    }

    /// Drops every interval whose enemy is no longer in `keys`.
    pub fn retain(&mut self, keys: &[EnemyKey]) {
        self.active.retain(|key, _| keys.contains(key));
    }
}

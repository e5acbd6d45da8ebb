use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Viewport width in CSS pixels, if a window is available.
pub fn viewport_width() -> Option<f64> {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    /// Snapshots of submitted wizard drafts keyed by reference number.
    pub form_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            form_states: RwSignal::new(HashMap::new()),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Drawer behaviour after a leaf navigation: on viewports narrower than
    /// `breakpoint_px` the drawer covers content and is closed.
    pub fn close_left_if_narrow(&self, breakpoint_px: f64) {
        if viewport_width().is_some_and(|w| w < breakpoint_px) {
            self.left_open.set(false);
        }
    }

    pub fn set_form_state(&self, form_key: String, state: serde_json::Value) {
        self.form_states.update(|states| {
            states.insert(form_key, state);
        });
    }

    /// Drop everything that belongs to the signed-in session.
    pub fn clear_session_data(&self) {
        self.form_states.set(HashMap::new());
        self.left_open.set(true);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

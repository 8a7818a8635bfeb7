//! Pointer Press Tracking
//!
//! Mouse and touch both act as a single "press" for the jump. This module
//! folds the primary mouse button and any number of active touches into one
//! pressed/released state and reports edges, so a second finger landing
//! while the first is still down does not restart the charge.
//!
//! Decoupled from winit; the shell translates its events into these calls.

use std::collections::HashSet;

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u16),
}

/// Change in the combined press state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressEdge {
    /// Went from nothing held to something held
    Down,
    /// Last held pointer was released
    Up,
}

/// Combined mouse + touch press state.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    mouse_held: bool,
    touches: HashSet<u64>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any pointer is currently held.
    pub fn is_pressed(&self) -> bool {
        self.mouse_held || !self.touches.is_empty()
    }

    /// Feed a mouse button event. Only the left button counts.
    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool) -> Option<PressEdge> {
        if button != MouseButton::Left {
            return None;
        }
        self.transition(|state| state.mouse_held = pressed)
    }

    /// A touch with `id` started.
    pub fn touch_start(&mut self, id: u64) -> Option<PressEdge> {
        self.transition(|state| {
            state.touches.insert(id);
        })
    }

    /// A touch with `id` ended or was cancelled.
    pub fn touch_end(&mut self, id: u64) -> Option<PressEdge> {
        self.transition(|state| {
            state.touches.remove(&id);
        })
    }

    /// Drop everything held, e.g. when the window loses focus.
    pub fn release_all(&mut self) -> Option<PressEdge> {
        self.transition(|state| {
            state.mouse_held = false;
            state.touches.clear();
        })
    }

    fn transition(&mut self, apply: impl FnOnce(&mut Self)) -> Option<PressEdge> {
        let was = self.is_pressed();
        apply(self);
        match (was, self.is_pressed()) {
            (false, true) => Some(PressEdge::Down),
            (true, false) => Some(PressEdge::Up),
            _ => None,
        }
    }
}

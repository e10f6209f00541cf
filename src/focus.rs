//! Focus-tracking context shared by all trails in a process.
//!
//! The host's focus bookkeeping is injected into the per-frame update
//! rather than read from a global: the cached previously-focused window id
//! and the one-shot "origin of trail" latch live here, while the currently
//! focused window is derived from per-window focus counters each frame.

use crate::window::{OsWindow, WindowId};

/// Mutable focus state threaded through each trail update.
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    previously_focused: Option<WindowId>,
    /// One-shot marker recording which window's cursor last donated a
    /// corner snapshot to another window's trail
    origin_of_trail: Option<WindowId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a focus change. The host calls this from its focus-event
    /// handler with the id of the window that lost focus.
    pub fn set_previously_focused(&mut self, id: Option<WindowId>) {
        self.previously_focused = id;
    }

    /// Id of the window that was focused before the current one.
    pub fn previously_focused(&self) -> Option<WindowId> {
        self.previously_focused
    }

    /// Whether the origin latch already points at `id`. A `None` id
    /// compares against an unset latch.
    pub fn origin_is(&self, id: Option<WindowId>) -> bool {
        self.origin_of_trail == id
    }

    /// Arm the origin latch so the snapshot hand-off does not re-trigger
    /// on consecutive frames with the same focus state.
    pub fn set_origin(&mut self, id: Option<WindowId>) {
        self.origin_of_trail = id;
    }
}

/// Id of the currently focused top-level window: the one with the highest
/// last-focused counter. Returns `None` when no window was ever focused.
pub fn focused_window_id(windows: &[OsWindow]) -> Option<WindowId> {
    let mut max_counter = 0;
    let mut focused = None;
    for w in windows {
        if w.last_focused_counter > max_counter {
            max_counter = w.last_focused_counter;
            focused = Some(w.id);
        }
    }
    focused
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_latch_set_and_compare() {
        let mut focus = FocusState::new();
        assert!(focus.origin_is(None));
        assert!(!focus.origin_is(Some(7)));

        focus.set_origin(Some(7));
        assert!(focus.origin_is(Some(7)));
        assert!(!focus.origin_is(None));

        // re-arming with the same id is a no-op
        focus.set_origin(Some(7));
        assert!(focus.origin_is(Some(7)));
    }

    #[test]
    fn test_focused_window_id_empty() {
        assert_eq!(focused_window_id(&[]), None);
    }
}

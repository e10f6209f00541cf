//! Trail state and the per-frame update orchestrator.
//!
//! One [`TrailState`] lives alongside each pane's render data. Every
//! rendered frame the host calls [`TrailState::update`] exactly once per
//! visible pane; the returned bool tells the frame scheduler whether the
//! trail still needs to be drawn.

pub mod easing;
pub mod projection;

pub use self::projection::CursorEdges;

use crate::config::Config;
use crate::focus::{self, FocusState};
use crate::window::{OsWindow, Pane, PaneRenderData};
use self::easing::CORNER_EDGES;
use std::time::Duration;

/// Per-frame inputs shared by every trail update.
pub struct TrailFrame<'a> {
    /// All top-level windows, for focus resolution and cross-window
    /// projection
    pub windows: &'a [OsWindow],
    /// Injected focus-tracking context
    pub focus: &'a mut FocusState,
    pub config: &'a Config,
}

/// Animated afterimage of a pane's cursor: four independently eased
/// corners, an opacity fade, and the cached target rectangle.
///
/// Corner indices follow [`easing::CORNER_EDGES`]: 0 = (right, top),
/// 1 = (right, bottom), 2 = (left, bottom), 3 = (left, top).
#[derive(Debug, Clone, Default)]
pub struct TrailState {
    /// Eased corner x positions in screen units
    pub corner_x: [f32; 4],
    /// Eased corner y positions in screen units
    pub corner_y: [f32; 4],
    /// Fade level in [0, 1]
    pub opacity: f32,
    /// Monotonic timestamp of the last update
    updated_at: Duration,
    /// Whether any corner was perceptibly far from target last frame
    needs_render: bool,
    /// Cached target edges: `[left, right]`
    target_x: [f32; 2],
    /// Cached target edges: `[top, bottom]`
    target_y: [f32; 2],
}

impl TrailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the trail by one frame and report whether it still needs
    /// to be drawn.
    ///
    /// `pane` is the pane whose trail this is, `os_window` its top-level
    /// window, and `now` the current monotonic time. The target the
    /// corners chase is resolved per frame: under cross-window
    /// choreography the previously focused window chases the newly
    /// focused window's cursor, the newly focused window one-shot copies
    /// its corners from the previous window's cursor, and otherwise the
    /// pane's own cursor is the target.
    ///
    /// Must be called at most once per pane per frame; a repeated call
    /// without a time advance leaves the corners unchanged.
    pub fn update(
        &mut self,
        pane: &Pane,
        now: Duration,
        os_window: &OsWindow,
        frame: &mut TrailFrame<'_>,
    ) -> bool {
        let config = frame.config;
        let windows = frame.windows;
        let screen = &pane.render_data.screen;

        let focused = focus::focused_window_id(windows);
        let prev_focused = frame.focus.previously_focused();
        // Total over unvalidated configs: NaN clamps to zero, and a delay
        // too large for a Duration can never elapse.
        let delay = Duration::try_from_secs_f32(config.trail_delay.max(0.0))
            .unwrap_or(Duration::MAX);
        let delay_elapsed = delay <= now.saturating_sub(screen.cursor_moved_at);

        if config.choreographed && delay_elapsed && Some(os_window.id) == prev_focused {
            // This window lost focus: its trail chases the newly focused
            // window's live cursor across the screen gap.
            if !screen.paused_rendering
                && let Some(focused_win) = windows.iter().find(|w| Some(w.id) == focused)
                && let Some(target_pane) = focused_win.active_pane()
            {
                let bias_x = focused_win.position.x - os_window.position.x;
                let bias_y = os_window.position.y - focused_win.position.y;
                if let Some(edges) =
                    projection::cursor_edges_in_window(target_pane, pane, bias_x, bias_y, config)
                {
                    self.retarget(&edges);
                }
            }
        } else if delay_elapsed && !screen.paused_rendering {
            if config.choreographed
                && os_window.is_focused
                && Some(os_window.id) == focused
                && !frame.focus.origin_is(prev_focused)
                && let Some(prev_win) = windows.iter().find(|w| Some(w.id) == prev_focused)
            {
                // Newly focused window: teleport the corners onto the
                // previous window's cursor once, so the local easing
                // below animates the trail arriving from over there.
                if let Some(prev_pane) = prev_win.active_pane() {
                    let bias_x = prev_win.position.x - os_window.position.x;
                    let bias_y = os_window.position.y - prev_win.position.y;
                    if let Some(edges) = projection::cursor_edges_in_window(
                        prev_pane, pane, bias_x, bias_y, config,
                    ) {
                        self.set_corners(&edges);
                        log::trace!(
                            "trail hand-off: corners copied from window {} into window {}",
                            prev_win.id,
                            os_window.id
                        );
                    }
                }
                frame.focus.set_origin(prev_focused);
            }
            if let Some(edges) = projection::cursor_edges(pane, config) {
                self.retarget(&edges);
            }
        }
        // else: the cursor moved too recently or rendering is paused;
        // the previous target stays in effect.

        let dt = now.saturating_sub(self.updated_at).as_secs_f32();
        if self.should_snap(&pane.render_data, os_window, config) {
            self.snap_to_target();
        } else if self.updated_at < now {
            self.ease_corners(dt, config);
        }
        self.advance_opacity(dt, screen.cursor_visible, config.decay_slow);

        let needed_render_last_frame = self.needs_render;
        self.refresh_needs_render(&pane.render_data);
        self.updated_at = now;

        // Keep drawing for one extra frame after the corners settle so
        // the trail never pops out mid-fade.
        self.needs_render || needed_render_last_frame
    }

    fn retarget(&mut self, edges: &CursorEdges) {
        self.target_x = edges.x_edges();
        self.target_y = edges.y_edges();
    }

    fn set_corners(&mut self, edges: &CursorEdges) {
        let xs = edges.x_edges();
        let ys = edges.y_edges();
        for (i, &(xe, ye)) in CORNER_EDGES.iter().enumerate() {
            self.corner_x[i] = xs[xe];
            self.corner_y[i] = ys[ye];
        }
    }

    /// Fade toward fully visible while the cursor is shown (DECTCEM set),
    /// toward fully hidden otherwise, clamped to [0, 1].
    fn advance_opacity(&mut self, dt: f32, cursor_visible: bool, decay_slow: f32) {
        if cursor_visible {
            self.opacity = (self.opacity + dt / decay_slow).min(1.0);
        } else {
            self.opacity = (self.opacity - dt / decay_slow).max(0.0);
        }
    }

    /// Re-derive `needs_render`: any corner further than half a cell from
    /// its target corner on either axis still needs drawing.
    fn refresh_needs_render(&mut self, rd: &PaneRenderData) {
        self.needs_render = false;
        let x_threshold = rd.dx * 0.5;
        let y_threshold = rd.dy * 0.5;
        for (i, &(xe, ye)) in CORNER_EDGES.iter().enumerate() {
            let dx = (self.target_x[xe] - self.corner_x[i]).abs();
            let dy = (self.target_y[ye] - self.corner_y[i]).abs();
            if x_threshold <= dx || y_threshold <= dy {
                self.needs_render = true;
                break;
            }
        }
    }
}

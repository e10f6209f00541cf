//! Shared integration test helpers for cursor-trail.
//!
//! Canonical factory functions for panes and top-level windows used across
//! the `tests/` integration test suite. All fixtures use the same
//! geometry: pane origin at (0, 100) with y growing upward, 10x20 px
//! cells, and `dx`/`dy` equal to the cell size so cell units and screen
//! units coincide.
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use cursor_trail::{
    CellSize, CursorRenderInfo, CursorShape, OsWindow, Pane, PaneRenderData, ScreenPos,
    ScreenState, Tab,
};
use std::time::Duration;

/// Pane with the canonical test geometry and a visible cursor at
/// (`col`, `row`).
pub fn pane(shape: CursorShape, col: usize, row: usize) -> Pane {
    Pane {
        render_data: PaneRenderData {
            xstart: 0.0,
            ystart: 100.0,
            dx: 10.0,
            dy: 20.0,
            screen: ScreenState {
                cursor: CursorRenderInfo {
                    shape: Some(shape),
                    col,
                    row,
                },
                cell_size: CellSize {
                    width: 10.0,
                    height: 20.0,
                },
                cursor_visible: true,
                paused_rendering: false,
                cursor_moved_at: Duration::ZERO,
            },
        },
    }
}

/// Top-level window wrapping a single pane in a single tab.
pub fn os_window(id: u64, last_focused_counter: u64, is_focused: bool, pane: Pane) -> OsWindow {
    OsWindow {
        id,
        last_focused_counter,
        is_focused,
        live_resize: false,
        position: ScreenPos::default(),
        tabs: vec![Tab {
            panes: vec![pane],
            active_pane: 0,
        }],
        active_tab: 0,
    }
}

/// Seconds as a monotonic timestamp.
pub fn at(seconds: f32) -> Duration {
    Duration::from_secs_f32(seconds)
}

//! Render-subsystem data model consumed by the trail core.
//!
//! These types mirror the view the host renderer exposes to the animation:
//! cursor render info, per-pane pixel geometry, and the tab / top-level
//! window hierarchy used for cross-window choreography. The trail core
//! only reads them; all mutation happens in the host between frames.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Unique identifier of a top-level window.
pub type WindowId = u64;

/// Cursor glyph shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CursorShape {
    /// Block cursor (fills entire cell)
    #[default]
    Block,
    /// Hollow block cursor (unfocused variant, same footprint as Block)
    Hollow,
    /// Beam cursor (thin vertical line at cell start)
    Beam,
    /// Underline cursor (thin horizontal line at cell bottom)
    Underline,
}

/// Cursor state as prepared for rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorRenderInfo {
    /// Glyph shape; `None` while the screen has no renderable cursor yet
    pub shape: Option<CursorShape>,
    /// Grid column (0-based)
    pub col: usize,
    /// Grid row (0-based)
    pub row: usize,
}

/// Cell dimensions in physical pixels.
#[derive(Debug, Clone, Copy)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

/// Per-screen state the trail animation reads each frame.
#[derive(Debug, Clone)]
pub struct ScreenState {
    /// Cursor render info for the screen's visible cursor
    pub cursor: CursorRenderInfo,
    /// Cell size in physical pixels
    pub cell_size: CellSize,
    /// DECTCEM: whether the cursor is currently shown
    pub cursor_visible: bool,
    /// True while rendering of this screen is paused (e.g. unfocused
    /// throttling); the trail keeps its previous target while paused
    pub paused_rendering: bool,
    /// Monotonic timestamp of the last client-initiated cursor move
    pub cursor_moved_at: Duration,
}

/// Pixel geometry of a pane plus its screen state.
///
/// `xstart`/`ystart` locate the pane's cell origin in screen units with y
/// growing upward; `dx`/`dy` are the per-cell deltas in the same units.
#[derive(Debug, Clone)]
pub struct PaneRenderData {
    pub xstart: f32,
    pub ystart: f32,
    pub dx: f32,
    pub dy: f32,
    pub screen: ScreenState,
}

/// A terminal pane inside a tab.
#[derive(Debug, Clone)]
pub struct Pane {
    pub render_data: PaneRenderData,
}

/// A tab holding one or more panes.
#[derive(Debug, Clone)]
pub struct Tab {
    pub panes: Vec<Pane>,
    /// Index of the pane that currently holds keyboard input
    pub active_pane: usize,
}

/// Screen-space position of a top-level window.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenPos {
    pub x: i32,
    pub y: i32,
}

/// Bookkeeping for one top-level (OS) window.
#[derive(Debug, Clone)]
pub struct OsWindow {
    pub id: WindowId,
    /// Monotonically increasing counter bumped each time this window gains
    /// focus; the highest counter identifies the focused window
    pub last_focused_counter: u64,
    pub is_focused: bool,
    /// True while an interactive resize is in progress
    pub live_resize: bool,
    /// Screen position recorded before any fullscreen transition, used to
    /// translate trail coordinates between windows
    pub position: ScreenPos,
    pub tabs: Vec<Tab>,
    /// Index of the most recently active tab
    pub active_tab: usize,
}

impl OsWindow {
    /// The pane holding keyboard input in the active tab, if any.
    pub fn active_pane(&self) -> Option<&Pane> {
        let tab = self.tabs.get(self.active_tab)?;
        tab.panes.get(tab.active_pane)
    }
}

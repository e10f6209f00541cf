//! Cursor trail animation core for terminal emulators.
//!
//! Computes, once per rendered frame, the animated shape of a trailing
//! afterimage that follows the text cursor as it moves or as keyboard
//! focus shifts between top-level windows. It provides:
//!
//! - Edge projection of the four cursor glyph shapes into screen units
//! - Direction-weighted exponential easing of four persistent corners
//! - Cross-window trail hand-off with a one-shot origin latch
//! - Opacity fade tied to cursor visibility (DECTCEM)
//! - A per-frame "still needs rendering" signal for the frame scheduler
//!
//! The crate does not draw anything: the host renderer reads the corner
//! positions and opacity from [`TrailState`] after each update and submits
//! its own geometry.

pub mod config;
pub mod focus;
pub mod trail;
pub mod window;

// Re-export main public types
pub use focus::FocusState;
pub use trail::{TrailFrame, TrailState};
pub use window::{
    CellSize, CursorRenderInfo, CursorShape, OsWindow, Pane, PaneRenderData, ScreenPos,
    ScreenState, Tab, WindowId,
};

//! Edge projection of cursor glyphs into screen units.
//!
//! Pure geometry: a cursor's shape and grid position become a target
//! rectangle expressed as four edges in the owning pane's screen space,
//! with y growing upward from `ystart - rows*dy`.

use crate::config::Config;
use crate::window::{CursorShape, Pane, PaneRenderData};

/// Target rectangle of a cursor glyph, as four edges in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorEdges {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl CursorEdges {
    /// Edges indexed as the trail stores them: `[left, right]`.
    pub(crate) fn x_edges(&self) -> [f32; 2] {
        [self.left, self.right]
    }

    /// Edges indexed as the trail stores them: `[top, bottom]`.
    pub(crate) fn y_edges(&self) -> [f32; 2] {
        [self.top, self.bottom]
    }
}

/// Project a pane's own cursor into its screen space.
///
/// Returns `None` while the pane has no renderable cursor.
pub fn cursor_edges(pane: &Pane, config: &Config) -> Option<CursorEdges> {
    let cursor = pane.render_data.screen.cursor;
    let shape = cursor.shape?;
    Some(project(
        shape,
        cursor.col,
        cursor.row,
        &pane.render_data,
        config,
    ))
}

/// Project `src`'s cursor into `own`'s screen space.
///
/// Shape and grid position are read from the source pane while all pixel
/// geometry comes from the owning pane, so the result describes where the
/// source cursor would sit on the owning window's grid. `bias_x`/`bias_y`
/// translate the rectangle by the two top-level windows' screen offset in
/// pixels, scaled into the owning pane's per-cell units.
pub fn cursor_edges_in_window(
    src: &Pane,
    own: &Pane,
    bias_x: i32,
    bias_y: i32,
    config: &Config,
) -> Option<CursorEdges> {
    let cursor = src.render_data.screen.cursor;
    let shape = cursor.shape?;
    let rd = &own.render_data;
    let edges = project(shape, cursor.col, cursor.row, rd, config);
    let tx = bias_x as f32 * rd.dx / rd.screen.cell_size.width;
    let ty = bias_y as f32 * rd.dy / rd.screen.cell_size.height;
    Some(CursorEdges {
        left: edges.left + tx,
        right: edges.right + tx,
        top: edges.top + ty,
        bottom: edges.bottom + ty,
    })
}

fn project(
    shape: CursorShape,
    col: usize,
    row: usize,
    rd: &PaneRenderData,
    config: &Config,
) -> CursorEdges {
    let left = rd.xstart + col as f32 * rd.dx;
    let bottom = rd.ystart - (row as f32 + 1.0) * rd.dy;
    let (right, top) = match shape {
        // Full cell
        CursorShape::Block | CursorShape::Hollow => (left + rd.dx, bottom + rd.dy),
        // Thin vertical bar at full cell height
        CursorShape::Beam => (
            left + rd.dx / rd.screen.cell_size.width * config.beam_thickness,
            bottom + rd.dy,
        ),
        // Thin horizontal bar at full cell width
        CursorShape::Underline => (
            left + rd.dx,
            bottom + rd.dy / rd.screen.cell_size.height * config.underline_thickness,
        ),
    };
    CursorEdges {
        left,
        right,
        top,
        bottom,
    }
}

//! Corner easing and the skip/snap policy.
//!
//! Each trail corner moves toward its target corner with an exponential
//! ease-out whose time constant depends on how much the corner's motion
//! points at the cursor's leading edge: leading corners use `decay_fast`,
//! trailing corners `decay_slow`, which skews the quad into the smear.

use crate::config::Config;
use crate::trail::TrailState;
use crate::window::{OsWindow, PaneRenderData};

/// Fixed index-to-corner mapping over the edge arrays
/// (`target_x = [left, right]`, `target_y = [top, bottom]`):
///
/// | corner | x edge | y edge |
/// |--------|--------|--------|
/// | 0      | right  | top    |
/// | 1      | right  | bottom |
/// | 2      | left   | bottom |
/// | 3      | left   | top    |
pub(crate) const CORNER_EDGES: [(usize, usize); 4] = [(1, 0), (1, 1), (0, 1), (0, 0)];

/// Displacements below this are treated as already converged.
const CONVERGED: f32 = 1e-6;

/// Map a corner's alignment score onto a decay time constant between
/// `decay_slow` (lowest score this frame) and `decay_fast` (highest).
/// An equal min and max means no direction information; every corner then
/// eases with `decay_slow`.
fn decay_for(dot: f32, min_dot: f32, max_dot: f32, decay_fast: f32, decay_slow: f32) -> f32 {
    if min_dot == max_dot {
        decay_slow
    } else {
        decay_slow + (decay_fast - decay_slow) * (dot - min_dot) / (max_dot - min_dot)
    }
}

impl TrailState {
    /// Set every corner exactly onto its target corner, zero lag.
    pub(crate) fn snap_to_target(&mut self) {
        for (i, &(xe, ye)) in CORNER_EDGES.iter().enumerate() {
            self.corner_x[i] = self.target_x[xe];
            self.corner_y[i] = self.target_y[ye];
        }
    }

    /// Whether this frame bypasses easing and snaps corners directly.
    ///
    /// True during a live resize (stale geometry would otherwise lag
    /// visibly), or when an idle trail's anchor corner is within the
    /// configured cell distance of the new target, which suppresses
    /// trails for sub-threshold cursor jitter.
    pub(crate) fn should_snap(
        &self,
        rd: &PaneRenderData,
        os_window: &OsWindow,
        config: &Config,
    ) -> bool {
        if os_window.live_resize {
            return true;
        }
        if config.start_threshold > 0 && !self.needs_render {
            // Whole-cell Manhattan distance from the anchor corner to the
            // target's near corner. NaN from degenerate geometry compares
            // false and simply disables the suppression.
            let cells_x = ((self.corner_x[0] - self.target_x[1]) / rd.dx).round();
            let cells_y = ((self.corner_y[0] - self.target_y[0]) / rd.dy).round();
            if cells_x.abs() + cells_y.abs() <= config.start_threshold as f32 {
                return true;
            }
        }
        false
    }

    /// Advance every corner toward its target corner by one decay step.
    ///
    /// A zero or non-finite target half-diagonal means the target has no
    /// renderable area; the step is skipped so the division can never
    /// push NaN into persistent state.
    pub(crate) fn ease_corners(&mut self, dt: f32, config: &Config) {
        let center_x = (self.target_x[0] + self.target_x[1]) * 0.5;
        let center_y = (self.target_y[0] + self.target_y[1]) * 0.5;
        let diag_half = (self.target_x[1] - self.target_x[0])
            .hypot(self.target_y[1] - self.target_y[0])
            * 0.5;
        if !diag_half.is_finite() || diag_half <= 0.0 {
            return;
        }

        let mut dx = [0.0f32; 4];
        let mut dy = [0.0f32; 4];
        let mut dot = [0.0f32; 4];
        let mut any_moving = false;
        for i in 0..4 {
            let (xe, ye) = CORNER_EDGES[i];
            dx[i] = self.target_x[xe] - self.corner_x[i];
            dy[i] = self.target_y[ye] - self.corner_y[i];
            if dx[i].abs() < CONVERGED && dy[i].abs() < CONVERGED {
                dx[i] = 0.0;
                dy[i] = 0.0;
                continue;
            }
            any_moving = true;
            // How much this corner's motion races toward the cursor's
            // leading edge, normalized by the target's half-diagonal and
            // the displacement magnitude.
            dot[i] = (dx[i] * (self.target_x[xe] - center_x)
                + dy[i] * (self.target_y[ye] - center_y))
                / diag_half
                / dx[i].hypot(dy[i]);
        }
        if !any_moving {
            return;
        }

        let mut min_dot = f32::MAX;
        let mut max_dot = f32::MIN;
        for d in dot {
            min_dot = min_dot.min(d);
            max_dot = max_dot.max(d);
        }

        for i in 0..4 {
            if dx[i] == 0.0 && dy[i] == 0.0 {
                continue;
            }
            let decay = decay_for(dot[i], min_dot, max_dot, config.decay_fast, config.decay_slow);
            let step = 1.0 - (-10.0 * dt / decay).exp2();
            self.corner_x[i] += dx[i] * step;
            self.corner_y[i] += dy[i] * step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_scores_use_decay_slow_exactly() {
        assert_eq!(decay_for(0.3, 0.3, 0.3, 0.1, 0.4), 0.4);
        assert_eq!(decay_for(0.0, 0.0, 0.0, 0.1, 0.4), 0.4);
    }

    #[test]
    fn test_score_extremes_map_to_decay_bounds() {
        let (fast, slow) = (0.1, 0.4);
        assert_eq!(decay_for(-1.0, -1.0, 1.0, fast, slow), slow);
        assert!((decay_for(1.0, -1.0, 1.0, fast, slow) - fast).abs() < 1e-6);
        let mid = decay_for(0.0, -1.0, 1.0, fast, slow);
        assert!((mid - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_step_fraction_is_strictly_between_zero_and_one() {
        for dt in [1e-4f32, 0.01, 0.1, 1.0, 10.0] {
            for decay in [0.1f32, 0.4] {
                let step = 1.0 - (-10.0 * dt / decay).exp2();
                assert!(step > 0.0 && step <= 1.0, "dt={dt} decay={decay}");
            }
        }
    }
}

//! Default values for trail animation settings.

/// Seconds the cursor must rest after a client-initiated move before the
/// trail starts animating. Zero means the trail reacts immediately.
pub fn trail_delay() -> f32 {
    0.0
}

/// Decay time constant (seconds) for the corners leading the motion.
pub fn decay_fast() -> f32 {
    0.1
}

/// Decay time constant (seconds) for the corners trailing the motion.
pub fn decay_slow() -> f32 {
    0.4
}

/// Manhattan distance in whole cells below which an idle trail snaps to
/// the cursor instead of animating. Suppresses trails for single-cell
/// jitter; zero disables the suppression.
pub fn start_threshold() -> u32 {
    2
}

/// Beam cursor thickness in pixels.
pub fn beam_thickness() -> f32 {
    1.5
}

/// Underline cursor thickness in pixels.
pub fn underline_thickness() -> f32 {
    2.0
}

/// Whether the trail hands off between top-level windows on focus change.
pub fn choreographed() -> bool {
    false
}

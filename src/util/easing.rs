//! Easing curves for frame-based animations

/// Cubic ease-out: fast start, gentle landing. `t` is clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear interpolation between `from` and `to`
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

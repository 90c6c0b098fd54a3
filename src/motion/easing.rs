//! Easing curves and range mapping shared by the animated components.

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Maps `value` from `input` onto `output`, clamping outside the input range.
///
/// A degenerate input range maps everything to `output.0`.
pub fn map_range_clamped(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if span == 0.0 {
        return output.0;
    }
    let t = ((value - input.0) / span).clamp(0.0, 1.0);
    lerp(output.0, output.1, t)
}

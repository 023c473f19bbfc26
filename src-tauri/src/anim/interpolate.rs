//! Range interpolation

/// What to do with inputs outside the input range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolation {
    /// Pin to the nearest output endpoint
    Clamp,
    /// Keep following the edge segment's slope
    Extend,
}

/// Linear blend between `a` and `b`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map `x` through a piecewise-linear function defined by matching
/// `input` / `output` breakpoints. `input` must be ascending and both
/// slices must hold at least two points of equal length; otherwise the
/// first output value is returned.
pub fn interpolate(x: f32, input: &[f32], output: &[f32], extrapolation: Extrapolation) -> f32 {
    if input.len() < 2 || input.len() != output.len() {
        return output.first().copied().unwrap_or(0.0);
    }

    let last = input.len() - 1;
    if extrapolation == Extrapolation::Clamp {
        if x <= input[0] {
            return output[0];
        }
        if x >= input[last] {
            return output[last];
        }
    }

    // Segment containing x (edge segments for extrapolation)
    let seg = input
        .windows(2)
        .position(|w| x <= w[1])
        .unwrap_or(last - 1);

    let (x0, x1) = (input[seg], input[seg + 1]);
    let (y0, y1) = (output[seg], output[seg + 1]);
    if (x1 - x0).abs() < f32::EPSILON {
        return y1;
    }
    lerp(y0, y1, (x - x0) / (x1 - x0))
}

//! Piecewise-linear interpolation with flat extrapolation.

/// Linearly interpolates `ys` over `xs` at the point `x`.
///
/// Outside the data range the nearest end value is returned (flat
/// extrapolation at both ends). `xs` must be non-empty and strictly
/// increasing; callers validate this at curve construction.
///
/// # Example
///
/// ```rust
/// use mezz_curves::interpolation::interp_linear_flat;
///
/// let xs = [1.0, 2.0, 3.0];
/// let ys = [0.03, 0.04, 0.05];
///
/// assert!((interp_linear_flat(&xs, &ys, 1.5) - 0.035).abs() < 1e-12);
/// assert!((interp_linear_flat(&xs, &ys, 0.0) - 0.03).abs() < 1e-12);
/// assert!((interp_linear_flat(&xs, &ys, 9.0) - 0.05).abs() < 1e-12);
/// ```
#[must_use]
pub fn interp_linear_flat(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    debug_assert!(!xs.is_empty());

    if x <= xs[0] {
        return ys[0];
    }
    let last = xs.len() - 1;
    if x >= xs[last] {
        return ys[last];
    }

    let i = find_segment(xs, x);
    let (x0, x1) = (xs[i], xs[i + 1]);
    let (y0, y1) = (ys[i], ys[i + 1]);

    let t = (x - x0) / (x1 - x0);
    y0 + t * (y1 - y0)
}

/// Finds the index `i` such that `xs[i] <= x < xs[i+1]`.
fn find_segment(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => (i.saturating_sub(1)).min(xs.len() - 2),
    }
}

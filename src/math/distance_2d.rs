use super::Point2;

/// Returns the closest point to `p` on the segment from `a` to `b`.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return *a;
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    a + d * t
}

/// Returns the minimum distance from `p` to the segment from `a` to `b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(p, &closest_point_on_segment(p, a, b))
}

/// Returns the closest point to `p` on an open chain of segments, with its distance.
///
/// Returns `None` for an empty chain. A single point is its own closest point.
#[must_use]
pub fn closest_point_on_chain(p: &Point2, chain: &[Point2]) -> Option<(Point2, f64)> {
    match chain {
        [] => None,
        [only] => Some((*only, nalgebra::distance(p, only))),
        _ => chain
            .windows(2)
            .map(|w| {
                let q = closest_point_on_segment(p, &w[0], &w[1]);
                (q, nalgebra::distance(p, &q))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1)),
    }
}

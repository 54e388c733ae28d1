use super::{Point2, TOLERANCE};

/// Computes the signed area of a ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The ring is
/// implicitly closed.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Axis-aligned bounds of a point set as `(min, max)`, or `None` when empty.
#[must_use]
pub fn bounds(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// Centre of the axis-aligned bounding box, or `None` when empty.
#[must_use]
pub fn bounds_center(points: &[Point2]) -> Option<Point2> {
    bounds(points).map(|(min, max)| nalgebra::center(&min, &max))
}

/// Drops a trailing point equal to the first, so rings are stored open.
#[must_use]
pub fn strip_closing_point(points: &[Point2]) -> Vec<Point2> {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 && (first - last).norm() < TOLERANCE => {
            points[..points.len() - 1].to_vec()
        }
        _ => points.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert!((signed_area(&unit_square()) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        assert!((signed_area(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[Point2::origin()]).abs() < TOLERANCE);
        assert!(signed_area(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn bounds_center_of_square() {
        let c = bounds_center(&unit_square());
        assert_eq!(c, Some(Point2::new(0.5, 0.5)));
        assert!(bounds_center(&[]).is_none());
    }

    #[test]
    fn strip_closing_point_only_when_closed() {
        let mut closed = unit_square();
        closed.push(Point2::new(0.0, 0.0));
        assert_eq!(strip_closing_point(&closed).len(), 4);
        assert_eq!(strip_closing_point(&unit_square()).len(), 4);
    }
}

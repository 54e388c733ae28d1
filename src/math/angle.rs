use super::Point2;

/// Output range of [`calculate_angle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleRange {
    /// `[-180°, 180°]`, positive for counter-clockwise.
    Signed,
    /// `[0°, 360°)`.
    Full,
}

/// Angle in degrees swept from `p2 → p1` to `p2 → p3`.
///
/// Positive angles indicate counter-clockwise rotation from the first
/// vector to the second.
#[must_use]
pub fn calculate_angle(p1: &Point2, p2: &Point2, p3: &Point2, range: AngleRange) -> f64 {
    let v1 = p1 - p2;
    let v2 = p3 - p2;
    let dot = v1.dot(&v2);
    let cross = v1.perp(&v2);
    let degrees = cross.atan2(dot).to_degrees();
    match range {
        AngleRange::Full if degrees < 0.0 => {
            // A tiny negative angle rounds up to exactly 360.
            let wrapped = degrees + 360.0;
            if wrapped >= 360.0 {
                0.0
            } else {
                wrapped
            }
        }
        _ => degrees,
    }
}

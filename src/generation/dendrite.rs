//! Fractal "stellar dendrite" ice crystals.
//!
//! A dendrite is six main spokes with pairs of side branches at ±60°. The
//! branch layout is planned once per crystal as a flat list of
//! [`BranchConfig`]s and shared by all six spokes.

use tracing::trace;

use crate::error::Result;
use crate::geometry::{LineString, MultiLineString, MultiPolygon, Polygon};
use crate::math::{polar_offset, Point2};
use crate::operations::boolean::Union;
use crate::operations::creation::ElongatedHexagon;
use crate::rng::RandomSource;

/// Probability that a crystal grows fern-like, tapering branches.
const FERN_PROBABILITY: f64 = 0.2;

/// Side branch placement along a spoke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchConfig {
    /// Distance from the crystal centre along the spoke.
    pub offset: f64,
    /// Length of each of the two side branches.
    pub length: f64,
    /// Stroke thickness of the side branches.
    pub thickness: f64,
}

/// A planned set of side branches.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchPlan {
    pub fern_like: bool,
    pub branches: Vec<BranchConfig>,
}

/// Plans random side branches for a crystal of a given radius.
///
/// Between two and five branches are spread from `radius/9..radius/5` out
/// to `0.9·radius..radius`. Fern-like plans shrink branch by branch so
/// neighbours never cross; symmetric plans keep each branch within
/// `min(offset, radius - offset)` so it stays inside the crystal.
#[derive(Debug)]
pub struct BranchPlanner {
    radius: f64,
    thickness: f64,
}

impl BranchPlanner {
    #[must_use]
    pub fn new(radius: f64, thickness: f64) -> Self {
        Self { radius, thickness }
    }

    /// Draws a plan from `rng`.
    pub fn execute(&self, rng: &mut impl RandomSource) -> BranchPlan {
        let radius = self.radius;
        let fern_like = rng.uniform(0.0, 1.0) < FERN_PROBABILITY;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = rng.uniform(2.0, 5.0).ceil() as u32;
        let offset_start = rng.uniform(radius / 9.0, radius / 5.0);
        let offset_end = rng.uniform(radius * 0.9, radius);
        let step = (offset_end - offset_start) / f64::from(count);

        let mut first_length = None;
        let branches = (1..=count)
            .map(|branch| {
                let offset = step * f64::from(branch) + offset_start;
                let length = if fern_like {
                    let first = *first_length.get_or_insert(offset);
                    let reduction = first * f64::from(branch) / f64::from(count);
                    first - rng.uniform(reduction * 5.0 / 6.0, reduction)
                } else {
                    let longest = offset.min(radius - offset).max(0.0);
                    rng.uniform(longest / 2.0, longest)
                };
                let thickness = rng.uniform(self.thickness * 0.5, self.thickness);
                BranchConfig {
                    offset,
                    length,
                    thickness,
                }
            })
            .collect();

        trace!(fern_like, count, "planned dendrite branches");
        BranchPlan {
            fern_like,
            branches,
        }
    }
}

/// Builds a stellar dendrite from a branch plan.
#[derive(Debug)]
pub struct StellarDendrite {
    center: Point2,
    radius: f64,
    thickness: f64,
    branches: Vec<BranchConfig>,
    rotation: f64,
}

impl StellarDendrite {
    /// Creates a new dendrite; `thickness` applies to the main spokes.
    #[must_use]
    pub fn new(center: Point2, radius: f64, thickness: f64, branches: Vec<BranchConfig>) -> Self {
        Self {
            center,
            radius,
            thickness,
            branches,
            rotation: 0.0,
        }
    }

    /// Rotates the crystal by `degrees` about its centre.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    fn spoke_directions(&self) -> impl Iterator<Item = f64> + '_ {
        (0..6).map(move |i| f64::from(i) * 60.0 + self.rotation)
    }

    /// Stroke skeleton: per spoke, the main line followed by each branch pair.
    #[must_use]
    pub fn skeleton(&self) -> MultiLineString {
        let mut lines = Vec::with_capacity(6 * (1 + 2 * self.branches.len()));
        for direction in self.spoke_directions() {
            lines.push(LineString::segment(
                self.center,
                polar_offset(&self.center, direction, self.radius),
            ));
            for branch in &self.branches {
                let start = polar_offset(&self.center, direction, branch.offset);
                for side in [-60.0, 60.0] {
                    lines.push(LineString::segment(
                        start,
                        polar_offset(&start, direction + side, branch.length),
                    ));
                }
            }
        }
        MultiLineString(lines)
    }

    /// Filled outline: the union of elongated hexagons along every stroke.
    /// Branches too short for their thickness are lengthened.
    ///
    /// # Errors
    ///
    /// Returns an error if a main spoke is not a valid elongated hexagon.
    pub fn outline(&self) -> Result<MultiPolygon> {
        let spoke = ElongatedHexagon::new(self.center, self.radius, self.thickness).execute()?;
        let mut parts: Vec<Polygon> = Vec::with_capacity(6 * (1 + 2 * self.branches.len()));
        for direction in self.spoke_directions() {
            parts.push(spoke.rotated(&self.center, direction));
            for branch in &self.branches {
                let start = polar_offset(&self.center, direction, branch.offset);
                let arm = ElongatedHexagon::new(start, branch.length, branch.thickness)
                    .auto_correct(true)
                    .execute()?;
                parts.push(arm.rotated(&start, direction - 60.0));
                parts.push(arm.rotated(&start, direction + 60.0));
            }
        }
        Ok(Union::new(parts).execute())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::VecDeque;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::rng::SeededRandom;

    /// Replays fixed fractions of each requested range.
    struct Scripted(VecDeque<f64>);

    impl RandomSource for Scripted {
        fn uniform(&mut self, min: f64, max: f64) -> f64 {
            let t = self.0.pop_front().unwrap_or(0.5);
            min + (max - min) * t
        }
    }

    #[test]
    fn fern_plan_tapers() {
        // fern draw, count draw (→ 5), start, end, then (length, thickness) pairs.
        let mut rng = Scripted(VecDeque::from([0.1, 0.9, 0.0, 1.0]));
        let plan = BranchPlanner::new(9.0, 0.1).execute(&mut rng);
        assert!(plan.fern_like);
        assert_eq!(plan.branches.len(), 5);
        // Offsets run from 1 + 8/5 to 9 in equal steps.
        assert_abs_diff_eq!(plan.branches[0].offset, 2.6, epsilon = 1e-12);
        assert_abs_diff_eq!(plan.branches[4].offset, 9.0, epsilon = 1e-12);
        for pair in plan.branches.windows(2) {
            assert!(pair[1].length <= pair[0].length);
        }
        assert!(plan.branches.iter().all(|b| b.length >= 0.0));
    }

    #[test]
    fn symmetric_plans_stay_inside() {
        let radius = 3.0;
        let mut rng = SeededRandom::new(42);
        let mut saw_symmetric = false;
        for _ in 0..200 {
            let plan = BranchPlanner::new(radius, 0.1).execute(&mut rng);
            assert!((2..=5).contains(&plan.branches.len()));
            for pair in plan.branches.windows(2) {
                assert!(pair[1].offset > pair[0].offset);
            }
            for b in &plan.branches {
                assert!(b.offset <= radius);
                assert!((0.05..=0.1).contains(&b.thickness));
                if !plan.fern_like {
                    assert!(b.length <= b.offset.min(radius - b.offset) + 1e-12);
                }
            }
            saw_symmetric |= !plan.fern_like;
        }
        assert!(saw_symmetric);
    }

    #[test]
    fn skeleton_line_count_and_reach() {
        let branches = vec![
            BranchConfig { offset: 1.0, length: 0.5, thickness: 0.1 },
            BranchConfig { offset: 2.0, length: 0.4, thickness: 0.1 },
        ];
        let center = Point2::new(5.0, 5.0);
        let dendrite = StellarDendrite::new(center, 3.0, 0.1, branches);
        let skeleton = dendrite.skeleton();
        assert_eq!(skeleton.0.len(), 6 * (1 + 2 * 2));
        let spoke = &skeleton.0[0];
        assert_abs_diff_eq!(spoke.length(), 3.0, epsilon = 1e-12);
        // First side branch leaves the +x spoke at -60°.
        let arm = &skeleton.0[1];
        assert_abs_diff_eq!(arm.0[0].x, 6.0, epsilon = 1e-12);
        assert!(arm.0[1].y < 5.0);
    }

    #[test]
    fn outline_is_one_crystal() {
        let branches = vec![BranchConfig { offset: 1.5, length: 0.0, thickness: 0.08 }];
        let outline = StellarDendrite::new(Point2::origin(), 3.0, 0.1, branches)
            .with_rotation(15.0)
            .outline()
            .unwrap();
        assert_eq!(outline.0.len(), 1);
        assert!(outline.area() > 0.0);
    }
}

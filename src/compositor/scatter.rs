//! Second pass: small "glitter" stars scattered across the page around the
//! snowflake.

use spade::{DelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};
use tracing::{debug, warn};

use super::boundaries::Boundaries;
use crate::config::SketchParams;
use crate::error::{OperationError, Result};
use crate::generation::TriangularLattice;
use crate::geometry::{Geometry, LineString};
use crate::math::Point2;
use crate::operations::creation::HexagonStar;
use crate::operations::query::ShortestLine;
use crate::operations::transform::Perspective;
use crate::rng::RandomSource;
use crate::scene::Group;

/// Jitter applied to each scatter lattice point, as a fraction of spacing.
const JITTER: f64 = 0.25;

/// Every motif centre placed so far, indexed for nearest-neighbour queries.
#[derive(Default)]
pub struct PlacedCenters {
    triangulation: DelaunayTriangulation<SpadePoint2<f64>>,
}

impl PlacedCenters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a motif centre.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Failed` if the point cannot be indexed
    /// (non-finite or out of range coordinates).
    pub fn insert(&mut self, point: &Point2) -> Result<()> {
        self.triangulation
            .insert(SpadePoint2::new(point.x, point.y))
            .map_err(|e: InsertionError| {
                OperationError::Failed(format!("placed centre index: {e}"))
            })?;
        Ok(())
    }

    /// Distance from `point` to the nearest recorded centre.
    #[must_use]
    pub fn nearest_distance(&self, point: &Point2) -> Option<f64> {
        self.triangulation
            .nearest_neighbor(SpadePoint2::new(point.x, point.y))
            .map(|v| {
                let p = v.position();
                (p.x - point.x).hypot(p.y - point.y)
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triangulation.num_vertices()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scatters glitter stars over the page.
///
/// Candidates come from a jittered lattice covering the page. A candidate is
/// kept only if it lies inside the margin-inset field, clears the fold line,
/// falls on the index stride, passes the acceptance draw, sits outside the
/// snowflake and is far enough from every placed centre.
pub struct ScatterPass<'a> {
    params: &'a SketchParams,
    boundaries: &'a Boundaries,
    fold_line: LineString,
}

impl<'a> ScatterPass<'a> {
    #[must_use]
    pub fn new(params: &'a SketchParams, boundaries: &'a Boundaries) -> Self {
        let (width, height) = params.page_dimensions();
        Self {
            params,
            boundaries,
            fold_line: fold_line(width, height),
        }
    }

    fn in_field(&self, p: &Point2) -> bool {
        let (width, height) = self.params.page_dimensions();
        let m = self.params.field_margin;
        (m..=width - m).contains(&p.x) && (m..=height - m).contains(&p.y)
    }

    fn clears_fold(&self, p: &Point2) -> bool {
        ShortestLine::new(*p)
            .distance_to_line(&self.fold_line)
            .is_none_or(|d| d > self.params.fold_clearance)
    }

    /// Runs the pass, adding one leaf per glitter star to `group` and
    /// recording each centre in `placed`. Returns the accepted centres.
    ///
    /// # Errors
    ///
    /// Returns an error if the page lattice cannot be sampled or a leaf
    /// cannot be added.
    pub fn execute(
        &self,
        rng: &mut impl RandomSource,
        placed: &mut PlacedCenters,
        group: &mut Group,
    ) -> Result<Vec<Point2>> {
        let params = self.params;
        let (width, height) = params.page_dimensions();
        let candidates = TriangularLattice::new(
            Point2::new(width / 2.0, height / 2.0),
            params.grid_spacing,
            width.hypot(height) / 2.0,
        )
        .with_angle(params.angle)
        .execute()?;

        let jitter = params.grid_spacing * JITTER;
        let mut accepted = Vec::new();
        for (index, candidate) in candidates.into_iter().enumerate() {
            let p = Point2::new(
                candidate.x + rng.uniform(-jitter, jitter),
                candidate.y + rng.uniform(-jitter, jitter),
            );
            if !self.in_field(&p) || !self.clears_fold(&p) {
                continue;
            }
            if index % params.glitter_stride != 0 {
                continue;
            }
            if rng.uniform(0.0, 1.0) >= params.non_star_percentage {
                continue;
            }
            if self.boundaries.contains(&p) {
                continue;
            }
            if placed
                .nearest_distance(&p)
                .is_some_and(|d| d < params.glitter_spacing)
            {
                continue;
            }

            let geometry = glitter(&p, params, rng)?;
            group.add_leaf(params.layers.glitter, geometry, format!("glitter_{index}"))?;
            placed.insert(&p)?;
            accepted.push(p);
        }
        debug!(count = accepted.len(), "scatter pass placed glitter");
        Ok(accepted)
    }
}

/// Vertical fold line through the middle of the page.
#[must_use]
pub fn fold_line(width: f64, height: f64) -> LineString {
    LineString::segment(Point2::new(width / 2.0, 0.0), Point2::new(width / 2.0, height))
}

/// A small star, randomly turned and tilted. A tilt that cannot be
/// projected leaves the star flat.
fn glitter(center: &Point2, params: &SketchParams, rng: &mut impl RandomSource) -> Result<Geometry> {
    let thickness = rng.uniform(0.3, 0.5);
    let rotation = params.angle + rng.uniform(0.0, 60.0);
    let star: Geometry = HexagonStar::new(*center, params.glitter_size, thickness)
        .with_rotation(rotation)
        .execute()?
        .into();

    if params.glitter_tilt <= 0.0 {
        return Ok(star);
    }
    let tilt = rng.uniform(-params.glitter_tilt, params.glitter_tilt);
    match Perspective::new(star.clone(), tilt)
        .with_distance(params.perspective_distance)
        .execute()
    {
        Ok(projected) => Ok(projected),
        Err(e) => {
            warn!(x = center.x, y = center.y, error = %e, "glitter tilt skipped");
            Ok(star)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;

    fn setup(params: &SketchParams) -> Boundaries {
        let (width, height) = params.page_dimensions();
        let center = Point2::new(width * params.centre_x_prop, height * params.centre_y_prop);
        Boundaries::build(params, center).unwrap()
    }

    #[test]
    fn placed_centres_report_nearest_distance() {
        let mut placed = PlacedCenters::new();
        assert!(placed.is_empty());
        assert!(placed.nearest_distance(&Point2::new(0.0, 0.0)).is_none());
        placed.insert(&Point2::new(0.0, 0.0)).unwrap();
        placed.insert(&Point2::new(10.0, 0.0)).unwrap();
        placed.insert(&Point2::new(0.0, 10.0)).unwrap();
        assert_eq!(placed.len(), 3);
        let d = placed.nearest_distance(&Point2::new(9.0, 1.0)).unwrap();
        assert!((d - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn non_finite_centre_is_rejected() {
        let mut placed = PlacedCenters::new();
        assert!(placed.insert(&Point2::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn glitter_respects_every_filter() {
        let params = SketchParams {
            non_star_percentage: 1.0,
            glitter_stride: 1,
            ..SketchParams::default()
        };
        let boundaries = setup(&params);
        let mut placed = PlacedCenters::new();
        let mut group = Group::new("glitter");
        let accepted = ScatterPass::new(&params, &boundaries)
            .execute(&mut SeededRandom::new(5), &mut placed, &mut group)
            .unwrap();

        assert!(!accepted.is_empty());
        assert_eq!(group.leaves().len(), accepted.len());
        assert_eq!(placed.len(), accepted.len());

        let (width, height) = params.page_dimensions();
        for (i, p) in accepted.iter().enumerate() {
            assert!(p.x >= params.field_margin && p.x <= width - params.field_margin);
            assert!(p.y >= params.field_margin && p.y <= height - params.field_margin);
            assert!((p.x - width / 2.0).abs() > params.fold_clearance);
            assert!(!boundaries.contains(p));
            for q in &accepted[..i] {
                let d = (p.x - q.x).hypot(p.y - q.y);
                assert!(d >= params.glitter_spacing);
            }
        }
        assert!(group
            .leaves()
            .iter()
            .all(|leaf| leaf.layer == params.layers.glitter && leaf.name.starts_with("glitter_")));
    }

    #[test]
    fn zero_acceptance_places_nothing() {
        let params = SketchParams {
            non_star_percentage: 0.0,
            ..SketchParams::default()
        };
        let boundaries = setup(&params);
        let mut placed = PlacedCenters::new();
        let mut group = Group::new("glitter");
        let accepted = ScatterPass::new(&params, &boundaries)
            .execute(&mut SeededRandom::new(5), &mut placed, &mut group)
            .unwrap();
        assert!(accepted.is_empty());
        assert_eq!(group.leaf_count(), 0);
    }

    #[test]
    fn untilted_glitter_is_a_flat_star() {
        let params = SketchParams {
            glitter_tilt: 0.0,
            ..SketchParams::default()
        };
        let g = glitter(&Point2::new(20.0, 20.0), &params, &mut SeededRandom::new(1)).unwrap();
        assert!(matches!(g, Geometry::Polygon(_)));
    }
}

use std::collections::{HashMap, VecDeque};

use crate::error::{OperationError, Result};
use crate::math::{polar_offset, Point2, LATTICE_TOLERANCE};

/// Breadth-first sampler of a triangular lattice bounded by a disc.
///
/// Starting at `seed`, each visited point proposes six neighbours
/// `spacing` away at `i · 60° + angle`. A neighbour is accepted when it is
/// within `bound` of the seed and no accepted point lies within
/// [`LATTICE_TOLERANCE`] of it. Output is in BFS order, which is fully
/// determined by the inputs.
#[derive(Debug)]
pub struct TriangularLattice {
    seed: Point2,
    spacing: f64,
    bound: f64,
    angle: f64,
}

impl TriangularLattice {
    /// Creates a new lattice sampler.
    #[must_use]
    pub fn new(seed: Point2, spacing: f64, bound: f64) -> Self {
        Self {
            seed,
            spacing,
            bound,
            angle: 0.0,
        }
    }

    /// Rotates the lattice directions by `degrees`.
    #[must_use]
    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.angle = degrees;
        self
    }

    /// Executes the sampling. The seed is always the first point.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `spacing` is not a positive
    /// finite number.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if !self.spacing.is_finite() || self.spacing <= LATTICE_TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "lattice spacing {} must be positive",
                self.spacing
            ))
            .into());
        }

        let mut accepted = PointSet::new(self.spacing);
        accepted.insert(self.seed);
        let mut queue = VecDeque::from([self.seed]);

        while let Some(current) = queue.pop_front() {
            for i in 0..6 {
                let candidate =
                    polar_offset(&current, f64::from(i) * 60.0 + self.angle, self.spacing);
                if nalgebra::distance(&candidate, &self.seed) <= self.bound
                    && !accepted.contains(&candidate)
                {
                    accepted.insert(candidate);
                    queue.push_back(candidate);
                }
            }
        }

        Ok(accepted.points)
    }
}

/// Insertion-ordered point list with a grid index for tolerance lookups.
struct PointSet {
    points: Vec<Point2>,
    cells: HashMap<(i64, i64), Vec<usize>>,
    cell_size: f64,
}

impl PointSet {
    fn new(spacing: f64) -> Self {
        Self {
            points: Vec::new(),
            cells: HashMap::new(),
            cell_size: spacing / 2.0,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cell(&self, p: &Point2) -> (i64, i64) {
        (
            (p.x / self.cell_size).floor() as i64,
            (p.y / self.cell_size).floor() as i64,
        )
    }

    fn insert(&mut self, p: Point2) {
        let key = self.cell(&p);
        self.cells.entry(key).or_default().push(self.points.len());
        self.points.push(p);
    }

    fn contains(&self, p: &Point2) -> bool {
        let (cx, cy) = self.cell(p);
        (cx - 1..=cx + 1)
            .flat_map(|x| (cy - 1..=cy + 1).map(move |y| (x, y)))
            .filter_map(|key| self.cells.get(&key))
            .flatten()
            .any(|&i| {
                let q = &self.points[i];
                (q.x - p.x).abs() <= LATTICE_TOLERANCE && (q.y - p.y).abs() <= LATTICE_TOLERANCE
            })
    }
}

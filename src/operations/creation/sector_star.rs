use super::hexagon_star::spokes;
use super::HexagonStar;
use crate::error::{OperationError, Result};
use crate::geometry::{MultiPolygon, Polygon};
use crate::math::{Point2, TOLERANCE};
use crate::operations::boolean::{Subtract, Union};
use crate::operations::offset::ConcentricFill;
use crate::scene::{Group, Layer};

/// Creates a hexagon star with paddle-shaped "sector ends".
///
/// Each spoke gets a second, thicker elongated hexagon starting
/// `sector_offset` from the centre and reaching the star's tip. A base
/// thickness of zero leaves only the six paddles.
#[derive(Debug, Clone)]
pub struct SectorStar {
    center: Point2,
    radius: f64,
    thickness: f64,
    sector_offset: f64,
    sector_width: f64,
    rotation: f64,
}

impl SectorStar {
    /// Creates a new `SectorStar` operation.
    #[must_use]
    pub fn new(
        center: Point2,
        radius: f64,
        thickness: f64,
        sector_offset: f64,
        sector_width: f64,
    ) -> Self {
        Self {
            center,
            radius,
            thickness,
            sector_offset,
            sector_width,
            rotation: 0.0,
        }
    }

    /// Rotates the whole star by `degrees` about its centre.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// The plain star without sector ends; empty when the thickness is zero.
    ///
    /// # Errors
    ///
    /// Returns an error if a spoke is not a valid elongated hexagon.
    pub fn base(&self) -> Result<MultiPolygon> {
        if self.thickness <= TOLERANCE {
            return Ok(MultiPolygon::default());
        }
        HexagonStar::new(self.center, self.radius, self.thickness)
            .with_rotation(self.rotation)
            .execute()
    }

    /// The six sector-end paddles, in spoke order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPrimitive` if the paddle length
    /// `radius - sector_offset` is too short for its thickness.
    pub fn sectors(&self) -> Result<Vec<Polygon>> {
        spokes(
            self.center,
            self.sector_offset,
            self.radius - self.sector_offset,
            self.thickness + self.sector_width,
            self.rotation,
        )
    }

    /// Executes the operation, returning the union of the star and its paddles.
    ///
    /// # Errors
    ///
    /// Returns an error if the base star or a paddle cannot be built.
    pub fn execute(&self) -> Result<MultiPolygon> {
        Ok(Union::new(self.sectors()?).with(self.base()?).execute())
    }
}

/// Core pieces smaller than this are boolean slivers along shared edges.
const SLIVER_AREA: f64 = 1e-6;

/// Splits a sector star into its paddles and the remaining core, and fills
/// each region separately with concentric rings.
///
/// The result is a group named `filled_hexagon_star_with_sector_ends` with
/// one sub-group per paddle (`sector_0` .. `sector_5`) followed by the core,
/// largest piece first (`star_centre`, then `star_centre_1`, ...).
#[derive(Debug)]
pub struct FilledSectorStar {
    star: SectorStar,
    pen_width: f64,
    layer: Layer,
}

impl FilledSectorStar {
    /// Creates a new fill of `star` with rings one `pen_width` apart.
    #[must_use]
    pub fn new(star: SectorStar, pen_width: f64) -> Self {
        Self {
            star,
            pen_width,
            layer: 1,
        }
    }

    /// Sets the layer for every outline and ring.
    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    /// Executes the fill.
    ///
    /// # Errors
    ///
    /// - `OperationError::Failed` if subtracting the paddles leaves no core
    ///   (for example a zero-thickness base)
    /// - any error from building the star or filling a region
    pub fn execute(&self) -> Result<Group> {
        let mut group = Group::new("filled_hexagon_star_with_sector_ends");

        let sectors = self.star.sectors()?;
        for (i, sector) in sectors.iter().enumerate() {
            let fill = ConcentricFill::new(sector.clone(), self.pen_width)
                .with_layer(self.layer)
                .execute()?;
            group.add_group(format!("sector_{i}"), fill)?;
        }

        let mut core: Vec<Polygon> =
            Subtract::new(self.star.base()?, Union::new(sectors).execute())
                .execute()
                .0
                .into_iter()
                .filter(|p| p.area() > SLIVER_AREA)
                .collect();
        core.sort_by(|a, b| b.area().total_cmp(&a.area()));
        if core.is_empty() {
            return Err(OperationError::Failed(
                "star core is empty after removing sector ends".to_owned(),
            )
            .into());
        }
        for (i, piece) in core.into_iter().enumerate() {
            let name = if i == 0 {
                "star_centre".to_owned()
            } else {
                format!("star_centre_{i}")
            };
            let fill = ConcentricFill::new(piece, self.pen_width)
                .with_layer(self.layer)
                .execute()?;
            group.add_group(name, fill)?;
        }

        Ok(group)
    }
}

//! Sketch parameters, loadable from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::scene::Layer;

/// Supported page sizes, always landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A5,
    A4,
}

impl PaperSize {
    /// Page `(width, height)` in millimetres.
    #[must_use]
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Self::A5 => (210.0, 148.0),
            Self::A4 => (297.0, 210.0),
        }
    }
}

/// Which pen each kind of geometry is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayerPlan {
    pub divider: Layer,
    pub outline: Layer,
    pub outer_tier: Layer,
    pub inner_tier: Layer,
    pub centre_tier: Layer,
    pub glitter: Layer,
    pub debug: Layer,
}

impl Default for LayerPlan {
    fn default() -> Self {
        Self {
            divider: 1,
            outline: 2,
            outer_tier: 3,
            inner_tier: 4,
            centre_tier: 5,
            glitter: 3,
            debug: 10,
        }
    }
}

/// All recognised options of the snowflake card.
///
/// Sizes are in millimetres, angles in degrees. Each `*_size_prop`, when
/// set, overrides the matching absolute size as a fraction of page width.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SketchParams {
    pub seed: u64,
    pub angle: f64,
    pub paper_size: PaperSize,
    pub centre_x_prop: f64,
    pub centre_y_prop: f64,
    pub snowflake_size: f64,
    pub grid_spacing: f64,
    pub outer_size: f64,
    pub inner_size: f64,
    pub centre_size: f64,
    pub outer_size_prop: Option<f64>,
    pub inner_size_prop: Option<f64>,
    pub centre_size_prop: Option<f64>,
    /// Paddle start of the outer star; smaller stars start further out by
    /// their radius difference.
    pub sector_offset: f64,
    pub sector_width: f64,
    /// Base star thicknesses of the outer, inner and centre boundaries.
    pub outer_thickness: f64,
    pub inner_thickness: f64,
    pub centre_thickness: f64,
    /// Paddle width of the centre boundary.
    pub centre_sector_width: f64,
    pub dendrite_proportion: f64,
    pub non_star_percentage: f64,
    pub page_divider: bool,
    pub debug: bool,
    /// Inset of the inked copy of each star motif.
    pub offset_distance: f64,
    pub pen_width: f64,
    pub glitter_size: f64,
    /// Minimum distance between a glitter star and any other motif centre.
    pub glitter_spacing: f64,
    /// Only every n-th scatter lattice point is considered.
    pub glitter_stride: usize,
    /// Maximum perspective tilt of glitter stars.
    pub glitter_tilt: f64,
    pub perspective_distance: f64,
    /// Minimum distance between glitter and the fold line.
    pub fold_clearance: f64,
    /// Inset of the glitter field from the page edge.
    pub field_margin: f64,
    pub layers: LayerPlan,
}

impl Default for SketchParams {
    fn default() -> Self {
        Self {
            seed: 42,
            angle: 0.0,
            paper_size: PaperSize::A5,
            centre_x_prop: 0.75,
            centre_y_prop: 0.5,
            snowflake_size: 3.0,
            grid_spacing: 6.0,
            outer_size: 56.0,
            inner_size: 50.0,
            centre_size: 44.0,
            outer_size_prop: None,
            inner_size_prop: None,
            centre_size_prop: None,
            sector_offset: 20.0,
            sector_width: 10.0,
            outer_thickness: 15.0,
            inner_thickness: 7.0,
            centre_thickness: 0.0,
            centre_sector_width: 8.0,
            dendrite_proportion: 0.35,
            non_star_percentage: 0.3,
            page_divider: false,
            debug: false,
            offset_distance: 0.1,
            pen_width: 0.3,
            glitter_size: 1.5,
            glitter_spacing: 4.0,
            glitter_stride: 2,
            glitter_tilt: 50.0,
            perspective_distance: 15.0,
            fold_clearance: 6.0,
            field_margin: 8.0,
            layers: LayerPlan::default(),
        }
    }
}

impl SketchParams {
    /// Parses parameters from TOML; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML, or
    /// `ConfigError::Invalid` if a value is out of range.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let params: Self = toml::from_str(text).map_err(ConfigError::from)?;
        params.validate()?;
        Ok(params)
    }

    /// Reads and parses a TOML parameter file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, plus any error
    /// from [`SketchParams::from_toml_str`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Page `(width, height)` in millimetres.
    #[must_use]
    pub fn page_dimensions(&self) -> (f64, f64) {
        self.paper_size.dimensions()
    }

    fn resolve(&self, absolute: f64, prop: Option<f64>) -> f64 {
        prop.map_or(absolute, |p| p * self.page_dimensions().0)
    }

    /// Radius of the outer containment star.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.resolve(self.outer_size, self.outer_size_prop)
    }

    /// Radius of the inner containment star.
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.resolve(self.inner_size, self.inner_size_prop)
    }

    /// Radius of the centre containment star.
    #[must_use]
    pub fn centre_radius(&self) -> f64 {
        self.resolve(self.centre_size, self.centre_size_prop)
    }

    /// Checks every value against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        check_range("angle", self.angle, 0.0, 45.0)?;
        check_range("centre_x_prop", self.centre_x_prop, 0.0, 1.0)?;
        check_range("centre_y_prop", self.centre_y_prop, 0.0, 1.0)?;
        check_range("snowflake_size", self.snowflake_size, 3.0, 20.0)?;
        check_range("grid_spacing", self.grid_spacing, 5.0, 20.0)?;
        check_range("outer_size", self.outer_radius(), 10.0, 100.0)?;
        check_range("inner_size", self.inner_radius(), 10.0, self.outer_radius())?;
        check_range("centre_size", self.centre_radius(), 10.0, self.inner_radius())?;
        check_range("sector_offset", self.sector_offset, 0.0, self.outer_radius())?;
        check_range("sector_width", self.sector_width, 0.0, 50.0)?;
        check_range("outer_thickness", self.outer_thickness, 0.0, 50.0)?;
        check_range("inner_thickness", self.inner_thickness, 0.0, 50.0)?;
        check_range("centre_thickness", self.centre_thickness, 0.0, 50.0)?;
        check_range("centre_sector_width", self.centre_sector_width, 0.0, 50.0)?;
        self.check_paddle(
            "sector_offset",
            self.outer_radius(),
            self.outer_thickness,
            self.sector_width,
        )?;
        self.check_paddle(
            "inner_size",
            self.inner_radius(),
            self.inner_thickness,
            self.sector_width,
        )?;
        self.check_paddle(
            "centre_size",
            self.centre_radius(),
            self.centre_thickness,
            self.centre_sector_width,
        )?;
        check_range("dendrite_proportion", self.dendrite_proportion, 0.0, 1.0)?;
        check_range("non_star_percentage", self.non_star_percentage, 0.0, 1.0)?;
        check_range("offset_distance", self.offset_distance, 0.0, 1.0)?;
        check_range("pen_width", self.pen_width, 0.05, 2.0)?;
        check_range("glitter_size", self.glitter_size, 1.0, 10.0)?;
        check_range("glitter_spacing", self.glitter_spacing, 0.0, 50.0)?;
        check_range("glitter_tilt", self.glitter_tilt, 0.0, 80.0)?;
        check_range("perspective_distance", self.perspective_distance, 5.0, 100.0)?;
        check_range("fold_clearance", self.fold_clearance, 0.0, 50.0)?;
        check_range("field_margin", self.field_margin, 0.0, 50.0)?;
        if self.glitter_stride == 0 {
            return Err(ConfigError::Invalid {
                field: "glitter_stride",
                reason: "must be at least 1".to_owned(),
            }
            .into());
        }
        Ok(())
    }

    /// A boundary star's paddles start `outer - radius` further out than the
    /// outer star's and must stay long enough for their pointed ends.
    fn check_paddle(
        &self,
        field: &'static str,
        radius: f64,
        thickness: f64,
        sector_width: f64,
    ) -> Result<()> {
        let start = self.sector_offset + self.outer_radius() - radius;
        let min_length = 30.0_f64.to_radians().tan() * (thickness + sector_width);
        if radius - start <= min_length {
            return Err(ConfigError::Invalid {
                field,
                reason: format!(
                    "paddles starting at {start} leave less than {min_length} before radius {radius}"
                ),
            }
            .into());
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is out of range [{min}, {max}]"),
        }
        .into());
    }
    Ok(())
}

mod elongated_hexagon;
mod hexagon;
mod hexagon_star;
mod sector_star;

pub use elongated_hexagon::ElongatedHexagon;
pub use hexagon::Hexagon;
pub use hexagon_star::{FilledHexagonStar, HexagonStar};
pub use sector_star::{FilledSectorStar, SectorStar};

/// `tan(30°)`: the side slope of every hexagonal spoke end.
#[must_use]
pub(crate) fn tan_30() -> f64 {
    30.0_f64.to_radians().tan()
}

//! Plotter-ready SVG: one Inkscape layer per pen, coordinates in millimetres.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::{ExportError, Result};
use crate::geometry::{Geometry, LineString, Polygon};
use crate::math::Point2;
use crate::scene::{Layer, SceneEntry};

/// An SVG rendering of flattened scene entries.
///
/// Entries are grouped by layer in ascending order; within a layer they keep
/// their flatten order. Every path is stroked only.
#[derive(Debug)]
pub struct SvgDocument<'a> {
    width: f64,
    height: f64,
    pen_width: f64,
    entries: &'a [SceneEntry],
}

impl<'a> SvgDocument<'a> {
    #[must_use]
    pub fn new(width: f64, height: f64, entries: &'a [SceneEntry]) -> Self {
        Self {
            width,
            height,
            pen_width: 0.3,
            entries,
        }
    }

    /// Sets the stroke width in millimetres.
    #[must_use]
    pub fn with_pen_width(mut self, pen_width: f64) -> Self {
        self.pen_width = pen_width;
        self
    }

    fn by_layer(&self) -> BTreeMap<Layer, Vec<&'a SceneEntry>> {
        let mut layers: BTreeMap<Layer, Vec<&SceneEntry>> = BTreeMap::new();
        for entry in self.entries {
            layers.entry(entry.layer).or_default().push(entry);
        }
        layers
    }

    /// Writes the document to `path`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_string()).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )?;
        for (layer, entries) in self.by_layer() {
            writeln!(
                f,
                r#"  <g inkscape:groupmode="layer" id="layer{layer}" inkscape:label="{layer}" fill="none" stroke="black" stroke-width="{}">"#,
                self.pen_width
            )?;
            for entry in entries {
                let mut d = String::new();
                path_data(&entry.geometry, &mut d);
                if d.is_empty() {
                    continue;
                }
                writeln!(
                    f,
                    r#"    <path data-name="{}" d="{}"/>"#,
                    escape(&entry.qualified_name),
                    d.trim_end()
                )?;
            }
            writeln!(f, "  </g>")?;
        }
        writeln!(f, "</svg>")
    }
}

fn path_data(geometry: &Geometry, out: &mut String) {
    match geometry {
        Geometry::Polygon(p) => polygon_data(p, out),
        Geometry::MultiPolygon(mp) => mp.0.iter().for_each(|p| polygon_data(p, out)),
        Geometry::LineString(ls) => ring_data(&ls.0, false, out),
        Geometry::MultiLineString(mls) => {
            mls.0.iter().for_each(|LineString(points)| ring_data(points, false, out));
        }
    }
}

fn polygon_data(polygon: &Polygon, out: &mut String) {
    ring_data(polygon.exterior(), true, out);
    for hole in polygon.interiors() {
        ring_data(hole, true, out);
    }
}

fn ring_data(points: &[Point2], closed: bool, out: &mut String) {
    if points.len() < 2 {
        return;
    }
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        out.push_str(&format!("{cmd}{:.3},{:.3} ", p.x, p.y));
    }
    if closed {
        out.push_str("Z ");
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

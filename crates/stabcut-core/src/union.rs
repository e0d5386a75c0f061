//! Boolean union of all part polygons into the single outline.
//!
//! Built on geo's `BooleanOps`. The parts are expected to mutually
//! overlap (fin roots are inset into the body, cone halves are closed
//! onto the centerline) so the union collapses to exactly one
//! contour. A multi-contour result is the most common real-world
//! failure (broken source geometry) and must surface as an error, not
//! a partial drawing.

use geo::{BooleanOps, LineString, MultiPolygon, Polygon as GeoPolygon};

use crate::chart::{PartName, SeriesTable};
use crate::error::DrawError;
use crate::geometry::{Point, Polygon};

/// Union every part polygon in the table into one closed outline.
///
/// Cone halves get a synthetic closing point on the centerline
/// (x = 0 at their last point's height) so the open half-profile
/// becomes a region that overlaps the fuselage. Any ring whose first
/// and last points differ is auto-closed. Parts with fewer than three
/// distinct points cannot enclose area and are skipped.
pub fn union_outline(table: &SeriesTable) -> Result<Polygon, DrawError> {
    let mut merged: Option<MultiPolygon<f64>> = None;

    for (part, polygon) in table {
        let Some(ring) = part_ring(*part, polygon) else {
            continue;
        };
        let geo_poly = GeoPolygon::new(LineString::from(ring), vec![]);
        let single = MultiPolygon::new(vec![geo_poly]);
        merged = Some(match merged {
            Some(acc) => acc.union(&single),
            None => single,
        });
    }

    let merged = merged.ok_or(DrawError::MultiContourResult { contours: 0 })?;

    // Holes count as extra contours: only one outer ring, nothing else.
    let contours: usize = merged
        .0
        .iter()
        .map(|poly| 1 + poly.interiors().len())
        .sum();
    if contours != 1 {
        return Err(DrawError::MultiContourResult { contours });
    }

    let exterior = merged.0[0].exterior();
    let points = exterior
        .coords()
        .map(|c| Point::new(c.x, c.y))
        .collect::<Vec<_>>();

    Ok(Polygon::new(points))
}

/// Build the closed ring fed to the clipper for one part, or `None`
/// when the part is too degenerate to enclose area.
fn part_ring(part: PartName, polygon: &Polygon) -> Option<Vec<(f64, f64)>> {
    let mut points = polygon.points.clone();

    if part.is_cone() {
        if let Some(last) = points.last().copied() {
            let closing = Point::new(0.0, last.y);
            if closing != last {
                points.push(closing);
            }
        }
    }

    if let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) {
        if first != last {
            points.push(first);
        }
    }

    // first == last, so a real ring needs at least 4 entries.
    if points.len() < 4 {
        return None;
    }

    Some(points.into_iter().map(|p| (p.x, p.y)).collect())
}

//! Domain-specific corrective transforms applied between cleaning
//! passes, in fixed order: fin root inset, body taper clamp, base
//! point detection. Each is a pure table-to-table transform; callers
//! re-clean after the mutating stages because they can reintroduce
//! duplicate points.

use crate::chart::SeriesTable;
use crate::error::DrawError;
use crate::geometry::{Point, Polygon};

/// How far fin root points are pushed toward the centerline.
pub const FIN_ROOT_INSET: f64 = 0.1;

/// The fin profile's root points in series order: leading root,
/// trailing root, and the closing return point.
const FIN_ROOT_INDICES: [usize; 3] = [0, 3, 4];

/// Nudge each fin's root points into the body so the union fuses the
/// fin to the fuselage without a hairline seam.
///
/// The side a fin sits on is read off the X of its third point;
/// moving root X *against* that sign moves it toward the centerline.
/// Fins too short to carry all root indices are left untouched.
pub fn inset_fin_roots(table: &SeriesTable) -> SeriesTable {
    table
        .iter()
        .map(|(part, polygon)| {
            if !part.is_fin() || polygon.len() <= FIN_ROOT_INDICES[2] {
                return (*part, polygon.clone());
            }

            let sign = if polygon.points[2].x > 0.0 { 1.0 } else { -1.0 };
            let mut points = polygon.points.clone();
            for index in FIN_ROOT_INDICES {
                points[index].x -= FIN_ROOT_INSET * sign;
            }
            (*part, Polygon::new(points))
        })
        .collect()
}

/// Clamp each body half's Y profile to be monotonically
/// non-increasing in series order. Motor tapers in the source data
/// occasionally bulge back out by a fraction of a millimetre, which
/// makes the union self-intersect at the tail.
pub fn clamp_body_taper(table: &SeriesTable) -> SeriesTable {
    table
        .iter()
        .map(|(part, polygon)| {
            if !part.is_body() {
                return (*part, polygon.clone());
            }

            let mut points = polygon.points.clone();
            for i in 1..points.len() {
                if points[i].y > points[i - 1].y {
                    points[i].y = points[i - 1].y;
                }
            }
            (*part, Polygon::new(points))
        })
        .collect()
}

/// Find each body half's base point: the point of maximal |y|,
/// tie-broken by maximal |x|, rounded to integers.
///
/// Exactly two body halves must survive cleaning; anything else means
/// the source geometry is broken and the drawing aborts.
pub fn detect_base_points(table: &SeriesTable) -> Result<[Point; 2], DrawError> {
    let mut bases = Vec::with_capacity(2);

    for (part, polygon) in table {
        if !part.is_body() {
            continue;
        }
        if let Some(base) = extremal_point(&polygon.points) {
            bases.push(base.rounded());
        }
    }

    match bases[..] {
        [a, b] => Ok([a, b]),
        _ => Err(DrawError::UnexpectedBaseCount { count: bases.len() }),
    }
}

fn extremal_point(points: &[Point]) -> Option<Point> {
    let mut best = *points.first()?;
    for point in &points[1..] {
        let better = point.y.abs() > best.y.abs()
            || (point.y.abs() == best.y.abs() && point.x.abs() > best.x.abs());
        if better {
            best = *point;
        }
    }
    Some(best)
}

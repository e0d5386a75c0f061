//! Polygon cleaning: collapse consecutive duplicate points.
//!
//! Chart data is full of repeated rows (the source template pads
//! ranges to a fixed row count), and the post-processing passes can
//! reintroduce duplicates, so cleaning runs both before and after
//! them. The distance test is exactly `> 0.0` with no epsilon:
//! near-duplicates from floating-point noise are kept by design.

use crate::chart::SeriesTable;
use crate::geometry::{Point, Polygon};

/// Clean one point list.
///
/// Returns `None` when every point is numerically identical to the
/// first (the series is degenerate and produces no polygon).
/// Otherwise keeps the first point and every subsequent point at
/// strictly positive distance from the previously *kept* one.
pub fn clean_points(points: &[Point]) -> Option<Polygon> {
    let first = *points.first()?;

    if points.iter().all(|p| *p == first) {
        return None;
    }

    let mut kept = Vec::with_capacity(points.len());
    kept.push(first);
    for point in &points[1..] {
        let last = kept[kept.len() - 1];
        if point.distance(last) > 0.0 {
            kept.push(*point);
        }
    }

    Some(Polygon::new(kept))
}

/// Clean every part in a series table, dropping degenerate parts.
pub fn clean_table(table: &SeriesTable) -> SeriesTable {
    table
        .iter()
        .filter_map(|(part, polygon)| {
            clean_points(&polygon.points).map(|cleaned| (*part, cleaned))
        })
        .collect()
}

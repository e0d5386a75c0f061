//! Turn the unioned outline into pen-tagged cut segments.
//!
//! The base edge of the rocket (the segment joining the two detected
//! base points) is not cut as-is: it is replaced by two short stubs
//! and a notch opening for the motor mount. Fin profiles additionally
//! get a fold-indicator line drawn with their own pen so the operator
//! can tell score lines from cut lines.

use crate::chart::SeriesTable;
use crate::geometry::{Line, Point, Polygon};

/// Which tool pass a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pen {
    /// The outer cut path.
    Outline,
    /// Fin fold-indicator lines (scored, not cut through).
    Fin,
    /// The motor notch opening across the base.
    Notch,
}

/// One pen-tagged line segment of the finished drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub pen: Pen,
    pub line: Line,
}

impl Segment {
    pub fn new(pen: Pen, line: Line) -> Self {
        Self { pen, line }
    }
}

/// Build the full segment list for one drawing.
///
/// Outline edges whose endpoints both round to base points are the
/// base edge and are suppressed; [`base_segments`] re-draws that span
/// with the notch cut into it. `notch_width` of zero (or less) keeps
/// the base closed.
pub fn annotate(
    outline: &Polygon,
    table: &SeriesTable,
    bases: [Point; 2],
    notch_width: f64,
) -> Vec<Segment> {
    let mut segments = Vec::new();

    for pair in outline.points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if is_base(a, bases) && is_base(b, bases) {
            continue;
        }
        segments.push(Segment::new(Pen::Outline, Line::between(a, b)));
    }

    segments.extend(base_segments(bases, notch_width));
    segments.extend(fin_segments(table));

    segments
}

fn is_base(point: Point, bases: [Point; 2]) -> bool {
    let rounded = point.rounded();
    rounded == bases[0] || rounded == bases[1]
}

/// Replace the suppressed base edge: a stub from each base point in
/// toward the centerline, then the notch opening between the stubs.
fn base_segments(bases: [Point; 2], notch_width: f64) -> Vec<Segment> {
    if notch_width <= 0.0 {
        return vec![Segment::new(Pen::Outline, Line::between(bases[0], bases[1]))];
    }

    // Both tips sit at the first base point's height so the opening
    // stays level even when rounding nudged the halves apart.
    let base_height = bases[0].y;
    let mut segments = Vec::with_capacity(3);
    let mut tips = [Point::new(0.0, 0.0); 2];
    for (i, base) in bases.into_iter().enumerate() {
        let sign = if base.x < 0.0 { -1.0 } else { 1.0 };
        let tip = Point::new(sign * notch_width / 2.0, base_height);
        segments.push(Segment::new(Pen::Outline, Line::between(base, tip)));
        tips[i] = tip;
    }
    segments.push(Segment::new(Pen::Notch, Line::between(tips[0], tips[1])));

    segments
}

/// One fold-indicator line per fin, from the leading root point to
/// the trailing one. Fins shortened below two points by cleaning get
/// no indicator.
fn fin_segments(table: &SeriesTable) -> Vec<Segment> {
    let mut segments = Vec::new();

    for (part, polygon) in table {
        if !part.is_fin() || polygon.len() < 2 {
            continue;
        }
        let points = &polygon.points;
        let line = Line::between(points[0], points[points.len() - 2]);
        segments.push(Segment::new(Pen::Fin, line));
    }

    segments
}

//! Error taxonomy for the drawing pipeline.
//!
//! Every variant is fatal to its own drawing; the batch driver in the
//! CLI crate is responsible for attaching the source file name and
//! keeping sibling jobs alive.

use thiserror::Error;

use crate::cells::CellRef;

#[derive(Debug, Error)]
pub enum DrawError {
    /// The chart contained no series resolvable to a known part name.
    #[error("no recognized part series in chart")]
    NoSeriesFound,

    /// A range reference string did not match `!$<col>$<row>:$<col>$<row>`.
    #[error("malformed range reference: {reference:?}")]
    MalformedRangeReference { reference: String },

    /// The X and Y range expansions of one series differ in length.
    #[error("x/y range lengths differ: {x_len} vs {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// The backing table had no numeric value at a referenced cell.
    #[error("no value at cell {cell}")]
    MissingCell { cell: CellRef },

    /// Base-point detection found something other than two body halves.
    #[error("expected two body base points, found {count}")]
    UnexpectedBaseCount { count: usize },

    /// The union did not produce a single connected contour.
    #[error("union produced {contours} contours, expected exactly one")]
    MultiContourResult { contours: usize },

    /// The label cannot be shrunk into the available body window.
    #[error("label does not fit: available width {width:.1}, diameter {diameter:.1}")]
    LabelDoesNotFit { width: f64, diameter: f64 },
}

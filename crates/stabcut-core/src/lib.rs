//! # stabcut-core
//!
//! Geometric reconstruction of rocket cross-section drawings from
//! spreadsheet chart data: series extraction, point cleaning,
//! corrective post-processing, boolean union into a single cut
//! outline, and annotation with fin indicators, the motor notch, and
//! an engraved label.

pub mod annotate;
pub mod cells;
pub mod chart;
pub mod clean;
pub mod error;
pub mod geometry;
pub mod label;
pub mod pipeline;
pub mod post;
pub mod union;

// Re-export common types at crate root for convenience.
pub use annotate::{annotate, Pen, Segment};
pub use cells::{expand_range, resolve_points, CellRef, CellSource};
pub use chart::{extract_series, ChartSource, PartName, SeriesRef, SeriesTable};
pub use clean::{clean_points, clean_table};
pub use error::DrawError;
pub use geometry::{Line, Point, Polygon};
pub use label::{make_label, GlyphOutline, GlyphSource, LabelSpace, PathCommand};
pub use pipeline::{draw, DrawOptions, Drawing, LabelRequest};
pub use post::{clamp_body_taper, detect_base_points, inset_fin_roots, FIN_ROOT_INSET};
pub use union::union_outline;

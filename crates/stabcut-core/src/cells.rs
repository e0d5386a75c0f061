//! Cell references and symbolic range expansion.
//!
//! Chart series carry range strings of the form `!$C$126:$C$132`.
//! Columns run over a single 26-letter alphabet position, rows are
//! 3-digit zero-padded integers. Expansion is column-major (for each
//! column, for each row) to match the source's iteration order.

use std::fmt;

use crate::error::DrawError;
use crate::geometry::Point;

/// A concrete cell address: zero-based column, spreadsheet row number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub col: usize,
    pub row: usize,
}

impl CellRef {
    #[inline]
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Columns never exceed a single letter in this format.
        let letter = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", letter, self.row)
    }
}

/// Numeric lookup into the backing table. The workbook parser itself
/// is an external collaborator; the pipeline only ever sees this.
pub trait CellSource {
    fn value(&self, cell: CellRef) -> Option<f64>;
}

/// Expand a symbolic range reference into the full rectangle of cell
/// addresses it spans, column-major.
pub fn expand_range(reference: &str) -> Result<Vec<CellRef>, DrawError> {
    let malformed = || DrawError::MalformedRangeReference {
        reference: reference.to_string(),
    };

    let body = reference.strip_prefix('!').ok_or_else(malformed)?;
    let (start, end) = body.split_once(':').ok_or_else(malformed)?;
    let (col1, row1) = parse_corner(start).ok_or_else(malformed)?;
    let (col2, row2) = parse_corner(end).ok_or_else(malformed)?;

    if col2 < col1 || row2 < row1 {
        return Err(malformed());
    }

    let mut cells = Vec::with_capacity((col2 - col1 + 1) * (row2 - row1 + 1));
    for col in col1..=col2 {
        for row in row1..=row2 {
            cells.push(CellRef::new(col, row));
        }
    }

    Ok(cells)
}

/// Parse one `$<col>$<row>` corner. Returns None on any deviation.
fn parse_corner(corner: &str) -> Option<(usize, usize)> {
    let rest = corner.strip_prefix('$')?;
    let (col_s, row_s) = rest.split_once('$')?;

    let mut chars = col_s.chars();
    let letter = chars.next()?;
    if chars.next().is_some() || !letter.is_ascii_uppercase() {
        return None;
    }
    let col = (letter as usize) - ('A' as usize);

    if row_s.is_empty() || !row_s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row = row_s.parse().ok()?;

    Some((col, row))
}

/// Resolve one series' X and Y range references into a point list.
///
/// The two expansions must agree in length; the source format builds
/// them from the same row span, so a mismatch means the chart data is
/// broken and the drawing aborts.
pub fn resolve_points(
    source: &dyn CellSource,
    x_ref: &str,
    y_ref: &str,
) -> Result<Vec<Point>, DrawError> {
    let x_cells = expand_range(x_ref)?;
    let y_cells = expand_range(y_ref)?;

    if x_cells.len() != y_cells.len() {
        return Err(DrawError::LengthMismatch {
            x_len: x_cells.len(),
            y_len: y_cells.len(),
        });
    }

    let mut points = Vec::with_capacity(x_cells.len());
    for (xc, yc) in x_cells.into_iter().zip(y_cells) {
        let x = source.value(xc).ok_or(DrawError::MissingCell { cell: xc })?;
        let y = source.value(yc).ok_or(DrawError::MissingCell { cell: yc })?;
        points.push(Point::new(x, y));
    }

    Ok(points)
}

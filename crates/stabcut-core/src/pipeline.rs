//! The end-to-end drawing pipeline.
//!
//! One call runs a chart through every stage in fixed order:
//! extraction, cleaning, the corrective post passes, re-cleaning,
//! base-point detection, union, annotation, and (optionally) the
//! label. Stages are pure table-to-table transforms; the first error
//! aborts the drawing and nothing partial escapes.

use crate::annotate::{annotate, Segment};
use crate::cells::{resolve_points, CellSource};
use crate::chart::{extract_series, ChartSource, SeriesTable};
use crate::clean::clean_table;
use crate::error::DrawError;
use crate::geometry::{Point, Polygon};
use crate::label::{make_label, GlyphSource, PathCommand};
use crate::post::{clamp_body_taper, detect_base_points, inset_fin_roots};
use crate::union::union_outline;

/// A label to engrave, with the font to draw it in.
pub struct LabelRequest<'a> {
    pub text: &'a str,
    pub font: &'a dyn GlyphSource,
}

/// Per-drawing knobs the caller controls.
pub struct DrawOptions<'a> {
    /// Width of the motor notch opening; zero keeps the base closed.
    pub notch_width: f64,
    pub label: Option<LabelRequest<'a>>,
}

/// The finished drawing, ready for a renderer.
#[derive(Debug, Clone)]
pub struct Drawing {
    /// The unioned silhouette, closed.
    pub outline: Polygon,
    /// The two detected base points, rounded.
    pub base_points: [Point; 2],
    /// Pen-tagged cut and score segments.
    pub segments: Vec<Segment>,
    /// Placed label outlines, one command list per glyph. Empty when
    /// no label was requested.
    pub label_glyphs: Vec<Vec<PathCommand>>,
}

impl Drawing {
    /// Bounding box over every segment endpoint and glyph command
    /// point, as (min_x, min_y, max_x, max_y).
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        let mut grow = |x: f64, y: f64| {
            bounds = Some(match bounds {
                Some((min_x, min_y, max_x, max_y)) => {
                    (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                }
                None => (x, y, x, y),
            });
        };

        for segment in &self.segments {
            grow(segment.line.x1, segment.line.y1);
            grow(segment.line.x2, segment.line.y2);
        }
        for glyph in &self.label_glyphs {
            for command in glyph {
                match *command {
                    PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => grow(x, y),
                    PathCommand::QuadTo { x1, y1, x, y } => {
                        grow(x1, y1);
                        grow(x, y);
                    }
                    PathCommand::CurveTo { x1, y1, x2, y2, x, y } => {
                        grow(x1, y1);
                        grow(x2, y2);
                        grow(x, y);
                    }
                    PathCommand::Close => {}
                }
            }
        }

        bounds
    }
}

/// Run the full pipeline for one chart.
pub fn draw(
    chart: &dyn ChartSource,
    cells: &dyn CellSource,
    options: &DrawOptions<'_>,
) -> Result<Drawing, DrawError> {
    let extracted = extract_series(chart)?;

    let mut table = SeriesTable::new();
    for (part, series) in extracted {
        let points = resolve_points(cells, &series.x_ref, &series.y_ref)?;
        table.insert(part, Polygon::new(points));
    }

    // Each post pass can reintroduce duplicate points, so the table
    // is re-cleaned after every stage.
    let cleaned = clean_table(&table);
    let inset = clean_table(&inset_fin_roots(&cleaned));
    let recleaned = clean_table(&clamp_body_taper(&inset));

    let base_points = detect_base_points(&recleaned)?;
    let outline = union_outline(&recleaned)?;
    let segments = annotate(&outline, &recleaned, base_points, options.notch_width);

    let label_glyphs = match &options.label {
        Some(request) => make_label(request.text, request.font, &recleaned)?,
        None => Vec::new(),
    };

    Ok(Drawing {
        outline,
        base_points,
        segments,
        label_glyphs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::Pen;
    use crate::chart::SeriesRef;
    use crate::label::GlyphOutline;
    use std::collections::HashMap;

    /// In-memory chart + cell grid standing in for a parsed workbook.
    struct Workbook {
        series: Vec<SeriesRef>,
        cells: HashMap<(usize, usize), f64>,
    }

    impl Workbook {
        fn new() -> Self {
            Self {
                series: Vec::new(),
                cells: HashMap::new(),
            }
        }

        /// Store one series' points in two adjacent columns starting
        /// at `row`, registering the matching range references.
        fn add_series(&mut self, title: &str, col: usize, row: usize, points: &[(f64, f64)]) {
            let x_col = (b'A' + col as u8) as char;
            let y_col = (b'A' + col as u8 + 1) as char;
            let last = row + points.len() - 1;
            self.series.push(SeriesRef {
                title: Some(title.to_string()),
                x_ref: format!("!${x_col}${row}:${x_col}${last}"),
                y_ref: format!("!${y_col}${row}:${y_col}${last}"),
            });
            for (i, (x, y)) in points.iter().enumerate() {
                self.cells.insert((col, row + i), *x);
                self.cells.insert((col + 1, row + i), *y);
            }
        }
    }

    impl ChartSource for Workbook {
        fn series(&self) -> Vec<SeriesRef> {
            self.series.clone()
        }
    }

    impl CellSource for Workbook {
        fn value(&self, cell: crate::cells::CellRef) -> Option<f64> {
            self.cells.get(&(cell.col, cell.row)).copied()
        }
    }

    struct BoxGlyphs;

    impl GlyphSource for BoxGlyphs {
        fn units_per_em(&self) -> f64 {
            1000.0
        }

        fn outline(&self, _ch: char) -> Option<GlyphOutline> {
            Some(GlyphOutline {
                commands: vec![
                    PathCommand::MoveTo { x: 0.0, y: 0.0 },
                    PathCommand::LineTo { x: 600.0, y: 0.0 },
                    PathCommand::LineTo { x: 600.0, y: 700.0 },
                    PathCommand::Close,
                ],
                min_x: 0.0,
                min_y: 0.0,
                max_x: 600.0,
                max_y: 700.0,
            })
        }
    }

    /// A small but complete rocket: two body halves that overlap
    /// across the centerline near the nose, two fins whose roots sit
    /// on the body walls, and a cone half reaching into the right
    /// body. Duplicate rows mimic the padded chart ranges.
    fn rocket() -> Workbook {
        let mut wb = Workbook::new();
        wb.add_series(
            "fuselage",
            0,
            126,
            &[
                (5.0, 100.0),
                (5.0, 100.0), // padded duplicate row
                (5.0, 40.0),
                (2.0, 10.0),
                (-1.0, 0.0),
            ],
        );
        wb.add_series(
            "fuselage2",
            2,
            126,
            &[(-5.0, 100.0), (-5.0, 40.0), (-2.0, 10.0), (1.0, 0.0)],
        );
        wb.add_series(
            "aileron",
            4,
            126,
            &[
                (5.0, 95.0),
                (9.0, 99.0),
                (9.0, 85.0),
                (5.0, 82.0),
                (5.0, 90.0),
            ],
        );
        wb.add_series(
            "aileron2",
            6,
            126,
            &[
                (-5.0, 95.0),
                (-9.0, 99.0),
                (-9.0, 85.0),
                (-5.0, 82.0),
                (-5.0, 90.0),
            ],
        );
        wb.add_series("cone", 8, 126, &[(1.5, 10.0), (1.0, 5.0), (0.5, 2.0)]);
        wb
    }

    #[test]
    fn full_pipeline_produces_a_drawing() {
        let wb = rocket();
        let options = DrawOptions {
            notch_width: 4.0,
            label: Some(LabelRequest {
                text: "apex",
                font: &BoxGlyphs,
            }),
        };
        let drawing = draw(&wb, &wb, &options).unwrap();

        assert!(drawing.outline.is_closed());
        assert_eq!(
            drawing.base_points,
            [Point::new(5.0, 100.0), Point::new(-5.0, 100.0)]
        );

        // Two fin indicator lines, one per aileron.
        let fins = drawing.segments.iter().filter(|s| s.pen == Pen::Fin).count();
        assert_eq!(fins, 2);

        // The notch opening spans +/- notch_width/2 at base height.
        let notch: Vec<_> = drawing
            .segments
            .iter()
            .filter(|s| s.pen == Pen::Notch)
            .collect();
        assert_eq!(notch.len(), 1);
        assert_eq!(notch[0].line.start(), Point::new(2.0, 100.0));
        assert_eq!(notch[0].line.end(), Point::new(-2.0, 100.0));

        // Label survived fitting: one glyph per letter.
        assert_eq!(drawing.label_glyphs.len(), 4);
    }

    #[test]
    fn no_label_request_means_no_glyphs() {
        let wb = rocket();
        let options = DrawOptions {
            notch_width: 4.0,
            label: None,
        };
        let drawing = draw(&wb, &wb, &options).unwrap();
        assert!(drawing.label_glyphs.is_empty());
    }

    #[test]
    fn missing_body_half_aborts() {
        let mut wb = Workbook::new();
        wb.add_series(
            "fuselage",
            0,
            126,
            &[(5.0, 100.0), (2.0, 10.0), (-1.0, 0.0)],
        );
        let options = DrawOptions {
            notch_width: 0.0,
            label: None,
        };
        assert!(matches!(
            draw(&wb, &wb, &options),
            Err(DrawError::UnexpectedBaseCount { count: 1 })
        ));
    }

    #[test]
    fn detached_part_aborts_with_contour_count() {
        let mut wb = rocket();
        // A fin floating far off the body.
        wb.add_series(
            "canard",
            10,
            126,
            &[
                (50.0, 95.0),
                (54.0, 99.0),
                (54.0, 85.0),
                (50.0, 82.0),
                (50.0, 90.0),
            ],
        );
        let options = DrawOptions {
            notch_width: 0.0,
            label: None,
        };
        assert!(matches!(
            draw(&wb, &wb, &options),
            Err(DrawError::MultiContourResult { contours: 2 })
        ));
    }

    #[test]
    fn drawing_bounds_cover_fins() {
        let wb = rocket();
        let options = DrawOptions {
            notch_width: 4.0,
            label: None,
        };
        let drawing = draw(&wb, &wb, &options).unwrap();
        let (min_x, min_y, max_x, max_y) = drawing.bounding_box().unwrap();
        assert_eq!((min_x, max_x), (-9.0, 9.0));
        assert_eq!((min_y, max_y), (0.0, 100.0));
    }
}

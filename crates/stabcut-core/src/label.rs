//! Project label: measurement, auto-shrink fitting, and placement.
//!
//! The label is drawn rotated 90 degrees along the fuselage axis,
//! vertically centered on the body's midpoint, and shrunk a point at
//! a time until it fits the space the body actually offers. Glyph
//! outlines come in through [`GlyphSource`] in font units; everything
//! in here is font-format agnostic.

use crate::chart::SeriesTable;
use crate::error::DrawError;
use crate::geometry::Point;

/// Fixed gap appended after every glyph, in drawing units.
pub const KERN_MARGIN: f64 = 5.0;

/// Fraction of the body height the label may span.
pub const WIDTH_WINDOW_FRACTION: f64 = 0.5;

/// One outline-drawing command in glyph coordinates (font units,
/// y-up, origin at the glyph's baseline start).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { x1: f64, y1: f64, x: f64, y: f64 },
    CurveTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    Close,
}

/// A decomposed glyph outline with its bounding box in font units.
#[derive(Debug, Clone, Default)]
pub struct GlyphOutline {
    pub commands: Vec<PathCommand>,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Access to a font's glyph outlines. The TTF-backed implementation
/// lives in the CLI crate; tests use synthetic boxes.
pub trait GlyphSource {
    fn units_per_em(&self) -> f64;
    fn outline(&self, ch: char) -> Option<GlyphOutline>;
}

/// The space the body offers the label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelSpace {
    /// Centerline point at the body's vertical midpoint.
    pub anchor: Point,
    /// Usable length along the body axis.
    pub width: f64,
    /// Twice the smallest body radius inside the width window.
    pub diameter: f64,
}

/// Measure the body halves and work out where the label can go.
///
/// The narrowest radius is taken over body points whose Y falls in
/// the width window around the anchor; if the window catches no
/// points the radius of the point nearest the anchor is used, and as
/// a last resort the overall minimum body radius.
pub fn label_space(table: &SeriesTable) -> Option<LabelSpace> {
    let body_points: Vec<Point> = table
        .iter()
        .filter(|(part, _)| part.is_body())
        .flat_map(|(_, polygon)| polygon.points.iter().copied())
        .collect();

    let min_y = body_points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = body_points
        .iter()
        .map(|p| p.y)
        .fold(f64::NEG_INFINITY, f64::max);
    if !min_y.is_finite() || !max_y.is_finite() {
        return None;
    }

    let height = max_y - min_y;
    let anchor = Point::new(0.0, (min_y + max_y) / 2.0);
    let width = height * WIDTH_WINDOW_FRACTION;

    let in_window = |p: &&Point| (p.y - anchor.y).abs() <= width / 2.0;
    let radius = body_points
        .iter()
        .filter(in_window)
        .map(|p| p.x.abs())
        .fold(f64::INFINITY, f64::min);

    let radius = if radius.is_finite() {
        radius
    } else {
        nearest_radius(&body_points, anchor.y)?
    };

    Some(LabelSpace {
        anchor,
        width,
        diameter: radius * 2.0,
    })
}

fn nearest_radius(points: &[Point], anchor_y: f64) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for point in points {
        let distance = (point.y - anchor_y).abs();
        if best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, point.x.abs()));
        }
    }
    let nearest = best.map(|(_, r)| r)?;
    if nearest > 0.0 {
        Some(nearest)
    } else {
        // Degenerate nearest point on the centerline; fall back to
        // the smallest radius anywhere on the body.
        points.iter().map(|p| p.x.abs()).reduce(f64::min)
    }
}

/// Measure `text` at `size`: total advance width and tallest glyph
/// height, in drawing units. Spaces advance by the font size.
pub fn measure(text: &str, font: &dyn GlyphSource, size: f64) -> (f64, f64) {
    let scale = size / font.units_per_em();
    let mut width = 0.0;
    let mut height = 0.0f64;

    for ch in text.chars() {
        if ch == ' ' {
            width += size;
            continue;
        }
        if let Some(glyph) = font.outline(ch) {
            width += glyph.max_x * scale + KERN_MARGIN;
            height = height.max(glyph.max_y * scale);
        }
    }

    (width, height)
}

/// Find the largest integer-stepped font size that fits the space.
///
/// Starts at the available diameter and decrements by 1; the label
/// may be up to twice the diameter tall because it is scored, not
/// cut, and a little overhang reads fine.
pub fn fit_size(
    text: &str,
    font: &dyn GlyphSource,
    space: LabelSpace,
) -> Result<f64, DrawError> {
    let does_not_fit = DrawError::LabelDoesNotFit {
        width: space.width,
        diameter: space.diameter,
    };

    if space.width <= 0.0 || space.diameter <= 0.0 {
        return Err(does_not_fit);
    }

    let mut size = space.diameter;
    while size > 0.0 {
        let (width, height) = measure(text, font, size);
        if width <= space.width && height <= space.diameter * 2.0 {
            return Ok(size);
        }
        size -= 1.0;
    }

    Err(does_not_fit)
}

/// Place the fitted label: one command list per glyph, in drawing
/// coordinates, rotated 90 degrees counterclockwise about the anchor
/// and centered on it along the body axis.
pub fn layout(
    text: &str,
    font: &dyn GlyphSource,
    size: f64,
    anchor: Point,
) -> Vec<Vec<PathCommand>> {
    let scale = size / font.units_per_em();
    let (total_width, _) = measure(text, font, size);

    let mut glyphs = Vec::new();
    let mut pen = -total_width / 2.0;

    for ch in text.chars() {
        if ch == ' ' {
            pen += size;
            continue;
        }
        let Some(glyph) = font.outline(ch) else {
            continue;
        };

        let place = |x: f64, y: f64| {
            let along = pen + x * scale;
            let out = y * scale;
            // (x, y) -> (-y, x) about the anchor.
            (anchor.x - out, anchor.y + along)
        };

        let commands = glyph
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo { x, y } => {
                    let (x, y) = place(x, y);
                    PathCommand::MoveTo { x, y }
                }
                PathCommand::LineTo { x, y } => {
                    let (x, y) = place(x, y);
                    PathCommand::LineTo { x, y }
                }
                PathCommand::QuadTo { x1, y1, x, y } => {
                    let (x1, y1) = place(x1, y1);
                    let (x, y) = place(x, y);
                    PathCommand::QuadTo { x1, y1, x, y }
                }
                PathCommand::CurveTo { x1, y1, x2, y2, x, y } => {
                    let (x1, y1) = place(x1, y1);
                    let (x2, y2) = place(x2, y2);
                    let (x, y) = place(x, y);
                    PathCommand::CurveTo { x1, y1, x2, y2, x, y }
                }
                PathCommand::Close => PathCommand::Close,
            })
            .collect();

        glyphs.push(commands);
        pen += glyph.max_x * scale + KERN_MARGIN;
    }

    glyphs
}

/// Full label pass: uppercase, find the space, fit, place.
pub fn make_label(
    text: &str,
    font: &dyn GlyphSource,
    table: &SeriesTable,
) -> Result<Vec<Vec<PathCommand>>, DrawError> {
    let space = label_space(table).ok_or(DrawError::LabelDoesNotFit {
        width: 0.0,
        diameter: 0.0,
    })?;
    let text = text.to_uppercase();
    let size = fit_size(&text, font, space)?;
    Ok(layout(&text, font, size, space.anchor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::PartName;
    use crate::geometry::Polygon;

    /// Every glyph is a 600x700 font-unit box at 1000 units per em.
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
                    PathCommand::LineTo { x: 0.0, y: 700.0 },
                    PathCommand::Close,
                ],
                min_x: 0.0,
                min_y: 0.0,
                max_x: 600.0,
                max_y: 700.0,
            })
        }
    }

    fn body_table() -> SeriesTable {
        let mut table = SeriesTable::new();
        table.insert(
            PartName::Fuselage,
            Polygon::new(vec![
                Point::new(5.0, 100.0),
                Point::new(5.0, 40.0),
                Point::new(2.0, 10.0),
                Point::new(1.0, 0.0),
            ]),
        );
        table.insert(
            PartName::Fuselage2,
            Polygon::new(vec![
                Point::new(-5.0, 100.0),
                Point::new(-5.0, 40.0),
                Point::new(-2.0, 10.0),
                Point::new(-1.0, 0.0),
            ]),
        );
        table
    }

    #[test]
    fn space_uses_window_minimum_radius() {
        let space = label_space(&body_table()).unwrap();
        assert_eq!(space.anchor, Point::new(0.0, 50.0));
        assert_eq!(space.width, 50.0); // half of the 100 body height
        // Window is y in [25, 75]; only the 5.0-radius points fall in.
        assert_eq!(space.diameter, 10.0);
    }

    #[test]
    fn space_falls_back_to_nearest_point() {
        let mut table = SeriesTable::new();
        // All points far from the midpoint window.
        table.insert(
            PartName::Fuselage,
            Polygon::new(vec![Point::new(5.0, 100.0), Point::new(3.0, 0.0)]),
        );
        table.insert(
            PartName::Fuselage2,
            Polygon::new(vec![Point::new(-5.0, 100.0), Point::new(-3.0, 0.0)]),
        );
        let space = label_space(&table).unwrap();
        // Window [25, 75] catches both endpoints (|y - 50| = 50 > 25?).
        // 100 -> |50| > 25 and 0 -> |50| > 25, so fallback applies;
        // all four points are equally near, first wins.
        assert_eq!(space.diameter, 10.0);
    }

    #[test]
    fn measure_sums_advances_and_kern() {
        // size 10 at upem 1000: scale 0.01, glyph advance 6 + 5 kern.
        let (width, height) = measure("AB", &BoxGlyphs, 10.0);
        assert_eq!(width, 22.0);
        assert_eq!(height, 7.0);
    }

    #[test]
    fn spaces_advance_by_font_size() {
        let (width, _) = measure("A B", &BoxGlyphs, 10.0);
        assert_eq!(width, 32.0);
    }

    #[test]
    fn fit_shrinks_until_width_fits() {
        let space = LabelSpace {
            anchor: Point::new(0.0, 50.0),
            width: 50.0,
            diameter: 10.0,
        };
        // At size 10 a 4-glyph label is 4 * (6 + 5) = 44 <= 50: fits
        // immediately.
        assert_eq!(fit_size("ABCD", &BoxGlyphs, space).unwrap(), 10.0);

        // 8 glyphs at size 10 measure 88; shrinking reaches a fit
        // once 8 * (0.6 s + 5) <= 50, i.e. s <= 2.08 -> size 2.
        assert_eq!(fit_size("ABCDEFGH", &BoxGlyphs, space).unwrap(), 2.0);
    }

    #[test]
    fn unfittable_label_errors() {
        let space = LabelSpace {
            anchor: Point::new(0.0, 50.0),
            width: 9.0, // kern alone is 10 for two glyphs
            diameter: 10.0,
        };
        assert!(matches!(
            fit_size("AB", &BoxGlyphs, space),
            Err(DrawError::LabelDoesNotFit { .. })
        ));

        let empty = LabelSpace {
            anchor: Point::new(0.0, 0.0),
            width: 0.0,
            diameter: 10.0,
        };
        assert!(fit_size("A", &BoxGlyphs, empty).is_err());
    }

    #[test]
    fn layout_rotates_and_centers() {
        let anchor = Point::new(0.0, 50.0);
        // One glyph at size 10: total width 11, pen starts at -5.5.
        let glyphs = layout("A", &BoxGlyphs, 10.0, anchor);
        assert_eq!(glyphs.len(), 1);

        // MoveTo (0,0) -> along = -5.5, out = 0 -> (0.0, 44.5).
        assert_eq!(glyphs[0][0], PathCommand::MoveTo { x: 0.0, y: 44.5 });
        // LineTo (600,0) -> along = 0.5 -> (0.0, 50.5).
        assert_eq!(glyphs[0][1], PathCommand::LineTo { x: 0.0, y: 50.5 });
        // LineTo (600,700) -> out = 7 -> (-7.0, 50.5).
        assert_eq!(glyphs[0][2], PathCommand::LineTo { x: -7.0, y: 50.5 });
    }

    #[test]
    fn make_label_uppercases_and_fits() {
        let glyphs = make_label("apex", &BoxGlyphs, &body_table()).unwrap();
        assert_eq!(glyphs.len(), 4);
    }

    #[test]
    fn empty_table_cannot_carry_a_label() {
        let table = SeriesTable::new();
        assert!(matches!(
            make_label("A", &BoxGlyphs, &table),
            Err(DrawError::LabelDoesNotFit { .. })
        ));
    }
}

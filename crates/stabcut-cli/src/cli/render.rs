//! SVG output.
//!
//! Drawings are built as plain strings, one `<g>` per pen so a
//! cutter driver can address passes by color. Pipeline coordinates
//! are y-up; standalone output flips them with a `scale(1 -1)` group,
//! while card output leaves orientation to the placement transform.

use stabcut_core::{Drawing, PathCommand, Pen, Segment};

use super::card::CardPlacement;
use super::config::ClassLayout;

const STROKE_WIDTH: f64 = 0.5;
const MARGIN: f64 = 5.0;

/// Stroke color per pen pass.
fn pen_color(pen: Pen) -> &'static str {
    match pen {
        Pen::Outline => "red",
        Pen::Fin => "blue",
        Pen::Notch => "green",
    }
}

/// Render one drawing to a standalone SVG sized to its contents.
pub fn drawing_to_svg(drawing: &Drawing) -> String {
    let (min_x, min_y, max_x, max_y) =
        drawing.bounding_box().unwrap_or((0.0, 0.0, 1.0, 1.0));

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.2} {:.2} {:.2} {:.2}">
<g transform="scale(1 -1)">
"#,
        min_x - MARGIN,
        -max_y - MARGIN,
        (max_x - min_x) + MARGIN * 2.0,
        (max_y - min_y) + MARGIN * 2.0,
    ));

    svg.push_str(&segments_markup(&drawing.segments));
    svg.push_str(&glyphs_markup(&drawing.label_glyphs));
    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Render a drawing ganged onto its class's card stock: one card
/// rectangle per copy, the placed drawing inside each.
///
/// Returns `None` when the drawing has no area to place.
pub fn card_svg(drawing: &Drawing, layout: &ClassLayout) -> Option<String> {
    let bounds = drawing.bounding_box()?;
    let placement = CardPlacement::fit(bounds, layout)?;
    let copies = layout.copies.max(1);

    // Cards tile horizontally, the corner offset doubling as gutter.
    let pitch = layout.card_width + layout.card_x;
    let sheet_width = layout.card_x + pitch * copies as f64;
    let sheet_height = layout.card_y * 2.0 + layout.card_height;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.2} {:.2}">
"#,
        sheet_width, sheet_height
    ));

    let body = format!(
        "{}{}",
        segments_markup(&drawing.segments),
        glyphs_markup(&drawing.label_glyphs)
    );

    for copy in 0..copies {
        svg.push_str(&format!(
            "<g transform=\"translate({:.2} 0)\">\n",
            pitch * copy as f64
        ));
        svg.push_str(&format!(
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" stroke=\"#cccccc\" fill=\"none\"/>\n",
            layout.card_x, layout.card_y, layout.card_width, layout.card_height
        ));
        svg.push_str(&format!(
            "  <g transform=\"{}\">\n",
            placement.transform_attr()
        ));
        svg.push_str(&body);
        svg.push_str("  </g>\n</g>\n");
    }

    svg.push_str("</svg>\n");
    Some(svg)
}

/// One `<g>` of `<line>` elements per pen, in pen order.
fn segments_markup(segments: &[Segment]) -> String {
    let mut svg = String::new();

    for pen in [Pen::Outline, Pen::Fin, Pen::Notch] {
        let lines: Vec<&Segment> = segments.iter().filter(|s| s.pen == pen).collect();
        if lines.is_empty() {
            continue;
        }

        svg.push_str(&format!(
            "<g stroke=\"{}\" stroke-width=\"{}\" fill=\"none\">\n",
            pen_color(pen),
            STROKE_WIDTH
        ));
        for segment in lines {
            svg.push_str(&format!(
                "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>\n",
                segment.line.x1, segment.line.y1, segment.line.x2, segment.line.y2
            ));
        }
        svg.push_str("</g>\n");
    }

    svg
}

/// Filled `<path>` elements for the label glyphs.
fn glyphs_markup(glyphs: &[Vec<PathCommand>]) -> String {
    if glyphs.is_empty() {
        return String::new();
    }

    let mut svg = String::new();
    svg.push_str("<g fill=\"black\" stroke=\"none\">\n");
    for glyph in glyphs {
        svg.push_str(&format!("  <path d=\"{}\"/>\n", glyph_path_d(glyph)));
    }
    svg.push_str("</g>\n");
    svg
}

fn glyph_path_d(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for command in commands {
        if !d.is_empty() {
            d.push(' ');
        }
        match *command {
            PathCommand::MoveTo { x, y } => d.push_str(&format!("M{:.2},{:.2}", x, y)),
            PathCommand::LineTo { x, y } => d.push_str(&format!("L{:.2},{:.2}", x, y)),
            PathCommand::QuadTo { x1, y1, x, y } => {
                d.push_str(&format!("Q{:.2},{:.2} {:.2},{:.2}", x1, y1, x, y))
            }
            PathCommand::CurveTo { x1, y1, x2, y2, x, y } => d.push_str(&format!(
                "C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
                x1, y1, x2, y2, x, y
            )),
            PathCommand::Close => d.push('Z'),
        }
    }
    d
}

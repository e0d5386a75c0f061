//! Card placement: fit a finished drawing onto the class's card
//! stock.
//!
//! The drawing comes out of the pipeline nose-up; cards are cut in
//! landscape, so the drawing is rotated 90 degrees and scaled to the
//! card rectangle. The transform composes right-to-left: rotate about
//! the origin, scale, then translate into the card corner.

use super::config::ClassLayout;

/// A computed rotate/scale/translate placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub scale: f64,
    pub tx: f64,
    pub ty: f64,
}

impl CardPlacement {
    /// Fit a drawing's bounding box into the layout's card rectangle.
    ///
    /// Rotation swaps the axes: the drawing's height runs along the
    /// card's width. Degenerate boxes (no area on either axis) cannot
    /// be placed.
    pub fn fit(bounds: (f64, f64, f64, f64), layout: &ClassLayout) -> Option<CardPlacement> {
        let (min_x, min_y, max_x, max_y) = bounds;
        let width = max_x - min_x;
        let height = max_y - min_y;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }

        let scale = (layout.card_width / height).min(layout.card_height / width);

        // rotate(90) maps (x, y) to (-y, x); translate so the rotated
        // box's top-left corner lands on the card's corner.
        let tx = layout.card_x + max_y * scale;
        let ty = layout.card_y - min_x * scale;

        Some(CardPlacement { scale, tx, ty })
    }

    /// The SVG `transform` attribute value for this placement.
    pub fn transform_attr(&self) -> String {
        format!(
            "translate({:.2} {:.2}) scale({:.4}) rotate(90)",
            self.tx, self.ty, self.scale
        )
    }

    /// Where a drawing point ends up on the sheet. The renderer never
    /// needs this (the SVG transform does the work); tests do.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.tx - y * self.scale, self.ty + x * self.scale)
    }
}

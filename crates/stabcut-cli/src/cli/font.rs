//! TTF-backed glyph outlines for the engraved label.
//!
//! The face is re-parsed per lookup; `ttf_parser::Face` borrows the
//! byte buffer, and parsing is a cheap header walk, so holding the
//! raw bytes keeps the type self-contained and `Sync` for the batch
//! pool.

use std::fs;
use std::path::Path;

use thiserror::Error;
use ttf_parser::{Face, OutlineBuilder};

use stabcut_core::{GlyphOutline, GlyphSource, PathCommand};

#[derive(Debug, Error)]
pub enum FontError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("not a parseable font face: {0}")]
    BadFace(String),
}

/// A loaded TTF/OTF font.
pub struct TtfFont {
    data: Vec<u8>,
    units_per_em: f64,
}

impl TtfFont {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FontError> {
        let face = Face::parse(&data, 0).map_err(|e| FontError::BadFace(e.to_string()))?;
        let units_per_em = face.units_per_em() as f64;
        Ok(Self { data, units_per_em })
    }

    pub fn load(path: &Path) -> Result<Self, FontError> {
        Self::from_bytes(fs::read(path)?)
    }
}

/// Collects `ttf_parser` outline callbacks into path commands.
struct CommandBuilder {
    commands: Vec<PathCommand>,
}

impl OutlineBuilder for CommandBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo {
            x: x as f64,
            y: y as f64,
        });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo {
            x: x as f64,
            y: y as f64,
        });
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::QuadTo {
            x1: x1 as f64,
            y1: y1 as f64,
            x: x as f64,
            y: y as f64,
        });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CurveTo {
            x1: x1 as f64,
            y1: y1 as f64,
            x2: x2 as f64,
            y2: y2 as f64,
            x: x as f64,
            y: y as f64,
        });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

impl GlyphSource for TtfFont {
    fn units_per_em(&self) -> f64 {
        self.units_per_em
    }

    fn outline(&self, ch: char) -> Option<GlyphOutline> {
        // The buffer was validated at load time; a parse failure here
        // just means no outline for this glyph.
        let face = Face::parse(&self.data, 0).ok()?;
        let glyph = face.glyph_index(ch)?;

        let mut builder = CommandBuilder {
            commands: Vec::new(),
        };
        let bbox = face.outline_glyph(glyph, &mut builder)?;

        Some(GlyphOutline {
            commands: builder.commands,
            min_x: bbox.x_min as f64,
            min_y: bbox.y_min as f64,
            max_x: bbox.x_max as f64,
            max_y: bbox.y_max as f64,
        })
    }
}

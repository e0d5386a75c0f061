//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands
//! and their supporting pieces:
//! - `draw` - Generate one outline SVG from a chart document
//! - `batch` - Run a directory of chart documents in parallel
//! - `workbook` - Chart document parsing (series + cell grid)
//! - `config` - Per-class card layout configuration
//! - `font` - TTF-backed glyph outlines for the label
//! - `render` - SVG string output
//! - `card` - Scale/rotate placement onto a class's card stock

pub mod batch;
pub mod card;
pub mod config;
pub mod draw;
pub mod font;
pub mod render;
pub mod workbook;

pub use batch::{cmd_batch, run_batch, BatchOptions, BatchSummary, JobError};
pub use card::CardPlacement;
pub use config::{ClassLayout, Config};
pub use draw::cmd_draw;
pub use font::TtfFont;
pub use render::{card_svg, drawing_to_svg};
pub use workbook::ChartDocument;

//! # stabcut-cli
//!
//! Command-line front end for stabcut: chart document loading,
//! per-class layout config, TTF glyph outlines, SVG rendering, card
//! placement, and the parallel batch driver.

pub mod cli;

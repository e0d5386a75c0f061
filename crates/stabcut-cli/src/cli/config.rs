//! Per-class layout configuration.
//!
//! Each rocket class names the card stock it is cut from: the card
//! rectangle's size and position on the sheet, the motor notch width,
//! and how many copies to gang onto one sheet. Classes the config
//! file does not mention fall back to the defaults.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Card layout for one rocket class, in output millimetres.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassLayout {
    pub card_width: f64,
    pub card_height: f64,
    pub card_x: f64,
    pub card_y: f64,
    pub notch_width: f64,
    pub copies: usize,
}

impl Default for ClassLayout {
    fn default() -> Self {
        Self {
            card_width: 100.0,
            card_height: 160.0,
            card_x: 5.0,
            card_y: 5.0,
            notch_width: 4.0,
            copies: 1,
        }
    }
}

/// The whole config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classes: HashMap<String, ClassLayout>,
    /// Path to the label font; no font means no label.
    #[serde(default)]
    pub font: Option<PathBuf>,
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, super::batch::JobError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }

    /// Layout for a document's class; unknown or absent classes get
    /// the defaults.
    pub fn layout_for(&self, class: Option<&str>) -> ClassLayout {
        class
            .and_then(|name| self.classes.get(name).cloned())
            .unwrap_or_default()
    }
}

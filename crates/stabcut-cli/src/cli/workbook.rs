//! Chart document parsing.
//!
//! A chart document is the JSON the spreadsheet extractor emits for
//! one project: the project name, an optional rocket class, the
//! chart's series definitions, and the flat cell grid keyed by
//! address (`"C126"`). The document implements both pipeline source
//! traits so one loaded file drives the whole drawing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use stabcut_core::{CellRef, CellSource, ChartSource, SeriesRef};

/// One series definition as stored in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesEntry {
    #[serde(default)]
    pub title: Option<String>,
    pub x_ref: String,
    pub y_ref: String,
}

/// A parsed chart document.
#[derive(Debug, Deserialize)]
pub struct ChartDocument {
    /// Project name; uppercased for the engraved label.
    pub name: String,
    /// Rocket class key into the layout config.
    #[serde(default)]
    pub class: Option<String>,
    pub series: Vec<SeriesEntry>,
    /// Cell grid keyed by address, e.g. `"C126"`.
    #[serde(default)]
    pub cells: HashMap<String, f64>,
}

impl ChartDocument {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, super::batch::JobError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }
}

impl ChartSource for ChartDocument {
    fn series(&self) -> Vec<SeriesRef> {
        self.series
            .iter()
            .map(|entry| SeriesRef {
                title: entry.title.clone(),
                x_ref: entry.x_ref.clone(),
                y_ref: entry.y_ref.clone(),
            })
            .collect()
    }
}

impl CellSource for ChartDocument {
    fn value(&self, cell: CellRef) -> Option<f64> {
        self.cells.get(&cell.to_string()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "name": "apex",
        "class": "mini",
        "series": [
            {"title": "fuselage", "x_ref": "!$C$126:$C$128", "y_ref": "!$D$126:$D$128"},
            {"x_ref": "!$E$126:$E$128", "y_ref": "!$F$126:$F$128"}
        ],
        "cells": {"C126": 5.0, "D126": 100.0, "C127": 2.0, "D127": 10.0}
    }"#;

    #[test]
    fn parses_series_and_cells() {
        let doc = ChartDocument::from_json(DOC).unwrap();
        assert_eq!(doc.name, "apex");
        assert_eq!(doc.class.as_deref(), Some("mini"));

        let series = doc.series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].title.as_deref(), Some("fuselage"));
        assert_eq!(series[1].title, None);
    }

    #[test]
    fn cell_lookup_uses_display_addresses() {
        let doc = ChartDocument::from_json(DOC).unwrap();
        assert_eq!(doc.value(CellRef::new(2, 126)), Some(5.0)); // C126
        assert_eq!(doc.value(CellRef::new(3, 127)), Some(10.0)); // D127
        assert_eq!(doc.value(CellRef::new(2, 999)), None);
    }

    #[test]
    fn missing_cells_key_defaults_empty() {
        let doc =
            ChartDocument::from_json(r#"{"name": "x", "series": []}"#).unwrap();
        assert!(doc.cells.is_empty());
        assert_eq!(doc.class, None);
    }
}

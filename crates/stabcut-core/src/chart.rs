//! Chart series extraction and the part-name vocabulary.
//!
//! A chart source hands over its data series in document order; each
//! series carries an optional title and the symbolic X/Y range
//! references. Titled series are matched against the fixed part
//! vocabulary; untitled series fall back to a positional mapping that
//! mirrors the order the source template lays its chart out in.

use std::collections::BTreeMap;

use crate::error::DrawError;
use crate::geometry::Polygon;

/// The fixed vocabulary of rocket cross-section parts.
///
/// Declaration order matters: it is the iteration order of the
/// [`SeriesTable`], which keeps base-point detection and drawing
/// output deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartName {
    Fuselage,
    Fuselage2,
    Aileron,
    Aileron2,
    Canard,
    Canard2,
    Cone,
    Cone1,
}

/// Mapping from part identifier to its polygon at one pipeline stage.
pub type SeriesTable = BTreeMap<PartName, Polygon>;

impl PartName {
    pub const ALL: [PartName; 8] = [
        PartName::Fuselage,
        PartName::Fuselage2,
        PartName::Aileron,
        PartName::Aileron2,
        PartName::Canard,
        PartName::Canard2,
        PartName::Cone,
        PartName::Cone1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartName::Fuselage => "fuselage",
            PartName::Fuselage2 => "fuselage2",
            PartName::Aileron => "aileron",
            PartName::Aileron2 => "aileron2",
            PartName::Canard => "canard",
            PartName::Canard2 => "canard2",
            PartName::Cone => "cone",
            PartName::Cone1 => "cone1",
        }
    }

    /// Match a series title, case-insensitively.
    pub fn from_title(title: &str) -> Option<PartName> {
        let lower = title.to_lowercase();
        PartName::ALL.iter().copied().find(|p| p.as_str() == lower)
    }

    /// Positional fallback for untitled series. Only these chart
    /// indices are recognized; everything else is dropped.
    pub fn from_position(index: usize) -> Option<PartName> {
        match index {
            0 => Some(PartName::Fuselage),
            1 => Some(PartName::Fuselage2),
            2 => Some(PartName::Aileron),
            3 => Some(PartName::Aileron2),
            6 => Some(PartName::Canard),
            7 => Some(PartName::Canard2),
            12 => Some(PartName::Cone),
            13 => Some(PartName::Cone1),
            _ => None,
        }
    }

    /// Fuselage halves: taper-clamped, base-point bearing.
    pub fn is_body(&self) -> bool {
        matches!(self, PartName::Fuselage | PartName::Fuselage2)
    }

    /// Fin series: root-inset and given indicator lines.
    pub fn is_fin(&self) -> bool {
        matches!(
            self,
            PartName::Aileron | PartName::Aileron2 | PartName::Canard | PartName::Canard2
        )
    }

    /// Nose-cone halves: closed to the centerline before union.
    pub fn is_cone(&self) -> bool {
        matches!(self, PartName::Cone | PartName::Cone1)
    }
}

/// One data series as the chart source exposes it.
#[derive(Debug, Clone)]
pub struct SeriesRef {
    pub title: Option<String>,
    pub x_ref: String,
    pub y_ref: String,
}

/// Ordered access to a chart's data series. The workbook parser that
/// produces these is an external collaborator.
pub trait ChartSource {
    fn series(&self) -> Vec<SeriesRef>;
}

/// Map the chart's series to part names.
///
/// Titled series matching the vocabulary win; untitled ones use the
/// positional fallback; everything else is silently ignored so that
/// charts with extra decorative series keep working. A chart where
/// nothing resolves is malformed.
pub fn extract_series(chart: &dyn ChartSource) -> Result<Vec<(PartName, SeriesRef)>, DrawError> {
    let mut extracted = Vec::new();

    for (index, series) in chart.series().into_iter().enumerate() {
        let part = match &series.title {
            Some(title) => PartName::from_title(title),
            None => PartName::from_position(index),
        };
        if let Some(part) = part {
            extracted.push((part, series));
        }
    }

    if extracted.is_empty() {
        return Err(DrawError::NoSeriesFound);
    }

    Ok(extracted)
}

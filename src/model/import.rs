//! Import van boorgatdatasets uit JSON en een tolerante validatie.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use super::BoreholeData;
use super::color::parse_css_color;

/// Result type voor het importeren van datasets.
pub type ImportResult<T> = Result<T, ImportError>;

/// Beschrijft fouten tijdens het importeren.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Het JSON-document kon niet gede-serialiseerd worden.
    #[error("JSON parsefout: {0}")]
    Json(#[from] serde_json::Error),
    /// Het document bevat geen enkel teken.
    #[error("leeg document")]
    Empty,
}

/// Leest een JSON-document en converteert het naar [`BoreholeData`].
pub fn parse_dataset(input: &str) -> ImportResult<BoreholeData> {
    let trimmed = input.trim_start_matches(|c: char| c == '\u{feff}' || c.is_whitespace());
    if trimmed.is_empty() {
        return Err(ImportError::Empty);
    }

    let data: BoreholeData = serde_json::from_str(trimmed)?;
    log::debug!(
        "Dataset `{}` geladen: {} boorgaten, {} in doorsnede",
        data.name,
        data.boreholes.len(),
        data.cross_section.borehole_order.len()
    );
    Ok(data)
}

/// A problem found in an imported dataset. None of these stop rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationIssue {
    DuplicateBorehole { borehole: String },
    NoLayers { borehole: String },
    InvertedLayer { borehole: String, layer: u32 },
    NegativeDepth { borehole: String, layer: u32 },
    NonMonotonicLayer { borehole: String, layer: u32 },
    DuplicateLayerId { borehole: String, layer: u32 },
    UnparseableColor { borehole: String, layer: u32, color: String },
    NonFiniteValue { borehole: String },
    UnknownOrderId { id: String },
    DuplicateOrderId { id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Checks the data model invariants without rejecting the dataset.
#[must_use]
pub fn validate(data: &BoreholeData) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen_boreholes = HashSet::new();

    for borehole in &data.boreholes {
        if !seen_boreholes.insert(borehole.id.as_str()) {
            report.issues.push(ValidationIssue::DuplicateBorehole {
                borehole: borehole.id.clone(),
            });
        }
        if !(borehole.lat.is_finite() && borehole.lng.is_finite() && borehole.elevation.is_finite())
        {
            report.issues.push(ValidationIssue::NonFiniteValue {
                borehole: borehole.id.clone(),
            });
        }
        if borehole.layers.is_empty() {
            report.issues.push(ValidationIssue::NoLayers {
                borehole: borehole.id.clone(),
            });
            continue;
        }

        let mut seen_layers = HashSet::new();
        let mut previous_bottom = f64::NEG_INFINITY;
        for layer in &borehole.layers {
            let id = borehole.id.clone();
            if !seen_layers.insert(layer.id) {
                report.issues.push(ValidationIssue::DuplicateLayerId {
                    borehole: id.clone(),
                    layer: layer.id,
                });
            }
            if !(layer.top_depth.is_finite() && layer.bottom_depth.is_finite()) {
                report.issues.push(ValidationIssue::NonFiniteValue { borehole: id });
                continue;
            }
            if layer.top_depth < 0.0 || layer.bottom_depth < 0.0 {
                report.issues.push(ValidationIssue::NegativeDepth {
                    borehole: id.clone(),
                    layer: layer.id,
                });
            }
            if layer.top_depth >= layer.bottom_depth {
                report.issues.push(ValidationIssue::InvertedLayer {
                    borehole: id.clone(),
                    layer: layer.id,
                });
            }
            if layer.top_depth < previous_bottom {
                report.issues.push(ValidationIssue::NonMonotonicLayer {
                    borehole: id.clone(),
                    layer: layer.id,
                });
            }
            if parse_css_color(&layer.color).is_none() {
                report.issues.push(ValidationIssue::UnparseableColor {
                    borehole: id,
                    layer: layer.id,
                    color: layer.color.clone(),
                });
            }
            previous_bottom = previous_bottom.max(layer.bottom_depth);
        }
    }

    let mut seen_order = HashSet::new();
    for id in &data.cross_section.borehole_order {
        if !seen_order.insert(id.as_str()) {
            report.issues.push(ValidationIssue::DuplicateOrderId { id: id.clone() });
        }
        if data.borehole(id).is_none() {
            report.issues.push(ValidationIssue::UnknownOrderId { id: id.clone() });
        }
    }

    if !report.is_clean() {
        log::warn!(
            "Dataset `{}` bevat {} validatieproblemen",
            data.name,
            report.len()
        );
    }

    report
}

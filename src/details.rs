//! Tabelweergaven van één boorgat: algemene gegevens en lagen.

use serde::Serialize;

use crate::model::{Borehole, format_meters};

/// Kind of value shown in an info row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Number,
}

/// One `field | type | value` row of the borehole info table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoRow {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub value: String,
}

impl InfoRow {
    fn new(field: &'static str, kind: ValueKind, value: String) -> Self {
        Self { field, kind, value }
    }
}

/// General information rows, in display order.
#[must_use]
pub fn info_rows(borehole: &Borehole) -> Vec<InfoRow> {
    vec![
        InfoRow::new("ID", ValueKind::String, borehole.id.clone()),
        InfoRow::new("Latitude", ValueKind::Number, format!("{:.6}", borehole.lat)),
        InfoRow::new("Longitude", ValueKind::Number, format!("{:.6}", borehole.lng)),
        InfoRow::new("Elevation", ValueKind::Number, format_meters(borehole.elevation)),
        InfoRow::new("Total Depth", ValueKind::Number, format_meters(borehole.total_depth())),
        InfoRow::new("Number of Layers", ValueKind::Number, borehole.layers.len().to_string()),
    ]
}

/// One row of the layer table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerRow {
    pub id: u32,
    pub material: String,
    pub color: String,
    pub top_depth: f64,
    pub bottom_depth: f64,
    /// Thickness rounded to one decimal, e.g. `"2.5"`.
    pub thickness: String,
    pub description: String,
}

/// Layer rows in the order the borehole lists them.
#[must_use]
pub fn layer_rows(borehole: &Borehole) -> Vec<LayerRow> {
    borehole
        .layers
        .iter()
        .map(|layer| LayerRow {
            id: layer.id,
            material: layer.material.clone(),
            color: layer.color.clone(),
            top_depth: layer.top_depth,
            bottom_depth: layer.bottom_depth,
            thickness: format!("{:.1}", layer.thickness()),
            description: layer.description.clone(),
        })
        .collect()
}

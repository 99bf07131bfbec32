//! Pointer hit-testing and the layer selection of the section view.

use serde::Serialize;

use super::layout::SectionLayout;
use crate::geometry::{Point2, Rect, polygon_contains};
use crate::model::{Borehole, Layer, format_meters};

/// Edge tolerance for connector picking, in pixels.
const PICK_EPS: f64 = 1e-9;

/// A layer cell under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerHit<'a> {
    pub column: usize,
    pub borehole: &'a Borehole,
    pub layer_index: usize,
    pub layer: &'a Layer,
}

/// A connective polygon under the pointer with both linked layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorHit<'a> {
    pub connector: usize,
    pub from: LayerHit<'a>,
    pub to: LayerHit<'a>,
}

/// Converts a pointer position in displayed (CSS) pixels to canvas pixels.
///
/// `client` and `bounds` share the page coordinate space; `canvas` is the
/// canvas resolution. A collapsed bounds box leaves that axis unscaled.
#[must_use]
pub fn scale_pointer(client: Point2, bounds: Rect, canvas: (f64, f64)) -> Point2 {
    let scale = |size: f64, displayed: f64| {
        if displayed.is_finite() && displayed > 0.0 {
            size / displayed
        } else {
            1.0
        }
    };
    Point2::new(
        (client.x - bounds.x) * scale(canvas.0, bounds.width),
        (client.y - bounds.y) * scale(canvas.1, bounds.height),
    )
}

/// First layer cell containing `point`, scanning columns left to right and
/// layers shallow to deep.
#[must_use]
pub fn hit_test<'a>(layout: &SectionLayout<'a>, point: Point2) -> Option<LayerHit<'a>> {
    if !point.is_finite() {
        return None;
    }

    layout
        .columns
        .iter()
        .filter(|column| point.x >= column.left && point.x <= column.right)
        .find_map(|column| {
            column.cells.iter().find_map(|cell| {
                let inside = point.y >= cell.rect.y && point.y <= cell.rect.bottom();
                inside.then(|| LayerHit {
                    column: column.index,
                    borehole: column.borehole,
                    layer_index: cell.layer_index,
                    layer: &column.borehole.layers[cell.layer_index],
                })
            })
        })
}

/// First connective polygon containing `point`.
#[must_use]
pub fn hit_connector<'a>(layout: &SectionLayout<'a>, point: Point2) -> Option<ConnectorHit<'a>> {
    let layer_hit = |column: usize, layer_index: usize| {
        let borehole = layout.columns[column].borehole;
        LayerHit {
            column,
            borehole,
            layer_index,
            layer: &borehole.layers[layer_index],
        }
    };

    layout
        .connectors
        .iter()
        .enumerate()
        .find(|(_, connector)| polygon_contains(&connector.quad, point, PICK_EPS))
        .map(|(index, connector)| ConnectorHit {
            connector: index,
            from: layer_hit(connector.from_column, connector.from_layer),
            to: layer_hit(connector.to_column, connector.to_layer),
        })
}

/// The layer at the far end of a clicked connector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedLayer {
    pub borehole_id: String,
    pub layer: Layer,
}

/// The inspected layer. Presentation state, not part of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub borehole_id: String,
    pub layer: Layer,
    /// Depth under the pointer at the time of the click.
    pub pointer_depth: f64,
    /// Set when the selection came from a connector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked: Option<LinkedLayer>,
}

impl Selection {
    #[must_use]
    pub fn from_hit(hit: &LayerHit<'_>, pointer_depth: f64) -> Self {
        Self {
            borehole_id: hit.borehole.id.clone(),
            layer: hit.layer.clone(),
            pointer_depth,
            linked: None,
        }
    }

    /// Selects the left-hand layer of a connector and keeps the right-hand
    /// one as its link.
    #[must_use]
    pub fn from_connector(hit: &ConnectorHit<'_>, pointer_depth: f64) -> Self {
        Self {
            linked: Some(LinkedLayer {
                borehole_id: hit.to.borehole.id.clone(),
                layer: hit.to.layer.clone(),
            }),
            ..Self::from_hit(&hit.from, pointer_depth)
        }
    }

    #[must_use]
    pub fn details(&self) -> SelectionDetails {
        SelectionDetails {
            borehole: self.borehole_id.clone(),
            material: self.layer.material.clone(),
            depth: depth_range(&self.layer),
            description: self.layer.description.clone(),
            pointer_depth: format_meters(self.pointer_depth),
            linked_borehole: self.linked.as_ref().map(|linked| linked.borehole_id.clone()),
            linked_depth: self.linked.as_ref().map(|linked| depth_range(&linked.layer)),
        }
    }
}

fn depth_range(layer: &Layer) -> String {
    format!(
        "{} - {}",
        format_meters(layer.top_depth),
        format_meters(layer.bottom_depth)
    )
}

/// Text shown in the layer details panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDetails {
    pub borehole: String,
    pub material: String,
    pub depth: String,
    pub description: String,
    pub pointer_depth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_borehole: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_depth: Option<String>,
}

/// Holds at most one selected layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    current: Option<Selection>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    /// Selects the layer under `point`, falling back to the connector under
    /// it. A miss keeps the previous selection. Returns `true` when
    /// something was hit.
    pub fn click(&mut self, layout: &SectionLayout<'_>, point: Point2) -> bool {
        let selection = if let Some(hit) = hit_test(layout, point) {
            log::debug!(
                "Laag {} ({}) van boorgat `{}` geselecteerd",
                hit.layer.id,
                hit.layer.material,
                hit.borehole.id
            );
            Selection::from_hit(&hit, layout.mapper.depth_for_y(point.y))
        } else if let Some(hit) = point.is_finite().then(|| hit_connector(layout, point)).flatten() {
            log::debug!(
                "Verbinding {} ({}) tussen `{}` en `{}` geselecteerd",
                hit.connector,
                hit.from.layer.material,
                hit.from.borehole.id,
                hit.to.borehole.id
            );
            Selection::from_connector(&hit, layout.mapper.depth_for_y(point.y))
        } else {
            return false;
        };
        self.current = Some(selection);
        true
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

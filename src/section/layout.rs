//! Geometry of a cross-section: resolved columns, layer cells, connective
//! quadrilaterals and depth grid lines.
//!
//! The layout is shared by drawing and hit-testing, so both always agree on
//! where a layer is.
//!
//! Resolved boreholes take consecutive slots from the left while the slot
//! width is computed from the full borehole order. An order with ids that do
//! not resolve therefore leaves room on the right.
//!
//! # Layer linking
//!
//! For each pair of neighbouring columns, every layer on the left is linked
//! to the *first* layer on the right with exactly the same material name.
//! This infers lateral continuity from names only. A material that repeats
//! at different depths in the right-hand borehole always links to its
//! shallowest occurrence, which can mis-link stratigraphy. That is a known
//! limitation of the heuristic and is kept as is.

use std::collections::HashMap;

use serde::Serialize;

use super::mapper::{CoordinateMapper, max_depth};
use crate::config::SectionConfig;
use crate::geometry::{Point2, Rect};
use crate::model::{Borehole, BoreholeData};

/// Grid lines are capped so a huge depth with a tiny step stays drawable.
pub const MAX_GRID_LINES: usize = 1000;

/// Why an id from the borehole order has no column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// No borehole with this id exists in the dataset.
    Missing,
    /// The borehole exists but has no layers.
    NoLayers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedBorehole {
    pub id: String,
    pub reason: SkipReason,
}

/// One drawn layer rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerCell {
    pub layer_index: usize,
    pub rect: Rect,
}

/// A borehole placed on the section axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<'a> {
    pub index: usize,
    pub borehole: &'a Borehole,
    pub x: f64,
    pub left: f64,
    pub right: f64,
    pub cells: Vec<LayerCell>,
}

/// Inferred continuity of one material between neighbouring columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub from_column: usize,
    pub to_column: usize,
    pub from_layer: usize,
    pub to_layer: usize,
    /// Points in drawing order: top-left, top-right, bottom-right,
    /// bottom-left.
    pub quad: [Point2; 4],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub depth: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout<'a> {
    /// Name of the cross-section, e.g. `A-A'`.
    pub name: &'a str,
    pub mapper: CoordinateMapper,
    pub columns: Vec<Column<'a>>,
    pub connectors: Vec<Connector>,
    pub grid: Vec<GridLine>,
    pub skipped: Vec<SkippedBorehole>,
}

impl<'a> SectionLayout<'a> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column<'a>> {
        self.columns.get(index)
    }

    /// Number of ids in the borehole order, resolved or not.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.mapper.count()
    }
}

/// Looks up each id of the cross-section order. Unknown ids and boreholes
/// without layers are left out and reported, never treated as errors.
#[must_use]
pub fn resolve_order(data: &BoreholeData) -> (Vec<&Borehole>, Vec<SkippedBorehole>) {
    let mut by_id: HashMap<&str, &Borehole> = HashMap::with_capacity(data.boreholes.len());
    for borehole in &data.boreholes {
        by_id.entry(borehole.id.as_str()).or_insert(borehole);
    }

    let mut resolved = Vec::with_capacity(data.cross_section.borehole_order.len());
    let mut skipped = Vec::new();
    for id in &data.cross_section.borehole_order {
        match by_id.get(id.as_str()) {
            Some(borehole) if borehole.layers.is_empty() => {
                log::debug!("Boorgat `{id}` heeft geen lagen en wordt overgeslagen");
                skipped.push(SkippedBorehole {
                    id: id.clone(),
                    reason: SkipReason::NoLayers,
                });
            }
            Some(borehole) => resolved.push(*borehole),
            None => {
                log::debug!("Boorgat `{id}` uit de doorsnede bestaat niet");
                skipped.push(SkippedBorehole {
                    id: id.clone(),
                    reason: SkipReason::Missing,
                });
            }
        }
    }

    (resolved, skipped)
}

/// Pairs `(left layer index, right layer index)` linked by material name.
/// Layers without a match on the right are absent.
#[must_use]
pub fn match_layers(left: &Borehole, right: &Borehole) -> Vec<(usize, usize)> {
    left.layers
        .iter()
        .enumerate()
        .filter_map(|(index, layer)| {
            right
                .first_layer_with_material(&layer.material)
                .map(|(matched, _)| (index, matched))
        })
        .collect()
}

/// Depth values of the grid, `0, step, 2*step, ..` up to `max_depth`.
#[must_use]
pub fn depth_ticks(max_depth: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) || !max_depth.is_finite() || max_depth < 0.0 {
        return vec![0.0];
    }

    let tolerance = step * 1e-9;
    let mut ticks = Vec::new();
    let mut k = 0_usize;
    loop {
        let depth = k as f64 * step;
        if depth > max_depth + tolerance {
            break;
        }
        if ticks.len() == MAX_GRID_LINES {
            log::warn!("Schaalverdeling afgekapt op {MAX_GRID_LINES} lijnen");
            break;
        }
        ticks.push(depth);
        k += 1;
    }
    ticks
}

/// Builds the complete geometry of the section for one render.
#[must_use]
pub fn build_layout<'a>(data: &'a BoreholeData, config: &SectionConfig) -> SectionLayout<'a> {
    let (boreholes, skipped) = resolve_order(data);
    let depth = max_depth(boreholes.iter().copied());
    // Slots follow the full order; unresolved ids still count.
    let mapper = CoordinateMapper::new(config, data.cross_section.borehole_order.len(), depth);

    let columns: Vec<Column<'a>> = boreholes
        .iter()
        .enumerate()
        .map(|(index, borehole)| build_column(&mapper, index, borehole))
        .collect();

    let mut connectors = Vec::new();
    for pair in columns.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);
        for (from_layer, to_layer) in match_layers(left.borehole, right.borehole) {
            let a = &left.borehole.layers[from_layer];
            let b = &right.borehole.layers[to_layer];
            connectors.push(Connector {
                from_column: left.index,
                to_column: right.index,
                from_layer,
                to_layer,
                quad: [
                    Point2::new(left.right, mapper.y_for_depth(a.top_depth)),
                    Point2::new(right.left, mapper.y_for_depth(b.top_depth)),
                    Point2::new(right.left, mapper.y_for_depth(b.bottom_depth)),
                    Point2::new(left.right, mapper.y_for_depth(a.bottom_depth)),
                ],
            });
        }
    }

    let grid = if columns.is_empty() {
        Vec::new()
    } else {
        depth_ticks(mapper.effective_max_depth(), config.depth_step)
            .into_iter()
            .map(|depth| GridLine {
                depth,
                y: mapper.y_for_depth(depth),
            })
            .collect()
    };

    log::debug!(
        "Doorsnede `{}`: {} kolommen, {} verbindingen, {} overgeslagen",
        data.cross_section.name,
        columns.len(),
        connectors.len(),
        skipped.len()
    );

    SectionLayout {
        name: &data.cross_section.name,
        mapper,
        columns,
        connectors,
        grid,
        skipped,
    }
}

fn build_column<'a>(mapper: &CoordinateMapper, index: usize, borehole: &'a Borehole) -> Column<'a> {
    let (left, right) = mapper.column_span(index);
    let cells = borehole
        .layers
        .iter()
        .enumerate()
        .map(|(layer_index, layer)| LayerCell {
            layer_index,
            rect: mapper.column_rect(index, layer.top_depth, layer.bottom_depth),
        })
        .collect();

    Column {
        index,
        borehole,
        x: mapper.x_for_index(index),
        left,
        right,
        cells,
    }
}

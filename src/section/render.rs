//! Draws a [`SectionLayout`] onto a [`Surface`].
//!
//! Drawing order is fixed: clear and background, every connective polygon,
//! then every column with its labels, then the depth grid. Connectors are
//! therefore never drawn over a column.

use serde::Serialize;

use super::layout::{SectionLayout, SkippedBorehole, build_layout};
use crate::config::SectionConfig;
use crate::geometry::{Point2, Rect};
use crate::model::{BoreholeData, Layer, Rgba, format_meters, parse_css_color};
use crate::surface::{Stroke, Surface, SurfaceResult, TextAlign, TextStyle};

/// Distance between the top margin and the borehole id baseline.
const ID_LABEL_OFFSET: f64 = 15.0;
/// Distance between the top margin and the elevation baseline.
const ELEVATION_LABEL_OFFSET: f64 = 30.0;
/// Gap between the grid labels and the left margin.
const GRID_LABEL_OFFSET: f64 = 15.0;
/// Vertical nudge that centers grid labels on their line.
const GRID_LABEL_BASELINE: f64 = 4.0;

/// Summary of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDiagnostics {
    /// Cross-section name shown as the diagram title.
    pub section_name: String,
    /// Ids in the borehole order, for "Showing {n} boreholes".
    pub order_count: usize,
    pub columns: usize,
    pub layer_cells: usize,
    pub connectors: usize,
    pub grid_lines: usize,
    pub skipped: Vec<SkippedBorehole>,
    /// Only one column resolved: nothing to connect.
    pub single_column: bool,
    /// Maximum depth was zero; depth was scaled as 1 unit.
    pub zero_max_depth: bool,
    /// Layers whose color could not be parsed.
    pub fallback_colors: usize,
}

/// Clears `surface` and draws the full cross-section of `data`.
pub fn render_section(
    surface: &mut dyn Surface,
    data: &BoreholeData,
    config: &SectionConfig,
) -> SurfaceResult<RenderDiagnostics> {
    let layout = build_layout(data, config);
    render_layout(surface, &layout, config)
}

/// Draws an already computed layout.
pub fn render_layout(
    surface: &mut dyn Surface,
    layout: &SectionLayout<'_>,
    config: &SectionConfig,
) -> SurfaceResult<RenderDiagnostics> {
    let mut diagnostics = RenderDiagnostics {
        section_name: layout.name.to_owned(),
        order_count: layout.order_count(),
        skipped: layout.skipped.clone(),
        ..RenderDiagnostics::default()
    };

    let full = Rect::new(0.0, 0.0, config.width, config.height);
    surface.clear(full)?;
    surface.fill_rect(full, &config.background)?;

    if layout.is_empty() {
        log::debug!("Lege doorsnede, alleen achtergrond getekend");
        return Ok(diagnostics);
    }

    let fallback = parse_css_color(&config.fallback_layer_color).unwrap_or(Rgba::rgb(204, 204, 204));
    let mut layer_color = |layer: &Layer| match parse_css_color(&layer.color) {
        Some(color) => color,
        None => {
            diagnostics.fallback_colors += 1;
            log::warn!("Onleesbare laagkleur `{}`, standaardkleur gebruikt", layer.color);
            fallback
        }
    };

    let connector_stroke = Stroke::solid(config.connector_stroke.clone(), config.line_width);
    for connector in &layout.connectors {
        let source = &layout.columns[connector.from_column].borehole.layers[connector.from_layer];
        let fill = layer_color(source).with_alpha_scaled(config.connector_alpha);
        surface.fill_polygon(&connector.quad, &fill.to_css())?;
        surface.stroke_polygon(&connector.quad, &connector_stroke)?;
    }

    let column_stroke = Stroke::solid(config.column_stroke.clone(), config.line_width);
    let id_style = TextStyle {
        color: config.label_color.clone(),
        font: config.label_font.clone(),
        align: TextAlign::Center,
    };
    let elevation_style = TextStyle {
        color: config.elevation_color.clone(),
        font: config.small_font.clone(),
        align: TextAlign::Center,
    };
    let margin = layout.mapper.margin();

    let mut layer_cells = 0;
    for column in &layout.columns {
        for cell in &column.cells {
            let layer = &column.borehole.layers[cell.layer_index];
            surface.fill_rect(cell.rect, &layer_color(layer).to_css())?;
            surface.stroke_rect(cell.rect, &column_stroke)?;
            layer_cells += 1;
        }

        surface.text(
            &column.borehole.id,
            Point2::new(column.x, margin - ID_LABEL_OFFSET),
            &id_style,
        )?;
        surface.text(
            &format_meters(column.borehole.elevation),
            Point2::new(column.x, margin - ELEVATION_LABEL_OFFSET),
            &elevation_style,
        )?;
    }

    let grid_stroke = Stroke::dashed(config.grid_color.clone(), config.line_width, config.grid_dash.clone());
    let grid_style = TextStyle {
        color: config.grid_color.clone(),
        font: config.small_font.clone(),
        align: TextAlign::Right,
    };
    let left = margin - config.grid_overhang;
    let right = layout.mapper.width() - margin + config.grid_overhang;
    for line in &layout.grid {
        surface.line(Point2::new(left, line.y), Point2::new(right, line.y), &grid_stroke)?;
        surface.text(
            &format_meters(line.depth),
            Point2::new(margin - GRID_LABEL_OFFSET, line.y + GRID_LABEL_BASELINE),
            &grid_style,
        )?;
    }

    diagnostics.columns = layout.columns.len();
    diagnostics.layer_cells = layer_cells;
    diagnostics.connectors = layout.connectors.len();
    diagnostics.grid_lines = layout.grid.len();
    diagnostics.single_column = layout.columns.len() == 1;
    diagnostics.zero_max_depth = layout.mapper.has_degenerate_depth();

    Ok(diagnostics)
}

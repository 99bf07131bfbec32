//! Kaartweergave van de boorgaten en de doorsnedelijn.
//!
//! The crate does not talk to a mapping library. [`present_map`] drives any
//! [`MapBackend`]; the engine also hands a serialisable [`MapView`] to
//! JavaScript, which feeds it to the map widget of the host page.

mod bounds;

use serde::Serialize;

pub use bounds::{GeoBounds, mean_position};

use crate::model::{Borehole, BoreholeData, GeoPoint, SectionLine, format_depth, format_meters};

/// Zoom level before the bounds fit is applied.
pub const INITIAL_ZOOM: u8 = 15;

/// How the section line is drawn on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub dash_array: String,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "red".to_owned(),
            weight: 3.0,
            opacity: 0.7,
            dash_array: "10, 10".to_owned(),
        }
    }
}

/// Options for fitting the viewport to the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitOptions {
    /// Padding around the bounds, in pixels.
    pub padding: f64,
    pub max_zoom: u8,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: 20.0,
            max_zoom: 18,
        }
    }
}

/// One stratum in the popup preview, e.g. `Clay (0-5m)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StratumPreview {
    pub label: String,
    /// Swatch color, passed through as given.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPopup {
    pub title: String,
    pub location: String,
    pub elevation: String,
    pub total_depth: String,
    pub layer_count: usize,
    pub strata: Vec<StratumPreview>,
}

impl MarkerPopup {
    #[must_use]
    pub fn for_borehole(borehole: &Borehole) -> Self {
        Self {
            title: format!("Borehole {}", borehole.id),
            location: format!("{:.4}, {:.4}", borehole.lat, borehole.lng),
            elevation: format_meters(borehole.elevation),
            total_depth: format_meters(borehole.total_depth()),
            layer_count: borehole.layers.len(),
            strata: borehole
                .layers
                .iter()
                .map(|layer| StratumPreview {
                    label: format!(
                        "{} ({}-{}m)",
                        layer.material,
                        format_depth(layer.top_depth),
                        format_depth(layer.bottom_depth)
                    ),
                    color: layer.color.clone(),
                })
                .collect(),
        }
    }
}

/// A borehole pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub position: GeoPoint,
    pub popup: MarkerPopup,
}

impl MapMarker {
    #[must_use]
    pub fn for_borehole(borehole: &Borehole) -> Self {
        Self {
            id: borehole.id.clone(),
            position: borehole.position(),
            popup: MarkerPopup::for_borehole(borehole),
        }
    }
}

/// Everything a map widget needs to show a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
    pub bounds: GeoBounds,
    pub fit: FitOptions,
    pub markers: Vec<MapMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<SectionLine>,
    pub line_style: LineStyle,
}

impl MapView {
    /// `None` for a dataset without boreholes.
    #[must_use]
    pub fn of_dataset(data: &BoreholeData, fit: FitOptions, line_style: LineStyle) -> Option<Self> {
        let bounds = GeoBounds::of_dataset(data)?;
        let center = mean_position(data)?;
        Some(Self {
            center,
            zoom: INITIAL_ZOOM,
            bounds,
            fit,
            markers: data.boreholes.iter().map(MapMarker::for_borehole).collect(),
            line: data.cross_section.line,
            line_style,
        })
    }
}

/// A map widget able to show the dataset.
pub trait MapBackend {
    fn fit_bounds(&mut self, bounds: GeoBounds, options: FitOptions);

    fn show_markers(&mut self, markers: &[MapMarker]);

    fn show_section_line(&mut self, line: SectionLine, style: &LineStyle);
}

/// Pushes `view` to `backend`: fit first, then markers, then the line.
pub fn present_map(backend: &mut dyn MapBackend, view: &MapView) {
    backend.fit_bounds(view.bounds, view.fit);
    backend.show_markers(&view.markers);
    if let Some(line) = view.line {
        backend.show_section_line(line, &view.line_style);
    }
    log::debug!("Kaart getoond met {} markers", view.markers.len());
}

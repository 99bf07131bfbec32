//! Datamodel voor boorgatgegevens: lagen, boorgaten en de dwarsdoorsnede.
//!
//! De types zijn onveranderlijk na import; een nieuwe import vervangt de
//! volledige dataset.

pub mod color;
pub mod import;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub use color::{Rgba, parse_css_color};
pub use import::{ImportError, ImportResult, ValidationIssue, ValidationReport, parse_dataset, validate};

/// A depth interval within a borehole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Ordinal id, unique within its borehole only.
    #[serde(deserialize_with = "deserialize_layer_id")]
    pub id: u32,
    /// Material name; the key used to link strata between boreholes.
    pub material: String,
    #[serde(default)]
    pub description: String,
    /// CSS color string.
    pub color: String,
    pub top_depth: f64,
    pub bottom_depth: f64,
}

impl Layer {
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.bottom_depth - self.top_depth
    }

    /// Returns `true` when `depth` lies within `[top_depth, bottom_depth]`.
    #[must_use]
    pub fn contains_depth(&self, depth: f64) -> bool {
        depth >= self.top_depth && depth <= self.bottom_depth
    }
}

/// A vertical sample point with a sequence of layers, shallow to deep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Borehole {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Surface elevation in meters.
    pub elevation: f64,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Borehole {
    /// Deepest `bottom_depth` of the borehole, `0.0` without layers.
    #[must_use]
    pub fn total_depth(&self) -> f64 {
        self.layers
            .iter()
            .map(|layer| layer.bottom_depth)
            .fold(0.0, f64::max)
    }

    #[must_use]
    pub fn layer(&self, id: u32) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// First layer with exactly this material name.
    #[must_use]
    pub fn first_layer_with_material(&self, material: &str) -> Option<(usize, &Layer)> {
        self.layers
            .iter()
            .enumerate()
            .find(|(_, layer)| layer.material == material)
    }

    #[must_use]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Map overlay line of a cross-section. Not used for projection order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionLine {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossSection {
    #[serde(default)]
    pub name: String,
    /// Borehole ids in projection order.
    #[serde(default)]
    pub borehole_order: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<SectionLine>,
}

/// A complete imported dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoreholeData {
    pub name: String,
    #[serde(default)]
    pub boreholes: Vec<Borehole>,
    #[serde(default)]
    pub cross_section: CrossSection,
}

impl BoreholeData {
    #[must_use]
    pub fn borehole(&self, id: &str) -> Option<&Borehole> {
        self.boreholes.iter().find(|borehole| borehole.id == id)
    }
}

/// JSON numbers are doubles; `1` and `1.0` are the same layer id.
fn deserialize_layer_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(D::Error::custom(format!(
            "laag-id moet een niet-negatief geheel getal zijn, kreeg {value}"
        )))
    }
}

/// Formats a depth without unit, dropping float noise below a micrometer
/// so `0.1 * 3` prints as `0.3`.
#[must_use]
pub fn format_depth(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    // Avoid printing "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

/// Formats a length as `"{value}m"`, see [`format_depth`].
#[must_use]
pub fn format_meters(value: f64) -> String {
    format!("{}m", format_depth(value))
}

#[cfg(test)]
mod tests {
    use super::{Borehole, Layer, format_depth, format_meters};

    #[test]
    fn formats_meters_like_plain_numbers() {
        assert_eq!(format_meters(5.0), "5m");
        assert_eq!(format_meters(-1.2), "-1.2m");
        assert_eq!(format_meters(0.1 * 3.0), "0.3m");
        assert_eq!(format_meters(-0.0), "0m");
        assert_eq!(format_depth(0.1 * 3.0), "0.3");
    }

    #[test]
    fn layer_id_accepts_integral_numbers() {
        let json = |id: &str| {
            format!(
                r##"{{"id": {id}, "material": "Sand", "color": "#f4a460", "topDepth": 0, "bottomDepth": 1}}"##
            )
        };
        let layer: Layer = serde_json::from_str(&json("3")).unwrap();
        assert_eq!(layer.id, 3);
        let layer: Layer = serde_json::from_str(&json("3.0")).unwrap();
        assert_eq!(layer.id, 3);
        assert!(serde_json::from_str::<Layer>(&json("1.5")).is_err());
        assert!(serde_json::from_str::<Layer>(&json("-2")).is_err());
    }

    fn layer(id: u32, material: &str, top: f64, bottom: f64) -> Layer {
        Layer {
            id,
            material: material.to_owned(),
            description: String::new(),
            color: "#c2a15a".to_owned(),
            top_depth: top,
            bottom_depth: bottom,
        }
    }

    #[test]
    fn total_depth_is_deepest_bottom() {
        let borehole = Borehole {
            id: "BH1".to_owned(),
            lat: 52.0,
            lng: 4.0,
            elevation: 1.5,
            layers: vec![layer(1, "Sand", 0.0, 2.5), layer(2, "Clay", 2.5, 7.25)],
        };
        assert_eq!(borehole.total_depth(), 7.25);
        assert_eq!(borehole.layer(2).map(|l| l.material.as_str()), Some("Clay"));
        assert!((borehole.layers[1].thickness() - 4.75).abs() < 1e-12);
    }

    #[test]
    fn first_material_match_wins() {
        let borehole = Borehole {
            id: "BH2".to_owned(),
            lat: 0.0,
            lng: 0.0,
            elevation: 0.0,
            layers: vec![
                layer(1, "Clay", 0.0, 1.0),
                layer(2, "Sand", 1.0, 2.0),
                layer(3, "Clay", 2.0, 3.0),
            ],
        };
        let (index, found) = borehole.first_layer_with_material("Clay").unwrap();
        assert_eq!(index, 0);
        assert_eq!(found.id, 1);
        assert!(borehole.first_layer_with_material("clay").is_none());
    }

    #[test]
    fn empty_borehole_has_zero_depth() {
        let borehole = Borehole {
            id: "E".to_owned(),
            lat: 0.0,
            lng: 0.0,
            elevation: 0.0,
            layers: Vec::new(),
        };
        assert_eq!(borehole.total_depth(), 0.0);
    }
}

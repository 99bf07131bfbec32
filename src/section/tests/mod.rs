mod test_hit_basic;
mod test_layout_basic;
mod test_render_basic;

use crate::model::{Borehole, BoreholeData, CrossSection, Layer};

pub(super) fn layer(id: u32, material: &str, color: &str, top: f64, bottom: f64) -> Layer {
    Layer {
        id,
        material: material.to_owned(),
        description: format!("{material} layer"),
        color: color.to_owned(),
        top_depth: top,
        bottom_depth: bottom,
    }
}

pub(super) fn borehole(id: &str, elevation: f64, layers: Vec<Layer>) -> Borehole {
    Borehole {
        id: id.to_owned(),
        lat: 52.0,
        lng: 4.0,
        elevation,
        layers,
    }
}

pub(super) fn dataset(boreholes: Vec<Borehole>, order: &[&str]) -> BoreholeData {
    BoreholeData {
        name: "test".to_owned(),
        boreholes,
        cross_section: CrossSection {
            name: "A-A'".to_owned(),
            borehole_order: order.iter().map(|id| (*id).to_owned()).collect(),
            line: None,
        },
    }
}

/// Three boreholes with one 0-5 m Clay layer each.
pub(super) fn clay_abc() -> BoreholeData {
    dataset(
        vec![
            borehole("A", 1.0, vec![layer(1, "Clay", "#8b7d6b", 0.0, 5.0)]),
            borehole("B", 2.0, vec![layer(1, "Clay", "#8b7d6b", 0.0, 5.0)]),
            borehole("C", 3.0, vec![layer(1, "Clay", "#8b7d6b", 0.0, 5.0)]),
        ],
        &["A", "B", "C"],
    )
}

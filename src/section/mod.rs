//! Geologische dwarsdoorsnede: coördinaten, layout, tekenen en selectie.

mod hit;
mod layout;
mod mapper;
mod render;

pub use hit::{
    ConnectorHit, LayerHit, LinkedLayer, Selection, SelectionDetails, SelectionState, hit_connector,
    hit_test, scale_pointer,
};
pub use layout::{
    Column, Connector, GridLine, LayerCell, MAX_GRID_LINES, SectionLayout, SkipReason,
    SkippedBorehole, build_layout, depth_ticks, match_layers, resolve_order,
};
pub use mapper::{CoordinateMapper, max_depth};
pub use render::{RenderDiagnostics, render_layout, render_section};

#[cfg(test)]
mod tests;

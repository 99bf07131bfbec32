use super::{borehole, clay_abc, dataset, layer};
use crate::config::SectionConfig;
use crate::geometry::Point2;
use crate::section::{SkipReason, build_layout, depth_ticks, match_layers, resolve_order};

#[test]
fn three_clay_boreholes_give_two_connectors() {
    let data = clay_abc();
    let layout = build_layout(&data, &SectionConfig::default());

    assert_eq!(layout.columns.len(), 3);
    assert_eq!(layout.connectors.len(), 2);
    assert_eq!(
        layout
            .connectors
            .iter()
            .map(|c| (c.from_column, c.to_column))
            .collect::<Vec<_>>(),
        vec![(0, 1), (1, 2)]
    );
    for connector in &layout.connectors {
        let material = &layout.columns[connector.from_column].borehole.layers[connector.from_layer].material;
        assert_eq!(material, "Clay");
    }
}

#[test]
fn connector_quad_faces_the_columns() {
    let data = dataset(
        vec![
            borehole("A", 0.0, vec![layer(1, "Sand", "#f4a460", 0.0, 4.0)]),
            borehole(
                "B",
                0.0,
                vec![
                    layer(1, "Peat", "#5c4033", 0.0, 2.0),
                    layer(2, "Sand", "#f4a460", 2.0, 10.0),
                ],
            ),
        ],
        &["A", "B"],
    );
    let layout = build_layout(&data, &SectionConfig::default());
    assert_eq!(layout.connectors.len(), 1);

    let connector = &layout.connectors[0];
    assert_eq!((connector.from_layer, connector.to_layer), (0, 1));
    // max depth 10 => 38 px per meter below the 60 px margin.
    assert_eq!(
        connector.quad,
        [
            Point2::new(80.0, 60.0),
            Point2::new(920.0, 136.0),
            Point2::new(920.0, 440.0),
            Point2::new(80.0, 212.0),
        ]
    );
}

#[test]
fn unmatched_material_has_no_connector() {
    let data = dataset(
        vec![
            borehole("A", 0.0, vec![layer(1, "Sand", "#f4a460", 0.0, 3.0)]),
            borehole("B", 0.0, vec![layer(1, "Gravel", "#a9a9a9", 0.0, 3.0)]),
        ],
        &["A", "B"],
    );
    let layout = build_layout(&data, &SectionConfig::default());
    assert_eq!(layout.columns.len(), 2);
    assert!(layout.connectors.is_empty());
}

#[test]
fn repeated_material_links_to_first_occurrence_only() {
    let left = borehole(
        "A",
        0.0,
        vec![
            layer(1, "Clay", "#000", 0.0, 2.0),
            layer(2, "Sand", "#fff", 2.0, 4.0),
            layer(3, "Clay", "#000", 4.0, 6.0),
        ],
    );
    let right = borehole(
        "B",
        0.0,
        vec![
            layer(1, "Sand", "#fff", 0.0, 1.0),
            layer(2, "Clay", "#000", 1.0, 3.0),
            layer(3, "Clay", "#000", 3.0, 8.0),
        ],
    );
    // Both Clay layers on the left link to the shallow Clay on the right.
    assert_eq!(match_layers(&left, &right), vec![(0, 1), (1, 0), (2, 1)]);
}

#[test]
fn unknown_and_empty_boreholes_are_skipped() {
    let data = dataset(
        vec![
            borehole("A", 0.0, vec![layer(1, "Clay", "#000", 0.0, 2.0)]),
            borehole("E", 0.0, Vec::new()),
            borehole("B", 0.0, vec![layer(1, "Clay", "#000", 0.0, 2.0)]),
        ],
        &["A", "X", "E", "B"],
    );
    let (resolved, skipped) = resolve_order(&data);
    assert_eq!(resolved.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(skipped.len(), 2);
    assert_eq!((skipped[0].id.as_str(), skipped[0].reason), ("X", SkipReason::Missing));
    assert_eq!((skipped[1].id.as_str(), skipped[1].reason), ("E", SkipReason::NoLayers));

    // Resolved columns stay adjacent and still connect.
    let layout = build_layout(&data, &SectionConfig::default());
    assert_eq!(layout.order_count(), 4);
    assert_eq!(layout.columns[0].x, 60.0);
    assert_eq!(layout.columns[1].x, layout.mapper.x_for_index(1));
    assert!(layout.columns[1].x < 940.0);
    assert_eq!(layout.connectors.len(), 1);
}

#[test]
fn slots_are_sized_by_the_whole_order() {
    let data = dataset(
        vec![
            borehole("A", 0.0, vec![layer(1, "Clay", "#000", 0.0, 2.0)]),
            borehole("B", 0.0, vec![layer(1, "Clay", "#000", 0.0, 2.0)]),
        ],
        &["A", "X", "B"],
    );
    let layout = build_layout(&data, &SectionConfig::default());
    let xs: Vec<f64> = layout.columns.iter().map(|column| column.x).collect();
    assert_eq!(xs, vec![60.0, 500.0]);
    assert_eq!(layout.name, "A-A'");
    assert_eq!(layout.connectors[0].quad[1].x, 480.0);
}

#[test]
fn first_borehole_wins_for_duplicate_ids() {
    let data = dataset(
        vec![
            borehole("A", 1.0, vec![layer(1, "Clay", "#000", 0.0, 2.0)]),
            borehole("A", 9.0, vec![layer(1, "Sand", "#fff", 0.0, 2.0)]),
        ],
        &["A"],
    );
    let (resolved, _) = resolve_order(&data);
    assert_eq!(resolved[0].elevation, 1.0);
}

#[test]
fn empty_section_has_no_grid() {
    let data = dataset(Vec::new(), &[]);
    let layout = build_layout(&data, &SectionConfig::default());
    assert!(layout.is_empty());
    assert!(layout.grid.is_empty());
    assert!(layout.connectors.is_empty());
}

#[test]
fn depth_ticks_include_max_depth_when_on_step() {
    assert_eq!(depth_ticks(5.0, 2.0), vec![0.0, 2.0, 4.0]);
    assert_eq!(depth_ticks(6.0, 2.0), vec![0.0, 2.0, 4.0, 6.0]);
    assert_eq!(depth_ticks(0.3, 0.1).len(), 4);
    assert_eq!(depth_ticks(1.0, 0.0), vec![0.0]);
    assert_eq!(depth_ticks(1e12, 1.0).len(), crate::section::MAX_GRID_LINES);
}

#[test]
fn grid_lines_follow_the_mapper() {
    let data = clay_abc();
    let layout = build_layout(&data, &SectionConfig::default());
    let depths: Vec<f64> = layout.grid.iter().map(|line| line.depth).collect();
    assert_eq!(depths, vec![0.0, 2.0, 4.0]);
    assert_eq!(layout.grid[0].y, 60.0);
    assert_eq!(layout.grid[1].y, layout.mapper.y_for_depth(2.0));
}

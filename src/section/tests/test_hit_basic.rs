use super::{borehole, clay_abc, dataset, layer};
use crate::config::SectionConfig;
use crate::geometry::{Point2, Rect};
use crate::section::{SelectionState, build_layout, hit_connector, hit_test, scale_pointer};

#[test]
fn click_inside_middle_column_selects_it() {
    let data = clay_abc();
    let layout = build_layout(&data, &SectionConfig::default());

    let hit = hit_test(&layout, Point2::new(500.0, 250.0)).unwrap();
    assert_eq!(hit.column, 1);
    assert_eq!(hit.borehole.id, "B");
    assert_eq!(hit.layer.material, "Clay");

    let mut selection = SelectionState::new();
    assert!(selection.click(&layout, Point2::new(500.0, 250.0)));
    let details = selection.current().unwrap().details();
    assert_eq!(details.borehole, "B");
    assert_eq!(details.material, "Clay");
    assert_eq!(details.depth, "0m - 5m");
    assert_eq!(details.description, "Clay layer");
    assert_eq!(details.pointer_depth, "2.5m");
    assert!(details.linked_borehole.is_none());
}

#[test]
fn cell_edges_are_inclusive() {
    let data = clay_abc();
    let layout = build_layout(&data, &SectionConfig::default());
    assert!(hit_test(&layout, Point2::new(40.0, 60.0)).is_some());
    assert!(hit_test(&layout, Point2::new(80.0, 440.0)).is_some());
    assert!(hit_test(&layout, Point2::new(80.5, 100.0)).is_none());
}

#[test]
fn shared_boundary_picks_the_shallower_layer() {
    let data = dataset(
        vec![borehole(
            "A",
            0.0,
            vec![
                layer(1, "Peat", "#5c4033", 0.0, 5.0),
                layer(2, "Sand", "#f4a460", 5.0, 10.0),
            ],
        )],
        &["A"],
    );
    let layout = build_layout(&data, &SectionConfig::default());
    let boundary = layout.mapper.y_for_depth(5.0);
    let hit = hit_test(&layout, Point2::new(500.0, boundary)).unwrap();
    assert_eq!(hit.layer.id, 1);
}

#[test]
fn miss_keeps_the_previous_selection() {
    let data = clay_abc();
    let layout = build_layout(&data, &SectionConfig::default());
    let mut selection = SelectionState::new();

    assert!(!selection.click(&layout, Point2::new(20.0, 20.0)));
    assert!(selection.current().is_none());

    selection.click(&layout, Point2::new(60.0, 100.0));
    assert!(!selection.click(&layout, Point2::new(300.0, 470.0)));
    assert_eq!(selection.current().unwrap().borehole_id, "A");

    selection.dismiss();
    assert!(selection.current().is_none());
}

#[test]
fn non_finite_pointer_hits_nothing() {
    let data = clay_abc();
    let layout = build_layout(&data, &SectionConfig::default());
    assert!(hit_test(&layout, Point2::new(f64::NAN, 100.0)).is_none());
}

#[test]
fn pointer_is_scaled_to_canvas_pixels() {
    let bounds = Rect::new(100.0, 50.0, 500.0, 250.0);
    let point = scale_pointer(Point2::new(150.0, 100.0), bounds, (1000.0, 500.0));
    assert_eq!(point, Point2::new(100.0, 100.0));

    let collapsed = Rect::new(10.0, 10.0, 0.0, 0.0);
    let point = scale_pointer(Point2::new(15.0, 20.0), collapsed, (1000.0, 500.0));
    assert_eq!(point, Point2::new(5.0, 10.0));
}

#[test]
fn connector_between_columns_can_be_picked() {
    let data = clay_abc();
    let layout = build_layout(&data, &SectionConfig::default());

    let hit = hit_connector(&layout, Point2::new(280.0, 250.0)).unwrap();
    assert_eq!(hit.connector, 0);
    assert_eq!(hit.from.borehole.id, "A");
    assert_eq!(hit.to.borehole.id, "B");
    assert!(hit_connector(&layout, Point2::new(280.0, 470.0)).is_none());
}

#[test]
fn click_between_columns_selects_the_connector() {
    let data = clay_abc();
    let layout = build_layout(&data, &SectionConfig::default());
    let mut selection = SelectionState::new();

    assert!(selection.click(&layout, Point2::new(280.0, 250.0)));
    let current = selection.current().unwrap();
    assert_eq!(current.borehole_id, "A");
    assert_eq!(current.linked.as_ref().unwrap().borehole_id, "B");

    let details = current.details();
    assert_eq!(details.material, "Clay");
    assert_eq!(details.linked_borehole.as_deref(), Some("B"));
    assert_eq!(details.linked_depth.as_deref(), Some("0m - 5m"));
    assert_eq!(details.pointer_depth, "2.5m");

    // A column still wins over the connector next to it.
    assert!(selection.click(&layout, Point2::new(500.0, 100.0)));
    assert!(selection.current().unwrap().linked.is_none());
}

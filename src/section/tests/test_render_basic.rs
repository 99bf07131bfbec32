use super::{borehole, clay_abc, dataset, layer};
use crate::config::SectionConfig;
use crate::section::render_section;
use crate::surface::{DrawCommand, RecordingSurface};

fn render(data: &crate::model::BoreholeData) -> (RecordingSurface, crate::section::RenderDiagnostics) {
    let config = SectionConfig::default();
    let mut surface = RecordingSurface::new(config.width, config.height);
    let diagnostics = render_section(&mut surface, data, &config).unwrap();
    (surface, diagnostics)
}

#[test]
fn connectors_are_drawn_before_columns() {
    let (surface, diagnostics) = render(&clay_abc());
    assert_eq!(diagnostics.columns, 3);
    assert_eq!(diagnostics.connectors, 2);

    let commands = surface.commands();
    let last_polygon = commands
        .iter()
        .rposition(|c| matches!(c, DrawCommand::FillPolygon { .. } | DrawCommand::StrokePolygon { .. }))
        .unwrap();
    let first_cell = commands
        .iter()
        .enumerate()
        // Index 1 is the background fill.
        .position(|(i, c)| i > 1 && matches!(c, DrawCommand::FillRect { .. }))
        .unwrap();
    assert!(last_polygon < first_cell);
}

#[test]
fn connector_fill_is_translucent_layer_color() {
    let (surface, _) = render(&clay_abc());
    let fills: Vec<&str> = surface.polygon_fills().map(|(_, color)| color).collect();
    assert_eq!(fills, vec!["#8b7d6b80", "#8b7d6b80"]);

    let cell_colors: Vec<&str> = surface.rect_fills().skip(1).map(|(_, color)| color).collect();
    assert_eq!(cell_colors, vec!["#8b7d6b"; 3]);
}

#[test]
fn render_starts_with_clear_and_background() {
    let (surface, _) = render(&clay_abc());
    let commands = surface.commands();
    assert!(matches!(commands[0], DrawCommand::Clear { .. }));
    match &commands[1] {
        DrawCommand::FillRect { rect, color } => {
            assert_eq!(color, "#f8f9fa");
            assert_eq!((rect.width, rect.height), (1000.0, 500.0));
        }
        other => panic!("expected background fill, got {other:?}"),
    }
}

#[test]
fn rendering_twice_gives_the_same_display_list() {
    let data = clay_abc();
    let config = SectionConfig::default();
    let mut surface = RecordingSurface::new(config.width, config.height);

    render_section(&mut surface, &data, &config).unwrap();
    let first = surface.commands().to_vec();
    render_section(&mut surface, &data, &config).unwrap();
    assert_eq!(surface.commands(), first.as_slice());
}

#[test]
fn empty_section_draws_background_only() {
    let data = dataset(vec![borehole("A", 0.0, Vec::new())], &["A", "missing"]);
    let (surface, diagnostics) = render(&data);
    assert_eq!(surface.commands().len(), 2);
    assert_eq!(diagnostics.columns, 0);
    assert_eq!(diagnostics.skipped.len(), 2);
}

#[test]
fn labels_show_id_elevation_and_depths() {
    let (surface, diagnostics) = render(&clay_abc());
    let texts: Vec<&str> = surface.texts().collect();
    assert_eq!(texts, vec!["A", "1m", "B", "2m", "C", "3m", "0m", "2m", "4m"]);
    assert_eq!(diagnostics.grid_lines, 3);

    let label_at = |wanted: &str| {
        surface.commands().iter().find_map(|c| match c {
            DrawCommand::Text { text, at, .. } if text == wanted => Some(*at),
            _ => None,
        })
    };
    let a = label_at("A").unwrap();
    assert_eq!((a.x, a.y), (60.0, 45.0));
    let elevation = label_at("1m").unwrap();
    assert_eq!(elevation.y, 30.0);
}

#[test]
fn grid_lines_are_dashed_and_overhang_the_margins() {
    let (surface, _) = render(&clay_abc());
    let lines: Vec<_> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { from, to, stroke } => Some((*from, *to, stroke.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 3);
    let (from, to, stroke) = &lines[0];
    assert_eq!((from.x, to.x), (50.0, 950.0));
    assert_eq!(from.y, 60.0);
    assert_eq!(stroke.dash, vec![5.0, 3.0]);
    assert_eq!(stroke.color, "#666");
}

#[test]
fn single_column_is_centered_without_connectors() {
    let data = dataset(
        vec![borehole("solo", 0.0, vec![layer(1, "Sand", "#f4a460", 0.0, 3.0)])],
        &["solo"],
    );
    let (surface, diagnostics) = render(&data);
    assert!(diagnostics.single_column);
    assert_eq!(diagnostics.connectors, 0);
    let (cell, _) = surface.rect_fills().nth(1).unwrap();
    assert_eq!(cell.x + cell.width / 2.0, 500.0);
}

#[test]
fn flat_dataset_still_renders() {
    let data = dataset(
        vec![
            borehole("A", 0.0, vec![layer(1, "Sand", "#f4a460", 0.0, 0.0)]),
            borehole("B", 0.0, vec![layer(1, "Sand", "#f4a460", 0.0, 0.0)]),
        ],
        &["A", "B"],
    );
    let (surface, diagnostics) = render(&data);
    assert!(diagnostics.zero_max_depth);
    for command in surface.commands() {
        if let DrawCommand::FillRect { rect, .. } = command {
            assert!(rect.x.is_finite() && rect.y.is_finite() && rect.height.is_finite());
        }
    }
}

#[test]
fn unreadable_color_falls_back_and_is_counted() {
    let data = dataset(
        vec![borehole("A", 0.0, vec![layer(1, "Mystery", "not-a-color", 0.0, 2.0)])],
        &["A"],
    );
    let (surface, diagnostics) = render(&data);
    assert_eq!(diagnostics.fallback_colors, 1);
    let (_, color) = surface.rect_fills().nth(1).unwrap();
    assert_eq!(color, "#cccccc");
}

#[test]
fn diagnostics_carry_title_and_order_size() {
    let data = dataset(
        vec![
            borehole("A", 1.0, vec![layer(1, "Clay", "#8b7d6b", 0.0, 5.0)]),
            borehole("B", 2.0, vec![layer(1, "Clay", "#8b7d6b", 0.0, 5.0)]),
        ],
        &["A", "X", "B"],
    );
    let (_, diagnostics) = render(&data);
    assert_eq!(diagnostics.section_name, "A-A'");
    assert_eq!(diagnostics.order_count, 3);
    assert_eq!(diagnostics.columns, 2);

    let empty = dataset(Vec::new(), &["missing"]);
    let (_, diagnostics) = render(&empty);
    assert_eq!(diagnostics.section_name, "A-A'");
    assert_eq!(diagnostics.order_count, 1);
}

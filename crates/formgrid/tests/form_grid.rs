//! End-to-end tests for building, resizing and editing a grid.

use formgrid::prelude::*;
use formgrid_dom::{Document, ElementKind, MemoryDocument, SharedDocument};

fn setup() -> SharedDocument<MemoryDocument> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("formgrid=trace")
        .with_test_writer()
        .try_init();

    let mut doc = MemoryDocument::new();
    doc.create_container("parent");
    SharedDocument::new(doc)
}

fn ints(rows: &[&[i64]]) -> Vec<Vec<CellValue>> {
    rows.iter()
        .map(|row| row.iter().map(|&n| CellValue::from(n)).collect())
        .collect()
}

/// Text shown by the cell at `(r, c)`, whichever element it holds.
fn displayed(grid: &FormGrid<MemoryDocument>, r: usize, c: usize) -> String {
    let doc = grid.document().read();
    match grid.cell_element(r, c) {
        Some(element) if element.editable => doc.value(element.node).unwrap(),
        Some(element) => doc.text_content(element.node).unwrap(),
        None => String::new(),
    }
}

fn assert_sizes_match(grid: &FormGrid<MemoryDocument>) {
    assert_eq!(grid.rows_in_view(), grid.model().rows());
    assert_eq!(grid.cols_in_view(), grid.model().cols());

    let doc = grid.document().read();
    let rows = doc.rows(grid.table()).unwrap();
    assert_eq!(rows.len(), grid.model().rows());
    for row in rows {
        assert_eq!(doc.cells(row).unwrap().len(), grid.model().cols());
    }
}

#[test]
fn test_create_with_defaults() {
    let doc = setup();
    let grid = FormGrid::new(doc.clone(), "parent", GridConfig::default()).unwrap();

    assert_eq!(grid.model().rows(), 3);
    assert_eq!(grid.model().cols(), 3);
    assert_eq!(grid.rows_in_view(), 3);
    assert_eq!(grid.cols_in_view(), 3);
    assert_eq!(displayed(&grid, 1, 1), "0");
    assert_eq!(displayed(&grid, 2, 2), "3");
    assert_eq!(displayed(&grid, 0, 1), "Item 1");
    assert_eq!(displayed(&grid, 2, 0), "Item 2");

    let parent = doc.read().element_by_id("parent").unwrap();
    assert_eq!(doc.read().children(parent).unwrap(), vec![grid.table()]);
}

#[test]
fn test_model_size_matches_view_size() {
    let shapes: [&[&[i64]]; 4] = [&[], &[&[7]], &[&[1, 2, 3]], &[&[1, 2], &[3, 4], &[5, 6]]];
    for shape in shapes {
        let grid = FormGrid::new(setup(), "parent", GridConfig::with_data(ints(shape))).unwrap();
        assert_sizes_match(&grid);
    }
}

#[test]
fn test_default_render() {
    let doc = setup();
    let grid = FormGrid::new(doc.clone(), "parent", GridConfig::default()).unwrap();

    let html = doc.read().to_html(grid.table()).unwrap();
    assert_eq!(
        html,
        concat!(
            "<table>",
            "<tr><td></td><td><p>Item 1</p></td><td><p>Item 2</p></td></tr>",
            "<tr><td><p>Item 1</p></td>",
            "<td><input type=\"text\" value=\"0\"/></td>",
            "<td><input type=\"text\" value=\"1\"/></td></tr>",
            "<tr><td><p>Item 2</p></td>",
            "<td><input type=\"text\" value=\"2\"/></td>",
            "<td><input type=\"text\" value=\"3\"/></td></tr>",
            "</table>"
        )
    );
}

#[test]
fn test_missing_container_fails_cleanly() {
    let doc = setup();
    let nodes_before = doc.read().node_count();

    let err = FormGrid::new(doc.clone(), "nowhere", GridConfig::default()).unwrap_err();
    assert!(matches!(err, GridError::ContainerNotFound(ref id) if id == "nowhere"));
    assert_eq!(doc.read().node_count(), nodes_before);
}

#[test]
fn test_ragged_data_rejected() {
    let doc = setup();
    let nodes_before = doc.read().node_count();

    let err = FormGrid::new(doc.clone(), "parent", GridConfig::with_data(ints(&[&[1, 2], &[3]])))
        .unwrap_err();
    assert!(matches!(err, GridError::RaggedData { row: 1, expected: 2, found: 1 }));
    assert_eq!(doc.read().node_count(), nodes_before);
}

#[test]
fn test_reconciliation_idempotent() {
    let mut grid = FormGrid::new(setup(), "parent", GridConfig::default()).unwrap();
    let snapshot = |grid: &FormGrid<MemoryDocument>| {
        let doc = grid.document().read();
        (doc.node_count(), doc.to_html(grid.table()).unwrap())
    };

    let before = snapshot(&grid);
    grid.update_table_size_to_match_model().unwrap();
    grid.update_table_size_to_match_model().unwrap();
    assert_eq!(snapshot(&grid), before);

    grid.deserialize_model().unwrap();
    grid.deserialize_model().unwrap();
    assert_eq!(snapshot(&grid), before);
}

#[test]
fn test_growth_populates_new_row_and_column() {
    let mut grid = FormGrid::new(setup(), "parent", GridConfig::default()).unwrap();
    assert_eq!((grid.rows_in_view(), grid.cols_in_view()), (3, 3));
    let kept = grid.cell_element(1, 1).unwrap();

    grid.model_mut()
        .replace_data(ints(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]))
        .unwrap();
    grid.deserialize_model().unwrap();

    assert_eq!((grid.rows_in_view(), grid.cols_in_view()), (4, 4));
    assert_sizes_match(&grid);
    assert_eq!(grid.cell_element(1, 1), Some(kept));

    for r in 0..4 {
        for c in 0..4 {
            if (r, c) == (0, 0) {
                continue;
            }
            assert!(grid.cell_element(r, c).is_some(), "cell ({r}, {c}) not populated");
            assert_eq!(displayed(&grid, r, c), grid.text_for_cell(r, c));
        }
    }
    assert_eq!(displayed(&grid, 0, 3), "Item 3");
    assert_eq!(displayed(&grid, 3, 0), "Item 3");
    assert_eq!(displayed(&grid, 3, 3), "9");
}

#[test]
fn test_resize_without_populate_leaves_cells_empty() {
    let mut grid = FormGrid::new(setup(), "parent", GridConfig::default()).unwrap();
    grid.model_mut().replace_data(ints(&[&[1, 2, 3], &[4, 5, 6]])).unwrap();
    grid.update_table_size_to_match_model().unwrap();

    assert_sizes_match(&grid);
    assert!(grid.cell_element(1, 3).is_none());
    // Existing cells keep their old content until populated.
    assert_eq!(displayed(&grid, 1, 1), "0");
}

#[test]
fn test_shrink_removes_trailing_rows_and_cells() {
    let doc = setup();
    let mut grid = FormGrid::new(
        doc.clone(),
        "parent",
        GridConfig::with_data(ints(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]])),
    )
    .unwrap();
    let removed = grid.cell_element(3, 3).unwrap();

    grid.set_model_data(ints(&[&[1]])).unwrap();

    assert_eq!((grid.rows_in_view(), grid.cols_in_view()), (2, 2));
    assert_sizes_match(&grid);
    assert!(!doc.read().contains(removed.node));
    assert_eq!(displayed(&grid, 1, 1), "1");

    grid.set_model_data(Vec::new()).unwrap();
    assert_eq!((grid.rows_in_view(), grid.cols_in_view()), (1, 1));
    assert_sizes_match(&grid);
}

#[test]
fn test_shrink_then_grow() {
    let mut grid = FormGrid::new(setup(), "parent", GridConfig::default()).unwrap();
    grid.set_model_data(Vec::new()).unwrap();
    grid.set_model_data(ints(&[&[5, 6], &[7, 8]])).unwrap();

    assert_sizes_match(&grid);
    assert_eq!(displayed(&grid, 2, 1), "7");
    assert_eq!(displayed(&grid, 0, 2), "Item 2");
}

#[test]
fn test_editable_headers() {
    let config = GridConfig::default()
        .row_axis(AxisConfig::new("Col").with_user_editable(true))
        .col_axis(AxisConfig::new("Row"));
    let grid = FormGrid::new(setup(), "parent", config).unwrap();
    let doc = grid.document().read();

    let header = grid.cell_element(0, 2).unwrap();
    assert!(header.editable);
    assert_eq!(doc.kind(header.node).unwrap(), ElementKind::TextInput);
    assert_eq!(doc.value(header.node).unwrap(), "Col 2");

    let side = grid.cell_element(2, 0).unwrap();
    assert!(!side.editable);
    assert_eq!(doc.text_content(side.node).unwrap(), "Row 2");
}

#[test]
fn test_label_round_trip() {
    let config = GridConfig::with_data(ints(&[&[0, 0, 0], &[0, 0, 0]]))
        .row_axis(AxisConfig::new("C").with_label_style(LabelStyle::ZeroIndexed))
        .col_axis(AxisConfig::new("R").with_labeler(|_: &str, i: usize| format!("#{i}")));
    let grid = FormGrid::new(setup(), "parent", config).unwrap();

    for c in 1..grid.cols_in_view() {
        assert_eq!(grid.text_for_cell(0, c), grid.row_axis().make_label(c));
        assert_eq!(displayed(&grid, 0, c), format!("C {}", c - 1));
    }
    for r in 1..grid.rows_in_view() {
        assert_eq!(grid.text_for_cell(r, 0), grid.col_axis().make_label(r));
        assert_eq!(displayed(&grid, r, 0), format!("#{r}"));
    }
}

#[test]
fn test_serialize_edited_values() {
    let doc = setup();
    let config = GridConfig::default().row_axis(AxisConfig::default().with_user_editable(true));
    let mut grid = FormGrid::new(doc.clone(), "parent", config).unwrap();

    {
        let mut doc = doc.write();
        doc.set_value(grid.cell_element(1, 1).unwrap().node, "42").unwrap();
        doc.set_value(grid.cell_element(2, 1).unwrap().node, "hello").unwrap();
        doc.set_value(grid.cell_element(2, 2).unwrap().node, "").unwrap();
        doc.set_value(grid.cell_element(0, 1).unwrap().node, "Price").unwrap();
    }

    grid.serialize_model().unwrap();

    let model = grid.model();
    assert_eq!(model.cell(0, 0), Some(&CellValue::Int(42)));
    assert_eq!(model.cell(0, 1), Some(&CellValue::Int(1)));
    assert_eq!(model.cell(1, 0), Some(&CellValue::from("hello")));
    assert_eq!(model.cell(1, 1), Some(&CellValue::Empty));
    assert_eq!(model.row_label(1), Some(&CellValue::from("Price")));
    assert_eq!(model.row_label(2), None);
    assert_eq!(model.col_label(1), None);
    assert_eq!(model.row_label(0), None);
    assert_eq!(model.col_label(0), None);
}

#[test]
fn test_serialize_unedited_grid_keeps_model() {
    let data = vec![vec![
        CellValue::from("007"),
        CellValue::Float(1.0),
        CellValue::from("true"),
    ]];
    let config = GridConfig::with_data(data)
        .row_axis(AxisConfig::default().with_user_editable(true))
        .col_axis(AxisConfig::default().with_user_editable(true));
    let mut grid = FormGrid::new(setup(), "parent", config).unwrap();
    let before = grid.model().clone();

    grid.serialize_model().unwrap();

    assert_eq!(grid.model(), &before);
    assert!(grid.model().row_labels().is_empty());
    assert!(grid.model().col_labels().is_empty());
}

#[test]
fn test_serialize_into_smaller_model_writes_nothing() {
    let doc = setup();
    let config = GridConfig::default().row_axis(AxisConfig::default().with_user_editable(true));
    let mut grid = FormGrid::new(doc.clone(), "parent", config).unwrap();
    doc.write()
        .set_value(grid.cell_element(0, 1).unwrap().node, "Price")
        .unwrap();

    grid.model_mut().replace_data(ints(&[&[9]])).unwrap();
    let before = grid.model().clone();

    let err = grid.serialize_model().unwrap_err();
    assert!(matches!(err, GridError::OutOfBounds { row: 0, column: 1, .. }));
    assert_eq!(grid.model(), &before);
    assert!(grid.model().row_labels().is_empty());
}

#[test]
fn test_serialize_then_deserialize_is_stable() {
    let doc = setup();
    let mut grid = FormGrid::new(doc.clone(), "parent", GridConfig::default()).unwrap();
    doc.write()
        .set_value(grid.cell_element(2, 1).unwrap().node, "2.5")
        .unwrap();

    grid.serialize_model().unwrap();
    grid.deserialize_model().unwrap();

    assert_eq!(grid.model().cell(1, 0), Some(&CellValue::Float(2.5)));
    assert_eq!(displayed(&grid, 2, 1), "2.5");
}

#[test]
fn test_corner_write_leaves_model_untouched() {
    let mut grid = FormGrid::new(setup(), "parent", GridConfig::default()).unwrap();
    grid.set_data(0, 1, CellValue::from("label")).unwrap();
    let before = grid.model().clone();

    for value in [CellValue::Empty, CellValue::from(1), CellValue::from("x")] {
        assert!(matches!(grid.set_data(0, 0, value), Err(GridError::CornerCell)));
    }
    assert_eq!(grid.model(), &before);
}

#[test]
fn test_detach_removes_table() {
    let doc = setup();
    let nodes_before = doc.read().node_count();
    let grid = FormGrid::new(doc.clone(), "parent", GridConfig::default()).unwrap();
    let table = grid.table();

    let model = grid.detach().unwrap();
    assert_eq!(model.rows(), 3);
    assert!(!doc.read().contains(table));
    assert_eq!(doc.read().node_count(), nodes_before);
}

#[test]
fn test_two_grids_share_a_document() {
    let doc = setup();
    doc.write().create_container("other");

    let first = FormGrid::new(doc.clone(), "parent", GridConfig::default()).unwrap();
    let second =
        FormGrid::new(doc.clone(), "other", GridConfig::with_data(ints(&[&[9]]))).unwrap();

    assert_ne!(first.table(), second.table());
    assert_eq!(displayed(&first, 1, 1), "0");
    assert_eq!(displayed(&second, 1, 1), "9");
}

//! Builds a grid, simulates an edit, and prints the resulting HTML.
//!
//! Run with `RUST_LOG=formgrid=debug` to see reconciliation logs.

use formgrid::prelude::*;
use formgrid_dom::{Document, MemoryDocument, SharedDocument};
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), GridError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = MemoryDocument::new();
    let parent = doc.create_container("parent");
    let doc = SharedDocument::new(doc);

    let config = GridConfig::default()
        .row_axis(AxisConfig::new("Quarter").with_user_editable(true))
        .col_axis(AxisConfig::new("Region").with_label_style(LabelStyle::ZeroIndexed));
    let mut grid = FormGrid::new(doc.clone(), "parent", config)?;
    println!("{}", doc.read().to_html(parent)?);

    if let Some(cell) = grid.cell_element(1, 2) {
        doc.write().set_value(cell.node, "17")?;
    }
    grid.serialize_model()?;
    println!("model after edit: {:?}", grid.model().data());

    grid.set_model_data(vec![
        vec![CellValue::from(1), CellValue::from(2), CellValue::from(3)],
        vec![CellValue::from(4), CellValue::from(5), CellValue::from(6)],
        vec![CellValue::from(7), CellValue::from(8), CellValue::from(9)],
    ])?;
    println!("{}", doc.read().to_html(parent)?);
    Ok(())
}

//! FormGrid: an editable data grid rendered as a table.
//!
//! A [`FormGrid`] keeps a [`GridModel`] (rectangular cell data plus axis
//! labels) synchronized with a `<table>` in a
//! [`Document`](formgrid_dom::Document):
//!
//! - **Reconciliation**: the table grows or shrinks to the model size, rows
//!   before columns
//! - **Editability**: data cells are text inputs; header cells are inputs or
//!   static text depending on their [`AxisConfig`]
//! - **Labels**: header text comes from each axis' label policy
//! - **Write-back**: [`FormGrid::serialize_model`] reads edited inputs back
//!   into the model
//!
//! # Example
//!
//! ```
//! use formgrid::{AxisConfig, CellValue, FormGrid, GridConfig};
//! use formgrid_dom::{Document, MemoryDocument, SharedDocument};
//!
//! let mut doc = MemoryDocument::new();
//! doc.create_container("parent");
//! let doc = SharedDocument::new(doc);
//!
//! let config = GridConfig::with_data(vec![vec![CellValue::from(1), CellValue::from(2)]])
//!     .row_axis(AxisConfig::new("Col"))
//!     .col_axis(AxisConfig::new("Row").with_user_editable(true));
//! let mut grid = FormGrid::new(doc.clone(), "parent", config)?;
//!
//! // The user types into the first data cell.
//! let input = grid.cell_element(1, 1).unwrap().node;
//! doc.write().set_value(input, "10")?;
//!
//! grid.serialize_model()?;
//! assert_eq!(grid.model().cell(0, 0), Some(&CellValue::Int(10)));
//! # Ok::<(), formgrid::GridError>(())
//! ```

mod axis;
mod config;
mod error;
mod model;
pub mod prelude;
mod value;
mod view;

pub use axis::{AxisConfig, AxisLabeler, LabelStyle};
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use model::GridModel;
pub use value::CellValue;
pub use view::{CellElement, FormGrid};

//! The rendered grid.
//!
//! [`FormGrid`] owns a `<table>` in a [`Document`] and keeps it the same
//! size as its [`GridModel`]. View coordinates include the header band:
//! row 0 is the header row, column 0 the header column, and `(0, 0)` is the
//! corner, which never has content.
//!
//! ```text
//!          c=0        c=1        c=2
//!  r=0   (corner)   row label  row label
//!  r=1   col label  data[0][0] data[0][1]
//!  r=2   col label  data[1][0] data[1][1]
//! ```

use formgrid_dom::logging::targets;
use formgrid_dom::{Document, ElementKind, NodeId, SharedDocument};

use crate::axis::AxisConfig;
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::model::GridModel;
use crate::value::CellValue;

/// The display element placed inside a populated cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellElement {
    /// The `<input>` or `<p>` node.
    pub node: NodeId,
    /// `true` for a text input, `false` for a static paragraph.
    pub editable: bool,
}

#[derive(Debug)]
struct ViewCell {
    node: NodeId,
    content: Option<CellElement>,
}

#[derive(Debug)]
struct ViewRow {
    node: NodeId,
    cells: Vec<ViewCell>,
}

/// The `<table>` node and the rows and cells created under it.
#[derive(Debug)]
struct TableView {
    table: NodeId,
    /// Index 0 is the header row.
    rows: Vec<ViewRow>,
}

impl TableView {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn col_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }

    /// Adds or removes trailing rows and cells until the table is
    /// `rows` by `cols`.
    fn reconcile<D: Document>(&mut self, doc: &mut D, rows: usize, cols: usize) -> Result<()> {
        let view_rows = self.row_count();
        let view_cols = self.col_count();

        if view_rows == rows && self.rows.iter().all(|row| row.cells.len() == cols) {
            return Ok(());
        }

        tracing::debug!(
            target: targets::RECONCILE,
            row_diff = rows as isize - view_rows as isize,
            col_diff = cols as isize - view_cols as isize,
            "resizing table to model"
        );

        // Rows first, so that rows added here get their cells below.
        while self.rows.len() < rows {
            self.add_row(doc)?;
        }
        while self.rows.len() > rows {
            self.remove_row(doc)?;
        }

        for r in 0..self.rows.len() {
            while self.rows[r].cells.len() < cols {
                self.add_cell(doc, r)?;
            }
            while self.rows[r].cells.len() > cols {
                self.remove_cell(doc, r)?;
            }
        }
        Ok(())
    }

    fn add_row<D: Document>(&mut self, doc: &mut D) -> Result<()> {
        let node = doc.insert_row(self.table, None)?;
        self.rows.push(ViewRow {
            node,
            cells: Vec::new(),
        });
        Ok(())
    }

    fn remove_row<D: Document>(&mut self, doc: &mut D) -> Result<()> {
        let index = self.rows.len() - 1;
        doc.delete_row(self.table, index)?;
        self.rows.pop();
        Ok(())
    }

    fn add_cell<D: Document>(&mut self, doc: &mut D, r: usize) -> Result<()> {
        let row = &mut self.rows[r];
        let node = doc.insert_cell(row.node, None)?;
        row.cells.push(ViewCell {
            node,
            content: None,
        });
        Ok(())
    }

    fn remove_cell<D: Document>(&mut self, doc: &mut D, r: usize) -> Result<()> {
        let row = &mut self.rows[r];
        doc.delete_cell(row.node, row.cells.len() - 1)?;
        row.cells.pop();
        Ok(())
    }

    /// Shows `text` in the cell at `(r, c)`, creating its display element
    /// on first use.
    fn populate_cell<D: Document>(
        &mut self,
        doc: &mut D,
        r: usize,
        c: usize,
        editable: bool,
        text: &str,
    ) -> Result<()> {
        let cell = &mut self.rows[r].cells[c];

        let element = match cell.content {
            Some(element) => element,
            None => {
                let kind = if editable {
                    ElementKind::TextInput
                } else {
                    ElementKind::Paragraph
                };
                let node = doc.create_element(kind);
                doc.append_child(cell.node, node)?;
                let element = CellElement { node, editable };
                cell.content = Some(element);
                element
            }
        };

        tracing::trace!(target: targets::GRID, r, c, %text, "populate cell");
        if element.editable {
            doc.set_value(element.node, text)?;
        } else {
            doc.set_text_content(element.node, text)?;
        }
        Ok(())
    }
}

/// An editable data grid rendered as a table.
///
/// # Example
///
/// ```
/// use formgrid::{FormGrid, GridConfig};
/// use formgrid_dom::{MemoryDocument, SharedDocument};
///
/// let mut doc = MemoryDocument::new();
/// doc.create_container("parent");
/// let doc = SharedDocument::new(doc);
///
/// let grid = FormGrid::new(doc, "parent", GridConfig::default()).unwrap();
/// assert_eq!(grid.rows_in_view(), grid.model().rows());
/// assert_eq!(grid.cols_in_view(), grid.model().cols());
/// assert_eq!(grid.text_for_cell(0, 1), "Item 1");
/// ```
pub struct FormGrid<D: Document> {
    document: SharedDocument<D>,
    view: TableView,
    row_axis: AxisConfig,
    col_axis: AxisConfig,
    model: GridModel,
}

impl<D: Document> FormGrid<D> {
    /// Builds the grid and attaches its table to the element `parent_id`.
    ///
    /// Fails with [`GridError::RaggedData`] for non-rectangular data and
    /// with [`GridError::ContainerNotFound`] when `parent_id` does not
    /// resolve. On failure nothing is left behind in the document.
    pub fn new(document: SharedDocument<D>, parent_id: &str, config: GridConfig) -> Result<Self> {
        let GridConfig {
            row_axis,
            col_axis,
            data,
        } = config;
        let model = GridModel::new(data)?;

        let (table, header) = {
            let mut doc = document.write();
            let table = doc.create_element(ElementKind::Table);
            match doc.insert_row(table, Some(0)) {
                Ok(header) => (table, header),
                Err(e) => {
                    discard_table(&mut *doc, table);
                    return Err(e.into());
                }
            }
        };

        let mut grid = Self {
            document,
            view: TableView {
                table,
                rows: vec![ViewRow {
                    node: header,
                    cells: Vec::new(),
                }],
            },
            row_axis,
            col_axis,
            model,
        };

        if let Err(e) = grid.deserialize_model().and_then(|()| grid.attach(parent_id)) {
            discard_table(&mut *grid.document.write(), table);
            return Err(e);
        }

        tracing::debug!(
            target: targets::GRID,
            parent = parent_id,
            rows = grid.rows_in_view(),
            cols = grid.cols_in_view(),
            "created form grid"
        );
        Ok(grid)
    }

    fn attach(&self, parent_id: &str) -> Result<()> {
        let mut doc = self.document.write();
        let parent = doc
            .element_by_id(parent_id)
            .ok_or_else(|| GridError::ContainerNotFound(parent_id.to_string()))?;
        doc.append_child(parent, self.view.table)?;
        Ok(())
    }

    /// Removes the table from the document, consuming the grid.
    pub fn detach(self) -> Result<GridModel> {
        self.document.write().remove_node(self.view.table)?;
        Ok(self.model)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The document this grid renders into.
    pub fn document(&self) -> &SharedDocument<D> {
        &self.document
    }

    /// The `<table>` node.
    pub fn table(&self) -> NodeId {
        self.view.table
    }

    /// The data model.
    pub fn model(&self) -> &GridModel {
        &self.model
    }

    /// Mutable access to the model.
    ///
    /// The view is not updated until [`deserialize_model`](Self::deserialize_model)
    /// or [`update_table_size_to_match_model`](Self::update_table_size_to_match_model)
    /// runs.
    pub fn model_mut(&mut self) -> &mut GridModel {
        &mut self.model
    }

    /// Header-row policy.
    pub fn row_axis(&self) -> &AxisConfig {
        &self.row_axis
    }

    /// Header-column policy.
    pub fn col_axis(&self) -> &AxisConfig {
        &self.col_axis
    }

    /// Number of rows in the table, header row included.
    pub fn rows_in_view(&self) -> usize {
        self.view.row_count()
    }

    /// Number of cells in the header row.
    pub fn cols_in_view(&self) -> usize {
        self.view.col_count()
    }

    /// The `<td>` node at view position `(r, c)`.
    pub fn cell_node(&self, r: usize, c: usize) -> Option<NodeId> {
        self.view.rows.get(r)?.cells.get(c).map(|cell| cell.node)
    }

    /// The display element inside the cell at `(r, c)`, once populated.
    pub fn cell_element(&self, r: usize, c: usize) -> Option<CellElement> {
        self.view.rows.get(r)?.cells.get(c)?.content
    }

    // =========================================================================
    // Policy
    // =========================================================================

    /// Whether the cell at `(r, c)` is rendered as a text input.
    ///
    /// Data cells are always editable. The header row, corner included,
    /// follows the row axis; the rest of the header column follows the
    /// column axis.
    pub fn is_user_editable(&self, r: usize, c: usize) -> bool {
        if r > 0 && c > 0 {
            return true;
        }

        if r == 0 {
            self.row_axis.user_editable
        } else {
            self.col_axis.user_editable
        }
    }

    /// The text the cell at `(r, c)` should display.
    pub fn text_for_cell(&self, r: usize, c: usize) -> String {
        match (r, c) {
            (0, 0) => String::new(),
            (0, c) => self.row_axis.make_label(c),
            (r, 0) => self.col_axis.make_label(r),
            (r, c) => self
                .model
                .cell(r - 1, c - 1)
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }

    // =========================================================================
    // Model -> view
    // =========================================================================

    /// Resizes the table to the model, then fills every cell.
    pub fn deserialize_model(&mut self) -> Result<()> {
        let mut doc = self.document.write();
        let (rows, cols) = (self.model.rows(), self.model.cols());
        self.view.reconcile(&mut *doc, rows, cols)?;

        for r in 0..rows {
            for c in 0..cols {
                if r == 0 && c == 0 {
                    continue;
                }
                let editable = self.is_user_editable(r, c);
                let text = self.text_for_cell(r, c);
                self.view.populate_cell(&mut *doc, r, c, editable, &text)?;
            }
        }
        Ok(())
    }

    /// Replaces the model data and re-renders.
    pub fn set_model_data(&mut self, data: Vec<Vec<CellValue>>) -> Result<()> {
        self.model.replace_data(data)?;
        self.deserialize_model()
    }

    /// Adds or removes trailing rows and cells until the table matches the
    /// model size. New cells are left empty until populated.
    pub fn update_table_size_to_match_model(&mut self) -> Result<()> {
        let mut doc = self.document.write();
        self.view
            .reconcile(&mut *doc, self.model.rows(), self.model.cols())
    }

    // =========================================================================
    // View -> model
    // =========================================================================

    /// Writes `value` into the model slot behind view position `(r, c)`.
    ///
    /// Data cells go to the cell data, header-row cells to the row labels
    /// (indexed by `c`), header-column cells to the column labels (indexed
    /// by `r`). The corner is rejected without touching the model.
    pub fn set_data(&mut self, r: usize, c: usize, value: CellValue) -> Result<()> {
        match (r, c) {
            (0, 0) => {
                tracing::warn!(target: targets::GRID, "rejected write to the corner cell");
                Err(GridError::CornerCell)
            }
            (0, c) => {
                self.model.set_row_label(c, value);
                Ok(())
            }
            (r, 0) => {
                self.model.set_col_label(r, value);
                Ok(())
            }
            (r, c) => self.model.set_cell(r - 1, c - 1, value),
        }
    }

    /// Reads edited cell text back into the model.
    ///
    /// Inputs contribute their value, paragraphs their text. The corner,
    /// cells that have not been populated yet, and cells still showing
    /// exactly what [`text_for_cell`](Self::text_for_cell) would render are
    /// skipped, so an unedited grid leaves the model as it was.
    ///
    /// Every target is checked before the first write: if any data cell lies
    /// outside the model, [`GridError::OutOfBounds`] is returned and the
    /// model is unchanged.
    pub fn serialize_model(&mut self) -> Result<()> {
        let updates = {
            let doc = self.document.read();
            let mut updates = Vec::new();
            for (r, row) in self.view.rows.iter().enumerate() {
                for (c, cell) in row.cells.iter().enumerate() {
                    if r == 0 && c == 0 {
                        continue;
                    }
                    let Some(element) = cell.content else {
                        continue;
                    };
                    let text = if element.editable {
                        doc.value(element.node)?
                    } else {
                        doc.text_content(element.node)?
                    };
                    if text != self.text_for_cell(r, c) {
                        updates.push((r, c, CellValue::parse(&text)));
                    }
                }
            }
            updates
        };

        let (rows, columns) = (self.model.data_rows(), self.model.data_cols());
        if let Some(&(r, c, _)) = updates
            .iter()
            .find(|&&(r, c, _)| r > 0 && c > 0 && (r > rows || c > columns))
        {
            return Err(GridError::OutOfBounds {
                row: r - 1,
                column: c - 1,
                rows,
                columns,
            });
        }

        tracing::debug!(target: targets::GRID, cells = updates.len(), "serializing view into model");
        for (r, c, value) in updates {
            self.set_data(r, c, value)?;
        }
        Ok(())
    }
}

/// Removes a table that failed to build. A failure here is logged so the
/// caller still sees the error that caused the cleanup.
fn discard_table<D: Document>(doc: &mut D, table: NodeId) {
    if let Err(e) = doc.remove_node(table) {
        tracing::warn!(target: targets::GRID, ?table, error = %e, "failed to remove table after construction error");
    }
}

impl<D: Document> std::fmt::Debug for FormGrid<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormGrid")
            .field("table", &self.view.table)
            .field("rows_in_view", &self.rows_in_view())
            .field("cols_in_view", &self.cols_in_view())
            .field("row_axis", &self.row_axis)
            .field("col_axis", &self.col_axis)
            .field("model", &self.model)
            .finish()
    }
}

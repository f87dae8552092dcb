//! Error types for the grid.

use std::path::PathBuf;

use formgrid_dom::DomError;

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while building, editing or configuring a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The corner cell belongs to neither axis and holds no data.
    #[error("Can't set data on (0, 0). Did you leave room for headers?")]
    CornerCell,

    /// The container id did not resolve to an element in the document.
    #[error("No element with id '{0}' in the document")]
    ContainerNotFound(String),

    /// A data row has a different length than the first row.
    #[error("Data row {row} has {found} columns, expected {expected}")]
    RaggedData {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A write addressed a data cell outside the model.
    #[error("Cell ({row}, {column}) is outside the {rows}x{columns} data area")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// The document rejected an operation.
    #[error("Document error: {0}")]
    Dom(#[from] DomError),

    /// JSON configuration could not be parsed or written.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration could not be parsed.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration file I/O error.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file extension is neither `.json` nor `.toml`.
    #[error("Unsupported config format for '{0}'")]
    UnsupportedFormat(PathBuf),
}

impl GridError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a ragged-data error.
    pub fn ragged(row: usize, expected: usize, found: usize) -> Self {
        Self::RaggedData {
            row,
            expected,
            found,
        }
    }
}

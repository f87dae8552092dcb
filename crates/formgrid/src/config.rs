//! Grid construction settings.
//!
//! A [`GridConfig`] can be built in code or loaded from JSON or TOML:
//!
//! ```toml
//! data = [[1, 2, 3], [4, 5, 6]]
//!
//! [row_axis]
//! label_prefix = "Col"
//!
//! [col_axis]
//! label_prefix = "Row"
//! user_editable = true
//! label_style = "zero_indexed"
//! ```

use std::path::Path;

use formgrid_dom::logging::targets;
use serde::{Deserialize, Serialize};

use crate::axis::AxisConfig;
use crate::error::{GridError, Result};
use crate::value::CellValue;

/// Everything needed to construct a [`FormGrid`](crate::FormGrid).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Policy for the header row.
    pub row_axis: AxisConfig,
    /// Policy for the header column.
    pub col_axis: AxisConfig,
    /// Initial cell data, row-major. Must be rectangular.
    pub data: Vec<Vec<CellValue>>,
}

impl Default for GridConfig {
    /// Two non-editable `"Item"` axes over the 2x2 grid `[[0, 1], [2, 3]]`.
    fn default() -> Self {
        Self {
            row_axis: AxisConfig::default(),
            col_axis: AxisConfig::default(),
            data: vec![
                vec![CellValue::Int(0), CellValue::Int(1)],
                vec![CellValue::Int(2), CellValue::Int(3)],
            ],
        }
    }
}

impl GridConfig {
    /// Creates a config with default axes over the given data.
    pub fn with_data(data: Vec<Vec<CellValue>>) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    /// Sets the header-row policy.
    pub fn row_axis(mut self, axis: AxisConfig) -> Self {
        self.row_axis = axis;
        self
    }

    /// Sets the header-column policy.
    pub fn col_axis(mut self, axis: AxisConfig) -> Self {
        self.col_axis = axis;
        self
    }

    /// Parses a config from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a config from TOML.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Loads a config file, choosing the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let text = match extension.as_deref() {
            Some("json") | Some("toml") => {
                std::fs::read_to_string(path).map_err(|e| GridError::io(path, e))?
            }
            _ => return Err(GridError::UnsupportedFormat(path.to_path_buf())),
        };

        let config = if extension.as_deref() == Some("json") {
            Self::from_json_str(&text)?
        } else {
            Self::from_toml_str(&text)?
        };

        tracing::info!(
            target: targets::CONFIG,
            path = %path.display(),
            rows = config.data.len(),
            "loaded grid config"
        );
        Ok(config)
    }

    /// Serializes the config as pretty-printed JSON.
    ///
    /// Custom labelers are code-only and are not written.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

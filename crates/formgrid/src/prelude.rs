//! Prelude module for FormGrid.
//!
//! Re-exports the commonly used types:
//!
//! ```ignore
//! use formgrid::prelude::*;
//! ```

// ============================================================================
// Grid and model
// ============================================================================

pub use crate::model::GridModel;
pub use crate::value::CellValue;
pub use crate::view::{CellElement, FormGrid};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::axis::{AxisConfig, AxisLabeler, LabelStyle};
pub use crate::config::GridConfig;

// ============================================================================
// Errors
// ============================================================================

pub use crate::error::{GridError, Result};

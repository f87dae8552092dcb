//! Logging targets for FormGrid.
//!
//! FormGrid instruments itself with the `tracing` crate. Install a subscriber
//! in the host application to see the output:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("formgrid=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Document tree mutations.
    pub const DOM: &str = "formgrid_dom";
    /// Grid construction, population and write-back.
    pub const GRID: &str = "formgrid::view";
    /// View/model size reconciliation.
    pub const RECONCILE: &str = "formgrid::reconcile";
    /// Configuration loading.
    pub const CONFIG: &str = "formgrid::config";
}

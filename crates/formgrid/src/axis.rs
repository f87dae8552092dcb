//! Axis labelling policy.
//!
//! An [`AxisConfig`] decides how the header cells along one axis are
//! labelled and whether the user may edit them. The row axis labels the
//! header row (one label per column), the column axis labels the header
//! column (one label per row).

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Produces the display label for a position along an axis.
///
/// Implemented for any `Fn(&str, usize) -> String`, so a closure is enough
/// for one-off formatting:
///
/// ```
/// use formgrid::AxisConfig;
///
/// let axis = AxisConfig::new("Col").with_labeler(|prefix: &str, index: usize| {
///     format!("{prefix}-{}", (b'A' + (index as u8 - 1)) as char)
/// });
/// assert_eq!(axis.make_label(1), "Col-A");
/// ```
pub trait AxisLabeler: Send + Sync {
    /// Build the label for `index` using the axis prefix.
    fn make_label(&self, prefix: &str, index: usize) -> String;
}

impl<F> AxisLabeler for F
where
    F: Fn(&str, usize) -> String + Send + Sync,
{
    fn make_label(&self, prefix: &str, index: usize) -> String {
        self(prefix, index)
    }
}

/// Built-in label formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// `"{prefix} {index}"`, counting the first data row/column as 1.
    #[default]
    Prefixed,
    /// `"{prefix} {index - 1}"`, counting the first data row/column as 0.
    ZeroIndexed,
    /// Every `%d` in the prefix is replaced by the index. A prefix without
    /// `%d` falls back to [`Prefixed`](Self::Prefixed).
    Template,
}

impl AxisLabeler for LabelStyle {
    fn make_label(&self, prefix: &str, index: usize) -> String {
        match self {
            LabelStyle::Prefixed => format!("{prefix} {index}"),
            LabelStyle::ZeroIndexed => format!("{prefix} {}", index.saturating_sub(1)),
            LabelStyle::Template if prefix.contains("%d") => {
                prefix.replace("%d", &index.to_string())
            }
            LabelStyle::Template => format!("{prefix} {index}"),
        }
    }
}

/// Labelling and editing policy for one axis.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Whether this axis' header cells are text inputs.
    pub user_editable: bool,
    /// Text used to build each label.
    pub label_prefix: String,
    /// Format applied when no custom labeler is set.
    pub label_style: LabelStyle,
    #[serde(skip)]
    labeler: Option<Arc<dyn AxisLabeler>>,
}

impl AxisConfig {
    /// Creates a non-editable axis with the given label prefix.
    pub fn new(label_prefix: impl Into<String>) -> Self {
        Self {
            label_prefix: label_prefix.into(),
            ..Default::default()
        }
    }

    /// Sets the editable flag.
    pub fn with_user_editable(mut self, user_editable: bool) -> Self {
        self.user_editable = user_editable;
        self
    }

    /// Sets the built-in label style.
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    /// Replaces label formatting with a custom labeler.
    pub fn with_labeler(mut self, labeler: impl AxisLabeler + 'static) -> Self {
        self.labeler = Some(Arc::new(labeler));
        self
    }

    /// Returns `true` if a custom labeler is installed.
    pub fn has_custom_labeler(&self) -> bool {
        self.labeler.is_some()
    }

    /// The label for position `index` along this axis.
    pub fn make_label(&self, index: usize) -> String {
        match &self.labeler {
            Some(labeler) => labeler.make_label(&self.label_prefix, index),
            None => self.label_style.make_label(&self.label_prefix, index),
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            user_editable: false,
            label_prefix: "Item".to_string(),
            label_style: LabelStyle::Prefixed,
            labeler: None,
        }
    }
}

impl fmt::Debug for AxisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisConfig")
            .field("user_editable", &self.user_editable)
            .field("label_prefix", &self.label_prefix)
            .field("label_style", &self.label_style)
            .field("custom_labeler", &self.labeler.is_some())
            .finish()
    }
}

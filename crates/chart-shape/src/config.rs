// File: crates/chart-shape/src/config.rs
// Summary: Configuration surface read by the classifier and geometry engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::axis::AxisId;
use crate::error::Result;
use crate::types::{ChartType, DataOrder, StepType, DEFAULT_BAR_SENSITIVITY, DEFAULT_POINT_SENSITIVITY};

/// Chart options relevant to classification and shape geometry.
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Per-series type overrides.
    pub data_types: IndexMap<String, ChartType>,
    /// Global default type.
    pub data_type: Option<ChartType>,
    /// Series ids sharing one ordinal/stack.
    pub data_groups: Vec<Vec<String>>,
    /// Series id -> x-scale key (multi x-axis charts).
    pub data_xs: IndexMap<String, String>,
    /// Series id -> y axis.
    pub data_axes: IndexMap<String, AxisId>,
    pub data_order: DataOrder,
    pub data_stack_normalize: bool,
    pub bar_padding: f64,
    pub bar_sensitivity: f64,
    pub point_sensitivity: f64,
    pub point_select_r: Option<f64>,
    pub point_type: String,
    pub point_pattern: Vec<String>,
    pub spline_interpolation_type: String,
    pub line_step_type: StepType,
    pub gauge_type: String,
    pub axis_x_categorized: bool,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            data_types: IndexMap::new(),
            data_type: None,
            data_groups: Vec::new(),
            data_xs: IndexMap::new(),
            data_axes: IndexMap::new(),
            data_order: DataOrder::Desc,
            data_stack_normalize: false,
            bar_padding: 0.0,
            bar_sensitivity: DEFAULT_BAR_SENSITIVITY,
            point_sensitivity: DEFAULT_POINT_SENSITIVITY,
            point_select_r: None,
            point_type: "circle".to_string(),
            point_pattern: Vec::new(),
            spline_interpolation_type: "cardinal".to_string(),
            line_step_type: StepType::Step,
            gauge_type: "single".to_string(),
            axis_x_categorized: false,
        }
    }
}

impl ShapeConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Whether `id` is declared in any group.
    pub fn is_grouped(&self, id: &str) -> bool {
        self.data_groups.iter().any(|g| g.iter().any(|m| m == id))
    }

    /// Percentage stacking applies only when groups exist.
    pub fn is_stack_normalized(&self) -> bool {
        self.data_stack_normalize && !self.data_groups.is_empty()
    }

    pub fn has_xs(&self) -> bool {
        !self.data_xs.is_empty()
    }

    /// X-scale key of a series; series without an entry share the `""` key.
    pub fn x_key_of(&self, id: &str) -> &str {
        self.data_xs.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn axis_of(&self, id: &str) -> AxisId {
        self.data_axes.get(id).copied().unwrap_or_default()
    }
}

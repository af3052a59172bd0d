// File: crates/chart-shape/src/axis.rs
// Summary: Axis identifiers and scale kinds.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

/// Y axis a series is plotted against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    #[default]
    Y,
    Y2,
}

impl AxisId {
    pub const fn name(self) -> &'static str {
        match self {
            AxisId::Y => "y",
            AxisId::Y2 => "y2",
        }
    }
}
